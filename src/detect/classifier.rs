use crate::catalogue::Catalogue;
use crate::config::DetectionConfig;
use crate::models::{round3, DetectionResult, MatchCandidate};

use super::keywords::keyword_score;
use super::similarity::similarity;

/// Fragments shorter than this (after trimming) are classified as too short
/// to attempt a match.
const MIN_TEXT_LEN: usize = 10;

/// Weights of the score fusion: combined = 0.7 * similarity + 0.3 * keywords.
const SIMILARITY_WEIGHT: f64 = 0.7;
const KEYWORD_WEIGHT: f64 = 0.3;

/// Number of candidates reported in a [`DetectionResult`].
const TOP_MATCHES: usize = 5;

/// Classifies text fragments against a license catalogue.
///
/// Holds only immutable state after construction; safe to share across
/// threads without synchronization.
pub struct LicenseClassifier {
    catalogue: Catalogue,
    config: DetectionConfig,
}

impl LicenseClassifier {
    pub fn new(catalogue: Catalogue, config: DetectionConfig) -> Self {
        LicenseClassifier { catalogue, config }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Classify a text fragment, producing ranked candidates, a confidence
    /// score, and the ambiguity flag.
    ///
    /// Degenerate inputs are classified outcomes, not errors: short text
    /// returns the `Unknown` shape with a reason, an empty catalogue returns
    /// the same shape without one.
    pub fn detect(&self, text: &str) -> DetectionResult {
        if text.trim().chars().count() < MIN_TEXT_LEN {
            return DetectionResult::unknown(Some("Text too short".to_string()));
        }

        let mut candidates: Vec<MatchCandidate> = self
            .catalogue
            .templates()
            .iter()
            .map(|t| {
                let similarity = similarity(text, &t.template);
                let keyword_score = keyword_score(text, &t.keywords);
                MatchCandidate {
                    license_id: t.id.clone(),
                    license_name: t.name.clone(),
                    spdx_id: t.spdx_id.clone(),
                    similarity,
                    keyword_score,
                    combined_score: SIMILARITY_WEIGHT * similarity
                        + KEYWORD_WEIGHT * keyword_score,
                }
            })
            .collect();

        // Stable sort: equal scores keep catalogue order, so ranking is
        // deterministic across runs.
        candidates.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));

        let Some(best) = candidates.first() else {
            return DetectionResult::unknown(None);
        };

        let confidence = round3(best.combined_score);

        let is_ambiguous = if confidence < self.config.confidence_threshold {
            true
        } else {
            candidates.len() >= 2
                && candidates[0].combined_score - candidates[1].combined_score
                    < self.config.tie_margin
        };

        let detected_license = best.license_name.clone();
        let spdx_id = Some(best.spdx_id.clone());
        let license_id = Some(best.license_id.clone());
        candidates.truncate(TOP_MATCHES);

        DetectionResult {
            detected_license,
            confidence,
            is_ambiguous,
            matches: candidates,
            spdx_id,
            license_id,
            reason: None,
        }
    }
}
