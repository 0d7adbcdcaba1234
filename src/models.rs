use serde::{Deserialize, Serialize};

/// A known license the classifier compares fragments against.
///
/// Loaded once at startup from the catalogue source; immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseTemplate {
    /// Catalogue key, unique within the catalogue (e.g. `"MIT"`).
    pub id: String,
    /// Human-readable name (e.g. `"MIT License"`).
    pub name: String,
    /// SPDX identifier (e.g. `"Apache-2.0"`).
    pub spdx_id: String,
    /// Phrases whose presence in a fragment counts toward the keyword score.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Representative excerpt of the license text used for similarity scoring.
    #[serde(default)]
    pub template: String,
}

/// Per-template score triple produced during one `detect` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub license_id: String,
    pub license_name: String,
    pub spdx_id: String,
    /// Matching-blocks ratio against the template text, in [0, 1].
    pub similarity: f64,
    /// Fraction of the template's keywords found in the raw text, in [0, 1].
    pub keyword_score: f64,
    /// `0.7 * similarity + 0.3 * keyword_score`.
    pub combined_score: f64,
}

/// Outcome of classifying one text fragment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Best-match license name, or `"Unknown"`.
    pub detected_license: String,
    /// Best combined score, rounded to 3 decimals.
    pub confidence: f64,
    /// True when the top score is below the confidence threshold or the
    /// top two candidates are within the tie margin.
    pub is_ambiguous: bool,
    /// Top candidates, best first (at most 5).
    pub matches: Vec<MatchCandidate>,
    pub spdx_id: Option<String>,
    pub license_id: Option<String>,
    /// Populated only for the short-text fast path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DetectionResult {
    /// The `Unknown` shape shared by the degenerate cases.
    pub fn unknown(reason: Option<String>) -> Self {
        DetectionResult {
            detected_license: "Unknown".to_string(),
            confidence: 0.0,
            is_ambiguous: true,
            matches: Vec::new(),
            spdx_id: None,
            license_id: None,
            reason,
        }
    }
}

/// A ground-truth sample for classifier evaluation.
#[derive(Debug, Clone, Deserialize)]
pub struct LabeledSample {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub expected_license: String,
}

/// Aggregate classifier quality over a labeled sample set.
///
/// All ratio fields are rounded to 3 decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub total_samples: usize,
    pub correct: usize,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

/// One fragment of a batch analysis request.
#[derive(Debug, Clone, Deserialize)]
pub struct Fragment {
    /// Caller-assigned id; fragments without one get a sequential index.
    pub id: Option<String>,
    #[serde(default)]
    pub text: String,
}

/// A detection result joined with its fragment id and source text,
/// ready for export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRecord {
    pub id: String,
    pub detected_license: String,
    pub spdx_id: Option<String>,
    pub confidence: f64,
    pub is_ambiguous: bool,
    pub original_text: String,
    pub matches: Vec<MatchCandidate>,
}

impl ExportRecord {
    pub fn new(id: String, original_text: String, result: DetectionResult) -> Self {
        ExportRecord {
            id,
            detected_license: result.detected_license,
            spdx_id: result.spdx_id,
            confidence: result.confidence,
            is_ambiguous: result.is_ambiguous,
            original_text,
            matches: result.matches,
        }
    }
}

/// Round to 3 decimal places, the precision used for all reported scores.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.6871), 0.687);
        assert_eq!(round3(0.7999999999999999), 0.8);
        assert_eq!(round3(0.0), 0.0);
        assert_eq!(round3(1.0), 1.0);
    }

    #[test]
    fn test_unknown_shape() {
        let r = DetectionResult::unknown(Some("Text too short".to_string()));
        assert_eq!(r.detected_license, "Unknown");
        assert_eq!(r.confidence, 0.0);
        assert!(r.is_ambiguous);
        assert!(r.matches.is_empty());
        assert!(r.spdx_id.is_none());
        assert!(r.license_id.is_none());
        assert_eq!(r.reason.as_deref(), Some("Text too short"));
    }
}
