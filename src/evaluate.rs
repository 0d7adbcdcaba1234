use anyhow::{bail, Result};

use crate::detect::classifier::LicenseClassifier;
use crate::models::{round3, EvaluationMetrics, LabeledSample};

/// Runs the classifier over labeled samples and aggregates
/// accuracy/precision/recall/F1.
pub struct Evaluator<'a> {
    classifier: &'a LicenseClassifier,
}

impl<'a> Evaluator<'a> {
    pub fn new(classifier: &'a LicenseClassifier) -> Self {
        Evaluator { classifier }
    }

    /// Evaluate the classifier against `samples`. Errors only when the
    /// sample set is empty.
    ///
    /// A sample counts as correct (and a true positive) when the lowercased
    /// expected label is a substring of the lowercased detected label or vice
    /// versa; the coarse matching is intentional, so that e.g. "MIT" matches
    /// "MIT License".
    ///
    /// An incorrect sample increments the false-positive count when the
    /// detection is not "Unknown" AND the false-negative count when the
    /// expected label is non-empty; both can fire for the same sample. The
    /// double-count is preserved for compatibility with the original metric
    /// definition (see `test_wrong_detection_double_counts`).
    pub fn evaluate(&self, samples: &[LabeledSample]) -> Result<EvaluationMetrics> {
        if samples.is_empty() {
            bail!("no samples provided");
        }

        let mut true_positives = 0usize;
        let mut false_positives = 0usize;
        let mut false_negatives = 0usize;
        let mut correct = 0usize;
        let total = samples.len();

        for sample in samples {
            let expected = sample.expected_license.trim();
            let detected = self.classifier.detect(&sample.text).detected_license;

            let expected_lower = expected.to_lowercase();
            let detected_lower = detected.to_lowercase();

            if detected_lower.contains(&expected_lower) || expected_lower.contains(&detected_lower)
            {
                correct += 1;
                true_positives += 1;
            } else {
                if detected != "Unknown" {
                    false_positives += 1;
                }
                if !expected.is_empty() {
                    false_negatives += 1;
                }
            }
        }

        let accuracy = correct as f64 / total as f64;
        let precision = ratio(true_positives, true_positives + false_positives);
        let recall = ratio(true_positives, true_positives + false_negatives);
        let f1_score = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Ok(EvaluationMetrics {
            accuracy: round3(accuracy),
            precision: round3(precision),
            recall: round3(recall),
            f1_score: round3(f1_score),
            total_samples: total,
            correct,
            true_positives,
            false_positives,
            false_negatives,
        })
    }
}

/// `numerator / denominator`, or 0 when the denominator is 0.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::config::DetectionConfig;

    fn classifier() -> LicenseClassifier {
        LicenseClassifier::new(Catalogue::default(), DetectionConfig::default())
    }

    fn sample(text: &str, expected: &str) -> LabeledSample {
        LabeledSample {
            text: text.to_string(),
            expected_license: expected.to_string(),
        }
    }

    const MIT_TEMPLATE: &str = "Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files";

    #[test]
    fn test_empty_sample_set_is_an_error() {
        let classifier = classifier();
        let result = Evaluator::new(&classifier).evaluate(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_perfect_single_sample() {
        let classifier = classifier();
        let metrics = Evaluator::new(&classifier)
            .evaluate(&[sample(MIT_TEMPLATE, "MIT")])
            .unwrap();

        assert_eq!(metrics.accuracy, 1.0);
        assert_eq!(metrics.precision, 1.0);
        assert_eq!(metrics.recall, 1.0);
        assert_eq!(metrics.f1_score, 1.0);
        assert_eq!(metrics.total_samples, 1);
        assert_eq!(metrics.correct, 1);
        assert_eq!(metrics.true_positives, 1);
        assert_eq!(metrics.false_positives, 0);
        assert_eq!(metrics.false_negatives, 0);
    }

    #[test]
    fn test_containment_works_in_both_directions() {
        let classifier = classifier();
        // Expected "GNU General Public License v2.0 or later" contains the
        // detected name "GNU General Public License v2.0".
        let metrics = Evaluator::new(&classifier)
            .evaluate(&[sample(
                "This program is free software; you can redistribute it and/or modify it under the terms of the GNU General Public License",
                "GNU General Public License v2.0 or later",
            )])
            .unwrap();
        assert_eq!(metrics.correct, 1);
    }

    #[test]
    fn test_wrong_detection_double_counts() {
        // Text matches the Apache template but the label says MIT: the sample
        // is both a false positive (wrong non-Unknown detection) and a false
        // negative (missed non-empty label). Known quirk of the metric
        // definition, kept for compatibility.
        let classifier = classifier();
        let metrics = Evaluator::new(&classifier)
            .evaluate(&[sample(
                "Licensed under the Apache License, Version 2.0 (the \"License\"); you may not use this file except in compliance with the License",
                "MIT",
            )])
            .unwrap();

        assert_eq!(metrics.correct, 0);
        assert_eq!(metrics.true_positives, 0);
        assert_eq!(metrics.false_positives, 1);
        assert_eq!(metrics.false_negatives, 1);
        assert_eq!(metrics.accuracy, 0.0);
        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.recall, 0.0);
        assert_eq!(metrics.f1_score, 0.0);
    }

    #[test]
    fn test_short_text_with_empty_label_counts_correct() {
        // detect() returns "Unknown" and the empty expected label is a
        // substring of anything, so the sample is scored correct.
        let classifier = classifier();
        let metrics = Evaluator::new(&classifier)
            .evaluate(&[sample("short", "")])
            .unwrap();
        assert_eq!(metrics.correct, 1);
        assert_eq!(metrics.false_positives, 0);
        assert_eq!(metrics.false_negatives, 0);
    }

    #[test]
    fn test_mixed_batch_aggregates() {
        let classifier = classifier();
        let metrics = Evaluator::new(&classifier)
            .evaluate(&[
                sample(MIT_TEMPLATE, "MIT"),
                sample(
                    "Redistribution and use in source and binary forms, with or without modification, are permitted provided that the following conditions are met",
                    "BSD",
                ),
                sample("completely unrelated text about gardening and tulips", "MIT"),
            ])
            .unwrap();

        assert_eq!(metrics.total_samples, 3);
        assert_eq!(metrics.correct, 2);
        assert_eq!(metrics.accuracy, 0.667);
        assert_eq!(metrics.true_positives, 2);
        // The gardening text still resolves to some best-scoring template, so
        // it lands as a wrong non-Unknown detection and a missed label.
        assert_eq!(metrics.false_positives, 1);
        assert_eq!(metrics.false_negatives, 1);
    }
}
