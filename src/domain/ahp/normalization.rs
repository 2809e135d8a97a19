//! Flat-mode normalization of raw measurements (weighted-sum model).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::CriterionType;

use super::CalculationInput;

/// Per-alternative, per-criterion scores in [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlternativeScores {
    /// alternative id -> criterion id -> score
    scores: BTreeMap<String, BTreeMap<String, f64>>,
}

impl AlternativeScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the score of an alternative under a criterion.
    pub fn set(&mut self, alternative_id: &str, criterion_id: &str, score: f64) {
        self.scores
            .entry(alternative_id.to_string())
            .or_default()
            .insert(criterion_id.to_string(), score);
    }

    /// Returns the score, or 0 when none was recorded.
    pub fn get(&self, alternative_id: &str, criterion_id: &str) -> f64 {
        self.scores
            .get(alternative_id)
            .and_then(|row| row.get(criterion_id))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Min-max normalization of raw measurements.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes one criterion's column of raw values.
    ///
    /// # Algorithm
    /// - Benefit: `value / max` (the best alternative scores 1)
    /// - Cost: `min / value` (the cheapest alternative scores 1)
    ///
    /// # Edge Cases
    /// - All values zero: Every alternative scores 0
    /// - Cost value of zero: Scores 1 (no cost is the best possible)
    /// - Benefit column with no positive maximum: Every alternative scores 0
    pub fn normalize_column(criterion_type: CriterionType, raw: &[f64]) -> Vec<f64> {
        if raw.is_empty() {
            return Vec::new();
        }

        let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = raw.iter().copied().fold(f64::INFINITY, f64::min);

        if max == 0.0 && min == 0.0 {
            return vec![0.0; raw.len()];
        }

        raw.iter()
            .map(|&value| match criterion_type {
                CriterionType::Benefit if max > 0.0 => value / max,
                CriterionType::Benefit => 0.0,
                CriterionType::Cost if value == 0.0 => 1.0,
                CriterionType::Cost => min / value,
            })
            .collect()
    }

    /// Normalizes every criterion of a flat calculation.
    ///
    /// Missing measurements count as 0.
    pub fn normalize(input: &CalculationInput) -> AlternativeScores {
        let mut scores = AlternativeScores::new();

        for criterion in &input.criteria {
            let raw: Vec<f64> = input
                .alternatives
                .iter()
                .map(|alt| input.evaluation_values.value_or_zero(&alt.id, &criterion.id))
                .collect();

            let normalized =
                Self::normalize_column(input.criterion_type(&criterion.id), &raw);

            for (alt, score) in input.alternatives.iter().zip(normalized) {
                scores.set(&alt.id, &criterion.id, score);
            }
        }

        scores
    }
}
