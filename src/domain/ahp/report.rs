//! Calculation report - The output record handed to callers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{
    AggregationMode, AlternativeScores, CriterionBreakdown, LevelAnalysis, MeasurementSummary,
    RankingEntry, ScoreTableRow, SubCriterionAnalysis,
};

/// Full result of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationReport {
    /// Criterion id -> weight.
    pub criteria_weights: BTreeMap<String, f64>,
    /// Alternatives, best first.
    pub ranking: Vec<RankingEntry>,
    /// Criteria comparison matrix, rows in criteria order.
    pub matrix_raw: Vec<Vec<f64>>,
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    pub random_index: f64,
    pub is_consistent: bool,
    /// Criterion weights in declared criteria order.
    pub eigenvector: Vec<f64>,
    pub mode: AggregationMode,
    /// Unrounded criteria-level derivation.
    pub criteria_priorities: LevelAnalysis,
    /// Normalized raw measurements (flat mode).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_values: Option<AlternativeScores>,
    /// Alternative priorities per sub-criterion (hierarchical mode).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_criteria: Vec<SubCriterionAnalysis>,
    /// Sub-criterion weights per criterion (hierarchical mode).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub criteria_breakdown: Vec<CriterionBreakdown>,
    pub table: Vec<ScoreTableRow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub measurement_summaries: Vec<MeasurementSummary>,
}

impl CalculationReport {
    /// Returns the id of the top-ranked alternative.
    pub fn winner(&self) -> Option<&str> {
        self.ranking.first().map(|entry| entry.id.as_str())
    }
}

/// Rounds to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
