//! AHP Engine - Orchestrates one calculation from input record to report.
//!
//! The engine is a pure function of its input: no I/O, no shared state.
//! Identical inputs produce identical reports.

use serde::{Deserialize, Serialize};

use super::{
    round_to, AggregationMode, CalculationInput, CalculationReport, HierarchyAggregator,
    LevelAnalysis, MeasurementAverager, RankingProducer, CONSISTENCY_THRESHOLD,
};

/// Presentation settings applied to the criteria-level metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Ratios strictly below this are reported as consistent.
    pub consistency_threshold: f64,
    /// Decimal places kept for lambda max, CI and CR.
    pub metric_decimals: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            consistency_threshold: CONSISTENCY_THRESHOLD,
            metric_decimals: 5,
        }
    }
}

/// AHP + weighted-sum calculation engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct AhpEngine {
    settings: EngineSettings,
}

impl AhpEngine {
    /// Creates an engine with the given settings.
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Runs a full calculation.
    ///
    /// # Steps
    /// 1. Criteria matrix -> weights -> consistency
    /// 2. Alternative scores per criterion (flat or hierarchical)
    /// 3. Weighted sum, ranking and contribution table
    ///
    /// # Edge Cases
    /// - No criteria or no alternatives: Empty weights/ranking, zero metrics
    pub fn calculate(&self, input: &CalculationInput) -> CalculationReport {
        let criterion_ids = input.criterion_ids();
        let criteria_level = LevelAnalysis::compute(&criterion_ids, |a, b| {
            input.criteria_judgments.get(None, a, b)
        });
        let weights = criteria_level.priorities();
        let metrics = criteria_level.consistency;

        let is_consistent = metrics.is_consistent_within(self.settings.consistency_threshold);
        if !is_consistent {
            tracing::warn!(
                consistency_ratio = metrics.consistency_ratio,
                threshold = self.settings.consistency_threshold,
                "Criteria judgments are inconsistent"
            );
        }

        let aggregation = HierarchyAggregator::aggregate(input);
        let table = RankingProducer::table(
            &input.criteria,
            &input.alternatives,
            weights,
            &aggregation.scores,
        );
        let ranking = RankingProducer::rank(&table);

        let measurement_summaries = MeasurementAverager::summarize(
            &input.measurements,
            &input.alternatives,
            &input.criteria,
        );

        tracing::debug!(
            criteria = criterion_ids.len(),
            alternatives = input.alternatives.len(),
            mode = ?aggregation.mode,
            consistency_ratio = metrics.consistency_ratio,
            "AHP calculation finished"
        );

        let decimals = self.settings.metric_decimals;
        let normalized_values = match aggregation.mode {
            AggregationMode::Flat => Some(aggregation.scores.clone()),
            AggregationMode::Hierarchical => None,
        };

        CalculationReport {
            criteria_weights: weights.to_map(),
            ranking,
            matrix_raw: criteria_level.derivation.matrix.to_rows(),
            lambda_max: round_to(metrics.lambda_max, decimals),
            consistency_index: round_to(metrics.consistency_index, decimals),
            consistency_ratio: round_to(metrics.consistency_ratio, decimals),
            random_index: metrics.random_index,
            is_consistent,
            eigenvector: criterion_ids
                .iter()
                .map(|id| weights.weight_or_zero(id))
                .collect(),
            mode: aggregation.mode,
            normalized_values,
            sub_criteria: aggregation.sub_criteria,
            criteria_breakdown: aggregation.criteria,
            table,
            measurement_summaries,
            criteria_priorities: criteria_level,
        }
    }
}
