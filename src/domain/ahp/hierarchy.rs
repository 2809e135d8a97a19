//! Hierarchy Aggregator - Per-criterion alternative scores.
//!
//! Two modes, selected by the presence of sub-criteria:
//!
//! - **Flat**: raw measurements are min-max normalized per criterion.
//! - **Hierarchical**: each sub-criterion ranks the alternatives through its
//!   own comparison matrix; each criterion weights its sub-criteria through a
//!   second matrix; a criterion's score for an alternative is the weighted
//!   sum of the alternative's sub-criterion priorities.
//!
//! Every level runs the same pipeline: build matrix, derive priorities,
//! analyze consistency.

use serde::{Deserialize, Serialize};

use super::{
    AlternativeScores, CalculationInput, ConsistencyAnalyzer, ConsistencyMetrics, MatrixBuilder,
    Normalizer, PriorityDerivation, PriorityVector, PriorityVectorCalculator,
};

/// Result of one matrix -> priorities -> consistency pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelAnalysis {
    pub derivation: PriorityDerivation,
    pub consistency: ConsistencyMetrics,
}

impl LevelAnalysis {
    /// Runs the full pipeline over `ids` with a directional judgment lookup.
    pub fn compute<F>(ids: &[String], judgment: F) -> Self
    where
        F: Fn(&str, &str) -> Option<f64>,
    {
        let matrix = MatrixBuilder::build(ids, judgment);
        let derivation = PriorityVectorCalculator::derive(&matrix);
        let consistency = ConsistencyAnalyzer::analyze(&matrix, &derivation.priorities);
        Self {
            derivation,
            consistency,
        }
    }

    /// Returns the derived priority vector.
    pub fn priorities(&self) -> &PriorityVector {
        &self.derivation.priorities
    }
}

/// Alternative priorities under one sub-criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCriterionAnalysis {
    pub sub_criterion_id: String,
    pub criterion_id: String,
    pub name: String,
    pub analysis: LevelAnalysis,
}

/// Sub-criterion weights within one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionBreakdown {
    pub criterion_id: String,
    pub sub_weights: PriorityVector,
    /// Absent when the weights are an equal split.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_weight_analysis: Option<LevelAnalysis>,
    /// True when the criterion has no sub-criteria and fell back to the
    /// normalized raw measurements.
    pub uses_raw_values: bool,
}

/// Which aggregation mode produced the scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    Flat,
    Hierarchical,
}

/// Output of the aggregation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregation {
    pub mode: AggregationMode,
    /// alternative id -> criterion id -> score
    pub scores: AlternativeScores,
    pub sub_criteria: Vec<SubCriterionAnalysis>,
    pub criteria: Vec<CriterionBreakdown>,
}

/// Computes alternative scores under every criterion.
pub struct HierarchyAggregator;

impl HierarchyAggregator {
    /// Aggregates in the mode selected by the input.
    pub fn aggregate(input: &CalculationInput) -> Aggregation {
        if input.is_hierarchical() {
            Self::hierarchical(input)
        } else {
            Self::flat(input)
        }
    }

    /// Flat mode: normalized raw measurements.
    pub fn flat(input: &CalculationInput) -> Aggregation {
        Aggregation {
            mode: AggregationMode::Flat,
            scores: Normalizer::normalize(input),
            sub_criteria: Vec::new(),
            criteria: Vec::new(),
        }
    }

    /// Hierarchical mode.
    ///
    /// # Edge Cases
    /// - Criterion without sub-criteria: Scored from normalized raw
    ///   measurements, as in flat mode
    /// - Criterion without any sub-weight judgment: Equal split
    /// - Sub-criterion without a sub-weight judgment: `1/n` of its siblings
    /// - Alternative pair without a judgment: Distance synthesis, else 1
    pub fn hierarchical(input: &CalculationInput) -> Aggregation {
        let alternative_ids = input.alternative_ids();

        let sub_criteria: Vec<SubCriterionAnalysis> = input
            .sub_criteria
            .iter()
            .map(|sub| SubCriterionAnalysis {
                sub_criterion_id: sub.id.clone(),
                criterion_id: sub.criterion_id.clone(),
                name: sub.name.clone(),
                analysis: Self::analyze_sub_criterion(input, &sub.id, &alternative_ids),
            })
            .collect();

        let raw_scores = Normalizer::normalize(input);
        let mut scores = AlternativeScores::new();
        let mut criteria = Vec::with_capacity(input.criteria.len());

        for criterion in &input.criteria {
            let sibling_ids: Vec<String> = input
                .sub_criteria_of(&criterion.id)
                .map(|sub| sub.id.clone())
                .collect();

            if sibling_ids.is_empty() {
                for alt in &alternative_ids {
                    scores.set(alt, &criterion.id, raw_scores.get(alt, &criterion.id));
                }
                criteria.push(CriterionBreakdown {
                    criterion_id: criterion.id.clone(),
                    sub_weights: PriorityVector::default(),
                    sub_weight_analysis: None,
                    uses_raw_values: true,
                });
                continue;
            }

            let (sub_weights, sub_weight_analysis) =
                Self::weigh_sub_criteria(input, &criterion.id, &sibling_ids);

            for alt in &alternative_ids {
                let score: f64 = sub_criteria
                    .iter()
                    .filter(|analysis| analysis.criterion_id == criterion.id)
                    .map(|analysis| {
                        analysis.analysis.priorities().weight_or_zero(alt)
                            * sub_weights.weight_or_zero(&analysis.sub_criterion_id)
                    })
                    .sum();
                scores.set(alt, &criterion.id, score);
            }

            criteria.push(CriterionBreakdown {
                criterion_id: criterion.id.clone(),
                sub_weights,
                sub_weight_analysis,
                uses_raw_values: false,
            });
        }

        Aggregation {
            mode: AggregationMode::Hierarchical,
            scores,
            sub_criteria,
            criteria,
        }
    }

    /// Alternative priorities under one sub-criterion.
    fn analyze_sub_criterion(
        input: &CalculationInput,
        sub_criterion_id: &str,
        alternative_ids: &[String],
    ) -> LevelAnalysis {
        let analysis = LevelAnalysis::compute(alternative_ids, |a, b| {
            input
                .alternative_judgments
                .resolve(Some(sub_criterion_id), a, b)
                .or_else(|| input.distances.judgment(sub_criterion_id, a, b))
        });

        tracing::debug!(
            sub_criterion = sub_criterion_id,
            order = alternative_ids.len(),
            consistency_ratio = analysis.consistency.consistency_ratio,
            "Derived alternative priorities"
        );

        analysis
    }

    /// Weights of a criterion's sub-criteria.
    ///
    /// A sibling with no sub-weight judgment keeps `1/n`. The judged siblings
    /// share the remaining mass in proportion to the priorities of their own
    /// matrix, which is the one reported as the sub-weight analysis.
    fn weigh_sub_criteria(
        input: &CalculationInput,
        criterion_id: &str,
        sibling_ids: &[String],
    ) -> (PriorityVector, Option<LevelAnalysis>) {
        let judgments = &input.sub_weight_judgments;
        let scope = Some(criterion_id);
        let judged_ids: Vec<String> = sibling_ids
            .iter()
            .filter(|a| {
                sibling_ids
                    .iter()
                    .any(|b| b != *a && judgments.has_pair(scope, a, b))
            })
            .cloned()
            .collect();

        if judged_ids.is_empty() {
            return (PriorityVector::uniform(sibling_ids), None);
        }

        let analysis = LevelAnalysis::compute(&judged_ids, |a, b| judgments.get(scope, a, b));

        let share = 1.0 / sibling_ids.len() as f64;
        let judged_mass = share * judged_ids.len() as f64;
        let weights = sibling_ids
            .iter()
            .map(|id| match analysis.priorities().get(id) {
                Some(priority) => priority * judged_mass,
                None => share,
            })
            .collect();

        tracing::debug!(
            criterion = criterion_id,
            judged = judged_ids.len(),
            siblings = sibling_ids.len(),
            consistency_ratio = analysis.consistency.consistency_ratio,
            "Derived sub-criterion weights"
        );

        (
            PriorityVector::from_parts(sibling_ids.to_vec(), weights),
            Some(analysis),
        )
    }
}
