//! AHP Module - Pure calculation engine for Analytic Hierarchy Process ranking.
//!
//! # Components
//!
//! - `PairwiseJudgments` - Typed sparse map of Saaty-scale judgments
//! - `MatrixBuilder` - Dense reciprocal comparison matrices
//! - `PriorityVectorCalculator` - Column-normalization priority vectors
//! - `ConsistencyAnalyzer` - Lambda max, CI, RI and CR
//! - `Normalizer` - Flat-mode min-max normalization (benefit / cost)
//! - `DistanceMeasurements` - Judgments synthesized from raw distances
//! - `MeasurementAverager` - Diagnostic means of repeated sub-measurements
//! - `HierarchyAggregator` - Flat or hierarchical per-criterion scores
//! - `RankingProducer` - Weighted sum, ordering and contribution table
//! - `AhpEngine` - Orchestrates a full calculation into a `CalculationReport`
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Missing data
//! resolves to neutral values (judgment 1, equal split, score 0) instead of
//! failing; rejecting malformed input is the caller's job.

mod consistency;
mod distance;
mod engine;
mod hierarchy;
mod input;
mod judgments;
mod matrix;
mod measurements;
mod normalization;
mod priority;
mod ranking;
mod report;

pub use consistency::{random_index, ConsistencyAnalyzer, ConsistencyMetrics, CONSISTENCY_THRESHOLD};
pub use distance::{synthesize as synthesize_distance_judgment, DistanceMeasurements};
pub use engine::{AhpEngine, EngineSettings};
pub use hierarchy::{
    Aggregation, AggregationMode, CriterionBreakdown, HierarchyAggregator, LevelAnalysis,
    SubCriterionAnalysis,
};
pub use input::{Alternative, CalculationInput, Criterion, EvaluationValues, SubCriterion};
pub use judgments::{clamp_to_saaty, JudgmentKey, PairwiseJudgments, SAATY_MAX, SAATY_MIN};
pub use matrix::{ComparisonMatrix, MatrixBuilder};
pub use measurements::{MeasurementAverager, MeasurementRecord, MeasurementSummary};
pub use normalization::{AlternativeScores, Normalizer};
pub use priority::{PriorityDerivation, PriorityVector, PriorityVectorCalculator};
pub use ranking::{
    format_percent, CriterionContribution, RankingEntry, RankingProducer, ScoreTableRow,
};
pub use report::{round_to, CalculationReport};

