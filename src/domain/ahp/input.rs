//! Calculation input - One fully-resolved record per calculation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::CriterionType;

use super::{DistanceMeasurements, MeasurementRecord, PairwiseJudgments};

/// Top-level dimension of comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: String,
    pub name: String,
}

impl Criterion {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A refinement of exactly one criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCriterion {
    pub id: String,
    pub name: String,
    pub criterion_id: String,
}

impl SubCriterion {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        criterion_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            criterion_id: criterion_id.into(),
        }
    }
}

/// An entity being ranked (e.g. a city).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub name: String,
}

impl Alternative {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Raw flat-mode measurements keyed by (alternative, criterion).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationValues {
    values: HashMap<(String, String), f64>,
}

impl EvaluationValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the measurement of an alternative under a criterion.
    pub fn insert(
        &mut self,
        alternative_id: impl Into<String>,
        criterion_id: impl Into<String>,
        value: f64,
    ) {
        self.values
            .insert((alternative_id.into(), criterion_id.into()), value);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(
        mut self,
        alternative_id: impl Into<String>,
        criterion_id: impl Into<String>,
        value: f64,
    ) -> Self {
        self.insert(alternative_id, criterion_id, value);
        self
    }

    /// Returns the measurement, or 0 when none was recorded.
    pub fn value_or_zero(&self, alternative_id: &str, criterion_id: &str) -> f64 {
        self.values
            .get(&(alternative_id.to_string(), criterion_id.to_string()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Iterates over all recorded measurements.
    pub fn iter(&self) -> impl Iterator<Item = (&(String, String), f64)> {
        self.values.iter().map(|(k, v)| (k, *v))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Everything the engine needs for one calculation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationInput {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
    /// Empty selects the flat model.
    pub sub_criteria: Vec<SubCriterion>,
    /// Unscoped judgments between criteria.
    pub criteria_judgments: PairwiseJudgments,
    pub evaluation_values: EvaluationValues,
    /// Criteria absent from this map are treated as benefit criteria.
    pub criterion_types: HashMap<String, CriterionType>,
    /// Judgments between alternatives, scoped by sub-criterion id.
    pub alternative_judgments: PairwiseJudgments,
    /// Judgments between sibling sub-criteria, scoped by criterion id.
    pub sub_weight_judgments: PairwiseJudgments,
    pub distances: DistanceMeasurements,
    pub measurements: Vec<MeasurementRecord>,
}

impl CalculationInput {
    /// Returns true when sub-criteria are declared.
    pub fn is_hierarchical(&self) -> bool {
        !self.sub_criteria.is_empty()
    }

    /// Returns criterion ids in declared order.
    pub fn criterion_ids(&self) -> Vec<String> {
        self.criteria.iter().map(|c| c.id.clone()).collect()
    }

    /// Returns alternative ids in declared order.
    pub fn alternative_ids(&self) -> Vec<String> {
        self.alternatives.iter().map(|a| a.id.clone()).collect()
    }

    /// Returns the sub-criteria of a criterion in declared order.
    pub fn sub_criteria_of<'a>(
        &'a self,
        criterion_id: &'a str,
    ) -> impl Iterator<Item = &'a SubCriterion> + 'a {
        self.sub_criteria
            .iter()
            .filter(move |sub| sub.criterion_id == criterion_id)
    }

    /// Returns the normalization direction of a criterion.
    pub fn criterion_type(&self, criterion_id: &str) -> CriterionType {
        self.criterion_types
            .get(criterion_id)
            .copied()
            .unwrap_or_default()
    }
}
