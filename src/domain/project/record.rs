//! Project input record - The string-keyed calculation record as submitted.
//!
//! Composite keys are never split. Each lookup key is built from declared
//! ids (e.g. `"{a}-{b}"`) and probed, so ids may themselves contain dashes.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::ahp::{
    Alternative, CalculationInput, Criterion, DistanceMeasurements, EvaluationValues,
    MeasurementRecord, PairwiseJudgments, SubCriterion,
};
use crate::domain::foundation::{CriterionType, ValidationError};

/// Field holding a sub-criterion judgment between two alternatives.
pub const ALTERNATIVE_JUDGMENT_FIELD: &str = "ahp-value";

/// Field holding a judgment between two sibling sub-criteria.
pub const SUB_WEIGHT_FIELD: &str = "subw";

/// Suffix of the per-alternative distance bag key.
pub const DISTANCE_SCOPE_SUFFIX: &str = "distance";

/// A value in a criterion field bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Returns the numeric value; numeric strings are parsed.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Text(text) => text.trim().parse().ok(),
        };
        value.filter(|value: &f64| value.is_finite())
    }

    fn is_non_finite_number(&self) -> bool {
        match self {
            FieldValue::Number(value) => !value.is_finite(),
            FieldValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(|value| !value.is_finite())
                .unwrap_or(false),
        }
    }
}

/// Field bags keyed by scope key, then field key.
pub type FieldBags = HashMap<String, HashMap<String, FieldValue>>;

/// The calculation record of a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub cities: Vec<Alternative>,
    pub criteria: Vec<Criterion>,
    #[serde(default)]
    pub sub_criteria: Vec<SubCriterion>,
    /// `"{criterionA}-{criterionB}"` -> judgment
    #[serde(default)]
    pub criteria_matrix: HashMap<String, f64>,
    /// `"{cityId}-{criterionId}"` -> raw measurement
    #[serde(default)]
    pub evaluation_values: HashMap<String, f64>,
    #[serde(default)]
    pub criteria_config: HashMap<String, CriterionType>,
    #[serde(default)]
    pub criterion_field_values: FieldBags,
    #[serde(default)]
    pub measurements: Vec<MeasurementRecord>,
}

impl ProjectInput {
    /// Checks the structural preconditions of a calculation.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for missing criteria, cities, ids or names
    /// - `DuplicateId` for repeated criterion, city or sub-criterion ids
    /// - `UnknownReference` for a sub-criterion of an undeclared criterion
    /// - `InvalidValue` for non-positive judgments, negative measurements
    ///   or non-finite numbers
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }
        if self.cities.is_empty() {
            return Err(ValidationError::empty_field("cities"));
        }

        check_entities("criteria", self.criteria.iter().map(|c| (&c.id, &c.name)))?;
        check_entities("cities", self.cities.iter().map(|c| (&c.id, &c.name)))?;
        check_entities(
            "subCriteria",
            self.sub_criteria.iter().map(|s| (&s.id, &s.name)),
        )?;

        let criterion_ids: HashSet<&str> = self.criteria.iter().map(|c| c.id.as_str()).collect();
        if let Some(orphan) = self
            .sub_criteria
            .iter()
            .find(|sub| !criterion_ids.contains(sub.criterion_id.as_str()))
        {
            return Err(ValidationError::unknown_reference(
                "subCriteria.criterionId",
                orphan.criterion_id.clone(),
            ));
        }

        for (key, value) in &self.criteria_matrix {
            if !value.is_finite() || *value <= 0.0 {
                return Err(ValidationError::invalid_value(
                    "criteriaMatrix",
                    format!("judgment '{}' must be a positive number", key),
                ));
            }
        }

        for (key, value) in &self.evaluation_values {
            if !value.is_finite() || *value < 0.0 {
                return Err(ValidationError::invalid_value(
                    "evaluationValues",
                    format!("value '{}' must be a non-negative number", key),
                ));
            }
        }

        for (scope, bag) in &self.criterion_field_values {
            for (field, value) in bag {
                if value.is_non_finite_number() {
                    return Err(ValidationError::invalid_value(
                        "criterionFieldValues",
                        format!("'{}.{}' must be a finite number", scope, field),
                    ));
                }
                let is_judgment = field == ALTERNATIVE_JUDGMENT_FIELD
                    || field == SUB_WEIGHT_FIELD
                    || field.starts_with("ahp-");
                if is_judgment && value.as_number().is_some_and(|v| v <= 0.0) {
                    return Err(ValidationError::invalid_value(
                        "criterionFieldValues",
                        format!("judgment '{}.{}' must be a positive number", scope, field),
                    ));
                }
            }
        }

        for record in &self.measurements {
            if !record.rate.is_finite() || !record.area.is_finite() {
                return Err(ValidationError::invalid_value(
                    "measurements",
                    format!("group '{}' has a non-finite value", record.measurement_group_id),
                ));
            }
        }

        Ok(())
    }

    /// Resolves the string-keyed record into the engine's typed input.
    ///
    /// Keys that do not match declared ids are ignored.
    pub fn resolve(&self) -> CalculationInput {
        let criterion_ids: Vec<&str> = self.criteria.iter().map(|c| c.id.as_str()).collect();
        let city_ids: Vec<&str> = self.cities.iter().map(|c| c.id.as_str()).collect();

        let mut criteria_judgments = PairwiseJudgments::new();
        for_each_ordered_pair(&criterion_ids, |a, b| {
            if let Some(value) = self.criteria_matrix.get(&pair_key(a, b)) {
                criteria_judgments.insert(a, b, *value);
            }
        });

        let mut evaluation_values = EvaluationValues::new();
        for city in &city_ids {
            for criterion in &criterion_ids {
                if let Some(value) = self.evaluation_values.get(&pair_key(city, criterion)) {
                    evaluation_values.insert(*city, *criterion, *value);
                }
            }
        }

        let mut alternative_judgments = PairwiseJudgments::new();
        for sub in &self.sub_criteria {
            for_each_ordered_pair(&city_ids, |a, b| {
                let key = format!("{}-{}-{}", sub.id, a, b);
                if let Some(value) = self.field_number(&key, ALTERNATIVE_JUDGMENT_FIELD) {
                    alternative_judgments.insert_scoped(&sub.id, a, b, value);
                }
            });
        }

        let mut sub_weight_judgments = PairwiseJudgments::new();
        for criterion in &criterion_ids {
            let siblings: Vec<&str> = self
                .sub_criteria
                .iter()
                .filter(|sub| sub.criterion_id == *criterion)
                .map(|sub| sub.id.as_str())
                .collect();
            for_each_ordered_pair(&siblings, |a, b| {
                let key = format!("{}-{}-{}", criterion, a, b);
                if let Some(value) = self.field_number(&key, SUB_WEIGHT_FIELD) {
                    sub_weight_judgments.insert_scoped(*criterion, a, b, value);
                }
            });
        }

        let mut distances = DistanceMeasurements::new();
        for city in &city_ids {
            let scope = pair_key(city, DISTANCE_SCOPE_SUFFIX);
            for sub in &self.sub_criteria {
                let distance_field = format!("distance-{}", sub.id);
                if let Some(value) = self.field_number(&scope, &distance_field) {
                    distances.insert_distance(*city, &sub.id, value);
                }
                for other in city_ids.iter().filter(|other| *other != city) {
                    let judgment_field = format!("ahp-{}-{}", sub.id, other);
                    if let Some(value) = self.field_number(&scope, &judgment_field) {
                        distances.insert_judgment(&sub.id, *city, *other, value);
                    }
                }
            }
        }

        CalculationInput {
            criteria: self.criteria.clone(),
            alternatives: self.cities.clone(),
            sub_criteria: self.sub_criteria.clone(),
            criteria_judgments,
            evaluation_values,
            criterion_types: self.criteria_config.clone(),
            alternative_judgments,
            sub_weight_judgments,
            distances,
            measurements: self.measurements.clone(),
        }
    }

    fn field_number(&self, scope: &str, field: &str) -> Option<f64> {
        self.criterion_field_values
            .get(scope)
            .and_then(|bag| bag.get(field))
            .and_then(FieldValue::as_number)
    }
}

fn pair_key(a: &str, b: &str) -> String {
    format!("{}-{}", a, b)
}

fn for_each_ordered_pair<'a, F>(ids: &[&'a str], mut f: F)
where
    F: FnMut(&'a str, &'a str),
{
    for a in ids {
        for b in ids {
            if a != b {
                f(a, b);
            }
        }
    }
}

fn check_entities<'a>(
    field: &str,
    entities: impl Iterator<Item = (&'a String, &'a String)>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for (id, name) in entities {
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("{}.id", field)));
        }
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("{}.name", field)));
        }
        if !seen.insert(id.as_str()) {
            return Err(ValidationError::duplicate_id(field, id.clone()));
        }
    }
    Ok(())
}
