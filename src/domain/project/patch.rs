//! Partial project updates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::ahp::{Alternative, Criterion, MeasurementRecord, SubCriterion};
use crate::domain::foundation::CriterionType;

use super::{FieldBags, ProjectInput};

/// A partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub cities: Option<Vec<Alternative>>,
    pub criteria: Option<Vec<Criterion>>,
    pub sub_criteria: Option<Vec<SubCriterion>>,
    pub criteria_matrix: Option<HashMap<String, f64>>,
    pub evaluation_values: Option<HashMap<String, f64>>,
    pub criteria_config: Option<HashMap<String, CriterionType>>,
    pub criterion_field_values: Option<FieldBags>,
    pub measurements: Option<Vec<MeasurementRecord>>,
}

impl ProjectPatch {
    /// True when the patch touches calculation content, not only the title.
    pub fn changes_content(&self) -> bool {
        self.cities.is_some()
            || self.criteria.is_some()
            || self.sub_criteria.is_some()
            || self.criteria_matrix.is_some()
            || self.evaluation_values.is_some()
            || self.criteria_config.is_some()
            || self.criterion_field_values.is_some()
            || self.measurements.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && !self.changes_content()
    }

    /// Overlays the patch onto a stored record.
    pub fn apply_to(&self, stored: &ProjectInput) -> ProjectInput {
        ProjectInput {
            cities: pick(&self.cities, &stored.cities),
            criteria: pick(&self.criteria, &stored.criteria),
            sub_criteria: pick(&self.sub_criteria, &stored.sub_criteria),
            criteria_matrix: pick(&self.criteria_matrix, &stored.criteria_matrix),
            evaluation_values: pick(&self.evaluation_values, &stored.evaluation_values),
            criteria_config: pick(&self.criteria_config, &stored.criteria_config),
            criterion_field_values: pick(
                &self.criterion_field_values,
                &stored.criterion_field_values,
            ),
            measurements: pick(&self.measurements, &stored.measurements),
        }
    }
}

fn pick<T: Clone>(patched: &Option<T>, stored: &T) -> T {
    patched.as_ref().unwrap_or(stored).clone()
}
