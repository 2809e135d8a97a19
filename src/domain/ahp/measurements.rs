//! Measurement averaging - Diagnostic means of repeated sub-measurements.
//!
//! Several measurement groups (e.g. facility records) may be recorded
//! against one (alternative, criterion) pair, each with a rate and an area.
//! The summary reports the mean rate, mean area and mean rate/area ratio.
//! These figures are for display only; they never feed the weighting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Alternative, Criterion};

/// One measurement group for an (alternative, criterion) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    #[serde(rename = "cityId", alias = "alternativeId")]
    pub alternative_id: String,
    pub criterion_id: String,
    pub measurement_group_id: String,
    pub rate: f64,
    pub area: f64,
}

impl MeasurementRecord {
    pub fn new(
        alternative_id: impl Into<String>,
        criterion_id: impl Into<String>,
        measurement_group_id: impl Into<String>,
        rate: f64,
        area: f64,
    ) -> Self {
        Self {
            alternative_id: alternative_id.into(),
            criterion_id: criterion_id.into(),
            measurement_group_id: measurement_group_id.into(),
            rate,
            area,
        }
    }

    /// Rate per unit of area, 0 when the area is not positive.
    pub fn ratio(&self) -> f64 {
        if self.area > 0.0 {
            self.rate / self.area
        } else {
            0.0
        }
    }
}

/// Averages for one (alternative, criterion) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSummary {
    #[serde(rename = "cityId")]
    pub alternative_id: String,
    pub criterion_id: String,
    pub group_count: usize,
    pub mean_rate: f64,
    pub mean_area: f64,
    pub mean_ratio: f64,
}

/// Computes measurement summaries.
pub struct MeasurementAverager;

impl MeasurementAverager {
    /// Summarizes records per (alternative, criterion), in declared order.
    ///
    /// # Edge Cases
    /// - Pairs without records: Omitted
    /// - Repeated group id for the same pair: The last record wins
    /// - Records for undeclared alternatives or criteria: Ignored
    pub fn summarize(
        records: &[MeasurementRecord],
        alternatives: &[Alternative],
        criteria: &[Criterion],
    ) -> Vec<MeasurementSummary> {
        let mut groups: BTreeMap<(&str, &str), BTreeMap<&str, &MeasurementRecord>> =
            BTreeMap::new();
        for record in records {
            groups
                .entry((record.alternative_id.as_str(), record.criterion_id.as_str()))
                .or_default()
                .insert(record.measurement_group_id.as_str(), record);
        }

        let mut summaries = Vec::new();
        for alternative in alternatives {
            for criterion in criteria {
                let Some(group) = groups.get(&(alternative.id.as_str(), criterion.id.as_str()))
                else {
                    continue;
                };

                let count = group.len() as f64;
                let (rate_sum, area_sum, ratio_sum) = group.values().fold(
                    (0.0, 0.0, 0.0),
                    |(rate, area, ratio), record| {
                        (rate + record.rate, area + record.area, ratio + record.ratio())
                    },
                );

                summaries.push(MeasurementSummary {
                    alternative_id: alternative.id.clone(),
                    criterion_id: criterion.id.clone(),
                    group_count: group.len(),
                    mean_rate: rate_sum / count,
                    mean_area: area_sum / count,
                    mean_ratio: ratio_sum / count,
                });
            }
        }

        summaries
    }
}
