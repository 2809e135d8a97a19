//! Criterion type - normalization direction of raw measurements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a higher raw measurement is better or worse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CriterionType {
    /// Higher is better (normalized as `value / max`).
    #[default]
    Benefit,
    /// Lower is better (normalized as `min / value`).
    Cost,
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionType::Benefit => write!(f, "BENEFIT"),
            CriterionType::Cost => write!(f, "COST"),
        }
    }
}
