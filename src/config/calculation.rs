//! Calculation configuration

use serde::Deserialize;

use crate::domain::ahp::{EngineSettings, CONSISTENCY_THRESHOLD};

use super::error::ValidationError;

/// Upper bound for reported metric precision.
pub const MAX_METRIC_DECIMALS: u32 = 12;

/// Settings applied by the AHP engine to every calculation
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CalculationConfig {
    /// Consistency ratios strictly below this are reported as consistent
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Decimal places kept for lambda max, CI and CR
    #[serde(default = "default_metric_decimals")]
    pub metric_decimals: u32,
}

impl CalculationConfig {
    /// Convert into engine settings
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            consistency_threshold: self.consistency_threshold,
            metric_decimals: self.metric_decimals,
        }
    }

    /// Validate calculation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let threshold = self.consistency_threshold;
        if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
            return Err(ValidationError::InvalidConsistencyThreshold);
        }
        if self.metric_decimals > MAX_METRIC_DECIMALS {
            return Err(ValidationError::TooManyDecimals {
                max: MAX_METRIC_DECIMALS,
            });
        }
        Ok(())
    }
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            metric_decimals: default_metric_decimals(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}

fn default_metric_decimals() -> u32 {
    5
}
