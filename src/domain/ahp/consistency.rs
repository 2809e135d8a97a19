//! Consistency Analyzer - Saaty consistency index and ratio.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use super::{ComparisonMatrix, PriorityVector};

/// Conventional acceptability threshold for the consistency ratio.
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Random index used for orders above the table.
const DEFAULT_RANDOM_INDEX: f64 = 1.12;

/// Random index by matrix order, starting at n = 1.
const RANDOM_INDEX_TABLE: [f64; 10] = [0.0, 0.0, 0.58, 0.9, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Returns the random index for a matrix of order `n`.
///
/// Orders outside 1..=10 fall back to 1.12; order 0 has index 0.
pub fn random_index(n: usize) -> f64 {
    match n {
        0 => 0.0,
        1..=10 => RANDOM_INDEX_TABLE[n - 1],
        _ => DEFAULT_RANDOM_INDEX,
    }
}

/// Consistency measures of one (matrix, priority vector) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyMetrics {
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub random_index: f64,
    pub consistency_ratio: f64,
}

impl ConsistencyMetrics {
    /// Returns true when the ratio is below the conventional 0.1 threshold.
    pub fn is_consistent(&self) -> bool {
        self.is_consistent_within(CONSISTENCY_THRESHOLD)
    }

    /// Returns true when the ratio is below `threshold`.
    pub fn is_consistent_within(&self, threshold: f64) -> bool {
        self.consistency_ratio < threshold
    }
}

/// Computes consistency metrics.
pub struct ConsistencyAnalyzer;

impl ConsistencyAnalyzer {
    /// Analyzes a matrix against its derived priority vector.
    ///
    /// # Algorithm
    /// - Weighted sums: `A * w`
    /// - Row estimate: `(A * w)[i] / w[i]`
    /// - `lambda_max` = mean of the row estimates
    /// - `CI = (lambda_max - n) / (n - 1)`, 0 for n <= 1
    /// - `CR = CI / RI`, 0 when RI is 0
    ///
    /// # Edge Cases
    /// - Empty matrix or a vector of another order: All metrics are 0
    /// - Zero priority on a row: That row contributes 0 to `lambda_max`
    pub fn analyze(matrix: &ComparisonMatrix, priorities: &PriorityVector) -> ConsistencyMetrics {
        let n = matrix.order();
        if n == 0 || priorities.len() != n {
            return ConsistencyMetrics::default();
        }

        let weights = DVector::from_column_slice(priorities.weights());
        let weighted_sums = matrix.values() * &weights;
        let lambda_sum: f64 = weighted_sums
            .iter()
            .zip(weights.iter())
            .map(|(weighted_sum, weight)| {
                if *weight > 0.0 {
                    weighted_sum / weight
                } else {
                    0.0
                }
            })
            .sum();
        let lambda_max = lambda_sum / n as f64;

        let consistency_index = if n > 1 {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        } else {
            0.0
        };

        let random_index = random_index(n);
        let consistency_ratio = if random_index == 0.0 {
            0.0
        } else {
            consistency_index / random_index
        };

        ConsistencyMetrics {
            lambda_max,
            consistency_index,
            random_index,
            consistency_ratio,
        }
    }
}
