//! Priority Vector Calculator - Column-normalization approximation of the
//! principal eigenvector.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::matrix::row_major;
use super::ComparisonMatrix;

/// Normalized weights keyed by the ids of the matrix they came from.
///
/// Weights are non-negative and sum to 1 for a non-empty vector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriorityVector {
    ids: Vec<String>,
    weights: Vec<f64>,
}

impl PriorityVector {
    /// Creates a vector from parallel id and weight lists.
    ///
    /// Callers are responsible for the weights summing to 1.
    pub fn from_parts(ids: Vec<String>, weights: Vec<f64>) -> Self {
        debug_assert_eq!(ids.len(), weights.len());
        Self { ids, weights }
    }

    /// Equal split `1/n` over the given ids.
    pub fn uniform(ids: &[String]) -> Self {
        let share = if ids.is_empty() {
            0.0
        } else {
            1.0 / ids.len() as f64
        };
        Self {
            ids: ids.to_vec(),
            weights: vec![share; ids.len()],
        }
    }

    /// Returns the weight of an id, if present.
    pub fn get(&self, id: &str) -> Option<f64> {
        self.ids
            .iter()
            .position(|candidate| candidate == id)
            .map(|index| self.weights[index])
    }

    /// Returns the weight of an id, or 0 when absent.
    pub fn weight_or_zero(&self, id: &str) -> f64 {
        self.get(id).unwrap_or(0.0)
    }

    /// Returns the ids in matrix order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Returns the weights in matrix order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Iterates `(id, weight)` pairs in matrix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ids
            .iter()
            .map(String::as_str)
            .zip(self.weights.iter().copied())
    }

    /// Returns the weights as an id-sorted map.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter().map(|(id, w)| (id.to_string(), w)).collect()
    }

    /// Returns the sum of all weights.
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Intermediate and final results of a priority derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityDerivation {
    pub matrix: ComparisonMatrix,
    pub column_sums: Vec<f64>,
    #[serde(with = "row_major")]
    pub normalized_matrix: DMatrix<f64>,
    pub priorities: PriorityVector,
}

impl PriorityDerivation {
    fn empty(matrix: &ComparisonMatrix) -> Self {
        Self {
            matrix: matrix.clone(),
            column_sums: Vec::new(),
            normalized_matrix: DMatrix::zeros(0, 0),
            priorities: PriorityVector::default(),
        }
    }
}

impl Default for PriorityDerivation {
    fn default() -> Self {
        Self::empty(&ComparisonMatrix::default())
    }
}

/// Derives priority vectors from comparison matrices.
pub struct PriorityVectorCalculator;

impl PriorityVectorCalculator {
    /// Computes the priority vector of a comparison matrix.
    ///
    /// # Algorithm
    /// 1. Sum each column
    /// 2. Divide every entry by its column sum
    /// 3. Average each normalized row
    ///
    /// # Edge Cases
    /// - Empty matrix: Returns empty vector and empty intermediate matrices
    /// - All-ones matrix: Every weight is `1/n`
    pub fn derive(matrix: &ComparisonMatrix) -> PriorityDerivation {
        let n = matrix.order();
        if n == 0 {
            return PriorityDerivation::empty(matrix);
        }

        let values = matrix.values();
        let column_sums: Vec<f64> = values.column_iter().map(|column| column.sum()).collect();

        let mut normalized_matrix = values.clone();
        for (mut column, sum) in normalized_matrix.column_iter_mut().zip(&column_sums) {
            column /= *sum;
        }

        let weights = normalized_matrix.row_iter().map(|row| row.mean()).collect();

        PriorityDerivation {
            matrix: matrix.clone(),
            column_sums,
            normalized_matrix,
            priorities: PriorityVector::from_parts(matrix.ids().to_vec(), weights),
        }
    }
}
