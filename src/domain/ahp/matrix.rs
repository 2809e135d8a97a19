//! Matrix Builder - Dense reciprocal comparison matrices from sparse judgments.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::PairwiseJudgments;

/// Square reciprocal matrix over an ordered id list.
///
/// Invariants: `values[(i, i)] == 1` and `values[(j, i)] == 1 / values[(i, j)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    ids: Vec<String>,
    #[serde(with = "row_major")]
    values: DMatrix<f64>,
}

impl Default for ComparisonMatrix {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            values: DMatrix::zeros(0, 0),
        }
    }
}

impl ComparisonMatrix {
    /// Returns the matrix order.
    pub fn order(&self) -> usize {
        self.ids.len()
    }

    /// Returns true for a 0x0 matrix.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the ids labelling rows and columns.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Returns the entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[(i, j)]
    }

    /// Returns the dense values.
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Returns the raw values, row-major.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        row_major::rows(&self.values)
    }
}

/// Serde adapter writing a dense matrix as a list of rows.
pub(crate) mod row_major {
    use nalgebra::DMatrix;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn rows(values: &DMatrix<f64>) -> Vec<Vec<f64>> {
        values
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    pub fn serialize<S>(values: &DMatrix<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rows(values).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DMatrix<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<f64>>::deserialize(deserializer)?;
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != ncols) {
            return Err(D::Error::custom("matrix rows have different lengths"));
        }
        Ok(DMatrix::from_fn(rows.len(), ncols, |i, j| rows[i][j]))
    }
}

/// Builds comparison matrices.
pub struct MatrixBuilder;

impl MatrixBuilder {
    /// Builds an `n x n` reciprocal matrix over `ids`.
    ///
    /// `judgment(a, b)` is a directional lookup. For each pair the direct
    /// judgment wins, then the inverse of the reverse judgment, then 1.
    ///
    /// # Edge Cases
    /// - Empty ids: Returns an empty matrix
    /// - Non-positive or non-finite judgments: Treated as missing
    pub fn build<F>(ids: &[String], judgment: F) -> ComparisonMatrix
    where
        F: Fn(&str, &str) -> Option<f64>,
    {
        let n = ids.len();
        let mut values = DMatrix::<f64>::from_element(n, n, 1.0);
        let usable = |v: f64| v.is_finite() && v > 0.0;

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (ids[i].as_str(), ids[j].as_str());

                if let Some(value) = judgment(a, b).filter(|v| usable(*v)) {
                    values[(i, j)] = value;
                    values[(j, i)] = 1.0 / value;
                } else if let Some(value) = judgment(b, a).filter(|v| usable(*v)) {
                    values[(j, i)] = value;
                    values[(i, j)] = 1.0 / value;
                }
            }
        }

        ComparisonMatrix {
            ids: ids.to_vec(),
            values,
        }
    }

    /// Builds a matrix from a judgment set restricted to one scope.
    pub fn from_judgments(
        ids: &[String],
        judgments: &PairwiseJudgments,
        scope: Option<&str>,
    ) -> ComparisonMatrix {
        Self::build(ids, |a, b| judgments.get(scope, a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_ids_build_empty_matrix() {
        let matrix = MatrixBuilder::build(&[], |_, _| None);
        assert!(matrix.is_empty());
        assert_eq!(matrix.order(), 0);
    }

    #[test]
    fn missing_judgments_default_to_one() {
        let matrix = MatrixBuilder::build(&ids(&["a", "b", "c"]), |_, _| None);

        assert!(matrix.values().iter().all(|v| *v == 1.0));
    }

    #[test]
    fn direct_judgment_sets_reciprocal() {
        let judgments = PairwiseJudgments::new().with("a", "b", 5.0);
        let matrix = MatrixBuilder::from_judgments(&ids(&["a", "b"]), &judgments, None);

        assert_eq!(matrix.get(0, 1), 5.0);
        assert_eq!(matrix.get(1, 0), 0.2);
    }

    #[test]
    fn reverse_judgment_is_inverted() {
        let judgments = PairwiseJudgments::new().with("b", "a", 4.0);
        let matrix = MatrixBuilder::from_judgments(&ids(&["a", "b"]), &judgments, None);

        assert_eq!(matrix.get(1, 0), 4.0);
        assert_eq!(matrix.get(0, 1), 0.25);
    }

    #[test]
    fn non_positive_judgment_falls_back() {
        let matrix = MatrixBuilder::build(&ids(&["a", "b"]), |a, _| {
            if a == "a" {
                Some(0.0)
            } else {
                Some(3.0)
            }
        });

        assert_eq!(matrix.get(1, 0), 3.0);
        assert!((matrix.get(0, 1) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn scoped_judgments_only_use_their_scope() {
        let judgments = PairwiseJudgments::new()
            .with_scoped("s1", "a", "b", 3.0)
            .with_scoped("s2", "a", "b", 7.0);
        let matrix = MatrixBuilder::from_judgments(&ids(&["a", "b"]), &judgments, Some("s2"));

        assert_eq!(matrix.get(0, 1), 7.0);
    }

    #[test]
    fn serializes_as_rows() {
        let judgments = PairwiseJudgments::new().with("a", "b", 4.0);
        let matrix = MatrixBuilder::from_judgments(&ids(&["a", "b"]), &judgments, None);

        let json = serde_json::to_value(&matrix).unwrap();
        assert_eq!(json["values"], serde_json::json!([[1.0, 4.0], [0.25, 1.0]]));

        let back: ComparisonMatrix = serde_json::from_value(json).unwrap();
        assert_eq!(back, matrix);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let json = serde_json::json!({ "ids": ["a", "b"], "values": [[1.0, 2.0], [0.5]] });
        assert!(serde_json::from_value::<ComparisonMatrix>(json).is_err());
    }

    #[test]
    fn matrix_keeps_id_order() {
        let matrix = MatrixBuilder::build(&ids(&["z", "a"]), |_, _| None);
        assert_eq!(matrix.ids(), &["z".to_string(), "a".to_string()]);
    }
}
