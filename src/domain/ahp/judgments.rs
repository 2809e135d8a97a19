//! Pairwise Judgments - Typed sparse map of Saaty-scale comparisons.
//!
//! A judgment `(a, b) = v` reads "a is v times as important/preferable as b".
//! Keys are directional and optionally scoped (a sub-criterion id when
//! comparing alternatives, a criterion id when weighting sub-criteria).
//! Only one direction needs to be stored; the reverse is its inverse.

use std::collections::HashMap;

/// Lower bound of the Saaty scale.
pub const SAATY_MIN: f64 = 1.0 / 9.0;

/// Upper bound of the Saaty scale.
pub const SAATY_MAX: f64 = 9.0;

/// Composite key of a directional judgment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JudgmentKey {
    pub scope: Option<String>,
    pub first: String,
    pub second: String,
}

impl JudgmentKey {
    /// Creates an unscoped key.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            scope: None,
            first: first.into(),
            second: second.into(),
        }
    }

    /// Creates a key scoped to a sub-criterion or criterion.
    pub fn scoped(
        scope: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self {
            scope: Some(scope.into()),
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Sparse set of pairwise judgments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairwiseJudgments {
    entries: HashMap<JudgmentKey, f64>,
}

impl PairwiseJudgments {
    /// Creates an empty judgment set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an unscoped judgment `first` over `second`.
    pub fn insert(&mut self, first: impl Into<String>, second: impl Into<String>, value: f64) {
        self.entries.insert(JudgmentKey::new(first, second), value);
    }

    /// Records a judgment within a scope.
    pub fn insert_scoped(
        &mut self,
        scope: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
        value: f64,
    ) {
        self.entries
            .insert(JudgmentKey::scoped(scope, first, second), value);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, first: impl Into<String>, second: impl Into<String>, value: f64) -> Self {
        self.insert(first, second, value);
        self
    }

    /// Builder-style variant of [`insert_scoped`](Self::insert_scoped).
    pub fn with_scoped(
        mut self,
        scope: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
        value: f64,
    ) -> Self {
        self.insert_scoped(scope, first, second, value);
        self
    }

    /// Returns the stored judgment in the given direction only.
    ///
    /// Non-positive or non-finite values count as absent.
    pub fn get(&self, scope: Option<&str>, first: &str, second: &str) -> Option<f64> {
        let key = JudgmentKey {
            scope: scope.map(str::to_string),
            first: first.to_string(),
            second: second.to_string(),
        };
        self.entries.get(&key).copied().filter(|v| is_usable(*v))
    }

    /// Returns the judgment `first` over `second`, falling back to the
    /// inverse of the reverse judgment.
    pub fn resolve(&self, scope: Option<&str>, first: &str, second: &str) -> Option<f64> {
        self.get(scope, first, second)
            .or_else(|| self.get(scope, second, first).map(|v| 1.0 / v))
    }

    /// Returns true if any usable judgment exists between the two ids.
    pub fn has_pair(&self, scope: Option<&str>, first: &str, second: &str) -> bool {
        self.resolve(scope, first, second).is_some()
    }

    /// Iterates over all stored entries.
    pub fn iter(&self) -> impl Iterator<Item = (&JudgmentKey, f64)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    /// Returns the number of stored judgments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no judgments are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Clamps a synthesized judgment into the Saaty scale.
pub fn clamp_to_saaty(value: f64) -> f64 {
    value.clamp(SAATY_MIN, SAATY_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_is_directional() {
        let judgments = PairwiseJudgments::new().with("a", "b", 3.0);

        assert_eq!(judgments.get(None, "a", "b"), Some(3.0));
        assert_eq!(judgments.get(None, "b", "a"), None);
    }

    #[test]
    fn resolve_falls_back_to_reverse_inverse() {
        let judgments = PairwiseJudgments::new().with("a", "b", 4.0);

        assert_eq!(judgments.resolve(None, "b", "a"), Some(0.25));
    }

    #[test]
    fn resolve_prefers_direct_entry() {
        let judgments = PairwiseJudgments::new()
            .with("a", "b", 2.0)
            .with("b", "a", 5.0);

        assert_eq!(judgments.resolve(None, "a", "b"), Some(2.0));
        assert_eq!(judgments.resolve(None, "b", "a"), Some(5.0));
    }

    #[test]
    fn scopes_do_not_leak() {
        let judgments = PairwiseJudgments::new().with_scoped("s1", "a", "b", 7.0);

        assert_eq!(judgments.get(Some("s1"), "a", "b"), Some(7.0));
        assert_eq!(judgments.get(Some("s2"), "a", "b"), None);
        assert_eq!(judgments.get(None, "a", "b"), None);
    }

    #[test]
    fn non_positive_values_are_ignored() {
        let judgments = PairwiseJudgments::new()
            .with("a", "b", 0.0)
            .with("c", "d", -2.0)
            .with("e", "f", f64::NAN);

        assert!(!judgments.has_pair(None, "a", "b"));
        assert!(!judgments.has_pair(None, "d", "c"));
        assert!(!judgments.has_pair(None, "e", "f"));
        assert_eq!(judgments.len(), 3);
    }

    #[test]
    fn zero_direct_value_falls_back_to_reverse() {
        let judgments = PairwiseJudgments::new()
            .with("a", "b", 0.0)
            .with("b", "a", 2.0);

        assert_eq!(judgments.resolve(None, "a", "b"), Some(0.5));
    }

    #[test]
    fn clamp_to_saaty_bounds() {
        assert_eq!(clamp_to_saaty(20.0), SAATY_MAX);
        assert_eq!(clamp_to_saaty(0.01), SAATY_MIN);
        assert_eq!(clamp_to_saaty(3.0), 3.0);
    }
}
