//! Distance synthesis - Pairwise judgments derived from raw distances.
//!
//! Distance-flavored sub-criteria (e.g. distance to a port) may carry
//! explicit judgments between alternatives. Pairs without one get a
//! judgment synthesized from the ratio of the two distances: the closer
//! alternative is preferred, `judgment(a, b) = distance(b) / distance(a)`,
//! clamped to the Saaty scale.

use std::collections::HashMap;

use super::{clamp_to_saaty, PairwiseJudgments};

/// Raw distances and explicit distance judgments, keyed by target.
///
/// The target is the id of the distance sub-criterion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceMeasurements {
    /// (alternative id, target id) -> distance
    distances: HashMap<(String, String), f64>,
    /// Judgments between alternatives, scoped by target id.
    judgments: PairwiseJudgments,
}

impl DistanceMeasurements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the distance from an alternative to a target.
    pub fn insert_distance(
        &mut self,
        alternative_id: impl Into<String>,
        target_id: impl Into<String>,
        distance: f64,
    ) {
        self.distances
            .insert((alternative_id.into(), target_id.into()), distance);
    }

    /// Records an explicit judgment of `first` over `second` for a target.
    pub fn insert_judgment(
        &mut self,
        target_id: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
        value: f64,
    ) {
        self.judgments.insert_scoped(target_id, first, second, value);
    }

    /// Builder-style variant of [`insert_distance`](Self::insert_distance).
    pub fn with_distance(
        mut self,
        alternative_id: impl Into<String>,
        target_id: impl Into<String>,
        distance: f64,
    ) -> Self {
        self.insert_distance(alternative_id, target_id, distance);
        self
    }

    /// Builder-style variant of [`insert_judgment`](Self::insert_judgment).
    pub fn with_judgment(
        mut self,
        target_id: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
        value: f64,
    ) -> Self {
        self.insert_judgment(target_id, first, second, value);
        self
    }

    /// Returns the recorded distance of an alternative to a target.
    pub fn distance(&self, alternative_id: &str, target_id: &str) -> Option<f64> {
        self.distances
            .get(&(alternative_id.to_string(), target_id.to_string()))
            .copied()
    }

    /// Returns the judgment of `first` over `second` for a target.
    ///
    /// Explicit judgments win (in either direction). Otherwise the judgment
    /// is synthesized from distances; a non-positive distance on either side
    /// yields 1. Returns `None` when neither alternative has data.
    pub fn judgment(&self, target_id: &str, first: &str, second: &str) -> Option<f64> {
        if let Some(value) = self.judgments.resolve(Some(target_id), first, second) {
            return Some(value);
        }

        let first_distance = self.distance(first, target_id);
        let second_distance = self.distance(second, target_id);
        if first_distance.is_none() && second_distance.is_none() {
            return None;
        }

        Some(synthesize(
            first_distance.unwrap_or(0.0),
            second_distance.unwrap_or(0.0),
        ))
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty() && self.judgments.is_empty()
    }
}

/// Judgment of an alternative at `first_distance` over one at `second_distance`.
pub fn synthesize(first_distance: f64, second_distance: f64) -> f64 {
    if first_distance <= 0.0 || second_distance <= 0.0 {
        return 1.0;
    }
    clamp_to_saaty(second_distance / first_distance)
}
