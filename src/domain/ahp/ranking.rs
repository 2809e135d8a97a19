//! Ranking Producer - Weighted-sum scores and the final ordering.

use serde::{Deserialize, Serialize};

use super::{Alternative, AlternativeScores, Criterion, PriorityVector};

/// One ranked alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub id: String,
    pub name: String,
    /// Final weighted score in [0, 1].
    pub score: f64,
    /// `score * 100` with two decimals and a percent sign.
    pub formatted_score: String,
}

/// Contribution of one criterion to an alternative's final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionContribution {
    pub criterion_id: String,
    /// Alternative score under the criterion.
    pub raw: f64,
    /// `raw * criterion weight`
    pub weighted: f64,
}

/// Per-alternative breakdown of the weighted sum, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTableRow {
    pub alternative_id: String,
    pub name: String,
    pub contributions: Vec<CriterionContribution>,
    pub final_score: f64,
    pub formatted_score: String,
}

/// Formats a [0, 1] score as a percentage with two decimals.
pub fn format_percent(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

/// Produces rankings from criterion weights and alternative scores.
pub struct RankingProducer;

impl RankingProducer {
    /// Builds the contribution table, one row per alternative in input order.
    ///
    /// Sums run over criteria in declared order.
    pub fn table(
        criteria: &[Criterion],
        alternatives: &[Alternative],
        weights: &PriorityVector,
        scores: &AlternativeScores,
    ) -> Vec<ScoreTableRow> {
        alternatives
            .iter()
            .map(|alt| {
                let contributions: Vec<CriterionContribution> = criteria
                    .iter()
                    .map(|criterion| {
                        let raw = scores.get(&alt.id, &criterion.id);
                        CriterionContribution {
                            criterion_id: criterion.id.clone(),
                            raw,
                            weighted: raw * weights.weight_or_zero(&criterion.id),
                        }
                    })
                    .collect();

                let final_score = contributions.iter().map(|c| c.weighted).sum();

                ScoreTableRow {
                    alternative_id: alt.id.clone(),
                    name: alt.name.clone(),
                    contributions,
                    final_score,
                    formatted_score: format_percent(final_score),
                }
            })
            .collect()
    }

    /// Ranks alternatives by final score, best first.
    ///
    /// Ties keep input order.
    pub fn rank(table: &[ScoreTableRow]) -> Vec<RankingEntry> {
        let mut ranking: Vec<RankingEntry> = table
            .iter()
            .map(|row| RankingEntry {
                id: row.alternative_id.clone(),
                name: row.name.clone(),
                score: row.final_score,
                formatted_score: row.formatted_score.clone(),
            })
            .collect();

        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranking
    }

    /// Returns the single best alternative, or None on an empty or tied top.
    pub fn find_best(ranking: &[RankingEntry]) -> Option<&RankingEntry> {
        match ranking {
            [] => None,
            [only] => Some(only),
            [first, second, ..] if first.score > second.score => Some(first),
            _ => None,
        }
    }
}
