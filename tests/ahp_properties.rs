//! Property tests for the AHP engine.

use ahp_ranking::domain::ahp::{
    AhpEngine, Alternative, CalculationInput, ConsistencyAnalyzer, Criterion, EvaluationValues,
    MatrixBuilder, Normalizer, PairwiseJudgments, PriorityVectorCalculator, SAATY_MAX, SAATY_MIN,
};
use ahp_ranking::domain::foundation::CriterionType;
use proptest::prelude::*;

fn ids(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}{}", prefix, i)).collect()
}

/// Upper-triangle judgments for `n` ids; `None` leaves the pair unjudged.
fn upper_triangle(n: usize) -> impl Strategy<Value = Vec<Option<f64>>> {
    let pairs = n * n.saturating_sub(1) / 2;
    prop::collection::vec(prop::option::of(SAATY_MIN..=SAATY_MAX), pairs)
}

fn judgments_for(ids: &[String], upper: &[Option<f64>]) -> PairwiseJudgments {
    let mut judgments = PairwiseJudgments::new();
    let mut values = upper.iter();
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            if let Some(Some(value)) = values.next() {
                judgments.insert(ids[i].clone(), ids[j].clone(), *value);
            }
        }
    }
    judgments
}

fn matrix_case() -> impl Strategy<Value = (usize, Vec<Option<f64>>)> {
    (1usize..=10).prop_flat_map(|n| (Just(n), upper_triangle(n)))
}

fn flat_input(
    n_criteria: usize,
    upper: &[Option<f64>],
    values: &[Vec<f64>],
) -> CalculationInput {
    let criterion_ids = ids("c", n_criteria);
    let mut evaluation_values = EvaluationValues::new();
    for (a, row) in values.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            evaluation_values.insert(format!("a{}", a), criterion_ids[c].clone(), *value);
        }
    }

    CalculationInput {
        criteria: criterion_ids
            .iter()
            .map(|id| Criterion::new(id.clone(), id.to_uppercase()))
            .collect(),
        alternatives: (0..values.len())
            .map(|a| Alternative::new(format!("a{}", a), format!("Alt {}", a)))
            .collect(),
        criteria_judgments: judgments_for(&criterion_ids, upper),
        evaluation_values,
        ..Default::default()
    }
}

fn flat_case() -> impl Strategy<Value = (usize, Vec<Option<f64>>, Vec<Vec<f64>>)> {
    (1usize..=5, 1usize..=6).prop_flat_map(|(n_criteria, n_alternatives)| {
        (
            Just(n_criteria),
            upper_triangle(n_criteria),
            prop::collection::vec(
                prop::collection::vec(0.0f64..1000.0, n_criteria),
                n_alternatives,
            ),
        )
    })
}

/// Judgments `w_i / w_j` for every pair: a perfectly consistent matrix whose
/// priorities are the normalized `weights`.
fn consistent_judgments(ids: &[String], weights: &[f64]) -> PairwiseJudgments {
    let mut judgments = PairwiseJudgments::new();
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            judgments.insert(ids[i].clone(), ids[j].clone(), weights[i] / weights[j]);
        }
    }
    judgments
}

/// Criterion weights plus raw values where `a0` is best and `a1` worst on `c0`.
fn gap_case() -> impl Strategy<Value = (Vec<f64>, Vec<Vec<f64>>)> {
    (2usize..=4, 2usize..=5)
        .prop_flat_map(|(n_criteria, n_alternatives)| {
            (
                prop::collection::vec(1.0f64..9.0, n_criteria),
                prop::collection::vec(
                    prop::collection::vec(0.0f64..1000.0, n_criteria),
                    n_alternatives,
                ),
            )
        })
        .prop_map(|(weights, mut values)| {
            let top = values.iter().map(|row| row[0]).fold(0.0, f64::max) + 1.0;
            values[0][0] = top;
            values[1][0] = 0.0;
            (weights, values)
        })
}

fn gap_between_first_two(input: &CalculationInput) -> (f64, f64) {
    let report = AhpEngine::default().calculate(input);
    let score = |id: &str| {
        report
            .table
            .iter()
            .find(|row| row.alternative_id == id)
            .map_or(0.0, |row| row.final_score)
    };
    (score("a0") - score("a1"), report.eigenvector[0])
}

proptest! {
    #[test]
    fn matrix_is_reciprocal_with_unit_diagonal((n, upper) in matrix_case()) {
        let ids = ids("c", n);
        let matrix = MatrixBuilder::from_judgments(&ids, &judgments_for(&ids, &upper), None);

        for i in 0..n {
            prop_assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..n {
                let product = matrix.get(i, j) * matrix.get(j, i);
                prop_assert!((product - 1.0).abs() < 1e-12, "a[{}][{}] * a[{}][{}] = {}", i, j, j, i, product);
            }
        }
    }

    #[test]
    fn priorities_are_non_negative_and_sum_to_one((n, upper) in matrix_case()) {
        let ids = ids("c", n);
        let matrix = MatrixBuilder::from_judgments(&ids, &judgments_for(&ids, &upper), None);
        let priorities = PriorityVectorCalculator::derive(&matrix).priorities;

        prop_assert_eq!(priorities.len(), n);
        prop_assert!(priorities.weights().iter().all(|w| *w >= 0.0));
        prop_assert!((priorities.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn unjudged_matrix_gives_uniform_weights_and_zero_ratio(n in 1usize..=12) {
        let ids = ids("c", n);
        let matrix = MatrixBuilder::from_judgments(&ids, &PairwiseJudgments::new(), None);
        let priorities = PriorityVectorCalculator::derive(&matrix).priorities;
        let metrics = ConsistencyAnalyzer::analyze(&matrix, &priorities);

        for weight in priorities.weights() {
            prop_assert!((weight - 1.0 / n as f64).abs() < 1e-12);
        }
        prop_assert!(metrics.consistency_ratio.abs() < 1e-9);
        prop_assert!(metrics.is_consistent());
    }

    #[test]
    fn calculation_is_idempotent((n, upper, values) in flat_case()) {
        let input = flat_input(n, &upper, &values);
        let engine = AhpEngine::default();

        prop_assert_eq!(engine.calculate(&input), engine.calculate(&input));
    }

    #[test]
    fn scores_stay_in_unit_interval((n, upper, values) in flat_case()) {
        let report = AhpEngine::default().calculate(&flat_input(n, &upper, &values));

        prop_assert_eq!(report.ranking.len(), values.len());
        for entry in &report.ranking {
            prop_assert!(entry.score >= 0.0 && entry.score <= 1.0 + 1e-9);
        }
        for pair in report.ranking.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn raising_a_benefit_value_never_lowers_the_score(
        (n, upper, values) in flat_case(),
        raise in 0.0f64..500.0,
    ) {
        let engine = AhpEngine::default();
        let before = engine.calculate(&flat_input(n, &upper, &values));

        let mut raised = values.clone();
        raised[0][0] += raise;
        let after = engine.calculate(&flat_input(n, &upper, &raised));

        let score = |report: &ahp_ranking::domain::ahp::CalculationReport| {
            report
                .table
                .iter()
                .find(|row| row.alternative_id == "a0")
                .map(|row| row.final_score)
        };
        let (before, after) = (score(&before), score(&after));
        prop_assert!(before.is_some());
        prop_assert!(after.unwrap_or(0.0) + 1e-12 >= before.unwrap_or(0.0));
    }

    #[test]
    fn raising_a_criterion_weight_never_narrows_its_best_to_worst_gap(
        (weights, values) in gap_case(),
        factor in 1.0f64..5.0,
    ) {
        let n = weights.len();
        let criterion_ids = ids("c", n);

        let mut input = flat_input(n, &[], &values);
        input.criteria_judgments = consistent_judgments(&criterion_ids, &weights);
        let (gap_before, weight_before) = gap_between_first_two(&input);

        // Scaling one row keeps the other weights in proportion.
        let mut raised = weights.clone();
        raised[0] *= factor;
        input.criteria_judgments = consistent_judgments(&criterion_ids, &raised);
        let (gap_after, weight_after) = gap_between_first_two(&input);

        prop_assert!(weight_after + 1e-12 >= weight_before);
        prop_assert!(
            gap_after + 1e-9 >= gap_before,
            "gap shrank from {} to {}",
            gap_before,
            gap_after
        );
    }

    #[test]
    fn best_benefit_and_cost_values_normalize_to_one(
        raw in prop::collection::vec(0.01f64..1000.0, 1..10),
    ) {
        let benefit = Normalizer::normalize_column(CriterionType::Benefit, &raw);
        let cost = Normalizer::normalize_column(CriterionType::Cost, &raw);

        let max_index = raw
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        let min_index = raw
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();

        prop_assert!((benefit[max_index] - 1.0).abs() < 1e-12);
        prop_assert!((cost[min_index] - 1.0).abs() < 1e-12);
        prop_assert!(benefit.iter().chain(cost.iter()).all(|s| *s > 0.0 && *s <= 1.0 + 1e-12));
    }
}

#[test]
fn single_criterion_has_full_weight_and_no_inconsistency() {
    let input = flat_input(1, &[], &[vec![4.0], vec![2.0]]);
    let report = AhpEngine::default().calculate(&input);

    assert_eq!(report.eigenvector, vec![1.0]);
    assert_eq!(report.consistency_ratio, 0.0);
    assert!(report.is_consistent);
    assert_eq!(report.winner(), Some("a0"));
}
