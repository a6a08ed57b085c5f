//! Equivalence properties between a quadratic problem and its linearization.
//!
//! For every binary assignment x, extending it with y[i][j] = x[i]*x[j] must
//! be feasible in the linearized model and reproduce the quadratic objective
//! exactly; optimizing the linearized model must reach the same optimum as
//! enumerating the quadratic objective directly.

use qubolin::{
    linearize, DiagonalPolicy, ExhaustiveSolver, LinearizeSettings, QuadraticProblem, Sense,
    SolveStatus, SolverBackend,
};

/// A 4-variable problem with mixed signs, a zero row interior, diagonal
/// terms, and a nonzero linear part.
fn mixed_problem() -> QuadraticProblem {
    QuadraticProblem::from_dense(
        &[
            vec![1.0, -2.0, 0.0, 0.5],
            vec![-2.0, 0.0, 3.0, 0.0],
            vec![0.0, 3.0, -1.0, 0.0],
            vec![0.5, 0.0, 0.0, 2.0],
        ],
        vec![0.5, -1.0, 0.0, 0.0],
    )
    .unwrap()
}

/// Every binary assignment of length n.
fn assignments(n: usize) -> Vec<Vec<f64>> {
    (0u64..(1u64 << n))
        .map(|mask| (0..n).map(|k| ((mask >> k) & 1) as f64).collect())
        .collect()
}

#[test]
fn test_extension_is_feasible_with_equal_objective() {
    let prob = mixed_problem();

    for policy in [DiagonalPolicy::FoldIntoLinear, DiagonalPolicy::AuxVariable] {
        let settings = LinearizeSettings::default().with_diagonal_policy(policy);
        let model = linearize(&prob, &settings).unwrap();

        for x in assignments(prob.num_vars()) {
            let full = model.extend_assignment(&x).unwrap();
            assert!(model.is_feasible(&full, 1e-9), "x = {x:?}, {policy:?}");

            let lin_obj = model.objective_value(&full);
            let quad_obj = prob.eval(&x);
            assert!(
                (lin_obj - quad_obj).abs() < 1e-9,
                "x = {x:?}, {policy:?}: {lin_obj} vs {quad_obj}"
            );
        }
    }
}

#[test]
fn test_round_trip_optimum_minimize() {
    let prob = mixed_problem();

    // Reference optimum by direct enumeration of the quadratic objective
    let best_direct = assignments(prob.num_vars())
        .iter()
        .map(|x| prob.eval(x))
        .fold(f64::INFINITY, f64::min);

    for policy in [DiagonalPolicy::FoldIntoLinear, DiagonalPolicy::AuxVariable] {
        let settings = LinearizeSettings::default().with_diagonal_policy(policy);
        let model = linearize(&prob, &settings).unwrap();

        let sol = ExhaustiveSolver::new().solve(&model).unwrap();
        assert_eq!(sol.status, SolveStatus::Optimal);
        assert!(
            (sol.obj_val - best_direct).abs() < 1e-9,
            "{policy:?}: {} vs {}",
            sol.obj_val,
            best_direct
        );

        // The projected assignment achieves the optimum in the original
        // quadratic objective as well
        let x = model.extract_original(&sol.x).unwrap();
        assert!((prob.eval(&x) - best_direct).abs() < 1e-9);
    }
}

#[test]
fn test_round_trip_optimum_maximize() {
    let prob = mixed_problem().with_sense(Sense::Maximize);

    let best_direct = assignments(prob.num_vars())
        .iter()
        .map(|x| prob.eval(x))
        .fold(f64::NEG_INFINITY, f64::max);

    let model = linearize(&prob, &LinearizeSettings::default()).unwrap();
    let sol = ExhaustiveSolver::new().solve(&model).unwrap();

    assert_eq!(sol.status, SolveStatus::Optimal);
    assert!((sol.obj_val - best_direct).abs() < 1e-9);
}

#[test]
fn test_aux_variables_equal_products_at_optimum() {
    // The solver is free to pick any feasible assignment; the linking
    // constraints must have pinned every auxiliary to its product value.
    let prob = mixed_problem();
    let model = linearize(&prob, &LinearizeSettings::default()).unwrap();

    let sol = ExhaustiveSolver::new().solve(&model).unwrap();
    let x = model.extract_original(&sol.x).unwrap();
    let relifted = model.extend_assignment(&x).unwrap();
    assert_eq!(sol.x, relifted);
}

#[test]
fn test_quadratic_blowup_counts() {
    // A dense 5-variable Q has 10 unordered off-diagonal pairs: 10 aux
    // variables and 30 linking constraints under the folding policy.
    let n = 5;
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 1.0 }).collect())
        .collect();
    let prob = QuadraticProblem::from_dense(&rows, vec![0.0; n]).unwrap();

    let model = linearize(&prob, &LinearizeSettings::default()).unwrap();
    assert_eq!(model.num_aux_vars(), n * (n - 1) / 2);
    assert_eq!(model.num_constraints(), 3 * n * (n - 1) / 2);
}
