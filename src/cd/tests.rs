use ndarray::{array, Array1};

use super::{coordinate_descent, Selection, Termination};
use crate::datafits::Quadratic;
use crate::helpers::test_helpers::{assert_array_all_close, generate_random_data};
use crate::penalties::L1;

#[test]
fn test_orthogonal_design_solved_in_one_pass() {
    // With orthogonal columns the per-coordinate updates are independent and
    // the exact solution is the soft-thresholded per-feature correlation.
    let X = array![[1., 0.], [0., 1.]];
    let y = array![1., 2.];
    let mut datafit = Quadratic::default();
    let penalty = L1::new(0.25);

    let solution = coordinate_descent(
        X.view(),
        y.view(),
        &mut datafit,
        &penalty,
        None,
        Selection::Cyclic,
        100,
        1e-9,
        false,
    );

    assert_eq!(solution.termination, Termination::Converged);
    assert!(solution.n_passes <= 2);
    // threshold = alpha * n / ||Xj||^2 = 0.5
    assert_array_all_close(solution.w.view(), array![0.5, 1.5].view(), 1e-12);
}

#[test]
fn test_cyclic_order_is_deterministic() {
    let (X, y) = generate_random_data(20, 5);
    let penalty = L1::new(0.1);

    let mut datafit = Quadratic::default();
    let first = coordinate_descent(
        X.view(),
        y.view(),
        &mut datafit,
        &penalty,
        None,
        Selection::Cyclic,
        1000,
        1e-10,
        false,
    );
    let mut datafit = Quadratic::default();
    let second = coordinate_descent(
        X.view(),
        y.view(),
        &mut datafit,
        &penalty,
        None,
        Selection::Cyclic,
        1000,
        1e-10,
        false,
    );

    assert_eq!(first.w, second.w);
    assert_eq!(first.n_passes, second.n_passes);
}

#[test]
fn test_random_order_is_reproducible_for_a_fixed_seed() {
    let (X, y) = generate_random_data(20, 5);
    let penalty = L1::new(0.1);

    let mut datafit = Quadratic::default();
    let first = coordinate_descent(
        X.view(),
        y.view(),
        &mut datafit,
        &penalty,
        None,
        Selection::Random { seed: 7 },
        1000,
        1e-10,
        false,
    );
    let mut datafit = Quadratic::default();
    let second = coordinate_descent(
        X.view(),
        y.view(),
        &mut datafit,
        &penalty,
        None,
        Selection::Random { seed: 7 },
        1000,
        1e-10,
        false,
    );

    assert_eq!(first.w, second.w);
}

#[test]
fn test_random_order_reaches_the_cyclic_optimum() {
    // The objective is convex, both visit orders must agree at the optimum.
    let (X, y) = generate_random_data(40, 5);
    let penalty = L1::new(0.2);

    let mut datafit = Quadratic::default();
    let cyclic = coordinate_descent(
        X.view(),
        y.view(),
        &mut datafit,
        &penalty,
        None,
        Selection::Cyclic,
        10_000,
        1e-12,
        false,
    );
    let mut datafit = Quadratic::default();
    let random = coordinate_descent(
        X.view(),
        y.view(),
        &mut datafit,
        &penalty,
        None,
        Selection::Random { seed: 1 },
        10_000,
        1e-12,
        false,
    );

    assert_array_all_close(cyclic.w.view(), random.w.view(), 1e-6);
}

#[test]
fn test_warm_start_at_the_solution_converges_immediately() {
    let (X, y) = generate_random_data(30, 4);
    let penalty = L1::new(0.1);

    let mut datafit = Quadratic::default();
    let cold = coordinate_descent(
        X.view(),
        y.view(),
        &mut datafit,
        &penalty,
        None,
        Selection::Cyclic,
        10_000,
        1e-12,
        false,
    );
    assert_eq!(cold.termination, Termination::Converged);

    let mut datafit = Quadratic::default();
    let warm = coordinate_descent(
        X.view(),
        y.view(),
        &mut datafit,
        &penalty,
        Some(cold.w.clone()),
        Selection::Cyclic,
        10_000,
        1e-9,
        false,
    );
    assert_eq!(warm.termination, Termination::Converged);
    assert_eq!(warm.n_passes, 1);
    assert_array_all_close(warm.w.view(), cold.w.view(), 1e-9);
}

#[test]
fn test_pass_budget_exhaustion_is_reported() {
    let (X, y) = generate_random_data(30, 10);
    let mut datafit = Quadratic::default();
    let penalty = L1::new(0.01);

    let solution = coordinate_descent(
        X.view(),
        y.view(),
        &mut datafit,
        &penalty,
        None,
        Selection::Cyclic,
        1,
        1e-12,
        false,
    );

    assert_eq!(solution.termination, Termination::MaxIterationsReached);
    assert_eq!(solution.n_passes, 1);
    // The first pass already moved weights away from zero
    assert!(solution.w.iter().any(|&wj| wj != 0.));
}

#[test]
fn test_zero_variance_feature_is_pinned_to_zero() {
    // First column is identically null, as a centered constant feature is.
    let X = array![[0., 1.], [0., 2.], [0., -1.]];
    let y = array![1., 2., -1.];
    let mut datafit = Quadratic::default();
    let penalty = L1::new(0.05);

    let w0 = Array1::from_vec(vec![5., 0.]);
    let solution = coordinate_descent(
        X.view(),
        y.view(),
        &mut datafit,
        &penalty,
        Some(w0),
        Selection::Cyclic,
        100,
        1e-9,
        false,
    );

    assert_eq!(solution.termination, Termination::Converged);
    assert_eq!(solution.w[0], 0.);
    assert!(solution.w[1] != 0.);
}
