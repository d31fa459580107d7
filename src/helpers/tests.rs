use ndarray::{array, Array1};

use super::helpers::{compute_alpha_max, solve_lin_sys};
use super::prox::soft_thresholding;
use super::test_helpers::assert_array_all_close;

#[test]
fn test_soft_thresholding() {
    assert_eq!(soft_thresholding(3., 1.), 2.);
    assert_eq!(soft_thresholding(-3., 1.), -2.);
    assert_eq!(soft_thresholding(0.5, 1.), 0.);
    assert_eq!(soft_thresholding(-0.5, 1.), 0.);
    // Boundary values sit inside the clamping band
    assert_eq!(soft_thresholding(1., 1.), 0.);
    assert_eq!(soft_thresholding(-1., 1.), 0.);
}

#[test]
fn test_compute_alpha_max() {
    let X = array![[1., 0.], [0., 2.]];
    let y = array![2., 2.];
    // Xty = [2, 4], n = 2
    assert_eq!(compute_alpha_max(X.view(), y.view()), 2.);
}

#[test]
fn test_solve_lin_sys_diagonal() {
    let A = array![[2., 0.], [0., 4.]];
    let b = array![2., 8.];
    let x = solve_lin_sys(A.view(), b.view()).unwrap();
    assert_array_all_close(x.view(), array![1., 2.].view(), 1e-12);
}

#[test]
fn test_solve_lin_sys_dense() {
    let A = array![[3., 1.], [1., 2.]];
    let x_true = array![1., -2.];
    let b = A.dot(&x_true);
    let x = solve_lin_sys(A.view(), b.view()).unwrap();
    assert_array_all_close(x.view(), x_true.view(), 1e-10);
}

#[test]
fn test_solve_lin_sys_singular() {
    let A = array![[1., 1.], [1., 1.]];
    let b = array![1., 2.];
    assert!(solve_lin_sys(A.view(), b.view()).is_err());
}

#[test]
fn test_solve_lin_sys_matches_manual_inverse() {
    let A = array![[4., 2., 1.], [2., 5., 3.], [1., 3., 6.]];
    let x_true = Array1::from_vec(vec![0.5, -1., 2.]);
    let b = A.dot(&x_true);
    let x = solve_lin_sys(A.view(), b.view()).unwrap();
    assert_array_all_close(x.view(), x_true.view(), 1e-10);
}
