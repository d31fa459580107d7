use ndarray::{array, Array1};

use super::{Datafit, Quadratic};
use crate::helpers::test_helpers::assert_array_all_close;

#[test]
fn test_initialization() {
    let X = array![[1., 2.], [3., 4.]];
    let y = array![1., 2.];

    let mut datafit = Quadratic::default();
    datafit.initialize(X.view(), y.view());

    // Xty = [1*1 + 3*2, 2*1 + 4*2], lipschitz = [||Xj||^2 / n]
    let lipschitz = datafit.step_size();
    assert_array_all_close(lipschitz, array![5., 10.].view(), 1e-12);
}

#[test]
fn test_value_at_null_fit() {
    let y = array![1., 2.];
    let Xw = Array1::<f64>::zeros(2);

    let datafit = Quadratic::default();
    // ||y||^2 / (2 n) = (1 + 4) / 4
    assert_eq!(datafit.value(y.view(), Xw.view()), 1.25);
}

#[test]
fn test_gradient_at_null_fit() {
    let X = array![[1., 2.], [3., 4.]];
    let y = array![1., 2.];
    let Xw = Array1::<f64>::zeros(2);

    let mut datafit = Quadratic::default();
    datafit.initialize(X.view(), y.view());

    // grad_j = -Xty_j / n at Xw = 0
    assert_eq!(datafit.gradient_j(X.view(), Xw.view(), 0), -3.5);
    assert_eq!(datafit.gradient_j(X.view(), Xw.view(), 1), -5.);

    let grad = datafit.full_grad(X.view(), Xw.view());
    assert_array_all_close(grad.view(), array![-3.5, -5.].view(), 1e-12);
}

#[test]
fn test_gradient_vanishes_at_interpolating_fit() {
    let X = array![[1., 0.], [0., 1.], [1., 1.]];
    let w = array![2., -1.];
    let y = X.dot(&w);
    let Xw = y.clone();

    let mut datafit = Quadratic::default();
    datafit.initialize(X.view(), y.view());

    let grad = datafit.full_grad(X.view(), Xw.view());
    assert_array_all_close(grad.view(), Array1::zeros(2).view(), 1e-12);
}

#[test]
fn test_zero_variance_feature_has_null_lipschitz() {
    let X = array![[0., 1.], [0., 2.], [0., 3.]];
    let y = array![1., 2., 3.];

    let mut datafit = Quadratic::default();
    datafit.initialize(X.view(), y.view());

    let lipschitz = datafit.step_size();
    assert_eq!(lipschitz[0], 0.);
    assert!(lipschitz[1] > 0.);
}
