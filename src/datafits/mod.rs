use ndarray::{s, Array1, ArrayView1, ArrayView2, Axis};

use super::Float;

#[cfg(test)]
mod tests;

/// This trait provides the methods needed by the descent routine to compute
/// useful quantities during the optimization.
pub trait Datafit<F: Float> {
    /// This method is called once before looping over the features, to
    /// precompute quantities reused at every coordinate update.
    fn initialize(&mut self, X: ArrayView2<F>, y: ArrayView1<F>);

    /// This method is called when evaluating the objective value.
    ///
    /// It is jointly used with [`Penalty::value`](crate::penalties::Penalty::value)
    /// in order to compute the value of the objective.
    fn value(&self, y: ArrayView1<F>, Xw: ArrayView1<F>) -> F;

    /// This method computes the gradient of the datafit with respect to the
    /// weight of feature `j`, given the current model fit `Xw`.
    fn gradient_j(&self, X: ArrayView2<F>, Xw: ArrayView1<F>, j: usize) -> F;

    /// This method computes the full gradient by calling
    /// [`Datafit::gradient_j`] on every feature.
    fn full_grad(&self, X: ArrayView2<F>, Xw: ArrayView1<F>) -> Array1<F>;

    /// This method returns the per-feature Lipschitz constants whose inverses
    /// are the optimal coordinate step sizes. A null constant flags a
    /// zero-variance feature that must be skipped.
    fn step_size(&self) -> ArrayView1<F>;
}

/// Quadratic datafit
///
/// The squared-norm residuals datafit `||y - Xw||^2 / (2 n)` used in
/// regression settings. It stores the pre-computed quantities useful during
/// the optimization routine.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadratic<F: Float> {
    lipschitz: Array1<F>,
    Xty: Array1<F>,
}

impl<F: Float> Default for Quadratic<F> {
    fn default() -> Self {
        Quadratic {
            lipschitz: Array1::<F>::zeros(0),
            Xty: Array1::<F>::zeros(0),
        }
    }
}

impl<F: Float> Datafit<F> for Quadratic<F> {
    /// This method pre-computes the Lipschitz constants and the matrix-vector
    /// product XTy used at every coordinate update.
    fn initialize(&mut self, X: ArrayView2<F>, y: ArrayView1<F>) {
        let n_samples = F::cast(X.shape()[0]);
        self.Xty = X.t().dot(&y);
        self.lipschitz = X.map_axis(Axis(0), |Xj| Xj.dot(&Xj) / n_samples);
    }

    /// This method computes the value of the datafit given the model fit.
    fn value(&self, y: ArrayView1<F>, Xw: ArrayView1<F>) -> F {
        let n_samples = y.len();
        let r = &y - &Xw;
        r.dot(&r) / F::cast(2 * n_samples)
    }

    /// This method computes the value of the gradient for coordinate j.
    fn gradient_j(&self, X: ArrayView2<F>, Xw: ArrayView1<F>, j: usize) -> F {
        let n_samples = F::cast(X.shape()[0]);
        (X.slice(s![.., j]).dot(&Xw) - self.Xty[j]) / n_samples
    }

    /// This method computes the full gradient of the datafit with respect to
    /// the weight vector.
    fn full_grad(&self, X: ArrayView2<F>, Xw: ArrayView1<F>) -> Array1<F> {
        Array1::from_iter((0..X.shape()[1]).map(|j| self.gradient_j(X, Xw, j)))
    }

    /// The quadratic datafit is Lipschitz-continuous, hence the optimal step
    /// sizes are the inverses of the Lipschitz constants.
    fn step_size(&self) -> ArrayView1<F> {
        self.lipschitz.view()
    }
}
