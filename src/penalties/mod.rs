use ndarray::ArrayView1;

use super::Float;
use crate::helpers::prox::soft_thresholding;


/// This trait provides the two methods needed to update the weights during
/// the optimization routine.
pub trait Penalty<F: Float> {
    /// This method is called when evaluating the objective value.
    ///
    /// It is jointly used with [`Datafit::value`](crate::datafits::Datafit::value)
    /// in order to compute the value of the objective.
    fn value(&self, w: ArrayView1<F>) -> F;

    /// This method computes the proximal gradient step during the update of
    /// the weights. For a given penalty, it implements its proximal operator.
    fn prox(&self, value: F, step_size: F) -> F;
}

/// The L1 penalty
///
/// The penalty at the heart of the Lasso model. Unlike squared-norm
/// shrinkage, its proximal operator can set weights to exactly zero, which is
/// what makes the fitted models sparse.
#[derive(Debug, Clone, PartialEq)]
pub struct L1<F: Float> {
    alpha: F,
}

impl<F: Float> L1<F> {
    /// Instantiates a L1 penalty with a non-negative regularization
    /// hyperparameter.
    pub fn new(alpha: F) -> Self {
        L1 { alpha }
    }
}

impl<F: Float> Penalty<F> for L1<F> {
    /// Computes the scaled L1-norm of the weights
    fn value(&self, w: ArrayView1<F>) -> F {
        self.alpha * w.iter().map(|&wj| wj.abs()).sum()
    }

    /// Applies the soft-thresholding operator to a weight scalar
    fn prox(&self, value: F, step_size: F) -> F {
        soft_thresholding(value, self.alpha * step_size)
    }
}
