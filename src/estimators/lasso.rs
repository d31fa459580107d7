use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

use super::error::{EstimatorError, Result};
use super::hyperparams::LassoValidParams;
use crate::cd::{coordinate_descent, Termination};
use crate::datafits::Quadratic;
use crate::penalties::L1;
use crate::Float;

/// Lasso
///
/// The Lasso estimator solves a regularized least-square regression problem.
/// The L1-regularization used yields sparse solutions.
///
/// The model is constructed unfitted through
/// [`LassoParams::build`](super::hyperparams::LassoParams::build), populated
/// by [`Lasso::fit`] and queried read-only by [`Lasso::predict`] and
/// [`Lasso::score`]. Refitting discards the previous state entirely.
#[derive(Debug, Clone)]
pub struct Lasso<F: Float> {
    params: LassoValidParams<F>,
    fitted: Option<FittedLasso<F>>,
}

/// Coefficients and diagnostics produced by a completed fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedLasso<F: Float> {
    coefficients: Array1<F>,
    intercept: F,
    termination: Termination,
    n_passes: usize,
}

impl<F: Float> FittedLasso<F> {
    pub fn coefficients(&self) -> ArrayView1<F> {
        self.coefficients.view()
    }

    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// How the descent stopped. Reaching the pass budget is a diagnostic,
    /// not a failure: the coefficients are the best available iterate.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn n_passes(&self) -> usize {
        self.n_passes
    }
}

impl<F: Float> Lasso<F> {
    /// Creates a set of default Lasso hyperparameters to configure and build
    /// a model from.
    pub fn params() -> super::hyperparams::LassoParams<F> {
        super::hyperparams::LassoParams::new()
    }

    pub(crate) fn from_checked_params(params: LassoValidParams<F>) -> Self {
        Lasso {
            params,
            fitted: None,
        }
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// The fit result, if a fit has completed.
    pub fn fitted(&self) -> Option<&FittedLasso<F>> {
        self.fitted.as_ref()
    }

    pub fn coefficients(&self) -> Result<ArrayView1<F>> {
        self.fitted
            .as_ref()
            .map(|fitted| fitted.coefficients.view())
            .ok_or(EstimatorError::NotFitted)
    }

    pub fn intercept(&self) -> Result<F> {
        self.fitted
            .as_ref()
            .map(|fitted| fitted.intercept)
            .ok_or(EstimatorError::NotFitted)
    }

    /// Fits the Lasso estimator to a dense design matrix.
    ///
    /// When `fit_intercept` is set, the data is centered internally and the
    /// intercept is recovered as `mean(y) - mean(X) . w`; otherwise the
    /// intercept is fixed at zero and the caller is trusted to have centered
    /// the input. The previous fitted state, if any, is discarded before the
    /// descent runs (or recycled as a starting point under `warm_start`).
    pub fn fit(&mut self, X: ArrayView2<F>, y: ArrayView1<F>) -> Result<&FittedLasso<F>> {
        if X.nrows() != y.len() {
            return Err(EstimatorError::SampleMismatch {
                x_samples: X.nrows(),
                y_samples: y.len(),
            });
        }
        if X.nrows() == 0 {
            return Err(EstimatorError::EmptyDesignMatrix);
        }

        let w0 = match self.fitted.take() {
            Some(previous) if self.params.warm_start() => {
                (previous.coefficients.len() == X.ncols()).then(|| previous.coefficients)
            }
            _ => None,
        };

        let mut datafit = Quadratic::default();
        let penalty = L1::new(self.params.alpha());

        let (solution, intercept) = if self.params.fit_intercept() {
            let x_offset = X
                .mean_axis(Axis(0))
                .ok_or(EstimatorError::EmptyDesignMatrix)?;
            let y_offset = y.sum() / F::cast(y.len());
            let x_centered = &X - &x_offset;
            let y_centered = y.mapv(|yi| yi - y_offset);

            let solution = coordinate_descent(
                x_centered.view(),
                y_centered.view(),
                &mut datafit,
                &penalty,
                w0,
                self.params.selection(),
                self.params.max_iterations(),
                self.params.tolerance(),
                self.params.verbose(),
            );
            let intercept = y_offset - x_offset.dot(&solution.w);
            (solution, intercept)
        } else {
            let solution = coordinate_descent(
                X,
                y,
                &mut datafit,
                &penalty,
                w0,
                self.params.selection(),
                self.params.max_iterations(),
                self.params.tolerance(),
                self.params.verbose(),
            );
            (solution, F::zero())
        };

        if self.params.verbose() && !solution.termination.is_converged() {
            println!(
                "descent stopped after {} passes without reaching the tolerance",
                solution.n_passes
            );
        }

        let fitted = FittedLasso {
            coefficients: solution.w,
            intercept,
            termination: solution.termination,
            n_passes: solution.n_passes,
        };
        Ok(&*self.fitted.insert(fitted))
    }

    /// Computes `intercept + X . w` row-wise for a fitted model.
    pub fn predict(&self, X: ArrayView2<F>) -> Result<Array1<F>> {
        let fitted = self.fitted.as_ref().ok_or(EstimatorError::NotFitted)?;
        if X.ncols() != fitted.coefficients.len() {
            return Err(EstimatorError::DimensionMismatch {
                expected: fitted.coefficients.len(),
                actual: X.ncols(),
            });
        }
        Ok(X.dot(&fitted.coefficients) + fitted.intercept)
    }

    /// Computes the coefficient of determination
    /// `R^2 = 1 - ||y - y_hat||^2 / ||y - mean(y)||^2` of the predictions on
    /// `X` against `y`.
    ///
    /// A zero-variance target makes the ratio undefined; this is reported as
    /// [`EstimatorError::UndefinedScore`] instead of letting a NaN escape.
    pub fn score(&self, X: ArrayView2<F>, y: ArrayView1<F>) -> Result<F> {
        if X.nrows() != y.len() {
            return Err(EstimatorError::SampleMismatch {
                x_samples: X.nrows(),
                y_samples: y.len(),
            });
        }
        let predictions = self.predict(X)?;

        if y.is_empty() {
            return Err(EstimatorError::UndefinedScore);
        }
        let y_mean = y.sum() / F::cast(y.len());
        let tss = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum::<F>();
        if tss == F::zero() {
            return Err(EstimatorError::UndefinedScore);
        }
        let rss = y
            .iter()
            .zip(predictions.iter())
            .map(|(&yi, &yi_hat)| (yi - yi_hat).powi(2))
            .sum::<F>();
        Ok(F::one() - rss / tss)
    }
}
