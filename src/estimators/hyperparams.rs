use super::error::{EstimatorError, Result};
use super::lasso::Lasso;
use super::param_guard::ParamGuard;
use crate::cd::Selection;
use crate::Float;

/// A verified hyperparameter set ready for the fitting of a Lasso regression
/// model
#[derive(Debug, Clone, PartialEq)]
pub struct LassoValidParams<F> {
    alpha: F,
    tolerance: F,
    max_iterations: usize,
    fit_intercept: bool,
    selection: Selection,
    warm_start: bool,
    verbose: bool,
}

impl<F: Float> LassoValidParams<F> {
    pub fn alpha(&self) -> F {
        self.alpha
    }

    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn warm_start(&self) -> bool {
        self.warm_start
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// A hyper-parameter set during construction
///
/// Configures and minimizes the following objective function:
/// ```ignore
/// 1 / (2 * n_samples) * ||y - Xw||^2_2
///     + alpha * ||w||_1
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LassoParams<F>(LassoValidParams<F>);

impl<F: Float> Default for LassoParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure a Lasso model
impl<F: Float> LassoParams<F> {
    /// Create default Lasso hyper parameters
    pub fn new() -> LassoParams<F> {
        Self(LassoValidParams {
            alpha: F::one(),
            tolerance: F::cast(1e-4),
            max_iterations: 1000,
            fit_intercept: true,
            selection: Selection::Cyclic,
            warm_start: false,
            verbose: false,
        })
    }

    /// Set the regularization hyperparameter. A higher value yields sparser
    /// solutions; zero reduces the model to ordinary least squares.
    /// Defaults to `1` if not set.
    pub fn alpha(mut self, alpha: F) -> Self {
        self.0.alpha = alpha;
        self
    }

    /// Set the stopping criterion: the descent stops once the maximum
    /// absolute weight change over a full pass falls below this threshold.
    /// Defaults to `1e-4` if not set.
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Set the maximum number of full coordinate passes, which bounds the
    /// worst-case runtime on non-convergent inputs.
    /// Defaults to `1000` if not set.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.0.max_iterations = max_iterations;
        self
    }

    /// Whether the intercept is estimated by centering the data internally,
    /// or fixed at zero (in which case the input is trusted to be centered).
    /// Defaults to `true` if not set.
    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.0.fit_intercept = fit_intercept;
        self
    }

    /// Set the coordinate visit order, cyclic or seeded-random.
    /// Defaults to [`Selection::Cyclic`] if not set.
    pub fn selection(mut self, selection: Selection) -> Self {
        self.0.selection = selection;
        self
    }

    /// Reuse the coefficients of the previous fit as the starting point of
    /// the next one, when the feature count matches.
    /// Defaults to `false` if not set.
    pub fn warm_start(mut self, warm_start: bool) -> Self {
        self.0.warm_start = warm_start;
        self
    }

    /// Sets the verbosity level of the solver.
    /// Defaults to `false` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }

    /// Validate the hyperparameters and construct an unfitted [`Lasso`]
    /// model.
    pub fn build(self) -> Result<Lasso<F>> {
        Ok(Lasso::from_checked_params(self.check()?))
    }
}

impl<F: Float> ParamGuard for LassoParams<F> {
    type Checked = LassoValidParams<F>;
    type Error = EstimatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.alpha < F::zero() {
            Err(EstimatorError::InvalidRegularization(
                self.0.alpha.to_f32().unwrap_or(f32::NAN),
            ))
        } else if self.0.tolerance <= F::zero() {
            Err(EstimatorError::InvalidTolerance(
                self.0.tolerance.to_f32().unwrap_or(f32::NAN),
            ))
        } else if self.0.max_iterations == 0 {
            Err(EstimatorError::InvalidMaxIterations)
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
