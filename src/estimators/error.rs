use thiserror::Error;

/// Simplified `Result` using [`EstimatorError`] as error type
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Error variants from hyperparameter construction or model estimation.
///
/// Reaching the pass budget before the tolerance is deliberately not an
/// error: it is reported through
/// [`Termination::MaxIterationsReached`](crate::cd::Termination) on the fit
/// result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    #[error("invalid alpha {0}, the regularization strength must be non-negative")]
    InvalidRegularization(f32),
    #[error("invalid tolerance {0}, the convergence threshold must be positive")]
    InvalidTolerance(f32),
    #[error("invalid max_iterations, at least one pass is required")]
    InvalidMaxIterations,
    #[error("the design matrix has no samples")]
    EmptyDesignMatrix,
    #[error("the design matrix has {x_samples} rows but the target has {y_samples} entries")]
    SampleMismatch { x_samples: usize, y_samples: usize },
    #[error("the model must be fitted before calling predict or score")]
    NotFitted,
    #[error("the design matrix has {actual} features but the model was fitted with {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("r2 is undefined for a zero-variance target")]
    UndefinedScore,
}
