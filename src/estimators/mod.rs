
pub mod error;
pub mod hyperparams;
pub mod lasso;
pub mod param_guard;

pub use error::{EstimatorError, Result};
pub use hyperparams::{LassoParams, LassoValidParams};
pub use lasso::{FittedLasso, Lasso};
pub use param_guard::ParamGuard;
