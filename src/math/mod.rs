//! Mathematical utilities: least squares and the inverse error function.

pub mod ols;

pub use ols::*;

/// Inverse error function, used by the Normal and Lognormal transforms.
pub use statrs::function::erf::erf_inv;
