//! Fit orchestration.
//!
//! Responsibilities:
//!
//! - drive the per-candidate pipeline:
//!   feed samples -> quantiles -> transform -> line fit -> extract parameters
//! - keep the insertion-ordered set of candidate distributions

pub mod candidates;

pub use candidates::*;
