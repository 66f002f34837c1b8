//! `prob-plot` library crate.
//!
//! The binary (`pplot`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future GUI/notebook front-ends)
//! - code stays easy to navigate as the project grows
//!
//! The core pipeline: plotting-position quantiles -> family transform ->
//! least-squares line fit -> parameter extraction.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod quantiles;
pub mod registry;
pub mod report;
