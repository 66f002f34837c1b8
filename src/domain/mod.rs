//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the validated, sorted sample container (`SampleSet`)
//! - derived distribution parameters (`DerivedParams`)
//! - fit outputs (`FitResult`, `PlotData`)
//! - run configuration (`FitConfig`)

pub mod types;

pub use types::*;
