//! Input helpers.
//!
//! - delimited-text sample ingest (`ingest`)

pub mod ingest;

pub use ingest::*;
