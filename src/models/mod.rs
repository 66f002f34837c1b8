//! Distribution families for probability plotting.
//!
//! Families are implemented as a closed enum of pure operations so the
//! fitting code stays generic and every variant is handled exhaustively.

pub mod family;

pub use family::*;
