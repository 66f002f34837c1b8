//! Command-line parsing for the probability plotting tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "pplot",
    version,
    about = "Estimate distribution parameters from samples via probability plotting"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit candidate distributions to a sample file and print a summary.
    Fit(FitArgs),
    /// List the supported distributions and quantile methods.
    List,
}

/// Options for a headless fit run.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// CSV file of numeric samples; every numeric field is flattened into one
    /// 1-D sequence.
    #[arg(short = 's', long, value_name = "CSV")]
    pub samples: PathBuf,

    /// Candidate distribution name (repeatable). See `pplot list`.
    #[arg(short = 'd', long = "dist", value_name = "NAME", required = true)]
    pub distributions: Vec<String>,

    /// Quantile estimation method.
    #[arg(short = 'q', long, default_value = "Filliben", value_name = "NAME")]
    pub qmethod: String,

    /// Fixed location parameter, honored by families that accept one
    /// (Lognormal, Exponential, Weibull, Rayleigh).
    #[arg(long, value_name = "VALUE")]
    pub loc: Option<f64>,

    /// Print the transformed (x, y) arrays and fitted-line endpoints for an
    /// external renderer.
    #[arg(long)]
    pub plot_data: bool,

    /// Emit the report as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}
