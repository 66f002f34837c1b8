//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads samples and runs the fit pipeline
//! - prints reports

use clap::Parser;

use crate::cli::{Cli, Command, FitArgs};
use crate::domain::FitConfig;
use crate::error::Result;
use crate::registry::Registry;

pub mod pipeline;

/// Entry point for the `pplot` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::List => handle_list(),
    }
}

fn handle_fit(args: FitArgs) -> Result<()> {
    let registry = Registry::with_builtins();
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&registry, &config)?;

    let source = config.samples_path.display().to_string();
    if args.json {
        println!(
            "{}",
            crate::report::format_json(
                &run.candidates,
                &run.samples,
                run.method,
                &source,
                args.plot_data,
            )?
        );
        return Ok(());
    }

    println!(
        "{}",
        crate::report::format_summary(&run.candidates, &run.samples, run.method, &source)
    );

    if args.plot_data {
        for candidate in run.candidates.iter() {
            println!("{}", crate::report::format_plot_data(candidate)?);
        }
    }

    Ok(())
}

fn handle_list() -> Result<()> {
    let registry = Registry::with_builtins();
    print!("{}", crate::report::format_listing(&registry));
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        samples_path: args.samples.clone(),
        distributions: args.distributions.clone(),
        qmethod: args.qmethod.clone(),
        loc: args.loc,
    }
}
