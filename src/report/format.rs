//! Summary blocks, plot-data dumps, and the JSON report.

use serde::Serialize;

use crate::domain::{PlotData, SampleSet};
use crate::error::{Error, Result};
use crate::fit::{Candidate, CandidateSet};
use crate::quantiles::QuantileMethod;
use crate::registry::Registry;

/// Format the labeled run summary: one row per candidate plus the
/// derived-distribution construction strings.
pub fn format_summary(
    set: &CandidateSet,
    samples: &SampleSet,
    method: QuantileMethod,
    source: &str,
) -> String {
    let mut out = String::new();

    out.push_str("=== pplot - Probability Plot Fit ===\n");
    out.push_str(&format!("Source: {source}\n"));
    out.push_str(&format!(
        "Samples: n={} | range=[{:.6}, {:.6}]\n",
        samples.len(),
        samples.min(),
        samples.max()
    ));
    out.push_str(&format!("Quantile method: {}\n\n", method.key()));

    out.push_str(&format!(
        "{:<24} {:>12} {:>12} {:>12} {:>8}\n",
        "Distribution", "Shape", "Scale", "Location", "R^2"
    ));
    out.push_str(&format!(
        "{:-<24} {:-<12} {:-<12} {:-<12} {:-<8}\n",
        "", "", "", "", ""
    ));

    for candidate in set.iter() {
        let (shape, scale, loc, r2) = match candidate.result() {
            Some(result) => (
                fmt_param(result.params.shape),
                fmt_param(result.params.scale),
                fmt_param(result.params.loc),
                format!("{:.4}", result.r2),
            ),
            None => (
                "NA".to_string(),
                "NA".to_string(),
                "NA".to_string(),
                "NA".to_string(),
            ),
        };
        out.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>12} {:>8}\n",
            candidate.family().label(),
            shape,
            scale,
            loc,
            r2
        ));
    }

    out.push_str("\nEquivalent constructions:\n");
    for candidate in set.iter() {
        if let Ok(construction) = candidate.construction() {
            out.push_str(&format!(
                "- {}: {}\n",
                candidate.family().label(),
                construction
            ));
        }
    }

    out
}

/// Dump one candidate's plot data (scatter, fitted line, labels) as text for
/// an external renderer.
pub fn format_plot_data(candidate: &Candidate) -> Result<String> {
    let plot = candidate.plot_data()?;
    let mut out = String::new();

    out.push_str(&format!("--- {} plot data ---\n", plot.title));
    out.push_str(&format!("x-label: t = {}\n", plot.x_label));
    out.push_str(&format!("y-label: f(t) = {}\n", plot.y_label));
    out.push_str(&format!("{}\n", plot.equation));
    let ((x0, y0), (x1, y1)) = plot.line;
    out.push_str(&format!(
        "line: ({x0:.6}, {y0:.6}) -> ({x1:.6}, {y1:.6})\n"
    ));
    out.push_str(&format!("x: {}\n", fmt_vec(&plot.x)));
    out.push_str(&format!("y: {}\n", fmt_vec(&plot.y)));

    Ok(out)
}

/// List registered distributions and quantile methods for user choice.
pub fn format_listing(registry: &Registry) -> String {
    let mut out = String::new();
    out.push_str("Distributions:\n");
    for name in registry.distribution_names() {
        out.push_str(&format!("  {name}\n"));
    }
    out.push_str("\nQuantile methods:\n");
    for name in registry.method_names() {
        out.push_str(&format!("  {name}\n"));
    }
    out
}

#[derive(Debug, Serialize)]
struct JsonCandidate {
    distribution: &'static str,
    construction: String,
    slope: f64,
    intercept: f64,
    r2: f64,
    shape: Option<f64>,
    scale: Option<f64>,
    loc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plot: Option<PlotData>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    n: usize,
    quantile_method: &'static str,
    candidates: Vec<JsonCandidate>,
}

/// Machine-readable run report. Plot arrays are included only on request.
pub fn format_json(
    set: &CandidateSet,
    samples: &SampleSet,
    method: QuantileMethod,
    source: &str,
    include_plot_data: bool,
) -> Result<String> {
    let mut candidates = Vec::with_capacity(set.count());
    for candidate in set.iter() {
        let result = candidate.result().ok_or_else(|| {
            Error::Precondition("JSON report requested before evaluate".to_string())
        })?;
        candidates.push(JsonCandidate {
            distribution: candidate.family().label(),
            construction: candidate.construction()?,
            slope: result.slope,
            intercept: result.intercept,
            r2: result.r2,
            shape: result.params.shape,
            scale: result.params.scale,
            loc: result.params.loc,
            plot: if include_plot_data {
                Some(candidate.plot_data()?)
            } else {
                None
            },
        });
    }

    let report = JsonReport {
        source,
        n: samples.len(),
        quantile_method: method.key(),
        candidates,
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| Error::InvalidInput(format!("JSON encoding error: {e}")))
}

fn fmt_param(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.4}"),
        None => "NA".to_string(),
    }
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", parts.join(", "))
}
