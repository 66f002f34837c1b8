//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can
//! be used in-memory during fitting and emitted as JSON for scripting.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Error, Result};

/// An immutable set of observed samples, sorted ascending.
///
/// The set is created once per load event and shared read-only across every
/// candidate fitted against it. At least two samples are required: the
/// regression needs two points and most plotting-position formulas divide
/// by the sample count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSet {
    values: Vec<f64>,
}

impl SampleSet {
    pub fn new(mut values: Vec<f64>) -> Result<Self> {
        if values.len() < 2 {
            return Err(Error::InvalidInput(format!(
                "need at least 2 samples, got {}",
                values.len()
            )));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "non-finite sample value: {bad}"
            )));
        }
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Samples in ascending order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn min(&self) -> f64 {
        self.values[0]
    }

    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }
}

/// Natural parameters recovered from a fit.
///
/// `None` means the family does not report that parameter; front-ends render
/// it as "NA".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedParams {
    pub shape: Option<f64>,
    pub scale: Option<f64>,
    pub loc: Option<f64>,
}

/// Output of one probability-plot fit.
///
/// A `FitResult` is immutable and recomputed wholesale whenever samples,
/// quantile method, family, or location change; it is never patched in place.
#[derive(Debug, Clone, Serialize)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
    pub r2: f64,
    /// Transformed x coordinates (one per sample, in rank order).
    pub x: Vec<f64>,
    /// Transformed y coordinates (one per sample, in rank order).
    pub y: Vec<f64>,
    pub params: DerivedParams,
}

impl FitResult {
    /// Endpoints of the fitted line across the observed x-range, for renderers.
    pub fn line_endpoints(&self) -> ((f64, f64), (f64, f64)) {
        let mut xmin = f64::INFINITY;
        let mut xmax = f64::NEG_INFINITY;
        for &v in &self.x {
            xmin = xmin.min(v);
            xmax = xmax.max(v);
        }
        let line = |t: f64| self.slope * t + self.intercept;
        ((xmin, line(xmin)), (xmax, line(xmax)))
    }

    /// Equation/R² annotation text for a plot.
    pub fn equation(&self) -> String {
        format!(
            "f(t) = {:.4E}*t + {:.4E} | R^2={:.4}",
            self.slope, self.intercept, self.r2
        )
    }
}

/// Everything an external renderer needs to draw one candidate's plot:
/// scatter points, fitted line, annotation, and axis labels.
#[derive(Debug, Clone, Serialize)]
pub struct PlotData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub slope: f64,
    pub intercept: f64,
    pub r2: f64,
    /// `((xmin, f(xmin)), (xmax, f(xmax)))` of the fitted line.
    pub line: ((f64, f64), (f64, f64)),
    pub equation: String,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub samples_path: PathBuf,
    /// Candidate distribution names, fitted in the order given.
    pub distributions: Vec<String>,
    /// Quantile-method registry key.
    pub qmethod: String,
    /// Fixed location, applied to families that accept one.
    pub loc: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_set_sorts_ascending() {
        let s = SampleSet::new(vec![3.0, 1.0, 2.0]).unwrap();
        assert_eq!(s.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(s.min(), 1.0);
        assert_eq!(s.max(), 3.0);
    }

    #[test]
    fn sample_set_rejects_empty_and_singleton() {
        assert!(SampleSet::new(vec![]).is_err());
        assert!(SampleSet::new(vec![1.0]).is_err());
    }

    #[test]
    fn sample_set_rejects_non_finite() {
        let err = SampleSet::new(vec![1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(SampleSet::new(vec![1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn line_endpoints_span_the_x_range() {
        let fit = FitResult {
            slope: 2.0,
            intercept: 1.0,
            r2: 1.0,
            x: vec![0.0, 0.5, 1.0],
            y: vec![1.0, 2.0, 3.0],
            params: DerivedParams::default(),
        };
        let ((x0, y0), (x1, y1)) = fit.line_endpoints();
        assert_eq!((x0, y0), (0.0, 1.0));
        assert_eq!((x1, y1), (1.0, 3.0));
    }
}
