//! The nine supported distribution families.
//!
//! Each family is a pure pair of operations over sorted samples `s`, plotting
//! positions `q` (same length), and a fixed location `loc`:
//!
//! - `transform`: map `(s, q, loc)` to linearizable `(x, y)` pairs
//! - `extract_params`: map the fitted `(slope, intercept)` back to the
//!   family's natural shape/scale/location parameters
//!
//! Capability flags say which derived parameters the family reports and
//! whether the caller may fix the location ahead of the fit.

use std::f64::consts::PI;

use serde::Serialize;

use crate::domain::DerivedParams;
use crate::error::{Error, Result};
use crate::math::erf_inv;

/// A distribution family supported by the plotting pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Family {
    Normal,
    Lognormal,
    Exponential,
    Weibull,
    ExtremeValueTypeI,
    Logistic,
    Uniform,
    Cauchy,
    Rayleigh,
}

impl Family {
    pub const ALL: [Family; 9] = [
        Family::Normal,
        Family::Lognormal,
        Family::Exponential,
        Family::Weibull,
        Family::ExtremeValueTypeI,
        Family::Logistic,
        Family::Uniform,
        Family::Cauchy,
        Family::Rayleigh,
    ];

    /// Registry key and display label.
    pub fn label(self) -> &'static str {
        match self {
            Family::Normal => "Normal",
            Family::Lognormal => "Lognormal",
            Family::Exponential => "Exponential",
            Family::Weibull => "Weibull",
            Family::ExtremeValueTypeI => "Extreme Value, Type I",
            Family::Logistic => "Logistic",
            Family::Uniform => "Uniform",
            Family::Cauchy => "Cauchy",
            Family::Rayleigh => "Rayleigh",
        }
    }

    /// Canonical family name used by the derived-distribution export.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Family::Normal => "norm",
            Family::Lognormal => "lognorm",
            Family::Exponential => "expon",
            Family::Weibull => "frechet_r",
            Family::ExtremeValueTypeI => "gumbel_l",
            Family::Logistic => "logistic",
            Family::Uniform => "uniform",
            Family::Cauchy => "cauchy",
            Family::Rayleigh => "rayleigh",
        }
    }

    pub fn has_shape(self) -> bool {
        matches!(self, Family::Lognormal | Family::Weibull)
    }

    pub fn has_scale(self) -> bool {
        true
    }

    pub fn has_loc(self) -> bool {
        true
    }

    /// Whether the caller may fix the location parameter before fitting.
    ///
    /// For the remaining families the location falls out of the regression.
    pub fn loc_optional(self) -> bool {
        matches!(
            self,
            Family::Lognormal | Family::Exponential | Family::Weibull | Family::Rayleigh
        )
    }

    /// X-axis label template for an external renderer.
    pub fn x_label(self) -> &'static str {
        match self {
            Family::Normal => "erfinv(2 F(x) - 1)",
            Family::Lognormal => "erfinv(F(x - loc))",
            Family::Exponential => "x - loc",
            Family::Weibull => "ln(x - loc)",
            Family::ExtremeValueTypeI => "x",
            Family::Logistic => "atanh(2 F(x) - 1)",
            Family::Uniform => "F(x)",
            Family::Cauchy => "tan(pi (F(x) - 0.5))",
            Family::Rayleigh => "sqrt(-2 ln(1 - F(x)))",
        }
    }

    /// Y-axis label template for an external renderer.
    pub fn y_label(self) -> &'static str {
        match self {
            Family::Normal
            | Family::Logistic
            | Family::Uniform
            | Family::Cauchy
            | Family::Rayleigh => "x",
            Family::Lognormal => "ln(x - loc)",
            Family::Exponential => "ln(1 / (1 - F(x)))",
            Family::Weibull => "ln(ln(1 / (1 - F(x))))",
            Family::ExtremeValueTypeI => "ln(-ln(1 - F(x)))",
        }
    }

    /// Map sorted samples and plotting positions into linearizable `(x, y)`.
    ///
    /// `q` values must lie in (0, 1); with that established, the only
    /// sample-dependent failure mode is `ln(s - loc)` with `s <= loc`, which
    /// surfaces as `InvalidInput` rather than a NaN fit.
    pub fn transform(self, samples: &[f64], q: &[f64], loc: f64) -> Result<(Vec<f64>, Vec<f64>)> {
        if samples.len() != q.len() {
            return Err(Error::InvalidInput(format!(
                "sample/quantile length mismatch: {} vs {}",
                samples.len(),
                q.len()
            )));
        }

        let (x, y): (Vec<f64>, Vec<f64>) = match self {
            Family::Normal => (
                q.iter().map(|&p| erf_inv(2.0 * p - 1.0)).collect(),
                samples.to_vec(),
            ),
            Family::Lognormal => (
                q.iter().map(|&p| erf_inv(p)).collect(),
                samples.iter().map(|&s| (s - loc).ln()).collect(),
            ),
            Family::Exponential => (
                samples.iter().map(|&s| s - loc).collect(),
                q.iter().map(|&p| (1.0 / (1.0 - p)).ln()).collect(),
            ),
            Family::Weibull => (
                samples.iter().map(|&s| (s - loc).ln()).collect(),
                q.iter().map(|&p| (1.0 / (1.0 - p)).ln().ln()).collect(),
            ),
            Family::ExtremeValueTypeI => (
                samples.to_vec(),
                q.iter().map(|&p| (-(1.0 - p).ln()).ln()).collect(),
            ),
            Family::Logistic => (
                q.iter().map(|&p| (2.0 * p - 1.0).atanh()).collect(),
                samples.to_vec(),
            ),
            Family::Uniform => (q.to_vec(), samples.to_vec()),
            Family::Cauchy => (
                q.iter().map(|&p| (PI * (p - 0.5)).tan()).collect(),
                samples.to_vec(),
            ),
            Family::Rayleigh => (
                q.iter().map(|&p| (-2.0 * (1.0 - p).ln()).sqrt()).collect(),
                samples.to_vec(),
            ),
        };

        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "{} transform produced non-finite values (check samples against loc={loc})",
                self.label()
            )));
        }
        Ok((x, y))
    }

    /// Recover natural parameters from the fitted line.
    ///
    /// `loc` is the location fixed before the fit; families that do not derive
    /// a location from the regression report it back unchanged.
    pub fn extract_params(self, slope: f64, intercept: f64, loc: f64) -> DerivedParams {
        match self {
            Family::Normal => DerivedParams {
                shape: None,
                scale: Some(slope),
                loc: Some(intercept),
            },
            Family::Lognormal => DerivedParams {
                shape: Some(slope * 10.0_f64.ln()),
                scale: Some(intercept),
                loc: Some(loc),
            },
            Family::Exponential => DerivedParams {
                shape: None,
                scale: Some(1.0 / slope),
                loc: Some(loc),
            },
            Family::Weibull => DerivedParams {
                shape: Some(slope),
                scale: Some((-intercept / slope).exp()),
                loc: Some(loc),
            },
            Family::ExtremeValueTypeI => DerivedParams {
                shape: None,
                scale: Some(1.0 / slope),
                loc: Some(intercept * slope),
            },
            Family::Logistic => DerivedParams {
                shape: None,
                scale: Some(0.5 * slope),
                loc: Some(intercept),
            },
            Family::Uniform | Family::Cauchy | Family::Rayleigh => DerivedParams {
                shape: None,
                scale: Some(slope),
                loc: Some(intercept),
            },
        }
    }

    /// Textual constructor for an equivalent standard statistical
    /// distribution object, e.g. `frechet_r(1.832100, loc=0.000000,
    /// scale=52.113400)`.
    pub fn construction(self, params: &DerivedParams) -> String {
        let fmt = |v: Option<f64>| match v {
            Some(v) => format!("{v:.6}"),
            None => "NA".to_string(),
        };
        if self.has_shape() {
            format!(
                "{}({}, loc={}, scale={})",
                self.canonical_name(),
                fmt(params.shape),
                fmt(params.loc),
                fmt(params.scale)
            )
        } else {
            format!(
                "{}(loc={}, scale={})",
                self.canonical_name(),
                fmt(params.loc),
                fmt(params.scale)
            )
        }
    }
}
