//! Ordinary least squares for the linearized probability plot.
//!
//! The pipeline repeatedly fits `y = slope * x + intercept` on transformed
//! sample/quantile pairs. The design matrix is tall with two columns
//! (intercept, x), so we solve via SVD, which stays robust when the columns
//! are nearly collinear. R² is the squared Pearson correlation of x and y.

use nalgebra::{DMatrix, DVector};
use serde::Serialize;

use crate::error::{Error, Result};

/// Slope, intercept, and coefficient of determination of an OLS fit.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
    pub r2: f64,
}

/// Fit `y` on `x` by ordinary least squares.
///
/// Fails with `InvalidInput` when `x` and `y` differ in length, and with
/// `DegenerateInput` when fewer than two points are given or when `x` has
/// zero variance (the slope is undefined). A zero-variance `y` yields
/// `r2 = 0.0`.
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<LineFit> {
    let n = x.len();
    if n != y.len() {
        return Err(Error::InvalidInput(format!(
            "x/y length mismatch: {} vs {}",
            n,
            y.len()
        )));
    }
    if n < 2 {
        return Err(Error::DegenerateInput(format!(
            "regression requires at least 2 points, got {n}"
        )));
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(Error::InvalidInput(
            "non-finite value in regression input".to_string(),
        ));
    }

    let nf = n as f64;
    let x_mean = x.iter().sum::<f64>() / nf;
    let y_mean = y.iter().sum::<f64>() / nf;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for i in 0..n {
        let dx = x[i] - x_mean;
        let dy = y[i] - y_mean;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx.abs() < 1e-30 {
        return Err(Error::DegenerateInput(
            "x values have zero variance; slope is undefined".to_string(),
        ));
    }

    let mut a = DMatrix::<f64>::zeros(n, 2);
    let mut b = DVector::<f64>::zeros(n);
    for i in 0..n {
        a[(i, 0)] = 1.0;
        a[(i, 1)] = x[i];
        b[i] = y[i];
    }

    let svd = a.svd(true, true);
    let beta = solve_with_fallback_tolerances(&svd, &b).ok_or_else(|| {
        Error::DegenerateInput("least-squares system is too ill-conditioned".to_string())
    })?;

    let r2 = if syy.abs() < 1e-30 {
        0.0
    } else {
        (sxy * sxy) / (sxx * syy)
    };

    Ok(LineFit {
        slope: beta[1],
        intercept: beta[0],
        r2,
    })
}

fn solve_with_fallback_tolerances(
    svd: &nalgebra::SVD<f64, nalgebra::Dyn, nalgebra::Dyn>,
    b: &DVector<f64>,
) -> Option<DVector<f64>> {
    // Try progressively looser tolerances if the strict solve fails.
    for &tol in &[1e-12, 1e-10, 1e-8] {
        if let Ok(beta) = svd.solve(b, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }
    None
}
