//! Plotting-position quantile estimators.
//!
//! Each method maps a sample count `n` to `n` strictly increasing cumulative
//! probabilities in (0, 1) — the estimated CDF value of the i-th order
//! statistic. Method identity is independent of any distribution family.

use serde::Serialize;

use crate::error::{Error, Result};

/// A named plotting-position formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuantileMethod {
    /// Filliben (1975): exact order-statistic medians at both ends, the
    /// approximation `(i + 1 - 0.3175) / (n + 0.365)` for interior ranks.
    Filliben,
    /// Uniform order statistics: `(i + 1) / (n + 1)`.
    NPlus1,
    /// Hazen-style positions: `(i + 0.5) / n`.
    IMinusHalf,
    /// Bernard's median-rank approximation: `(i + 0.7) / (n + 0.4)`.
    MedianRank,
}

impl QuantileMethod {
    pub const ALL: [QuantileMethod; 4] = [
        QuantileMethod::Filliben,
        QuantileMethod::NPlus1,
        QuantileMethod::IMinusHalf,
        QuantileMethod::MedianRank,
    ];

    /// Registry key. Kept byte-for-byte stable for external callers.
    pub fn key(self) -> &'static str {
        match self {
            QuantileMethod::Filliben => "Filliben",
            QuantileMethod::NPlus1 => "i/(N+1)",
            QuantileMethod::IMinusHalf => "(i-0.5)/N",
            QuantileMethod::MedianRank => "Median Rank",
        }
    }

    /// Compute the `n` plotting positions for this method.
    ///
    /// Fails with `InvalidInput` for `n < 1`. Denominators are `n`, `n+0.365`,
    /// `n+0.4`, and `n+1`, all nonzero for `n >= 1`.
    pub fn quantiles(self, n: usize) -> Result<Vec<f64>> {
        if n < 1 {
            return Err(Error::InvalidInput(
                "quantile estimation requires n >= 1".to_string(),
            ));
        }
        let nf = n as f64;
        let q = match self {
            QuantileMethod::Filliben => {
                // Head formula first, tail formula last. For n = 1 both target
                // index 0 and the tail assignment wins, so a single sample
                // gets q = 0.5. This ordering is intentional.
                let mut q = vec![0.0; n];
                q[0] = 1.0 - 0.5_f64.powf(1.0 / nf);
                for (i, slot) in q.iter_mut().enumerate().take(n - 1).skip(1) {
                    *slot = (i as f64 + 1.0 - 0.3175) / (nf + 0.365);
                }
                q[n - 1] = 0.5_f64.powf(1.0 / nf);
                q
            }
            QuantileMethod::NPlus1 => (0..n).map(|i| (i as f64 + 1.0) / (nf + 1.0)).collect(),
            QuantileMethod::IMinusHalf => (0..n).map(|i| (i as f64 + 0.5) / nf).collect(),
            QuantileMethod::MedianRank => (0..n).map(|i| (i as f64 + 0.7) / (nf + 0.4)).collect(),
        };
        Ok(q)
    }
}
