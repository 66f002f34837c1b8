//! Candidate distributions and the fit pipeline.
//!
//! A `Candidate` pairs one distribution family with its fixed location, the
//! sample set it was fed, and the latest `FitResult`. A `CandidateSet` is the
//! insertion-ordered collection of candidates sharing one sample set and one
//! quantile method; it owns its entries exclusively.

use crate::domain::{FitResult, PlotData, SampleSet};
use crate::error::{Error, Result};
use crate::math::fit_line;
use crate::models::Family;
use crate::quantiles::QuantileMethod;

/// One distribution family under consideration.
#[derive(Debug, Clone)]
pub struct Candidate {
    family: Family,
    loc: f64,
    samples: Option<SampleSet>,
    result: Option<FitResult>,
}

impl Candidate {
    pub fn new(family: Family) -> Self {
        Self {
            family,
            loc: 0.0,
            samples: None,
            result: None,
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// The location that will be (or was) fixed for the fit.
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Fix the location parameter ahead of the next fit.
    ///
    /// Ignored for families whose location falls out of the regression.
    pub fn set_location(&mut self, loc: f64) {
        if self.family.loc_optional() {
            self.loc = loc;
        }
    }

    /// Store the sample set this candidate will be fitted against.
    ///
    /// Any previous result becomes stale and is discarded.
    pub fn feed_samples(&mut self, samples: &SampleSet) {
        self.samples = Some(samples.clone());
        self.result = None;
    }

    /// Run the full pipeline: quantiles -> transform -> fit -> extraction.
    ///
    /// Fails with `Precondition` if no samples have been fed.
    pub fn evaluate(&mut self, method: QuantileMethod) -> Result<&FitResult> {
        let samples = self.samples.as_ref().ok_or_else(|| {
            Error::Precondition("evaluate called before feed_samples".to_string())
        })?;
        let q = method.quantiles(samples.len())?;
        let (x, y) = self.family.transform(samples.values(), &q, self.loc)?;
        let line = fit_line(&x, &y)?;
        let params = self.family.extract_params(line.slope, line.intercept, self.loc);
        let result = FitResult {
            slope: line.slope,
            intercept: line.intercept,
            r2: line.r2,
            x,
            y,
            params,
        };
        Ok(self.result.insert(result))
    }

    /// The latest fit, if `evaluate` has run since the last `feed_samples`.
    pub fn result(&self) -> Option<&FitResult> {
        self.result.as_ref()
    }

    /// Everything an external renderer needs for this candidate's plot.
    pub fn plot_data(&self) -> Result<PlotData> {
        let result = self.result.as_ref().ok_or_else(|| {
            Error::Precondition("plot_data requested before evaluate".to_string())
        })?;
        Ok(PlotData {
            title: self.family.label().to_string(),
            x_label: self.family.x_label().to_string(),
            y_label: self.family.y_label().to_string(),
            x: result.x.clone(),
            y: result.y.clone(),
            slope: result.slope,
            intercept: result.intercept,
            r2: result.r2,
            line: result.line_endpoints(),
            equation: result.equation(),
        })
    }

    /// Derived-distribution construction string for the latest fit.
    pub fn construction(&self) -> Result<String> {
        let result = self.result.as_ref().ok_or_else(|| {
            Error::Precondition("construction requested before evaluate".to_string())
        })?;
        Ok(self.family.construction(&result.params))
    }
}

/// Insertion-ordered collection of fitted candidates.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    entries: Vec<Candidate>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit `candidate` against `samples` with `method`, then append it.
    pub fn add_distribution(
        &mut self,
        mut candidate: Candidate,
        samples: &SampleSet,
        method: QuantileMethod,
    ) -> Result<()> {
        candidate.feed_samples(samples);
        candidate.evaluate(method)?;
        self.entries.push(candidate);
        Ok(())
    }

    /// Re-fit every candidate against new shared inputs.
    ///
    /// Each entry keeps its family and previously fixed location.
    pub fn calc_all(&mut self, samples: &SampleSet, method: QuantileMethod) -> Result<()> {
        for candidate in &mut self.entries {
            candidate.feed_samples(samples);
            candidate.evaluate(method)?;
        }
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Candidate> {
        self.entries.get(index).ok_or(Error::Index {
            index,
            len: self.entries.len(),
        })
    }

    /// Remove and return the candidate at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Candidate> {
        if index >= self.entries.len() {
            return Err(Error::Index {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn remove_all(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::erf_inv;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn filliben(n: usize) -> Vec<f64> {
        QuantileMethod::Filliben.quantiles(n).unwrap()
    }

    #[test]
    fn evaluate_before_feed_is_a_precondition_error() {
        let mut candidate = Candidate::new(Family::Normal);
        let err = candidate.evaluate(QuantileMethod::Filliben).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }

    #[test]
    fn uniform_identity_fit() {
        // Samples equal to their own Filliben plotting positions: the Uniform
        // transform is the identity, so the fit must be y = x exactly.
        let q = filliben(10);
        let samples = SampleSet::new(q.clone()).unwrap();
        let mut candidate = Candidate::new(Family::Uniform);
        candidate.feed_samples(&samples);
        let result = candidate.evaluate(QuantileMethod::Filliben).unwrap();
        assert_relative_eq!(result.slope, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.intercept, 0.0, epsilon = 1e-9);
        assert_relative_eq!(result.r2, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn normal_round_trip_recovers_mu_and_sigma() {
        // Samples generated by quantile inversion from Normal(mu=5, sigma=2)
        // using the same plotting positions the fit will use.
        let q = filliben(20);
        let samples: Vec<f64> = q.iter().map(|&p| 5.0 + 2.0 * erf_inv(2.0 * p - 1.0)).collect();
        let samples = SampleSet::new(samples).unwrap();

        let mut candidate = Candidate::new(Family::Normal);
        candidate.feed_samples(&samples);
        let result = candidate.evaluate(QuantileMethod::Filliben).unwrap();

        assert_abs_diff_eq!(result.params.scale.unwrap(), 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.params.loc.unwrap(), 5.0, epsilon = 1e-6);
        assert_relative_eq!(result.r2, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn weibull_round_trip_recovers_shape_and_scale() {
        // x = eta * (-ln(1 - q))^(1/beta) with beta = 2, eta = 50.
        let q = filliben(25);
        let samples: Vec<f64> = q
            .iter()
            .map(|&p| 50.0 * (-(1.0 - p).ln()).powf(0.5))
            .collect();
        let samples = SampleSet::new(samples).unwrap();

        let mut candidate = Candidate::new(Family::Weibull);
        candidate.feed_samples(&samples);
        let result = candidate.evaluate(QuantileMethod::Filliben).unwrap();

        assert_abs_diff_eq!(result.params.shape.unwrap(), 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.params.scale.unwrap(), 50.0, epsilon = 1e-6);
    }

    #[test]
    fn noisy_normal_samples_fit_well() {
        use rand::SeedableRng;
        use rand_distr::{Distribution, Normal};

        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let normal = Normal::new(10.0, 3.0).unwrap();
        let values: Vec<f64> = (0..200).map(|_| normal.sample(&mut rng)).collect();
        let samples = SampleSet::new(values).unwrap();

        let mut candidate = Candidate::new(Family::Normal);
        candidate.feed_samples(&samples);
        let result = candidate.evaluate(QuantileMethod::Filliben).unwrap();

        // The abscissa is erfinv(2q - 1), not the standard normal quantile, so
        // the reported scale is in erfinv units: slope -> sigma * sqrt(2).
        assert!(result.r2 > 0.95, "r2 = {}", result.r2);
        assert_abs_diff_eq!(result.params.loc.unwrap(), 10.0, epsilon = 1.0);
        assert_abs_diff_eq!(
            result.params.scale.unwrap(),
            3.0 * std::f64::consts::SQRT_2,
            epsilon = 0.5
        );
    }

    #[test]
    fn set_location_is_ignored_for_regression_located_families() {
        let mut normal = Candidate::new(Family::Normal);
        normal.set_location(3.0);
        assert_eq!(normal.loc(), 0.0);

        let mut weibull = Candidate::new(Family::Weibull);
        weibull.set_location(3.0);
        assert_eq!(weibull.loc(), 3.0);
    }

    #[test]
    fn add_then_remove_leaves_empty_set() {
        let samples = SampleSet::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let mut set = CandidateSet::new();
        set.add_distribution(
            Candidate::new(Family::Normal),
            &samples,
            QuantileMethod::Filliben,
        )
        .unwrap();
        assert_eq!(set.count(), 1);
        set.remove_at(0).unwrap();
        assert_eq!(set.count(), 0);
    }

    #[test]
    fn remove_at_on_empty_set_is_an_index_error() {
        let mut set = CandidateSet::new();
        let err = set.remove_at(0).unwrap_err();
        assert!(matches!(err, Error::Index { index: 0, len: 0 }));
    }

    #[test]
    fn get_out_of_bounds_is_an_index_error() {
        let set = CandidateSet::new();
        assert!(matches!(set.get(2), Err(Error::Index { index: 2, len: 0 })));
    }

    #[test]
    fn calc_all_preserves_location_and_family() {
        let first = SampleSet::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let mut set = CandidateSet::new();

        let mut candidate = Candidate::new(Family::Exponential);
        candidate.set_location(0.5);
        set.add_distribution(candidate, &first, QuantileMethod::Filliben)
            .unwrap();

        let second = SampleSet::new(vec![2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
        set.calc_all(&second, QuantileMethod::MedianRank).unwrap();

        let entry = set.get(0).unwrap();
        assert_eq!(entry.family(), Family::Exponential);
        assert_eq!(entry.loc(), 0.5);
        assert_eq!(entry.result().unwrap().params.loc, Some(0.5));
    }

    #[test]
    fn remove_all_clears_every_entry() {
        let samples = SampleSet::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut set = CandidateSet::new();
        for family in [Family::Normal, Family::Uniform, Family::Logistic] {
            set.add_distribution(Candidate::new(family), &samples, QuantileMethod::NPlus1)
                .unwrap();
        }
        assert_eq!(set.count(), 3);
        set.remove_all();
        assert!(set.is_empty());
    }

    #[test]
    fn plot_data_carries_labels_and_line() {
        let samples = SampleSet::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let mut candidate = Candidate::new(Family::ExtremeValueTypeI);
        candidate.feed_samples(&samples);
        candidate.evaluate(QuantileMethod::Filliben).unwrap();

        let plot = candidate.plot_data().unwrap();
        assert_eq!(plot.title, "Extreme Value, Type I");
        assert_eq!(plot.x_label, "x");
        assert_eq!(plot.x.len(), 5);
        let ((x0, _), (x1, _)) = plot.line;
        assert!(x0 < x1);
        assert!(plot.equation.contains("R^2"));
    }
}
