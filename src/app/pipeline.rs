//! Shared fit pipeline used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load samples -> resolve names -> fit each candidate -> collect results
//!
//! Front-ends then focus on presentation (printing vs widgets).

use crate::domain::{FitConfig, SampleSet};
use crate::error::Result;
use crate::fit::{Candidate, CandidateSet};
use crate::quantiles::QuantileMethod;
use crate::registry::Registry;

/// All computed outputs of a single `pplot fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub samples: SampleSet,
    pub method: QuantileMethod,
    pub candidates: CandidateSet,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(registry: &Registry, config: &FitConfig) -> Result<RunOutput> {
    let samples = crate::io::load_samples(&config.samples_path)?;
    run_fit_with_samples(registry, config, samples)
}

/// Execute the fitting pipeline with a pre-loaded sample set.
///
/// This is useful for callers that already hold samples in memory and for
/// refitting without re-reading the file.
pub fn run_fit_with_samples(
    registry: &Registry,
    config: &FitConfig,
    samples: SampleSet,
) -> Result<RunOutput> {
    let method = registry.method(&config.qmethod)?;

    let mut candidates = CandidateSet::new();
    for name in &config.distributions {
        let family = registry.distribution(name)?;
        let mut candidate = Candidate::new(family);
        if let Some(loc) = config.loc {
            candidate.set_location(loc);
        }
        candidates.add_distribution(candidate, &samples, method)?;
    }

    Ok(RunOutput {
        samples,
        method,
        candidates,
    })
}
