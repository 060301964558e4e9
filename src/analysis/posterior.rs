//! Posterior sampling for binomial conversion rates.
//!
//! With a uniform Beta(1, 1) prior and `k` conversions out of `n` impressions,
//! conjugacy gives the posterior
//!
//! ```text
//! p | k, n ~ Beta(k + 1, n - k + 1)
//! ```
//!
//! Each variation is sampled from its own counter-seeded generator, so the
//! draws are reproducible per seed and identical whether or not the
//! `parallel` feature is enabled.

use rand::Rng;
use rand_distr::{Beta, Distribution};
use tracing::debug;

use crate::constants::{PRIOR_ALPHA, PRIOR_BETA};
use crate::error::{ComputationError, Result, ValidationError};
use crate::statistics::stream_rng;
use crate::types::{validate_rate_data, RateData, RateDistributions, RateSample, VariationInput};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Posterior shape parameters (α, β) for the given counts.
pub fn posterior_shape(input: &VariationInput) -> (f64, f64) {
    (
        input.conversions as f64 + PRIOR_ALPHA,
        input.failures() as f64 + PRIOR_BETA,
    )
}

/// Analytic posterior mean α / (α + β).
pub fn posterior_mean(input: &VariationInput) -> f64 {
    let (alpha, beta) = posterior_shape(input);
    alpha / (alpha + beta)
}

/// Draw `num_samples` conversion rates from the posterior of one variation.
///
/// # Errors
///
/// - `InvalidCounts` (with an empty variation name) if `conversions > impressions`
/// - `InvalidSampleCount` if `num_samples == 0`
pub fn sample_posterior<R: Rng + ?Sized>(
    conversions: u64,
    impressions: u64,
    num_samples: usize,
    rng: &mut R,
) -> Result<RateSample> {
    let input = VariationInput::new(conversions, impressions);
    input.validate("")?;
    if num_samples == 0 {
        return Err(ValidationError::InvalidSampleCount.into());
    }
    draw_posterior(&input, num_samples, rng)
}

/// Sample the posterior of every variation in `rate_data`.
///
/// Every variation is validated before any sampling starts. Variation `k`
/// (in lexicographic order) uses the generator `stream_rng(seed, k)`. All
/// returned samples have length `num_samples`.
pub fn sample_posteriors(
    rate_data: &RateData,
    num_samples: usize,
    seed: u64,
) -> Result<RateDistributions> {
    validate_rate_data(rate_data)?;
    if num_samples == 0 {
        return Err(ValidationError::InvalidSampleCount.into());
    }
    sample_validated_posteriors(rate_data, num_samples, seed)
}

/// [`sample_posteriors`] for inputs that already passed [`validate_rate_data`].
pub(crate) fn sample_validated_posteriors(
    rate_data: &RateData,
    num_samples: usize,
    seed: u64,
) -> Result<RateDistributions> {
    debug!(
        variations = rate_data.len(),
        num_samples, seed, "sampling posterior rate distributions"
    );

    let entries: Vec<(usize, &String, &VariationInput)> = rate_data
        .iter()
        .enumerate()
        .map(|(position, (name, input))| (position, name, input))
        .collect();

    let sample_one = |&(position, name, input): &(usize, &String, &VariationInput)| {
        let mut rng = stream_rng(seed, position as u64);
        draw_posterior(input, num_samples, &mut rng).map(|sample| (name.clone(), sample))
    };

    #[cfg(feature = "parallel")]
    let dists = entries.par_iter().map(sample_one).collect();

    #[cfg(not(feature = "parallel"))]
    let dists = entries.iter().map(sample_one).collect();

    dists
}

/// Draw from Beta(α, β) for counts that are already validated.
fn draw_posterior<R: Rng + ?Sized>(
    input: &VariationInput,
    num_samples: usize,
    rng: &mut R,
) -> Result<RateSample> {
    let (alpha, beta) = posterior_shape(input);
    let dist =
        Beta::new(alpha, beta).map_err(|_| ComputationError::InvalidShape { alpha, beta })?;

    Ok((0..num_samples).map(|_| dist.sample(rng)).collect())
}
