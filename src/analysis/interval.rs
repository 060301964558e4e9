//! Equal-tailed credible intervals from Monte Carlo samples.

use crate::error::{ComputationError, Result, ValidationError};
use crate::statistics::compute_quantile;
use crate::types::{CredibleInterval, CredibleIntervals, RateDistributions};

/// Check that `confidence` lies in the open interval (0, 1).
pub fn validate_confidence(confidence: f64) -> Result<()> {
    if confidence.is_finite() && confidence > 0.0 && confidence < 1.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidConfidence(confidence).into())
    }
}

/// Equal-tailed credible interval of `sample` at the given confidence.
///
/// With `a = (1 - confidence) / 2`, the bounds are the type 7 empirical
/// quantiles at `a` and `1 - a`, found by two O(n) selections on one copy
/// of the sample.
pub fn credible_interval(sample: &[f64], confidence: f64) -> Result<CredibleInterval> {
    validate_confidence(confidence)?;
    if sample.is_empty() {
        return Err(ComputationError::EmptySample.into());
    }

    let tail = (1.0 - confidence) / 2.0;
    let mut buffer = sample.to_vec();
    let lower = compute_quantile(&mut buffer, tail);
    let upper = compute_quantile(&mut buffer, 1.0 - tail);
    Ok(CredibleInterval::new(lower, upper))
}

/// Credible interval for every variation's rate distribution.
pub fn credible_intervals(
    rate_dists: &RateDistributions,
    confidence: f64,
) -> Result<CredibleIntervals> {
    rate_dists
        .iter()
        .map(|(name, sample)| -> Result<_> {
            Ok((name.clone(), credible_interval(sample, confidence)?))
        })
        .collect()
}
