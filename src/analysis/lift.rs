//! Credible intervals on the winner's relative lift.
//!
//! For each other variation `v`, the per-draw lift is
//!
//! ```text
//! lift[i] = (winner[i] - v[i]) / v[i]
//! ```
//!
//! and its equal-tailed credible interval is reported. The winner itself
//! maps to `[0.0, 0.0]`.

use tracing::warn;

use crate::config::ZeroRatePolicy;
use crate::error::{ComputationError, Result, ValidationError};
use crate::types::{CredibleInterval, CredibleIntervals, RateDistributions};

use super::interval::{credible_interval, validate_confidence};
use super::winner::aligned_sample_len;

/// Per-draw relative lift of `winner` over `other`.
///
/// Indices where `other[i] == 0.0` are handled according to `policy`.
pub fn lift_distribution(
    winner: &[f64],
    other: &[f64],
    other_name: &str,
    policy: ZeroRatePolicy,
) -> Result<Vec<f64>> {
    let mut lift = Vec::with_capacity(other.len());
    let mut skipped = 0usize;

    for (index, (&w, &o)) in winner.iter().zip(other).enumerate() {
        if o == 0.0 {
            match policy {
                ZeroRatePolicy::Skip => {
                    skipped += 1;
                    continue;
                }
                ZeroRatePolicy::Error => {
                    return Err(ComputationError::ZeroRate {
                        variation: other_name.to_string(),
                        index,
                    }
                    .into());
                }
            }
        }
        lift.push((w - o) / o);
    }

    if skipped > 0 {
        warn!(
            variation = other_name,
            skipped,
            "excluded zero-rate draws from lift distribution"
        );
    }
    Ok(lift)
}

/// Credible interval on the winner's lift over every variation.
///
/// # Errors
///
/// - `UnknownVariation` if `winner` is not in `rate_dists`
/// - `InvalidConfidence` if `confidence` is outside (0, 1)
/// - `MisalignedSamples` if sample lengths differ
/// - `ZeroRate` under [`ZeroRatePolicy::Error`], or `EmptySample` if every
///   draw was skipped under [`ZeroRatePolicy::Skip`]
pub fn winners_lift(
    rate_dists: &RateDistributions,
    winner: &str,
    confidence: f64,
    policy: ZeroRatePolicy,
) -> Result<CredibleIntervals> {
    validate_confidence(confidence)?;
    aligned_sample_len(rate_dists)?;
    let winning = rate_dists
        .get(winner)
        .ok_or_else(|| ValidationError::UnknownVariation(winner.to_string()))?;

    let mut lift_cis = CredibleIntervals::new();
    for (name, losing) in rate_dists {
        if name == winner {
            lift_cis.insert(name.clone(), CredibleInterval::ZERO);
            continue;
        }
        let lift = lift_distribution(winning, losing, name, policy)?;
        lift_cis.insert(name.clone(), credible_interval(&lift, confidence)?);
    }
    Ok(lift_cis)
}
