//! Probability of each variation being the best.
//!
//! Index `i` of every variation's sample is treated as one joint posterior
//! draw. For each draw the variation with the strictly greatest rate scores a
//! win; the win fraction estimates
//!
//! ```text
//! P(variation v has the highest true rate | data)
//! ```
//!
//! Ties go to the first variation in lexicographic key order.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{ComputationError, Result, ValidationError};
use crate::types::{RateDistributions, WinProbabilities};

/// Common sample length of `rate_dists`.
///
/// # Errors
///
/// - `NoVariations` if the map is empty
/// - `MisalignedSamples` if any two variations differ in length
pub fn aligned_sample_len(rate_dists: &RateDistributions) -> Result<usize> {
    let mut iter = rate_dists.values();
    let expected = iter.next().ok_or(ValidationError::NoVariations)?.len();

    for (name, sample) in rate_dists {
        if sample.len() != expected {
            return Err(ComputationError::MisalignedSamples {
                variation: name.clone(),
                expected,
                actual: sample.len(),
            }
            .into());
        }
    }
    Ok(expected)
}

/// Estimate the probability that each variation is the winner.
///
/// Single pass over the draws, O(n · k) for n draws and k variations.
/// The raw win counts are emitted as a `debug` tracing event.
pub fn probability_of_being_winner(rate_dists: &RateDistributions) -> Result<WinProbabilities> {
    let n = aligned_sample_len(rate_dists)?;
    if n == 0 {
        return Err(ComputationError::EmptySample.into());
    }

    let samples: Vec<&[f64]> = rate_dists.values().map(Vec::as_slice).collect();
    let mut wins = vec![0usize; samples.len()];

    for i in 0..n {
        let mut best = 0;
        let mut best_value = samples[0][i];
        for (k, sample) in samples.iter().enumerate().skip(1) {
            if sample[i] > best_value {
                best = k;
                best_value = sample[i];
            }
        }
        wins[best] += 1;
    }

    let counts: BTreeMap<&str, usize> = rate_dists
        .keys()
        .map(String::as_str)
        .zip(wins.iter().copied())
        .collect();
    debug!(?counts, draws = n, "win counts");

    Ok(rate_dists
        .keys()
        .zip(wins)
        .map(|(name, w)| (name.clone(), w as f64 / n as f64))
        .collect())
}

/// Key of the maximum value; ties go to the first key in iteration order.
///
/// Returns `None` for an empty map.
pub fn argmax_key<K, V: PartialOrd>(map: &BTreeMap<K, V>) -> Option<&K> {
    let mut iter = map.iter();
    let (mut best_key, mut best_value) = iter.next()?;
    for (key, value) in iter {
        if value > best_value {
            best_key = key;
            best_value = value;
        }
    }
    Some(best_key)
}
