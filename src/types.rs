//! Type aliases and common types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Posterior draws of a single variation's conversion rate.
pub type RateSample = Vec<f64>;

/// Index-aligned posterior samples keyed by variation.
///
/// `BTreeMap` iterates keys lexicographically; every tie-break in the crate
/// resolves to the first key in that order.
pub type RateDistributions = BTreeMap<String, RateSample>;

/// Probability that each variation has the highest true rate.
pub type WinProbabilities = BTreeMap<String, f64>;

/// Credible intervals keyed by variation.
pub type CredibleIntervals = BTreeMap<String, CredibleInterval>;

/// Observed counts keyed by variation.
pub type RateData = BTreeMap<String, VariationInput>;

/// Observed binomial counts for one variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationInput {
    /// Number of successes (e.g. donations).
    pub conversions: u64,
    /// Number of trials (e.g. times the banner was shown).
    pub impressions: u64,
}

impl VariationInput {
    /// Create a new input. Counts are checked by [`validate`](Self::validate).
    pub fn new(conversions: u64, impressions: u64) -> Self {
        Self {
            conversions,
            impressions,
        }
    }

    /// Check `conversions <= impressions`, naming `variation` in the error.
    pub fn validate(&self, variation: &str) -> Result<()> {
        if self.conversions > self.impressions {
            return Err(ValidationError::InvalidCounts {
                variation: variation.to_string(),
                conversions: self.conversions,
                impressions: self.impressions,
            }
            .into());
        }
        Ok(())
    }

    /// Number of trials without a conversion.
    pub fn failures(&self) -> u64 {
        self.impressions.saturating_sub(self.conversions)
    }

    /// Observed conversion rate, or `None` with no impressions.
    pub fn observed_rate(&self) -> Option<f64> {
        (self.impressions > 0).then(|| self.conversions as f64 / self.impressions as f64)
    }
}

/// Check that `rate_data` is non-empty and every variation's counts are valid.
///
/// Returns the first violation in lexicographic order.
pub fn validate_rate_data(rate_data: &RateData) -> Result<()> {
    if rate_data.is_empty() {
        return Err(ValidationError::NoVariations.into());
    }
    rate_data
        .iter()
        .try_for_each(|(name, input)| input.validate(name))
}

/// Two-sided credible interval `[lower, upper]`.
///
/// Serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct CredibleInterval {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl CredibleInterval {
    /// The degenerate `[0.0, 0.0]` interval.
    pub const ZERO: Self = Self {
        lower: 0.0,
        upper: 0.0,
    };

    /// Create an interval from its bounds.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// `upper - lower`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Midpoint of the interval.
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Whether `x` lies inside the closed interval.
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

impl From<[f64; 2]> for CredibleInterval {
    fn from([lower, upper]: [f64; 2]) -> Self {
        Self { lower, upper }
    }
}

impl From<CredibleInterval> for [f64; 2] {
    fn from(ci: CredibleInterval) -> Self {
        [ci.lower, ci.upper]
    }
}
