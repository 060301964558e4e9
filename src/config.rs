//! Configuration for a rate comparison run.

use serde::{Deserialize, Serialize};

use crate::analysis::validate_confidence;
use crate::constants::{DEFAULT_CONFIDENCE, DEFAULT_NUM_SAMPLES, DEFAULT_SEED};
use crate::error::{Result, ValidationError};

/// How the lift stage treats a losing variation's draw of exactly zero.
///
/// Beta posteriors with shape parameters ≥ 1 put zero mass on 0, so this
/// only arises from floating-point underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZeroRatePolicy {
    /// Exclude the draw from the lift distribution and log a warning.
    #[default]
    Skip,
    /// Abort with `ComputationError::ZeroRate`.
    Error,
}

/// Configuration options for [`RateComparison`](crate::RateComparison).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Credible level for rate and lift intervals, in (0, 1).
    ///
    /// Default: 0.95.
    pub confidence: f64,

    /// Monte Carlo draws per variation.
    ///
    /// Larger values reduce Monte Carlo noise in the win probabilities
    /// (standard error ≈ sqrt(p(1-p)/n)). Default: 20,000.
    pub num_samples: usize,

    /// Seed for posterior sampling.
    ///
    /// `None` uses [`DEFAULT_SEED`], so identical inputs give identical
    /// results. Default: None.
    pub seed: Option<u64>,

    /// Zero-denominator handling in the lift stage. Default: `Skip`.
    pub zero_rate_policy: ZeroRatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            num_samples: DEFAULT_NUM_SAMPLES,
            seed: None,
            zero_rate_policy: ZeroRatePolicy::default(),
        }
    }
}

impl Config {
    /// Check every field, returning the first violation.
    pub fn validate(&self) -> Result<()> {
        validate_confidence(self.confidence)?;
        if self.num_samples == 0 {
            return Err(ValidationError::InvalidSampleCount.into());
        }
        Ok(())
    }

    /// Seed actually used for sampling.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}
