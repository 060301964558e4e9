//! Main `RateComparison` entry point and builder.

use tracing::debug;

use crate::analysis::posterior::sample_validated_posteriors;
use crate::analysis::{argmax_key, credible_intervals, probability_of_being_winner, winners_lift};
use crate::config::{Config, ZeroRatePolicy};
use crate::error::{Result, ValidationError};
use crate::result::{ComparisonResult, Statistics};
use crate::types::{validate_rate_data, RateData};

/// Main entry point for comparing conversion rates.
///
/// Use the builder pattern to configure and run a comparison.
///
/// # Example
///
/// ```
/// use rate_comparison::{RateComparison, RateData, VariationInput};
///
/// let mut data = RateData::new();
/// data.insert("A".to_string(), VariationInput::new(500, 1000));
/// data.insert("B".to_string(), VariationInput::new(480, 1000));
///
/// let result = RateComparison::new()
///     .confidence(0.9)
///     .num_samples(5_000)
///     .seed(7)
///     .run(&data)
///     .unwrap();
///
/// assert_eq!(result.winner(), Some("A"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateComparison {
    config: Config,
}

impl RateComparison {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the credible level for intervals.
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.config.confidence = confidence;
        self
    }

    /// Set the number of posterior draws per variation.
    pub fn num_samples(mut self, n: usize) -> Self {
        self.config.num_samples = n;
        self
    }

    /// Set the sampling seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set how zero-rate draws are handled in the lift stage.
    pub fn zero_rate_policy(mut self, policy: ZeroRatePolicy) -> Self {
        self.config.zero_rate_policy = policy;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the comparison.
    ///
    /// The configuration and every variation's counts are validated before
    /// any sampling. Stages then run strictly in order; the first error
    /// aborts the run.
    pub fn run(&self, rate_data: &RateData) -> Result<ComparisonResult> {
        let config = &self.config;
        config.validate()?;
        validate_rate_data(rate_data)?;

        let distributions =
            sample_validated_posteriors(rate_data, config.num_samples, config.resolved_seed())?;

        debug!(confidence = config.confidence, "computing credible intervals");
        let confidence_interval = credible_intervals(&distributions, config.confidence)?;

        let probability_to_be_better = probability_of_being_winner(&distributions)?;

        let winner = argmax_key(&probability_to_be_better)
            .ok_or(ValidationError::NoVariations)?
            .clone();
        debug!(%winner, "computing winner's lift");
        let winners_percent_lift = winners_lift(
            &distributions,
            &winner,
            config.confidence,
            config.zero_rate_policy,
        )?;

        Ok(ComparisonResult {
            distributions,
            statistics: Statistics {
                confidence_interval,
                probability_to_be_better,
                winners_percent_lift,
            },
        })
    }
}

/// Compare variations with the default seed and zero-rate policy.
///
/// Shorthand for
/// `RateComparison::new().confidence(confidence).num_samples(num_samples).run(rate_data)`.
pub fn rate_comparison(
    rate_data: &RateData,
    confidence: f64,
    num_samples: usize,
) -> Result<ComparisonResult> {
    RateComparison::new()
        .confidence(confidence)
        .num_samples(num_samples)
        .run(rate_data)
}
