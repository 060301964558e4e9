//! Result types for rate comparison.

use serde::{Deserialize, Serialize};

use crate::analysis::argmax_key;
use crate::types::{CredibleIntervals, RateDistributions, WinProbabilities};

/// Output of a full comparison run.
///
/// Serializes to:
///
/// ```text
/// {
///   "distributions": { "<variation>": [sample, ...] },
///   "statistics": {
///     "Confidence Interval": { "<variation>": [lower, upper] },
///     "Probability to Be Better": { "<variation>": p },
///     "Winner's Percent Lift": { "<variation>": [lower, upper] }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Posterior rate samples per variation.
    pub distributions: RateDistributions,
    /// Summary statistics.
    pub statistics: Statistics,
}

/// Decision statistics derived from the posterior samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Credible interval on each variation's conversion rate.
    #[serde(rename = "Confidence Interval")]
    pub confidence_interval: CredibleIntervals,

    /// Probability that each variation has the highest rate.
    #[serde(rename = "Probability to Be Better")]
    pub probability_to_be_better: WinProbabilities,

    /// Credible interval on the winner's relative lift over each variation.
    #[serde(rename = "Winner's Percent Lift")]
    pub winners_percent_lift: CredibleIntervals,
}

impl ComparisonResult {
    /// Variation with the highest probability to be better.
    pub fn winner(&self) -> Option<&str> {
        argmax_key(&self.statistics.probability_to_be_better).map(String::as_str)
    }

    /// Number of variations compared.
    pub fn num_variations(&self) -> usize {
        self.distributions.len()
    }

    /// Draws per variation.
    pub fn num_samples(&self) -> usize {
        self.distributions.values().next().map_or(0, Vec::len)
    }
}
