//! Error types for rate comparison.
//!
//! Errors fall into two kinds:
//! - [`ValidationError`]: the caller supplied invalid counts or configuration.
//! - [`ComputationError`]: a stage hit a degenerate numeric condition.
//!
//! Any error aborts the pipeline; there are no partial results.

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error returned by every fallible operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Invalid input or configuration.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Degenerate numeric condition during computation.
    #[error("computation failed: {0}")]
    Computation(#[from] ComputationError),
}

impl Error {
    /// Whether this error was caused by invalid input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether this error was raised by a numeric stage.
    pub fn is_computation(&self) -> bool {
        matches!(self, Self::Computation(_))
    }
}

/// Invalid counts or configuration supplied by the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A variation has conversions exceeding impressions.
    ///
    /// `variation` is empty when counts were supplied without a name.
    #[error(
        "{}conversions ({conversions}) exceed impressions ({impressions})",
        variation_prefix(.variation)
    )]
    InvalidCounts {
        /// Variation identifier.
        variation: String,
        /// Observed conversions.
        conversions: u64,
        /// Observed impressions.
        impressions: u64,
    },

    /// Confidence level outside the open interval (0, 1).
    #[error("confidence must be in (0, 1), got {0}")]
    InvalidConfidence(f64),

    /// Requested zero posterior samples.
    #[error("num_samples must be > 0")]
    InvalidSampleCount,

    /// No variations to compare.
    #[error("rate data contains no variations")]
    NoVariations,

    /// A variation name that is not present in the distributions.
    #[error("unknown variation '{0}'")]
    UnknownVariation(String),
}

fn variation_prefix(variation: &str) -> String {
    if variation.is_empty() {
        String::new()
    } else {
        format!("variation '{variation}': ")
    }
}

/// Degenerate numeric conditions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputationError {
    /// Quantiles were requested from an empty sample.
    #[error("cannot compute quantiles of an empty sample")]
    EmptySample,

    /// Sample arrays are not index-aligned.
    #[error("variation '{variation}' has {actual} samples, expected {expected}")]
    MisalignedSamples {
        /// Variation whose sample length differs.
        variation: String,
        /// Length shared by the preceding variations.
        expected: usize,
        /// Length found for this variation.
        actual: usize,
    },

    /// A losing variation drew an exactly-zero rate, so lift is undefined.
    #[error("variation '{variation}' has a zero rate at sample {index}; lift is undefined")]
    ZeroRate {
        /// Variation used as the lift denominator.
        variation: String,
        /// Sample index of the zero draw.
        index: usize,
    },

    /// The beta sampler rejected its shape parameters.
    #[error("invalid beta shape parameters (alpha = {alpha}, beta = {beta})")]
    InvalidShape {
        /// First shape parameter.
        alpha: f64,
        /// Second shape parameter.
        beta: f64,
    },
}
