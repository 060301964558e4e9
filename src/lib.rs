//! # rate-comparison
//!
//! Bayesian comparison of conversion rates across test variations
//! (e.g. banner designs) from binomial conversion counts.
//!
//! For each variation the posterior over its true rate is sampled under a
//! uniform Beta(1, 1) prior. From the samples the crate derives:
//! - Credible intervals on each rate
//! - Probability that each variation is the best
//! - Credible intervals on the winner's relative lift over every other variation
//!
//! ## Quick Start
//!
//! ```
//! use rate_comparison::{rate_comparison, RateData, VariationInput};
//!
//! let mut data = RateData::new();
//! data.insert("A".to_string(), VariationInput::new(500, 1000));
//! data.insert("B".to_string(), VariationInput::new(488, 1000));
//! data.insert("C".to_string(), VariationInput::new(480, 1000));
//!
//! let result = rate_comparison(&data, 0.95, 20_000).unwrap();
//! let p_a = result.statistics.probability_to_be_better["A"];
//! println!("P(A is best) = {:.1}%", p_a * 100.0);
//! ```
//!
//! ## Reproducibility
//!
//! Sampling is seeded (see [`Config::seed`]); the same data and configuration
//! always give the same result. Ties between variations resolve to the first
//! variation in lexicographic order.
//!
//! # Features
//!
//! - `parallel`: Sample variations concurrently using rayon. Results are
//!   identical to the sequential path.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod comparison;
mod config;
mod constants;
mod error;
mod result;
mod types;

// Functional modules
pub mod analysis;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use comparison::{rate_comparison, RateComparison};
pub use config::{Config, ZeroRatePolicy};
pub use constants::{DEFAULT_CONFIDENCE, DEFAULT_NUM_SAMPLES, DEFAULT_SEED};
pub use error::{ComputationError, Error, Result, ValidationError};
pub use result::{ComparisonResult, Statistics};
pub use types::{
    validate_rate_data, CredibleInterval, CredibleIntervals, RateData, RateDistributions,
    RateSample, VariationInput, WinProbabilities,
};
