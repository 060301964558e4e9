//! Analysis stages of the rate comparison pipeline.
//!
//! 1. **Posterior sampling** ([`posterior`]): Beta posterior draws per variation
//! 2. **Credible intervals** ([`interval`]): Equal-tailed intervals from draws
//! 3. **Winner probability** ([`winner`]): Monte Carlo probability of being best
//! 4. **Lift** ([`lift`]): Winner's relative lift over each other variation

pub mod interval;
pub mod lift;
pub mod posterior;
pub mod winner;

pub use interval::{credible_interval, credible_intervals, validate_confidence};
pub use lift::{lift_distribution, winners_lift};
pub use posterior::{posterior_mean, posterior_shape, sample_posterior, sample_posteriors};
pub use winner::{aligned_sample_len, argmax_key, probability_of_being_winner};
