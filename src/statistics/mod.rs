//! Statistical primitives used by the analysis stages.
//!
//! - Quantile computation (Hyndman & Fan type 7)
//! - Counter-based RNG seeding for reproducible per-variation streams

mod quantile;
mod rng;

pub use quantile::{compute_quantile, compute_quantile_sorted};
pub use rng::{counter_rng_seed, stream_rng};
