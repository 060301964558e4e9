//! Default configuration constants.

/// Default deterministic seed for posterior sampling.
///
/// Same seed + same data = same result.
/// The value `0x62616E6E6572` is "banner" encoded in ASCII.
pub const DEFAULT_SEED: u64 = 0x62616E6E6572;

/// Default credible level for rate and lift intervals.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Default number of Monte Carlo draws per variation.
pub const DEFAULT_NUM_SAMPLES: usize = 20_000;

/// Shape parameters of the uniform Beta(1, 1) prior.
pub const PRIOR_ALPHA: f64 = 1.0;

/// See [`PRIOR_ALPHA`].
pub const PRIOR_BETA: f64 = 1.0;
