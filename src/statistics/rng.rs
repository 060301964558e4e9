//! Deterministic RNG seeding for independent Monte Carlo streams.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Derive a well-mixed seed for stream `counter` from a base seed.
///
/// Uses the SplitMix64 finalizer so that adjacent counters yield
/// uncorrelated generator states.
#[inline]
pub fn counter_rng_seed(seed: u64, counter: u64) -> u64 {
    let mut z = seed
        .wrapping_add(counter.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Generator for stream `counter` under `seed`.
pub fn stream_rng(seed: u64, counter: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(seed, counter))
}
