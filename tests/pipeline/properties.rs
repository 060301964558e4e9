//! Statistical properties of the posterior, interval, winner and lift stages.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use rate_comparison::analysis::{
    credible_interval, probability_of_being_winner, sample_posterior, sample_posteriors,
    winners_lift,
};
use rate_comparison::{CredibleInterval, RateData, VariationInput, ZeroRatePolicy};

fn rate_data(entries: &[(&str, u64, u64)]) -> RateData {
    entries
        .iter()
        .map(|&(name, conversions, impressions)| {
            (name.to_string(), VariationInput::new(conversions, impressions))
        })
        .collect()
}

// =============================================================================
// PRIOR AND POSTERIOR CONCENTRATION
// =============================================================================

#[test]
fn no_data_reduces_to_uniform_prior() {
    for (seed, n) in [(11u64, 1_000usize), (12, 20_000), (13, 100_000)] {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let sample = sample_posterior(0, 0, n, &mut rng).unwrap();
        let mean = sample.iter().sum::<f64>() / n as f64;
        // SE of the mean of U(0,1) is 0.2887 / sqrt(n)
        let tolerance = 6.0 * 0.2887 / (n as f64).sqrt();
        assert!(
            (mean - 0.5).abs() < tolerance,
            "n={}: mean {} outside 0.5 ± {}",
            n,
            mean,
            tolerance
        );
    }
}

#[test]
fn more_impressions_give_narrower_interval() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(21);
    let small = sample_posterior(50, 100, 20_000, &mut rng).unwrap();
    let large = sample_posterior(5_000, 10_000, 20_000, &mut rng).unwrap();

    let small_ci = credible_interval(&small, 0.95).unwrap();
    let large_ci = credible_interval(&large, 0.95).unwrap();

    assert!(
        large_ci.width() < small_ci.width(),
        "10000 impressions: {:?}, 100 impressions: {:?}",
        large_ci,
        small_ci
    );
    assert!(small_ci.contains(0.5) && large_ci.contains(0.5));
}

#[test]
fn intervals_are_ordered_at_every_confidence() {
    let data = rate_data(&[("A", 3, 10), ("B", 0, 5), ("C", 9, 9)]);
    let dists = sample_posteriors(&data, 2_000, 31).unwrap();
    for sample in dists.values() {
        for &confidence in &[0.5, 0.8, 0.9, 0.95, 0.99] {
            let ci = credible_interval(sample, confidence).unwrap();
            assert!(ci.lower <= ci.upper, "{:?} at {}", ci, confidence);
            assert!(ci.lower >= 0.0 && ci.upper <= 1.0, "{:?}", ci);
        }
    }
}

// =============================================================================
// WINNER PROBABILITY
// =============================================================================

#[test]
fn win_probabilities_sum_to_one() {
    for k in 1..=5u64 {
        let entries: Vec<(String, u64, u64)> =
            (0..k).map(|i| (format!("v{i}"), 40 + i * 3, 100)).collect();
        let data: RateData = entries
            .iter()
            .map(|(n, c, i)| (n.clone(), VariationInput::new(*c, *i)))
            .collect();

        let dists = sample_posteriors(&data, 5_000, 41 + k).unwrap();
        let probs = probability_of_being_winner(&dists).unwrap();
        let total: f64 = probs.values().sum();

        assert_eq!(probs.len(), k as usize);
        assert!((total - 1.0).abs() < 1e-12, "k={}: total {}", k, total);
        assert!(probs.values().all(|&p| (0.0..=1.0).contains(&p)));
    }
}

#[test]
fn identical_variations_split_evenly() {
    let data = rate_data(&[("A", 500, 1000), ("B", 500, 1000)]);
    let dists = sample_posteriors(&data, 20_000, 51).unwrap();
    let probs = probability_of_being_winner(&dists).unwrap();

    for (name, p) in &probs {
        assert!((p - 0.5).abs() < 0.02, "P({}) = {}", name, p);
    }
}

// =============================================================================
// LIFT
// =============================================================================

#[test]
fn winner_lift_over_itself_is_zero() {
    let data = rate_data(&[("A", 20, 50), ("B", 25, 50), ("C", 5, 50)]);
    let dists = sample_posteriors(&data, 3_000, 61).unwrap();

    for winner in ["A", "B", "C"] {
        let lifts = winners_lift(&dists, winner, 0.95, ZeroRatePolicy::Skip).unwrap();
        assert_eq!(lifts[winner], CredibleInterval::new(0.0, 0.0));
        assert_eq!(lifts.len(), 3);
    }
}

#[test]
fn lift_interval_reflects_rate_ratio() {
    // 40% vs 20%: the winner's lift is centered near +100%
    let data = rate_data(&[("hi", 4_000, 10_000), ("lo", 2_000, 10_000)]);
    let dists = sample_posteriors(&data, 20_000, 71).unwrap();
    let lifts = winners_lift(&dists, "hi", 0.95, ZeroRatePolicy::Error).unwrap();

    let ci = lifts["lo"];
    assert!(ci.contains(1.0), "{:?}", ci);
    assert!(ci.lower > 0.8 && ci.upper < 1.2, "{:?}", ci);
}
