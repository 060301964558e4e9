//! Full comparisons on realistic banner test data.

use rate_comparison::output::{from_json, to_json};
use rate_comparison::{rate_comparison, RateComparison, RateData, VariationInput};

fn banner_test() -> RateData {
    let mut data = RateData::new();
    data.insert("A".to_string(), VariationInput::new(500, 1000));
    data.insert("B".to_string(), VariationInput::new(480, 1000));
    data
}

#[test]
fn two_banner_comparison() {
    let result = rate_comparison(&banner_test(), 0.95, 20_000).unwrap();
    let stats = &result.statistics;

    let p_a = stats.probability_to_be_better["A"];
    let p_b = stats.probability_to_be_better["B"];
    assert!(p_a > 0.5, "P(A) = {}", p_a);
    assert!(p_a > p_b, "P(A) = {}, P(B) = {}", p_a, p_b);
    assert_eq!(result.winner(), Some("A"));

    // A's rate interval is centered near 0.5
    let ci_a = stats.confidence_interval["A"];
    assert!((ci_a.midpoint() - 0.5).abs() < 0.01, "{:?}", ci_a);
    assert!(ci_a.contains(0.5));

    // Lift of A over B is small: (0.5 - 0.48) / 0.48 ≈ +4%
    let lift_b = stats.winners_percent_lift["B"];
    assert!(lift_b.lower < 0.0 && lift_b.upper > 0.0, "{:?}", lift_b);
    assert!(
        lift_b.midpoint() > 0.0 && lift_b.midpoint() < 0.1,
        "{:?}",
        lift_b
    );
    assert_eq!(stats.winners_percent_lift["A"].lower, 0.0);
    assert_eq!(stats.winners_percent_lift["A"].upper, 0.0);
}

#[test]
fn three_banner_comparison() {
    let mut data = banner_test();
    data.insert("C".to_string(), VariationInput::new(488, 1000));

    let result = RateComparison::new().seed(2024).run(&data).unwrap();
    let probs = &result.statistics.probability_to_be_better;

    assert_eq!(result.winner(), Some("A"));
    assert!(probs["A"] > probs["C"] && probs["C"] > probs["B"], "{:?}", probs);
    assert_eq!(result.num_samples(), 20_000);
}

#[test]
fn different_seeds_give_close_results() {
    let a = RateComparison::new().seed(1).run(&banner_test()).unwrap();
    let b = RateComparison::new().seed(2).run(&banner_test()).unwrap();

    assert_ne!(a.distributions, b.distributions);
    let diff = (a.statistics.probability_to_be_better["A"]
        - b.statistics.probability_to_be_better["A"])
        .abs();
    assert!(diff < 0.03, "seed-to-seed difference {}", diff);
}

#[test]
fn result_survives_json() {
    let result = RateComparison::new()
        .num_samples(200)
        .run(&banner_test())
        .unwrap();
    let json = to_json(&result).unwrap();

    assert!(json.contains("\"Probability to Be Better\""));
    assert_eq!(from_json(&json).unwrap(), result);
}
