//! Invalid inputs are rejected before any sampling happens.

use rate_comparison::{
    rate_comparison, Error, RateComparison, RateData, ValidationError, VariationInput,
};

fn valid_data() -> RateData {
    let mut data = RateData::new();
    data.insert("A".to_string(), VariationInput::new(5, 10));
    data
}

#[test]
fn confidence_bounds_rejected() {
    for confidence in [0.0, 1.0, -0.1, 1.1, f64::NAN, f64::INFINITY] {
        let err = rate_comparison(&valid_data(), confidence, 100).unwrap_err();
        assert!(
            matches!(err, Error::Validation(ValidationError::InvalidConfidence(_))),
            "confidence {} gave {:?}",
            confidence,
            err
        );
    }
}

#[test]
fn zero_samples_rejected() {
    let err = rate_comparison(&valid_data(), 0.95, 0).unwrap_err();
    assert_eq!(err, Error::Validation(ValidationError::InvalidSampleCount));
}

#[test]
fn empty_rate_data_rejected() {
    let err = RateComparison::new().run(&RateData::new()).unwrap_err();
    assert_eq!(err, Error::Validation(ValidationError::NoVariations));
}

#[test]
fn conversions_above_impressions_rejected() {
    let mut data = valid_data();
    data.insert("Z".to_string(), VariationInput::new(11, 10));

    let err = RateComparison::new().num_samples(10).run(&data).unwrap_err();
    assert_eq!(
        err,
        Error::Validation(ValidationError::InvalidCounts {
            variation: "Z".to_string(),
            conversions: 11,
            impressions: 10,
        })
    );
}

#[test]
fn invalid_counts_found_before_any_variation_is_sampled() {
    // "A" sorts first; sampling it with usize::MAX draws would panic on allocation.
    let mut data = valid_data();
    data.insert("Z".to_string(), VariationInput::new(3, 2));

    let err = RateComparison::new()
        .num_samples(usize::MAX)
        .run(&data)
        .unwrap_err();
    assert!(
        matches!(
            err,
            Error::Validation(ValidationError::InvalidCounts { ref variation, .. })
                if variation == "Z"
        ),
        "{:?}",
        err
    );
}

#[test]
fn single_variation_is_its_own_winner() {
    let result = RateComparison::new().num_samples(500).run(&valid_data()).unwrap();
    assert_eq!(result.winner(), Some("A"));
    assert_eq!(result.statistics.probability_to_be_better["A"], 1.0);
}
