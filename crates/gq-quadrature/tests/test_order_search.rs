//! End-to-end tests of the adaptive order search on the worked example:
//! f(x) = x⁶ − x²·sin 2x on [1, 3], reference value 317.3442467.

use approx::assert_relative_eq;
use gq_core::Error;
use gq_quadrature::{
    approximate_integral, find_order, legendre_rule, scale_rule, ErrorNorm, OrderSearch, Trial,
};

fn degree_six(x: f64) -> f64 {
    x.powi(6) - x * x * (2.0 * x).sin()
}

const REFERENCE: f64 = 317.3442467;

// Expected approximations per order, to twelve significant digits.
const EXPECTED_VALUES: [f64; 7] = [
    134.0544199625,
    306.8199344959,
    317.2641517338,
    317.3453903342,
    317.3442267220,
    317.3442468900,
    317.3442466722,
];

#[test]
fn per_order_values_match_the_reference_algorithm() {
    for (i, &expected) in EXPECTED_VALUES.iter().enumerate() {
        let n = i + 1;
        let rule = legendre_rule(n).unwrap();
        let scaled = scale_rule(1.0, 3.0, &rule).unwrap();
        let value = approximate_integral(&degree_six, &scaled);
        assert_relative_eq!(value, expected, epsilon = 1e-9);
    }
}

#[test]
fn search_replays_the_reference_trial_log() {
    let mut log: Vec<Trial> = Vec::new();
    let result = OrderSearch::new(REFERENCE, 1e-6)
        .unwrap()
        .with_norm(ErrorNorm::Absolute)
        .run_with(&degree_six, 1.0, 3.0, |t| log.push(*t))
        .unwrap();

    assert_eq!(result.order, 6);
    assert_eq!(log.len(), 6);
    for (trial, &expected) in log.iter().zip(EXPECTED_VALUES.iter()) {
        assert!(
            (trial.value - expected).abs() < 1e-9,
            "order {}: got {}, expected {expected}",
            trial.order,
            trial.value
        );
        assert!(
            (trial.error - (trial.value - REFERENCE).abs()).abs() < 1e-15,
            "error field inconsistent at order {}",
            trial.order
        );
    }
}

#[test]
fn relative_and_absolute_searches_pick_different_orders() {
    let relative = find_order(&degree_six, 1.0, 3.0, REFERENCE, 1e-6, 64).unwrap();
    let absolute = OrderSearch::new(REFERENCE, 1e-6)
        .unwrap()
        .with_norm(ErrorNorm::Absolute)
        .run(&degree_six, 1.0, 3.0)
        .unwrap();

    // Relative tolerance 1e-6 allows an absolute deviation of ~3.2e-4 here,
    // so the relative search settles one order earlier.
    assert_eq!(relative.order, 5);
    assert_eq!(absolute.order, 6);
}

#[test]
fn rules_are_rebuilt_per_trial_with_no_shared_state() {
    // Two interleaved searches over different intervals must not affect
    // each other.
    let a = find_order(&degree_six, 1.0, 3.0, REFERENCE, 1e-6, 64).unwrap();
    let b = find_order(&|x: f64| x * x, 0.0, 3.0, 9.0, 1e-12, 64).unwrap();
    let a_again = find_order(&degree_six, 1.0, 3.0, REFERENCE, 1e-6, 64).unwrap();

    assert_eq!(a, a_again);
    assert_eq!(b.order, 2);
}

#[test]
fn max_order_exceeded_is_reported_not_looped() {
    let err = find_order(&degree_six, 1.0, 3.0, REFERENCE, 1e-14, 12).unwrap_err();
    assert_eq!(err, Error::MaxOrderExceeded { max_order: 12 });
}
