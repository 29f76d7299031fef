//! Custom Test Assertions
//!
//! Provides assertion helpers for floating-point premiums that give more
//! meaningful messages than bare `assert_eq!`.

use domain_insurance::MonthlyPremiums;

/// Relative tolerance used when comparing summed premiums
pub const PREMIUM_TOLERANCE: f64 = 1e-9;

/// Asserts that two premiums are equal within a relative tolerance
///
/// # Panics
///
/// Panics if the values differ by more than `PREMIUM_TOLERANCE` relative to the larger magnitude
pub fn assert_premium_approx_eq(actual: f64, expected: f64) {
    let scale = actual.abs().max(expected.abs()).max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= PREMIUM_TOLERANCE * scale,
        "Premiums differ: actual={}, expected={}, diff={}",
        actual,
        expected,
        diff
    );
}

/// Asserts that a monthly map has exactly the expected months and totals
///
/// # Panics
///
/// Panics if the key sets differ or any total is outside tolerance
pub fn assert_monthly_premiums(actual: &MonthlyPremiums, expected: &[(u32, f64)]) {
    let actual_months: Vec<u32> = actual.keys().copied().collect();
    let mut expected_months: Vec<u32> = expected.iter().map(|(m, _)| *m).collect();
    expected_months.sort_unstable();
    assert_eq!(actual_months, expected_months, "Month keys differ");

    for (month, total) in expected {
        assert_premium_approx_eq(actual[month], *total);
    }
}
