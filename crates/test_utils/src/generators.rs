//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating insurance records and their
//! numeric inputs.

use chrono::NaiveDate;
use domain_insurance::Insurance;
use proptest::prelude::*;

use crate::builders::TestInsuranceBuilder;

/// Strategy for non-negative insured amounts
pub fn insured_amount_strategy() -> impl Strategy<Value = f64> {
    0.0f64..10_000_000.0f64
}

/// Strategy for non-negative risk factors
pub fn risk_factor_strategy() -> impl Strategy<Value = f64> {
    0.0f64..5.0f64
}

/// Strategy for any valid calendar date between 2000 and 2040
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2040i32, 1u32..=12u32, 1u32..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for an optional claim date
pub fn claim_date_strategy() -> impl Strategy<Value = Option<NaiveDate>> {
    prop::option::of(date_strategy())
}

/// Strategy for an unsaved insurance record
pub fn insurance_strategy() -> impl Strategy<Value = Insurance> {
    (
        insured_amount_strategy(),
        risk_factor_strategy(),
        claim_date_strategy(),
    )
        .prop_map(|(amount, factor, claim)| {
            let builder = TestInsuranceBuilder::new()
                .with_insured_amount(amount)
                .with_risk_factor(factor);
            match claim {
                Some(date) => builder.with_claim_date(date).build(),
                None => builder.build(),
            }
        })
}

/// Strategy for a collection of records
pub fn insurance_list_strategy(max_len: usize) -> impl Strategy<Value = Vec<Insurance>> {
    prop::collection::vec(insurance_strategy(), 0..max_len)
}
