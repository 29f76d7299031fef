//! Premium calculation and monthly claim aggregation
//!
//! Both functions are pure: they never touch storage and never fail.

use std::collections::BTreeMap;

use crate::insurance::Insurance;

/// Share of the risk-weighted insured amount charged as premium
pub const PREMIUM_RATE: f64 = 0.05;

/// Summed premiums keyed by claim month (1-12)
///
/// Ordered by month so iteration and JSON output are deterministic.
pub type MonthlyPremiums = BTreeMap<u32, f64>;

/// Calculates a premium as `insured_amount * risk_factor * PREMIUM_RATE`
///
/// No range checks are applied; zero or negative inputs produce the
/// arithmetic result.
///
/// # Example
///
/// ```rust
/// use domain_insurance::calculate_premium;
///
/// assert_eq!(calculate_premium(100000.0, 1.2), 6000.0);
/// ```
pub fn calculate_premium(insured_amount: f64, risk_factor: f64) -> f64 {
    insured_amount * risk_factor * PREMIUM_RATE
}

/// Sums premiums of claimed policies by the month of their claim date
///
/// Records without a claim date are skipped. The year of the claim date is
/// ignored, so March 2024 and March 2025 land in the same bucket. Premiums
/// are accumulated in input order.
///
/// Returns an empty map when nothing was claimed.
pub fn aggregate_by_claim_month<'a, I>(records: I) -> MonthlyPremiums
where
    I: IntoIterator<Item = &'a Insurance>,
{
    let mut totals = MonthlyPremiums::new();

    for record in records {
        if let Some(month) = record.claim_month() {
            let premium = calculate_premium(record.insured_amount, record.risk_factor);
            totals
                .entry(month)
                .and_modify(|total| *total += premium)
                .or_insert(premium);
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn claimed(month: u32, year: i32) -> Insurance {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        Insurance::new("P-1", "Holder", start, start, 100000.0, 1.2)
            .with_claim_date(NaiveDate::from_ymd_opt(year, month, 15).unwrap())
    }

    #[test]
    fn test_formula() {
        assert_eq!(calculate_premium(50000.0, 1.0), 2500.0);
        assert_eq!(calculate_premium(0.0, 3.0), 0.0);
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<Insurance> = vec![];
        assert!(aggregate_by_claim_month(&records).is_empty());
    }

    #[test]
    fn test_merges_years_into_one_month() {
        let records = vec![claimed(3, 2024), claimed(3, 2025)];
        let totals = aggregate_by_claim_month(&records);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&3], 12000.0);
    }

    #[test]
    fn test_iteration_is_ordered_by_month() {
        let records = vec![claimed(11, 2025), claimed(2, 2025), claimed(7, 2025)];
        let months: Vec<u32> = aggregate_by_claim_month(&records).into_keys().collect();
        assert_eq!(months, vec![2, 7, 11]);
    }
}
