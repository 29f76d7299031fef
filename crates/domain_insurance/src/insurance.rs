//! Insurance entity
//!
//! A single policy record. The entity carries no cross-field invariants:
//! coverage dates are not ordered against each other and amounts are not
//! range checked. The only structural rule is that `id` is present exactly
//! when the record has been persisted.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use core_kernel::InsuranceId;
use crate::premium;

/// An insurance policy record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insurance {
    /// Store-assigned identifier, `None` until the record is saved
    pub id: Option<InsuranceId>,
    /// Business policy number (not unique at domain level)
    pub policy_number: String,
    /// Name of the policyholder
    pub holder_name: String,
    /// Start of coverage
    pub start_date: NaiveDate,
    /// End of coverage
    pub end_date: NaiveDate,
    /// Date of the recorded claim, if any
    pub claim_date: Option<NaiveDate>,
    /// Insured amount
    pub insured_amount: f64,
    /// Risk multiplier, e.g. 1.2 for higher risk or 0.8 for lower risk
    pub risk_factor: f64,
}

impl Insurance {
    /// Creates an unsaved record with no claim
    pub fn new(
        policy_number: impl Into<String>,
        holder_name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        insured_amount: f64,
        risk_factor: f64,
    ) -> Self {
        Self {
            id: None,
            policy_number: policy_number.into(),
            holder_name: holder_name.into(),
            start_date,
            end_date,
            claim_date: None,
            insured_amount,
            risk_factor,
        }
    }

    /// Sets the identifier
    pub fn with_id(mut self, id: InsuranceId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the claim date
    pub fn with_claim_date(mut self, claim_date: NaiveDate) -> Self {
        self.claim_date = Some(claim_date);
        self
    }

    /// Returns true once the store has assigned an identifier
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Calculates this policy's premium from its insured amount and risk factor
    pub fn calculate_premium(&self) -> f64 {
        premium::calculate_premium(self.insured_amount, self.risk_factor)
    }

    /// Month (1-12) of the claim date, ignoring the year
    pub fn claim_month(&self) -> Option<u32> {
        self.claim_date.map(|date| date.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Insurance {
        Insurance::new(
            "ABC123",
            "João Silva",
            date(2025, 1, 1),
            date(2026, 1, 1),
            100000.0,
            1.2,
        )
    }

    #[test]
    fn test_new_record_is_not_persisted() {
        let insurance = sample();
        assert!(insurance.id.is_none());
        assert!(!insurance.is_persisted());
        assert!(insurance.claim_date.is_none());
    }

    #[test]
    fn test_with_id_marks_persisted() {
        let insurance = sample().with_id(InsuranceId::new(3));
        assert!(insurance.is_persisted());
        assert_eq!(insurance.id, Some(InsuranceId::new(3)));
    }

    #[test]
    fn test_calculate_premium() {
        assert_eq!(sample().calculate_premium(), 6000.0);
    }

    #[test]
    fn test_claim_month_ignores_year() {
        let a = sample().with_claim_date(date(2024, 3, 1));
        let b = sample().with_claim_date(date(2031, 3, 28));
        assert_eq!(a.claim_month(), Some(3));
        assert_eq!(a.claim_month(), b.claim_month());
        assert_eq!(sample().claim_month(), None);
    }

    #[test]
    fn test_dates_are_not_validated() {
        let inverted = Insurance::new("X", "Y", date(2026, 1, 1), date(2025, 1, 1), -5.0, 0.0);
        assert!(inverted.start_date > inverted.end_date);
        assert_eq!(inverted.calculate_premium(), 0.0);
    }
}
