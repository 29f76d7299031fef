//! Test Data Builders
//!
//! Provides a builder for insurance records with sensible defaults, so tests
//! only spell out the fields they care about.

use chrono::NaiveDate;
use core_kernel::InsuranceId;
use domain_insurance::Insurance;

use crate::fixtures::DateFixtures;

/// Builder for constructing test insurance records
#[derive(Debug, Clone)]
pub struct TestInsuranceBuilder {
    id: Option<InsuranceId>,
    policy_number: String,
    holder_name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    claim_date: Option<NaiveDate>,
    insured_amount: f64,
    risk_factor: f64,
}

impl Default for TestInsuranceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInsuranceBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: None,
            policy_number: "POL-TEST-001".to_string(),
            holder_name: "Test Holder".to_string(),
            start_date: DateFixtures::coverage_start(),
            end_date: DateFixtures::coverage_end(),
            claim_date: None,
            insured_amount: 100000.0,
            risk_factor: 1.0,
        }
    }

    /// Sets the record id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(InsuranceId::new(id));
        self
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.policy_number = number.into();
        self
    }

    /// Sets the holder name
    pub fn with_holder_name(mut self, name: impl Into<String>) -> Self {
        self.holder_name = name.into();
        self
    }

    /// Sets the coverage period
    pub fn with_coverage(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Sets the claim date
    pub fn with_claim_date(mut self, date: NaiveDate) -> Self {
        self.claim_date = Some(date);
        self
    }

    /// Sets the insured amount
    pub fn with_insured_amount(mut self, amount: f64) -> Self {
        self.insured_amount = amount;
        self
    }

    /// Sets the risk factor
    pub fn with_risk_factor(mut self, factor: f64) -> Self {
        self.risk_factor = factor;
        self
    }

    /// Builds the record
    pub fn build(self) -> Insurance {
        Insurance {
            id: self.id,
            policy_number: self.policy_number,
            holder_name: self.holder_name,
            start_date: self.start_date,
            end_date: self.end_date,
            claim_date: self.claim_date,
            insured_amount: self.insured_amount,
            risk_factor: self.risk_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let insurance = TestInsuranceBuilder::new().build();
        assert!(insurance.id.is_none());
        assert!(insurance.claim_date.is_none());
        assert_eq!(insurance.risk_factor, 1.0);
    }

    #[test]
    fn test_builder_overrides() {
        let claim = DateFixtures::ymd(2024, 6, 1);
        let insurance = TestInsuranceBuilder::new()
            .with_id(8)
            .with_claim_date(claim)
            .with_risk_factor(0.8)
            .build();

        assert_eq!(insurance.id, Some(InsuranceId::new(8)));
        assert_eq!(insurance.claim_date, Some(claim));
        assert_eq!(insurance.risk_factor, 0.8);
    }
}
