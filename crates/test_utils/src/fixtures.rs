//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for insurance records. These fixtures are
//! consistent and predictable so expected premiums can be written as literals.

use chrono::NaiveDate;
use core_kernel::InsuranceId;
use domain_insurance::Insurance;

use crate::builders::TestInsuranceBuilder;

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// Standard coverage start (Mar 15, 2025)
    pub fn coverage_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    /// Standard coverage end (Mar 15, 2026)
    pub fn coverage_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    /// A claim date in March 2025
    pub fn march_claim() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    /// A claim date in April 2025
    pub fn april_claim() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
    }

    /// Builds a date, panicking on an invalid calendar day
    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

/// Fixture for insurance records
pub struct InsuranceFixtures;

impl InsuranceFixtures {
    /// Insured amount used by the aggregation fixtures
    pub const CLAIM_AMOUNT: f64 = 100000.0;

    /// Risk factor used by the aggregation fixtures
    pub const CLAIM_RISK_FACTOR: f64 = 1.2;

    /// Premium of one aggregation fixture (100000 x 1.2 x 0.05)
    pub const CLAIM_PREMIUM: f64 = 6000.0;

    /// Unsaved record for Maria Souza (50000, risk 1.1), no claim
    pub fn maria() -> Insurance {
        TestInsuranceBuilder::new()
            .with_policy_number("ABC123")
            .with_holder_name("Maria Souza")
            .with_insured_amount(50000.0)
            .with_risk_factor(1.1)
            .build()
    }

    /// Unsaved record for João Silva (100000, risk 1.2), no claim
    pub fn joao() -> Insurance {
        TestInsuranceBuilder::new()
            .with_policy_number("ABC123")
            .with_holder_name("João Silva")
            .with_insured_amount(100000.0)
            .with_risk_factor(1.2)
            .build()
    }

    /// Persisted copy of `maria()` under the given id
    pub fn persisted_maria(id: i64) -> Insurance {
        Self::maria().with_id(InsuranceId::new(id))
    }

    /// Persisted 100000/1.2 record claimed on the given date
    pub fn claimed_on(id: i64, claim_date: NaiveDate) -> Insurance {
        TestInsuranceBuilder::new()
            .with_id(id)
            .with_insured_amount(Self::CLAIM_AMOUNT)
            .with_risk_factor(Self::CLAIM_RISK_FACTOR)
            .with_claim_date(claim_date)
            .build()
    }
}

/// Fixture for JSON request bodies in the transport's camelCase shape
pub struct JsonFixtures;

impl JsonFixtures {
    /// Create/update body for the Maria Souza record
    pub fn maria_body() -> serde_json::Value {
        serde_json::json!({
            "policyNumber": "ABC123",
            "holderName": "Maria Souza",
            "startDate": "2025-03-15",
            "endDate": "2026-03-15",
            "insuredAmount": 50000.0,
            "riskFactor": 1.1
        })
    }

    /// Body with a claim date, for the aggregation endpoint
    pub fn claimed_body(claim_date: &str) -> serde_json::Value {
        serde_json::json!({
            "policyNumber": "CLM001",
            "holderName": "Claimant",
            "startDate": "2025-01-01",
            "endDate": "2026-01-01",
            "claimDate": claim_date,
            "insuredAmount": 100000.0,
            "riskFactor": 1.2
        })
    }
}
