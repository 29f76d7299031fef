//! Insurance DTOs
//!
//! Wire shapes for insurance records. Field names are camelCase and dates are
//! `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::InsuranceId;
use domain_insurance::Insurance;

/// Body of create and update requests
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceRequest {
    /// Accepted but overwritten by the path id on update
    #[serde(default)]
    pub id: Option<i64>,
    pub policy_number: String,
    pub holder_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub claim_date: Option<NaiveDate>,
    pub insured_amount: f64,
    pub risk_factor: f64,
}

impl From<InsuranceRequest> for Insurance {
    fn from(request: InsuranceRequest) -> Self {
        Insurance {
            id: request.id.map(InsuranceId::new),
            policy_number: request.policy_number,
            holder_name: request.holder_name,
            start_date: request.start_date,
            end_date: request.end_date,
            claim_date: request.claim_date,
            insured_amount: request.insured_amount,
            risk_factor: request.risk_factor,
        }
    }
}

/// Insurance record as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceResponse {
    pub id: Option<i64>,
    pub policy_number: String,
    pub holder_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub claim_date: Option<NaiveDate>,
    pub insured_amount: f64,
    pub risk_factor: f64,
}

impl From<Insurance> for InsuranceResponse {
    fn from(insurance: Insurance) -> Self {
        Self {
            id: insurance.id.map(|id| id.value()),
            policy_number: insurance.policy_number,
            holder_name: insurance.holder_name,
            start_date: insurance.start_date,
            end_date: insurance.end_date,
            claim_date: insurance.claim_date,
            insured_amount: insurance.insured_amount,
            risk_factor: insurance.risk_factor,
        }
    }
}
