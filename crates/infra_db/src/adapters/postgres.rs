//! PostgreSQL Insurance Adapter
//!
//! This module provides the database adapter for the insurance domain,
//! implementing the `InsurancePort` trait via the `InsuranceRepository`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresInsuranceAdapter;
//! use domain_insurance::InsuranceService;
//! use std::sync::Arc;
//!
//! let adapter = PostgresInsuranceAdapter::new(pool);
//! let service = InsuranceService::new(Arc::new(adapter));
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    DomainPort, HealthCheckResult, HealthCheckable, InsuranceId, PortError,
};
use domain_insurance::{Insurance, InsurancePort};

use crate::error::DatabaseError;
use crate::repositories::{InsuranceRepository, InsuranceRow, NewInsurance};

const ADAPTER_ID: &str = "postgres-insurance-adapter";

/// PostgreSQL-backed implementation of the InsurancePort trait
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - Unique, not-null and check violations -> `PortError::Conflict`
/// - Connection and pool errors -> `PortError::Connection`
/// - Other errors -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct PostgresInsuranceAdapter {
    repository: InsuranceRepository,
    pool: PgPool,
}

impl PostgresInsuranceAdapter {
    /// Creates a new PostgreSQL insurance adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: InsuranceRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &InsuranceRepository {
        &self.repository
    }
}

impl DomainPort for PostgresInsuranceAdapter {}

#[async_trait]
impl HealthCheckable for PostgresInsuranceAdapter {
    /// Runs `SELECT 1` against the pool
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult::healthy(ADAPTER_ID, latency_ms),
            Err(e) => HealthCheckResult::unhealthy(
                ADAPTER_ID,
                latency_ms,
                format!("Database error: {}", e),
            ),
        }
    }
}

#[async_trait]
impl InsurancePort for PostgresInsuranceAdapter {
    #[instrument(skip(self, insurance), fields(insurance_id = ?insurance.id))]
    async fn save(&self, insurance: Insurance) -> Result<Insurance, PortError> {
        let id = insurance.id;
        let values = to_new_insurance(insurance);

        let row = match id {
            Some(id) => {
                debug!("Upserting insurance under explicit id");
                self.repository.upsert(id.value(), values).await
            }
            None => {
                debug!("Inserting new insurance");
                self.repository.insert(values).await
            }
        }
        .map_err(db_to_port_error)?;

        Ok(row_to_insurance(row))
    }

    #[instrument(skip(self), fields(insurance_id = %id))]
    async fn find_by_id(&self, id: InsuranceId) -> Result<Option<Insurance>, PortError> {
        debug!("Fetching insurance by ID");

        let row = self
            .repository
            .find_by_id(id.value())
            .await
            .map_err(db_to_port_error)?;

        Ok(row.map(row_to_insurance))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Insurance>, PortError> {
        debug!("Fetching all insurance records");

        let rows = self.repository.find_all().await.map_err(db_to_port_error)?;

        Ok(rows.into_iter().map(row_to_insurance).collect())
    }

    #[instrument(skip(self), fields(insurance_id = %id))]
    async fn delete_by_id(&self, id: InsuranceId) -> Result<(), PortError> {
        let removed = self
            .repository
            .delete(id.value())
            .await
            .map_err(db_to_port_error)?;

        debug!(removed, "Deleted insurance");
        Ok(())
    }
}

// ============================================================================
// Conversion Helpers
// ============================================================================

/// Converts DatabaseError to PortError
fn db_to_port_error(e: DatabaseError) -> PortError {
    if e.is_constraint_violation() {
        PortError::conflict(e.to_string())
    } else if e.is_connection_error() {
        PortError::Connection {
            message: e.to_string(),
            source: Some(Box::new(e)),
        }
    } else {
        PortError::Internal {
            message: e.to_string(),
            source: Some(Box::new(e)),
        }
    }
}

fn to_new_insurance(insurance: Insurance) -> NewInsurance {
    NewInsurance {
        policy_number: insurance.policy_number,
        holder_name: insurance.holder_name,
        start_date: insurance.start_date,
        end_date: insurance.end_date,
        claim_date: insurance.claim_date,
        insured_amount: insurance.insured_amount,
        risk_factor: insurance.risk_factor,
    }
}

fn row_to_insurance(row: InsuranceRow) -> Insurance {
    Insurance {
        id: Some(InsuranceId::new(row.id)),
        policy_number: row.policy_number,
        holder_name: row.holder_name,
        start_date: row.start_date,
        end_date: row.end_date,
        claim_date: row.claim_date,
        insured_amount: row.insured_amount,
        risk_factor: row.risk_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn sample_row() -> InsuranceRow {
        InsuranceRow {
            id: 12,
            policy_number: "ABC123".to_string(),
            holder_name: "Maria Souza".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            claim_date: NaiveDate::from_ymd_opt(2025, 3, 20),
            insured_amount: 50000.0,
            risk_factor: 1.1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_to_insurance_sets_id() {
        let insurance = row_to_insurance(sample_row());
        assert_eq!(insurance.id, Some(InsuranceId::new(12)));
        assert_eq!(insurance.claim_month(), Some(3));
        assert_eq!(insurance.insured_amount, 50000.0);
    }

    #[test]
    fn test_to_new_insurance_drops_id() {
        let insurance = row_to_insurance(sample_row());
        let values = to_new_insurance(insurance);
        assert_eq!(values.policy_number, "ABC123");
        assert_eq!(values.risk_factor, 1.1);
    }

    #[test]
    fn test_db_error_translation() {
        assert!(matches!(
            db_to_port_error(DatabaseError::PoolExhausted),
            PortError::Connection { source: Some(_), .. }
        ));
        assert!(matches!(
            db_to_port_error(DatabaseError::DuplicateEntry("insurance_pkey".into())),
            PortError::Conflict { .. }
        ));
        assert!(matches!(
            db_to_port_error(DatabaseError::ConstraintViolation("holder_name".into())),
            PortError::Conflict { .. }
        ));
        assert!(matches!(
            db_to_port_error(DatabaseError::QueryFailed("syntax".into())),
            PortError::Internal { .. }
        ));
    }
}
