//! Insurance application service
//!
//! `InsuranceService` is the single orchestration point between callers and
//! the storage port. Update, delete and premium calculation look the record
//! up first and fail with `InsuranceError::NotFound` before touching the
//! store again.
//!
//! # Concurrency
//!
//! The service holds no state of its own and can be shared across tasks.
//! Check-then-act sequences are not atomic: a delete racing between the
//! existence check and the save of an `update` lets the update write the
//! record back, and concurrent updates of one id are last-writer-wins.

use std::sync::Arc;

use tracing::instrument;

use core_kernel::{HealthCheckResult, InsuranceId};

use crate::error::InsuranceError;
use crate::insurance::Insurance;
use crate::ports::InsurancePort;
use crate::premium::{aggregate_by_claim_month, MonthlyPremiums};

/// Service for managing insurance records and deriving premiums
///
/// # Example
///
/// ```rust,ignore
/// let service = InsuranceService::new(Arc::new(InMemoryInsuranceAdapter::new()));
/// let saved = service.create(insurance).await?;
/// match service.calculate_premium(saved.id.unwrap()).await {
///     Ok(premium) => println!("premium {premium}"),
///     Err(e) if e.is_not_found() => println!("gone"),
///     Err(e) => return Err(e.into()),
/// }
/// ```
#[derive(Clone)]
pub struct InsuranceService {
    port: Arc<dyn InsurancePort>,
}

impl InsuranceService {
    /// Creates a new service backed by the given storage port
    pub fn new(port: Arc<dyn InsurancePort>) -> Self {
        Self { port }
    }

    /// Persists a new record
    ///
    /// Always delegates to `save`, whether or not the record carries an id.
    #[instrument(skip(self, insurance), fields(policy_number = %insurance.policy_number))]
    pub async fn create(&self, insurance: Insurance) -> Result<Insurance, InsuranceError> {
        Ok(self.port.save(insurance).await?)
    }

    /// Looks a record up by id; absence is `Ok(None)`, not an error
    #[instrument(skip(self), fields(insurance_id = %id))]
    pub async fn get_by_id(&self, id: InsuranceId) -> Result<Option<Insurance>, InsuranceError> {
        Ok(self.port.find_by_id(id).await?)
    }

    /// Returns every stored record
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Insurance>, InsuranceError> {
        Ok(self.port.find_all().await?)
    }

    /// Replaces the record stored under `id`
    ///
    /// Whatever id the incoming record carries is overwritten with `id`.
    ///
    /// # Errors
    ///
    /// `InsuranceError::NotFound` if nothing is stored under `id`; nothing is saved in that case
    #[instrument(skip(self, insurance), fields(insurance_id = %id))]
    pub async fn update(
        &self,
        id: InsuranceId,
        mut insurance: Insurance,
    ) -> Result<Insurance, InsuranceError> {
        self.require_existing(id).await?;

        insurance.id = Some(id);
        Ok(self.port.save(insurance).await?)
    }

    /// Removes the record stored under `id`
    ///
    /// # Errors
    ///
    /// `InsuranceError::NotFound` if nothing is stored under `id`; nothing is deleted in that case
    #[instrument(skip(self), fields(insurance_id = %id))]
    pub async fn delete(&self, id: InsuranceId) -> Result<(), InsuranceError> {
        self.require_existing(id).await?;

        Ok(self.port.delete_by_id(id).await?)
    }

    /// Calculates the premium of the record stored under `id`
    ///
    /// # Errors
    ///
    /// `InsuranceError::NotFound` if nothing is stored under `id`
    #[instrument(skip(self), fields(insurance_id = %id))]
    pub async fn calculate_premium(&self, id: InsuranceId) -> Result<f64, InsuranceError> {
        let insurance = self.require_existing(id).await?;

        Ok(insurance.calculate_premium())
    }

    /// Sums premiums of all claimed records by claim month
    ///
    /// An empty map means no stored record has a claim date.
    #[instrument(skip(self))]
    pub async fn calculate_total_premium_by_month(&self) -> Result<MonthlyPremiums, InsuranceError> {
        let all = self.port.find_all().await?;

        Ok(aggregate_by_claim_month(&all))
    }

    /// Reports the health of the underlying storage port
    pub async fn health_check(&self) -> HealthCheckResult {
        self.port.health_check().await
    }

    async fn require_existing(&self, id: InsuranceId) -> Result<Insurance, InsuranceError> {
        self.port
            .find_by_id(id)
            .await?
            .ok_or_else(|| InsuranceError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::{MockInsurancePort, PortCall};
    use chrono::NaiveDate;

    fn record(id: i64) -> Insurance {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        Insurance::new("ABC123", "Maria Souza", start, end, 50000.0, 1.1)
            .with_id(InsuranceId::new(id))
    }

    #[tokio::test]
    async fn test_update_checks_before_saving() {
        let port = Arc::new(MockInsurancePort::with_records(vec![record(1)]).await);
        let service = InsuranceService::new(port.clone());

        service.update(InsuranceId::new(1), record(1)).await.unwrap();

        assert_eq!(
            port.calls().await,
            vec![
                PortCall::FindById(InsuranceId::new(1)),
                PortCall::Save(Some(InsuranceId::new(1))),
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_missing_never_deletes() {
        let port = Arc::new(MockInsurancePort::new());
        let service = InsuranceService::new(port.clone());

        let error = service.delete(InsuranceId::new(3)).await.unwrap_err();

        assert!(error.is_not_found());
        assert_eq!(port.calls().await, vec![PortCall::FindById(InsuranceId::new(3))]);
    }
}
