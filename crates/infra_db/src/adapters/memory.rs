//! In-Memory Insurance Adapter
//!
//! A process-local implementation of `InsurancePort` for running the API
//! without a database. Contents are lost when the process exits.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, InsuranceId, PortError};
use domain_insurance::{Insurance, InsurancePort};

const ADAPTER_ID: &str = "memory-insurance-adapter";

/// Map-backed implementation of the InsurancePort trait
///
/// Ids are assigned from a counter that starts at 1. Saving under an
/// explicit id moves the counter past it, mirroring a database sequence.
#[derive(Debug)]
pub struct InMemoryInsuranceAdapter {
    records: RwLock<BTreeMap<InsuranceId, Insurance>>,
    next_id: AtomicI64,
}

impl Default for InMemoryInsuranceAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryInsuranceAdapter {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Takes the next id from the sequence
    ///
    /// `i64::MAX` is never handed out, so an explicit save at `i64::MAX`
    /// leaves the sequence exhausted instead of colliding with it.
    fn allocate_id(&self) -> Result<InsuranceId, PortError> {
        self.next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| next.checked_add(1))
            .map(InsuranceId::new)
            .map_err(|_| PortError::conflict("insurance id sequence exhausted"))
    }
}

impl DomainPort for InMemoryInsuranceAdapter {}

#[async_trait]
impl HealthCheckable for InMemoryInsuranceAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy(ADAPTER_ID, 0)
    }
}

#[async_trait]
impl InsurancePort for InMemoryInsuranceAdapter {
    #[instrument(skip(self, insurance), fields(insurance_id = ?insurance.id))]
    async fn save(&self, mut insurance: Insurance) -> Result<Insurance, PortError> {
        let id = match insurance.id {
            Some(id) => {
                self.next_id.fetch_max(id.value().saturating_add(1), Ordering::SeqCst);
                id
            }
            None => self.allocate_id()?,
        };
        insurance.id = Some(id);

        let replaced = self.records.write().await.insert(id, insurance.clone());
        debug!(%id, replaced = replaced.is_some(), "Stored insurance");

        Ok(insurance)
    }

    #[instrument(skip(self), fields(insurance_id = %id))]
    async fn find_by_id(&self, id: InsuranceId) -> Result<Option<Insurance>, PortError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Insurance>, PortError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    #[instrument(skip(self), fields(insurance_id = %id))]
    async fn delete_by_id(&self, id: InsuranceId) -> Result<(), PortError> {
        let removed = self.records.write().await.remove(&id);
        debug!(removed = removed.is_some(), "Deleted insurance");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(policy_number: &str) -> Insurance {
        let start = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        Insurance::new(policy_number, "Maria Souza", start, end, 50000.0, 1.1)
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let adapter = InMemoryInsuranceAdapter::new();

        let first = adapter.save(record("A")).await.unwrap();
        let second = adapter.save(record("B")).await.unwrap();

        assert_eq!(first.id, Some(InsuranceId::new(1)));
        assert_eq!(second.id, Some(InsuranceId::new(2)));
        assert_eq!(adapter.len().await, 2);
    }

    #[tokio::test]
    async fn test_explicit_id_advances_counter() {
        let adapter = InMemoryInsuranceAdapter::new();

        adapter.save(record("A").with_id(InsuranceId::new(10))).await.unwrap();
        let next = adapter.save(record("B")).await.unwrap();

        assert_eq!(next.id, Some(InsuranceId::new(11)));
    }

    #[tokio::test]
    async fn test_explicit_max_id_is_stored() {
        let adapter = InMemoryInsuranceAdapter::new();
        let max = InsuranceId::new(i64::MAX);

        let saved = adapter.save(record("A").with_id(max)).await.unwrap();

        assert_eq!(saved.id, Some(max));
        assert_eq!(adapter.find_by_id(max).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_sequence_exhausted_after_max_id() {
        let adapter = InMemoryInsuranceAdapter::new();
        adapter.save(record("A").with_id(InsuranceId::new(i64::MAX))).await.unwrap();

        let result = adapter.save(record("B")).await;

        assert!(matches!(result, Err(PortError::Conflict { .. })));
        assert_eq!(adapter.len().await, 1);
    }

    #[tokio::test]
    async fn test_save_with_existing_id_replaces() {
        let adapter = InMemoryInsuranceAdapter::new();
        let saved = adapter.save(record("A")).await.unwrap();

        let mut changed = saved.clone();
        changed.holder_name = "João Atualizado".to_string();
        adapter.save(changed).await.unwrap();

        let all = adapter.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].holder_name, "João Atualizado");
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let adapter = InMemoryInsuranceAdapter::new();
        adapter.save(record("C").with_id(InsuranceId::new(3))).await.unwrap();
        adapter.save(record("A").with_id(InsuranceId::new(1))).await.unwrap();

        let numbers: Vec<String> = adapter
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.policy_number)
            .collect();

        assert_eq!(numbers, vec!["A", "C"]);
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let adapter = InMemoryInsuranceAdapter::new();
        adapter.delete_by_id(InsuranceId::new(42)).await.unwrap();
        assert!(adapter.is_empty().await);
    }

    #[tokio::test]
    async fn test_find_and_delete() {
        let adapter = InMemoryInsuranceAdapter::new();
        let saved = adapter.save(record("A")).await.unwrap();
        let id = saved.id.unwrap();

        assert_eq!(adapter.find_by_id(id).await.unwrap(), Some(saved));
        adapter.delete_by_id(id).await.unwrap();
        assert!(adapter.find_by_id(id).await.unwrap().is_none());
        assert!(adapter.health_check().await.is_operational());
    }
}
