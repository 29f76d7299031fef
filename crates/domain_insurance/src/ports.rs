//! Insurance Domain Ports
//!
//! This module defines the storage port for insurance records, so the store
//! technology (PostgreSQL, in-memory, document store) can be swapped without
//! touching service logic.
//!
//! # Architecture
//!
//! The `InsurancePort` trait lists the four capabilities the service needs.
//! Several adapters implement it:
//!
//! - **PostgreSQL Adapter**: `infra_db::adapters::PostgresInsuranceAdapter`
//! - **In-Memory Adapter**: `infra_db::adapters::InMemoryInsuranceAdapter`
//! - **Mock Adapter**: `MockInsurancePort`, records calls for service tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_insurance::{InsurancePort, InsuranceService};
//!
//! let port: Arc<dyn InsurancePort> = match config.storage {
//!     StorageBackend::Postgres => Arc::new(PostgresInsuranceAdapter::new(pool)),
//!     StorageBackend::Memory => Arc::new(InMemoryInsuranceAdapter::new()),
//! };
//! let service = InsuranceService::new(port);
//! ```

use async_trait::async_trait;

use core_kernel::{InsuranceId, PortError, DomainPort, HealthCheckable};

use crate::insurance::Insurance;

/// Storage port for insurance records
///
/// All methods are async and return `Result<T, PortError>` so adapter
/// failures reach the caller in one shape.
#[async_trait]
pub trait InsurancePort: DomainPort + HealthCheckable {
    /// Persists a record
    ///
    /// A record without an id is inserted and receives a fresh id. A record
    /// with an id overwrites whatever is stored under that id.
    ///
    /// # Returns
    ///
    /// The stored record, always with `id` set
    async fn save(&self, insurance: Insurance) -> Result<Insurance, PortError>;

    /// Retrieves a record by id
    ///
    /// # Returns
    ///
    /// `None` when nothing is stored under the id
    async fn find_by_id(&self, id: InsuranceId) -> Result<Option<Insurance>, PortError>;

    /// Retrieves every stored record, ordered by id
    async fn find_all(&self) -> Result<Vec<Insurance>, PortError>;

    /// Removes the record stored under the id
    ///
    /// Callers are expected to check existence first; removing a missing id
    /// is adapter-defined.
    async fn delete_by_id(&self, id: InsuranceId) -> Result<(), PortError>;
}

/// Mock implementation of InsurancePort for testing
///
/// Stores records in memory and keeps a log of every call, so tests can
/// assert which storage operations a service call performed.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use core_kernel::HealthCheckResult;

    /// A storage call observed by the mock
    #[derive(Debug, Clone, PartialEq)]
    pub enum PortCall {
        Save(Option<InsuranceId>),
        FindById(InsuranceId),
        FindAll,
        DeleteById(InsuranceId),
    }

    /// In-memory mock implementation of InsurancePort
    #[derive(Debug, Default)]
    pub struct MockInsurancePort {
        records: Arc<RwLock<BTreeMap<InsuranceId, Insurance>>>,
        calls: Arc<RwLock<Vec<PortCall>>>,
        failure: Option<String>,
    }

    impl MockInsurancePort {
        /// Creates a new, empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with records; records without an id are skipped
        pub async fn with_records(records: Vec<Insurance>) -> Self {
            let port = Self::new();
            {
                let mut stored = port.records.write().await;
                for record in records {
                    if let Some(id) = record.id {
                        stored.insert(id, record);
                    }
                }
            }
            port
        }

        /// Creates a mock whose every call fails with a connection error
        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                failure: Some(message.into()),
                ..Self::default()
            }
        }

        /// Returns every call made so far, in order
        pub async fn calls(&self) -> Vec<PortCall> {
            self.calls.read().await.clone()
        }

        /// Number of `save` calls made so far
        pub async fn save_count(&self) -> usize {
            self.count(|c| matches!(c, PortCall::Save(_))).await
        }

        /// Number of `delete_by_id` calls made so far
        pub async fn delete_count(&self) -> usize {
            self.count(|c| matches!(c, PortCall::DeleteById(_))).await
        }

        async fn count(&self, predicate: impl Fn(&PortCall) -> bool) -> usize {
            self.calls.read().await.iter().filter(|c| predicate(c)).count()
        }

        async fn record(&self, call: PortCall) -> Result<(), PortError> {
            self.calls.write().await.push(call);
            match &self.failure {
                Some(message) => Err(PortError::connection(message.clone())),
                None => Ok(()),
            }
        }
    }

    impl DomainPort for MockInsurancePort {}

    #[async_trait]
    impl HealthCheckable for MockInsurancePort {
        async fn health_check(&self) -> HealthCheckResult {
            match &self.failure {
                Some(message) => HealthCheckResult::unhealthy("mock-insurance-port", 0, message.clone()),
                None => HealthCheckResult::healthy("mock-insurance-port", 0),
            }
        }
    }

    #[async_trait]
    impl InsurancePort for MockInsurancePort {
        async fn save(&self, mut insurance: Insurance) -> Result<Insurance, PortError> {
            self.record(PortCall::Save(insurance.id)).await?;

            let mut records = self.records.write().await;
            let id = match insurance.id {
                Some(id) => id,
                None => {
                    let next = match records.keys().next_back() {
                        Some(last) => last
                            .value()
                            .checked_add(1)
                            .ok_or_else(|| PortError::conflict("insurance id sequence exhausted"))?,
                        None => 1,
                    };
                    InsuranceId::new(next)
                }
            };
            insurance.id = Some(id);
            records.insert(id, insurance.clone());
            Ok(insurance)
        }

        async fn find_by_id(&self, id: InsuranceId) -> Result<Option<Insurance>, PortError> {
            self.record(PortCall::FindById(id)).await?;
            Ok(self.records.read().await.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Insurance>, PortError> {
            self.record(PortCall::FindAll).await?;
            Ok(self.records.read().await.values().cloned().collect())
        }

        async fn delete_by_id(&self, id: InsuranceId) -> Result<(), PortError> {
            self.record(PortCall::DeleteById(id)).await?;
            self.records.write().await.remove(&id);
            Ok(())
        }
    }
}
