//! Domain Adapters
//!
//! Implementations of `InsurancePort` backed by PostgreSQL or by process
//! memory.
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresInsuranceAdapter;
//! use domain_insurance::InsurancePort;
//!
//! let adapter = PostgresInsuranceAdapter::new(pool);
//! let record = adapter.find_by_id(id).await?;
//! ```

pub mod postgres;
pub mod memory;

pub use postgres::PostgresInsuranceAdapter;
pub use memory::InMemoryInsuranceAdapter;
