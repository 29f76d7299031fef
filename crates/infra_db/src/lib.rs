//! Infrastructure Storage Layer
//!
//! This crate provides the storage adapters behind the insurance domain's
//! `InsurancePort`.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: `InsuranceRepository` owns the
//! SQL and row mapping, and `PostgresInsuranceAdapter` translates between
//! rows and domain records. `InMemoryInsuranceAdapter` implements the same
//! port over a map for local runs and tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresInsuranceAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/insurance")).await?;
//! run_migrations(&pool).await?;
//! let adapter = PostgresInsuranceAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, create_pool_from_url, run_migrations, DatabaseConfig};
pub use error::DatabaseError;
pub use adapters::{PostgresInsuranceAdapter, InMemoryInsuranceAdapter};
