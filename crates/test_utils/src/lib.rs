//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! insurance premium service test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common records
//! - `builders`: Builder pattern for insurance record construction
//! - `assertions`: Assertion helpers for premiums and monthly maps
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
