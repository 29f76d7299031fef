//! Repository implementations
//!
//! Repositories encapsulate SQL queries and map between database rows and
//! plain column structs. Domain conversion happens in the adapters.

pub mod insurance;

pub use insurance::{InsuranceRepository, InsuranceRow, NewInsurance};
