//! Core Kernel - Foundational types shared by the insurance premium service
//!
//! This crate provides the building blocks used across the workspace:
//! - Strongly-typed identifiers for persisted records
//! - Port error and marker traits for the ports and adapters architecture
//! - Adapter health check types

pub mod identifiers;
pub mod ports;

pub use identifiers::InsuranceId;
pub use ports::{
    PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable,
};
