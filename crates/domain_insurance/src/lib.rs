//! Insurance Domain
//!
//! This crate implements the insurance record domain, following the same
//! Hexagonal Architecture split as the rest of the workspace.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic, containing only business logic:
//! - **Entity**: `Insurance`, one policy record
//! - **Pure calculations**: premium formula and monthly claim aggregation
//! - **Port**: `InsurancePort`, the storage capability the service depends on
//! - **Service**: `InsuranceService`, existence checks before mutation or computation
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_insurance::{Insurance, InsuranceService};
//!
//! let service = InsuranceService::new(Arc::new(adapter));
//! let saved = service.create(insurance).await?;
//! let premium = service.calculate_premium(saved.id.unwrap()).await?;
//! ```

pub mod insurance;
pub mod premium;
pub mod ports;
pub mod services;
pub mod error;

pub use insurance::Insurance;
pub use premium::{calculate_premium, aggregate_by_claim_month, MonthlyPremiums, PREMIUM_RATE};
pub use ports::InsurancePort;
pub use services::InsuranceService;
pub use error::InsuranceError;

#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockInsurancePort, PortCall};
