//! Insurance domain errors
//!
//! `NotFound` is the only business failure. Everything else the service
//! surfaces comes from the storage port and is passed through untouched.

use thiserror::Error;

use core_kernel::{InsuranceId, PortError};

/// Errors returned by the insurance service
#[derive(Debug, Error)]
pub enum InsuranceError {
    /// No record exists at the requested identifier
    #[error("Insurance not found: {id}")]
    NotFound {
        id: InsuranceId,
    },

    /// The storage port failed
    #[error(transparent)]
    Port(#[from] PortError),
}

impl InsuranceError {
    /// Creates a not found error for the given identifier
    pub fn not_found(id: InsuranceId) -> Self {
        InsuranceError::NotFound { id }
    }

    /// Returns true if the requested record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, InsuranceError::NotFound { .. })
    }
}
