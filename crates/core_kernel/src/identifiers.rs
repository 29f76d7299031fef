//! Strongly-typed identifiers for domain entities
//!
//! Insurance records are keyed by the store's auto-increment sequence, so the
//! identifier wraps an `i64` rather than a UUID. The newtype keeps record keys
//! from being mixed up with amounts, counts, or month numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a persisted insurance record
///
/// Assigned by the store on first save. Serializes as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsuranceId(i64);

impl InsuranceId {
    /// Creates an identifier from a raw store key
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw store key
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Returns the identifier prefix for display
    pub fn prefix() -> &'static str {
        "INS"
    }
}

impl fmt::Display for InsuranceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", Self::prefix(), self.0)
    }
}

impl FromStr for InsuranceId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Strip prefix if present
        let raw = s.strip_prefix("INS-").unwrap_or(s);
        Ok(Self(raw.parse()?))
    }
}

impl From<i64> for InsuranceId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<InsuranceId> for i64 {
    fn from(id: InsuranceId) -> i64 {
        id.0
    }
}
