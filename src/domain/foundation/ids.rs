//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier for a stored survey response, assigned by the store at insert
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseId(i64);

impl ResponseId {
    /// Creates a ResponseId from a raw store value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ResponseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ResponseId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Identifier for a service counter (loket), 1..N.
///
/// Range validity depends on the configured survey scheme, so construction is
/// unchecked here and [`crate::domain::scheme::SurveyScheme::contains_counter`]
/// is the range gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterId(u16);

impl CounterId {
    /// Creates a CounterId from a raw value.
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the raw counter number.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for CounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for CounterId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// Unique identifier for an admin session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminSessionId(Uuid);

impl AdminSessionId {
    /// Creates a new random AdminSessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an AdminSessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AdminSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AdminSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AdminSessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
