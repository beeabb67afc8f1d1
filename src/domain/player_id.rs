//! Player identity
//!
//! Opaque string-valued identity. Equality is value equality.

use std::fmt;

use crate::error::{Result, StoreError};

/// Immutable identity of a Player
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(String);

impl PlayerId {
    /// Build an identity from its string value
    ///
    /// Fails with `InvalidIdentity` when the value is empty or only whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(StoreError::InvalidIdentity(value));
        }
        Ok(Self(value))
    }

    /// The raw string value
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for PlayerId {
    type Error = StoreError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}
