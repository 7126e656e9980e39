//! Tracking number value object
//!
//! The provider's public identifier for one delivery order. An empty or
//! blank string is treated as missing, never as a value — the provider does
//! not issue empty tracking numbers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated, non-empty tracking number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingNumber {
    value: String,
}

impl TrackingNumber {
    /// Create a new tracking number, rejecting empty or whitespace-bearing input
    pub fn new(number: impl Into<String>) -> Result<Self, DomainError> {
        let value = number.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::InvalidTrackingNumber(
                "must not be empty".to_string(),
            ));
        }

        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidTrackingNumber(format!(
                "must not contain whitespace: {value:?}"
            )));
        }

        Ok(Self { value })
    }

    /// Get the tracking number as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for TrackingNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TrackingNumber {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
