//! Bosta client error types

use thiserror::Error;

/// Errors that can occur during Bosta API operations
#[derive(Debug, Error)]
pub enum BostaError {
    /// Input failed validation before any request was built
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The delivery's current remote state forbids the requested operation
    #[error("Delivery {tracking_number} cannot be updated in its current state ({state})")]
    StateConflict {
        /// Tracking number of the delivery
        tracking_number: String,
        /// Numeric state code as reported by the provider, or "unknown"
        state: String,
    },

    /// The provider answered with a failure envelope or an error status
    #[error("API request failed: {message}")]
    Api {
        /// Provider message, or the canonical summary for the status code
        message: String,
        /// HTTP status code, when a response was received
        status: Option<u16>,
        /// HTTP method of the failing request
        method: String,
        /// Full URL of the failing request
        url: String,
    },

    /// Connection to the provider failed
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Failed to decode a response payload into the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl BostaError {
    /// Create a validation error naming the offending field
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation(format!("{field}: {}", reason.into()))
    }

    /// Whether this error was raised locally, before any network call
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::StateConflict { .. } | Self::Configuration(_)
        )
    }

    /// Whether this error is a 4xx client error from the provider
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status: Some(s), .. } if (400..500).contains(s))
    }

    /// Whether this error is a 5xx server error from the provider
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status: Some(s), .. } if (500..600).contains(s))
    }
}

impl From<domain::DomainError> for BostaError {
    fn from(err: domain::DomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Canonical human-readable summary for a provider HTTP status code
#[must_use]
pub fn status_summary(status: u16) -> &'static str {
    match status {
        200 => "Success: The request was successful.",
        400 => {
            "Bad Request: The request was invalid or cannot be served. Please check your input and try again."
        }
        401 => {
            "Unauthorized: Authentication failed or user does not have permissions for the requested operation."
        }
        403 => "Forbidden: The server understood the request but refuses to authorize it.",
        404 => "Not Found: The requested resource could not be found on the server.",
        408 => "Request Timeout: The server timed out waiting for the request.",
        429 => "Too Many Requests: You have sent too many requests in a given amount of time.",
        500 => {
            "Internal Server Error: The server encountered an unexpected condition that prevented it from fulfilling the request."
        }
        _ => "Unknown Error: An unexpected error occurred.",
    }
}
