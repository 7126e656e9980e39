//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid tracking number
    #[error("Invalid tracking number: {0}")]
    InvalidTrackingNumber(String),

    /// Country id outside the provider's supported set
    #[error(
        "Invalid countryId: {0}. Must be either '60e4482c7cb7d4bc4849c4d5' for Egypt or 'eF-3f9FZr' for KSA"
    )]
    InvalidCountryId(String),

    /// Numeric code with no entry in a reference table
    #[error("Unknown {table} code: {code}")]
    UnknownCode { table: &'static str, code: u16 },
}
