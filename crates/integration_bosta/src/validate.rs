//! Request payload validation
//!
//! Every operation's rule set lives declaratively on its payload struct via
//! `validator` derive attributes; this module is the single evaluator that
//! turns rule violations into a [`BostaError::Validation`] naming the
//! offending field. Serde's `deny_unknown_fields` on the payload structs
//! covers the allow-list side: an unrecognized key rejects the whole input.

use validator::{Validate, ValidationError};

use crate::error::BostaError;

/// Evaluate a payload's rule set, flattening all violations into one error
pub(crate) fn check(payload: &impl Validate) -> Result<(), BostaError> {
    payload.validate().map_err(|e| {
        let errors: Vec<String> = e
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors
                    .iter()
                    .map(|error| {
                        format!(
                            "{}: {}",
                            field,
                            error
                                .message
                                .as_ref()
                                .map_or_else(|| error.code.to_string(), ToString::to_string)
                        )
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        BostaError::Validation(errors.join("; "))
    })
}

/// Require a non-empty identifier, treating blank input as missing
pub(crate) fn require_id(field: &str, value: &str) -> Result<String, BostaError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BostaError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// A string that must carry a value; "" and whitespace count as missing
pub(crate) fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("non_blank");
        err.message = Some("must not be empty".into());
        return Err(err);
    }
    Ok(())
}

/// The provider's 11-digit local phone number format
pub(crate) fn phone_11_digits(value: &str) -> Result<(), ValidationError> {
    if value.len() != 11 || !value.chars().all(|c| c.is_ascii_digit()) {
        let mut err = ValidationError::new("phone_11_digits");
        err.message = Some("Phone number must be 11 digits".into());
        return Err(err);
    }
    Ok(())
}
