//! Provider response envelope
//!
//! Every Bosta endpoint wraps its answer in `{success, data, message}`.
//! The client unwraps `data` on success and surfaces `message` on failure;
//! callers never see a raw transport response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{success, data, message}` wrapper around every provider response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    /// Whether the provider considers the call successful
    #[serde(default)]
    pub success: bool,

    /// The payload, present on success (and sometimes on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Provider diagnostic, usually present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiEnvelope {
    /// Unwrap the payload, substituting `null` when the provider omitted it
    #[must_use]
    pub fn into_data(self) -> Value {
        self.data.unwrap_or(Value::Null)
    }
}

/// Decode an unwrapped payload into the expected response shape
pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    what: &'static str,
    value: Value,
) -> Result<T, crate::error::BostaError> {
    serde_json::from_value(value)
        .map_err(|e| crate::error::BostaError::Decode(format!("{what}: {e}")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_envelope_parses() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({
            "success": true,
            "data": {"trackingNumber": "ABC123"}
        }))
        .unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.into_data(), json!({"trackingNumber": "ABC123"}));
    }

    #[test]
    fn failure_envelope_parses_with_message() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({
            "success": false,
            "message": "not found"
        }))
        .unwrap();

        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("not found"));
    }

    #[test]
    fn missing_success_flag_defaults_to_failure() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({"data": {}})).unwrap();
        assert!(!envelope.success);
    }

    #[test]
    fn missing_data_unwraps_to_null() {
        let envelope: ApiEnvelope =
            serde_json::from_value(json!({"success": true})).unwrap();
        assert_eq!(envelope.into_data(), Value::Null);
    }
}
