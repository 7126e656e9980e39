//! Bosta client configuration

use serde::{Deserialize, Serialize};

/// Credentials for one of the provider's two authentication modes
///
/// An API key is sent verbatim in the `Authorization` header. Account
/// credentials are exchanged once, via the login endpoint, for a bearer
/// token that replaces the key on all subsequent calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Credentials {
    /// Static API key, sent as the raw header value
    ApiKey(String),
    /// Email and password, exchanged for a bearer token at login
    Account {
        /// Account email
        email: String,
        /// Account password
        password: String,
    },
}

/// Configuration for the Bosta API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BostaConfig {
    /// Base URL of the provider API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Authentication credentials
    pub credentials: Credentials,
}

fn default_base_url() -> String {
    "https://app.bosta.co/api/v2".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl BostaConfig {
    /// Create a configuration for API-key authentication
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            credentials: Credentials::ApiKey(api_key.into()),
        }
    }

    /// Create a configuration for account (login) authentication
    #[must_use]
    pub fn with_account(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            credentials: Credentials::Account {
                email: email.into(),
                password: password.into(),
            },
        }
    }

    /// Create a configuration suitable for testing against a local mock
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            credentials: Credentials::ApiKey("test-api-key".to_string()),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        match &self.credentials {
            Credentials::ApiKey(key) => {
                if key.trim().is_empty() {
                    return Err("api key must not be empty".to_string());
                }
            }
            Credentials::Account { email, password } => {
                if email.trim().is_empty() || !email.contains('@') {
                    return Err("account email must be a valid address".to_string());
                }
                if password.is_empty() {
                    return Err("account password must not be empty".to_string());
                }
            }
        }

        Ok(())
    }
}
