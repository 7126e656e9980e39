//! Bosta API client
//!
//! [`ApiClient`] is the dispatch contract the resource modules are written
//! against: one validated request in, the unwrapped envelope payload out.
//! [`BostaClient`] implements it over reqwest, owns the credentials, and is
//! handed to each resource as its transport.

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use reqwest::{Method, header};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::cities::Cities;
use crate::config::{BostaConfig, Credentials};
use crate::deliveries::Deliveries;
use crate::envelope::ApiEnvelope;
use crate::error::{BostaError, status_summary};
use crate::pricing::Pricing;

/// Body or query parameters attached to an outbound request
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// JSON request body
    Json(Value),
    /// URL query parameters
    Query(Vec<(String, String)>),
}

/// One outbound call: method, relative path, optional payload
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the API base URL, without a leading slash
    pub path: String,
    /// Optional body or query parameters
    pub payload: Option<Payload>,
}

impl ApiRequest {
    /// A GET request with no payload
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            payload: None,
        }
    }

    /// A POST request with a JSON body
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            payload: Some(Payload::Json(body)),
        }
    }

    /// A PUT request with a JSON body
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::PUT,
            path: path.into(),
            payload: Some(Payload::Json(body)),
        }
    }

    /// A DELETE request with no payload
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
            payload: None,
        }
    }

    /// Attach query parameters
    #[must_use]
    pub fn with_query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.payload = Some(Payload::Query(pairs));
        self
    }
}

/// Percent-encode an identifier for use as a path segment
pub(crate) fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Dispatch contract between the resource modules and the transport
///
/// Implementations send the request with the configured authorization and
/// timeout, interpret the provider's `{success, data, message}` envelope,
/// and return the unwrapped `data` payload. Failures of any kind surface as
/// [`BostaError`]; callers never see a raw transport response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Send one request and return the unwrapped payload
    async fn send(&self, request: ApiRequest) -> Result<Value, BostaError>;
}

/// Bosta API client: credentials, transport, and resource access
///
/// Cloning is cheap; clones share the underlying HTTP connection pool and
/// authentication state.
#[derive(Debug, Clone)]
pub struct BostaClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: reqwest::Client,
    config: BostaConfig,
    /// Bearer token installed by a successful login; written once, read by
    /// every subsequent call
    token: ArcSwapOption<String>,
}

#[derive(Debug, serde::Deserialize)]
struct LoginData {
    #[serde(default)]
    token: Option<String>,
}

impl BostaClient {
    /// Create a new client
    ///
    /// In account mode the client starts unauthenticated; call
    /// [`login`](Self::login) to exchange the credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: BostaConfig) -> Result<Self, BostaError> {
        config.validate().map_err(BostaError::Configuration)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("bosta-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                BostaError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                token: ArcSwapOption::empty(),
            }),
        })
    }

    /// Exchange account credentials for a bearer token
    ///
    /// On success the token replaces the credentials for all subsequent
    /// calls. On failure the client stays constructed and unauthenticated;
    /// there is no retry, and later calls will fail at the remote service.
    #[instrument(skip(self))]
    pub async fn login(&self) -> Result<(), BostaError> {
        let Credentials::Account { email, password } = &self.inner.config.credentials else {
            return Err(BostaError::Configuration(
                "login requires account credentials".to_string(),
            ));
        };

        let body = serde_json::json!({ "email": email, "password": password });
        let data = self.send(ApiRequest::post("users/login", body)).await?;

        let parsed: LoginData = serde_json::from_value(data)
            .map_err(|e| BostaError::Decode(format!("login response: {e}")))?;
        let token = parsed
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                BostaError::Decode("login response did not include a token".to_string())
            })?;

        self.inner.token.store(Some(Arc::new(token)));
        debug!("authenticated with account credentials");
        Ok(())
    }

    /// Whether the client currently holds a usable credential
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        match &self.inner.config.credentials {
            Credentials::ApiKey(_) => true,
            Credentials::Account { .. } => self.inner.token.load().is_some(),
        }
    }

    /// Delivery operations
    #[must_use]
    pub fn deliveries(&self) -> Deliveries {
        Deliveries::new(Arc::new(self.clone()))
    }

    /// City, zone, and district lookups
    #[must_use]
    pub fn cities(&self) -> Cities {
        Cities::new(Arc::new(self.clone()))
    }

    /// Pricing calculators
    #[must_use]
    pub fn pricing(&self) -> Pricing {
        Pricing::new(Arc::new(self.clone()))
    }

    /// The `Authorization` header value for the current auth state
    ///
    /// `None` in account mode before a successful login: the request goes
    /// out unauthenticated and the provider rejects it.
    fn authorization_value(&self) -> Option<String> {
        if let Some(token) = self.inner.token.load_full() {
            return Some(format!("Bearer {token}"));
        }

        match &self.inner.config.credentials {
            Credentials::ApiKey(key) => Some(key.clone()),
            Credentials::Account { .. } => None,
        }
    }
}

#[async_trait]
impl ApiClient for BostaClient {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> Result<Value, BostaError> {
        let url = format!(
            "{}/{}",
            self.inner.config.base_url.trim_end_matches('/'),
            request.path
        );

        let mut builder = self.inner.http.request(request.method.clone(), &url);

        if let Some(auth) = self.authorization_value() {
            builder = builder.header(header::AUTHORIZATION, auth);
        }

        match &request.payload {
            Some(Payload::Json(body)) => builder = builder.json(body),
            Some(Payload::Query(pairs)) => builder = builder.query(pairs),
            None => {}
        }

        debug!(%url, "dispatching provider request");

        let response = builder.send().await.map_err(|e| {
            let err = if e.is_timeout() {
                BostaError::Timeout {
                    timeout_secs: self.inner.config.timeout_secs,
                }
            } else if e.is_connect() {
                BostaError::Transport(format!("connection failed: {e}"))
            } else {
                BostaError::Transport(format!("request failed: {e}"))
            };
            error!(method = %request.method, %url, %err, "transport failure");
            err
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            let err = BostaError::Transport(format!("failed to read response body: {e}"));
            error!(method = %request.method, %url, status, %err, "transport failure");
            err
        })?;

        match serde_json::from_str::<ApiEnvelope>(&body) {
            Ok(envelope) if envelope.success => Ok(envelope.into_data()),
            Ok(envelope) => {
                let message = envelope
                    .message
                    .unwrap_or_else(|| status_summary(status).to_string());
                error!(
                    method = %request.method,
                    %url,
                    status,
                    summary = status_summary(status),
                    message = %message,
                    "provider reported failure"
                );
                Err(BostaError::Api {
                    message,
                    status: Some(status),
                    method: request.method.to_string(),
                    url,
                })
            }
            Err(_) => {
                let message = if (200..300).contains(&status) {
                    "response envelope was missing or malformed".to_string()
                } else {
                    status_summary(status).to_string()
                };
                error!(
                    method = %request.method,
                    %url,
                    status,
                    message = %message,
                    "provider returned an unreadable response"
                );
                Err(BostaError::Api {
                    message,
                    status: Some(status),
                    method: request.method.to_string(),
                    url,
                })
            }
        }
    }
}
