//! # API Client Core
//!
//! The shared HTTP client behind every Famtrack API call. It owns the
//! base URL and the underlying connection pool, attaches the bearer
//! credential from the injected session store, and transparently
//! recovers from credential expiry: a 401 on a first attempt triggers
//! one token refresh and one retried dispatch, never more. A refresh
//! failure is terminal — the session is destroyed and the caller gets a
//! session-expired error, the CLI's equivalent of being sent back to
//! the login screen.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::api::envelope::{error_body_message, into_payload, Envelope};
use crate::session::SessionStore;

/// Error types for API operations.
///
/// This enum distinguishes between different error conditions that can
/// occur during API calls, allowing callers to handle them appropriately.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network error (connection failed, DNS error, timeout, etc.)
    ///
    /// Could not reach the API server. No session impact.
    #[error("Network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// Authentication error (401 Unauthorized)
    ///
    /// A 401 that the refresh protocol does not absorb: the request was
    /// anonymous, or the retried request was rejected again.
    #[error("Authentication failed: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Authorization error (403 Forbidden)
    ///
    /// The credential is valid but doesn't permit this operation.
    #[error("Access denied: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Client error (4xx status codes other than 401/403)
    #[error("Request error: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
    },

    /// Server error (5xx status codes)
    #[error("Server error: {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
    },

    /// Response parsing error
    ///
    /// The response from the server could not be decoded.
    #[error("Failed to parse response: {message}")]
    ParseError {
        /// Human-readable error message
        message: String,
    },

    /// A 2xx response whose envelope carried `success: false`
    #[error("Request rejected: {message}")]
    Rejected {
        /// Human-readable error message
        message: String,
    },

    /// Token refresh failed; the session has been destroyed
    ///
    /// Terminal for the current sign-in. The caller should route the
    /// user to `famtrack login`.
    #[error("Session expired: {message}")]
    SessionExpired {
        /// Human-readable error message
        message: String,
    },

    /// Session persistence failure
    #[error("Session storage error: {message}")]
    Storage {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Check if this is an authentication error (401, 403, or an
    /// expired session).
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthorized { .. }
                | ApiError::Forbidden { .. }
                | ApiError::SessionExpired { .. }
        )
    }

    /// Check if this is a network error.
    pub fn is_network_error(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ApiError::Server { .. })
    }

    /// Check if the session was destroyed by a failed refresh.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired { .. })
    }
}

/// Marks whether a dispatch is the first attempt of a logical request
/// or the single retry that may follow a token refresh.
///
/// Threaded explicitly through the dispatch path instead of being
/// scribbled onto shared request state; a `Retried` dispatch is never
/// intercepted again, which is what bounds the protocol to one refresh
/// and one retry per logical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    First,
    Retried,
}

/// Body of `POST /api/auth/refresh`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Payload of a successful refresh response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshData {
    access_token: String,
}

/// Version of the CLI, used in User-Agent header
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Marker for requests that carry no body
pub(crate) const NO_BODY: Option<&'static ()> = None;

/// HTTP client for the Famtrack API
///
/// The client handles all API communication: credential attachment,
/// the 401 refresh-and-retry protocol, and envelope decoding. Session
/// state is read through the injected [`SessionStore`]; the client has
/// no ambient global state.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use famtrack::api::ApiClient;
/// use famtrack::session::MemorySessionStore;
///
/// let store = Arc::new(MemorySessionStore::new());
/// let client = ApiClient::new("https://app.famtrack.dev".to_string(), store);
/// ```
pub struct ApiClient {
    /// Base URL for the API (e.g., <https://app.famtrack.dev>)
    pub base_url: String,
    /// Underlying HTTP client
    client: Client,
    /// Source of truth for the bearer credential
    store: Arc<dyn SessionStore>,
    /// Serializes token refreshes so concurrent 401s coalesce into one
    /// refresh call
    refresh_gate: Mutex<()>,
    /// Correlation id attached to every request from this process
    request_id: String,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// The client is configured with:
    /// - User-Agent: `famtrack/<version>` to identify the CLI
    /// - Accept / Content-Type: `application/json`
    /// - X-Request-Id: a per-process correlation id
    /// - 30s total / 5s connect timeouts
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL for the API endpoint
    /// * `store` - Session store supplying the bearer credential
    pub fn new(base_url: String, store: Arc<dyn SessionStore>) -> Self {
        let request_id = generate_request_id();

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("famtrack/{VERSION}"))
                .unwrap_or_else(|_| HeaderValue::from_static("famtrack/0.1.0")),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(header_value) = HeaderValue::from_str(&request_id) {
            headers.insert("X-Request-Id", header_value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            store,
            refresh_gate: Mutex::new(()),
            request_id,
        }
    }

    /// Get the correlation id for this client session.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Check API health
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - API is healthy
    /// * `Ok(false)` - API returned non-success status
    /// * `Err(ApiError)` - Request failed (network error)
    pub async fn health_check(&self) -> Result<bool, ApiError> {
        let url = format!("{}/api/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(to_network_error)?;

        Ok(response.status().is_success())
    }

    /// Send a request and decode the envelope's `data` payload
    pub(crate) async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body).await?;
        read_data(response).await
    }

    /// Send a request whose envelope carries no payload
    ///
    /// Returns the acknowledgment message: `data.message` when the
    /// server nests one, the envelope `message` otherwise.
    pub(crate) async fn request_ack<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, body).await?;
        read_ack(response).await
    }

    /// Dispatch a request, absorbing a first-attempt 401 through the
    /// refresh protocol
    ///
    /// The sequencing per logical request is strict: first dispatch,
    /// then (at most) one refresh, then (at most) one retried dispatch.
    /// The retried dispatch re-reads the store so it carries whatever
    /// token is current at retry time.
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let bearer = self.store.load().map(|s| s.access_token);
        let response = self
            .dispatch(&method, path, body, bearer.as_deref(), Attempt::First)
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        // An anonymous 401 has no refresh token to spend; propagate it.
        let Some(expired_access) = bearer else {
            return Ok(response);
        };

        self.refresh_access_token(&expired_access).await?;

        let bearer = self.store.load().map(|s| s.access_token);
        self.dispatch(&method, path, body, bearer.as_deref(), Attempt::Retried)
            .await
    }

    /// Perform one HTTP dispatch
    async fn dispatch<B>(
        &self,
        method: &Method,
        path: &str,
        body: Option<&B>,
        bearer: Option<&str>,
        attempt: Attempt,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {} ({:?})", method, url, attempt);

        let mut request = self.client.request(method.clone(), &url);
        if let Some(token) = bearer {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        request.send().await.map_err(to_network_error)
    }

    /// Exchange the refresh token for a new access token
    ///
    /// Refreshes are serialized behind a gate: with several in-flight
    /// requests hitting 401 at once, the first holder performs the
    /// round-trip and later holders find their expired token already
    /// replaced and return immediately. On any refresh failure the
    /// session is destroyed and the error is terminal.
    async fn refresh_access_token(&self, expired_access: &str) -> Result<(), ApiError> {
        let _gate = self.refresh_gate.lock().await;

        let refresh_token = match self.store.load() {
            // Another request refreshed while we waited for the gate.
            Some(current) if current.access_token != expired_access => return Ok(()),
            Some(current) => current.refresh_token,
            // A concurrent refresh already failed and evicted the session.
            None => {
                return Err(ApiError::SessionExpired {
                    message: "session was terminated while refreshing credentials".to_string(),
                })
            }
        };

        log::debug!("access token expired, refreshing");

        match self.call_refresh_endpoint(&refresh_token).await {
            Ok(access_token) => {
                self.store
                    .update_access_token(&access_token)
                    .map_err(|e| ApiError::Storage {
                        message: e.to_string(),
                    })?;
                Ok(())
            }
            Err(cause) => {
                // Refresh failure is terminal for the session; the clear
                // is idempotent so racing evictions are harmless.
                if let Err(clear_err) = self.store.clear() {
                    log::warn!("failed to clear session after refresh failure: {clear_err}");
                }
                Err(ApiError::SessionExpired {
                    message: cause.to_string(),
                })
            }
        }
    }

    /// Call `POST /api/auth/refresh` with the bare client
    ///
    /// Deliberately bypasses [`ApiClient::send`]: the refresh call
    /// itself must never be intercepted or retried.
    async fn call_refresh_endpoint(&self, refresh_token: &str) -> Result<String, ApiError> {
        let url = format!("{}/api/auth/refresh", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&RefreshRequest { refresh_token })
            .send()
            .await
            .map_err(to_network_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(to_http_error(status, error_text));
        }

        let envelope: Envelope<RefreshData> =
            response.json().await.map_err(|e| ApiError::ParseError {
                message: format!("Failed to parse refresh response: {}", e),
            })?;

        match into_payload(envelope) {
            Ok(Some(data)) => Ok(data.access_token),
            Ok(None) => Err(ApiError::ParseError {
                message: "refresh response carried no access token".to_string(),
            }),
            Err(message) => Err(ApiError::Rejected { message }),
        }
    }
}

/// Convert a reqwest error to an ApiError.
fn to_network_error(err: reqwest::Error) -> ApiError {
    ApiError::Network {
        message: err.to_string(),
    }
}

/// Convert an HTTP response with error status to an ApiError.
fn to_http_error(status: StatusCode, error_text: String) -> ApiError {
    let status_code = status.as_u16();

    match status_code {
        401 => ApiError::Unauthorized {
            message: error_body_message(&error_text, "Invalid or expired credentials"),
        },
        403 => ApiError::Forbidden {
            message: error_body_message(&error_text, "Access denied"),
        },
        500..=599 => ApiError::Server {
            status: status_code,
            message: error_body_message(&error_text, &format!("Server error ({})", status_code)),
        },
        _ => ApiError::Api {
            status: status_code,
            message: error_body_message(&error_text, &format!("Request failed ({})", status_code)),
        },
    }
}

/// Decode a response into the envelope's `data` payload
async fn read_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(to_http_error(status, error_text));
    }

    let envelope: Envelope<T> = response.json().await.map_err(|e| ApiError::ParseError {
        message: format!("Failed to parse response: {}", e),
    })?;

    match into_payload(envelope) {
        Ok(Some(data)) => Ok(data),
        Ok(None) => Err(ApiError::ParseError {
            message: "response envelope carried no data".to_string(),
        }),
        Err(message) => Err(ApiError::Rejected { message }),
    }
}

/// Decode a payload-less response into its acknowledgment message
async fn read_ack(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(to_http_error(status, error_text));
    }

    let envelope: Envelope<serde_json::Value> =
        response.json().await.map_err(|e| ApiError::ParseError {
            message: format!("Failed to parse response: {}", e),
        })?;

    if !envelope.success {
        return Err(ApiError::Rejected {
            message: envelope.rejection_message(),
        });
    }

    let message = envelope
        .data
        .as_ref()
        .and_then(|d| d.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| envelope.message.clone());

    Ok(message)
}

/// Generate a 128-bit correlation id as a 32-character hex string.
fn generate_request_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    fn test_client() -> ApiClient {
        ApiClient::new(
            "https://api.example.com/".to_string(),
            Arc::new(MemorySessionStore::new()),
        )
    }

    #[test]
    fn test_api_client_new_trims_trailing_slash() {
        let client = test_client();
        assert_eq!(client.base_url, "https://api.example.com");
    }

    #[test]
    fn test_request_id_generation() {
        let request_id = generate_request_id();
        assert_eq!(request_id.len(), 32);
        assert!(request_id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_api_client_has_request_id() {
        let client = test_client();
        assert_eq!(client.request_id().len(), 32);
    }

    #[test]
    fn test_refresh_request_wire_format() {
        let body = RefreshRequest {
            refresh_token: "valid-r",
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"refreshToken":"valid-r"}"#);
    }

    #[test]
    fn test_refresh_data_wire_format() {
        let data: RefreshData = serde_json::from_str(r#"{"accessToken":"fresh-a"}"#).unwrap();
        assert_eq!(data.access_token, "fresh-a");
    }

    #[test]
    fn test_to_http_error_maps_statuses() {
        let err = to_http_error(StatusCode::UNAUTHORIZED, String::new());
        assert!(matches!(err, ApiError::Unauthorized { .. }));
        assert!(err.is_auth_error());

        let err = to_http_error(StatusCode::FORBIDDEN, String::new());
        assert!(matches!(err, ApiError::Forbidden { .. }));

        let err = to_http_error(StatusCode::BAD_REQUEST, String::new());
        assert!(matches!(err, ApiError::Api { status: 400, .. }));

        let err = to_http_error(StatusCode::INTERNAL_SERVER_ERROR, String::new());
        assert!(err.is_server_error());
    }

    #[test]
    fn test_to_http_error_extracts_envelope_message() {
        let body = r#"{"success":false,"message":"Invalid password"}"#.to_string();
        let err = to_http_error(StatusCode::UNAUTHORIZED, body);
        assert_eq!(err.to_string(), "Authentication failed: Invalid password");
    }

    #[test]
    fn test_error_predicates() {
        let expired = ApiError::SessionExpired {
            message: "refresh rejected".to_string(),
        };
        assert!(expired.is_session_expired());
        assert!(expired.is_auth_error());
        assert!(!expired.is_network_error());

        let network = ApiError::Network {
            message: "connection refused".to_string(),
        };
        assert!(network.is_network_error());
        assert!(!network.is_session_expired());
    }
}
