//! Shared helpers for the wiremock-backed integration tests

// Each test binary compiles its own copy; not every helper is used in both.
#![allow(dead_code)]

use std::sync::Arc;

use famtrack::api::ApiClient;
use famtrack::session::{MemorySessionStore, Role, Session, SessionStore, UserProfile};

/// Profile used by every seeded test session
pub fn test_profile() -> UserProfile {
    UserProfile {
        id: "u-1".to_string(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        role: Role::Admin,
        family_id: "f-1".to_string(),
        family_code: "FAM123".to_string(),
        family_name: Some("Lovelace".to_string()),
    }
}

/// Build a session with the given token pair
pub fn session_with(access_token: &str, refresh_token: &str) -> Session {
    Session {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
        user: test_profile(),
    }
}

/// Client over an in-memory store seeded with the given token pair
pub fn client_with_session(
    base_url: &str,
    access_token: &str,
    refresh_token: &str,
) -> (ApiClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::with_session(session_with(
        access_token,
        refresh_token,
    )));
    let session_store: Arc<dyn SessionStore> = store.clone();
    (ApiClient::new(base_url.to_string(), session_store), store)
}

/// Client over an empty (anonymous) in-memory store
pub fn anonymous_client(base_url: &str) -> (ApiClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let session_store: Arc<dyn SessionStore> = store.clone();
    (ApiClient::new(base_url.to_string(), session_store), store)
}

/// Wrap a payload in the service's success envelope
pub fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "message": "",
        "data": data,
    })
}

/// The service's rejection envelope
pub fn rejected_envelope(message: &str) -> serde_json::Value {
    serde_json::json!({
        "success": false,
        "message": message,
    })
}

/// Matches requests that carry no Authorization header at all
pub struct NoAuthHeader;

impl wiremock::Match for NoAuthHeader {
    fn matches(&self, request: &wiremock::Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}
