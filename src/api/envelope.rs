//! # Response Envelope
//!
//! Every Famtrack API response shares one shape:
//! `{ "success": bool, "message": string, "data": ..., "error": ... }`.
//! This module holds the generic envelope type and the helpers for
//! pulling a human-readable message out of a rejection.

use serde::{Deserialize, Serialize};

/// The uniform response envelope used by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the server considers the operation successful
    pub success: bool,
    /// Human-readable outcome message
    #[serde(default)]
    pub message: String,
    /// Operation payload, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error detail on rejections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Best human-readable message for a rejected envelope
    ///
    /// Prefers the `error` field, falls back to `message`, and finally
    /// to a generic phrase so callers never display an empty string.
    pub fn rejection_message(&self) -> String {
        if let Some(error) = self.error.as_deref() {
            if !error.is_empty() {
                return error.to_string();
            }
        }
        if !self.message.is_empty() {
            return self.message.clone();
        }
        "request rejected by the server".to_string()
    }
}

/// Extract a display message from a raw error-response body
///
/// Error bodies usually carry the envelope shape; when they don't,
/// the raw text (or the provided fallback) is used instead.
pub fn error_body_message(body: &str, fallback: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<Envelope<serde_json::Value>>(body) {
        return envelope.rejection_message();
    }
    if body.trim().is_empty() {
        fallback.to_string()
    } else {
        body.trim().to_string()
    }
}

/// Parse a successful envelope body into its payload type
///
/// Returns `Err` with a rejection message when `success` is false, and
/// `Ok(None)` when the envelope is successful but carries no `data`.
pub fn into_payload<T>(envelope: Envelope<T>) -> Result<Option<T>, String> {
    if !envelope.success {
        return Err(envelope.rejection_message());
    }
    Ok(envelope.data)
}
