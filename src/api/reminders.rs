//! # Reminder API
//!
//! Admin endpoints for nudging family members to log their expenses.
//! Every call resolves to an acknowledgment message.

use reqwest::Method;
use serde::Serialize;

use crate::api::client::{ApiClient, ApiError, NO_BODY};

/// Body of `POST /api/reminders/send-to-member`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendToMemberRequest<'a> {
    member_id: &'a str,
}

/// Body of `POST /api/reminders/send-bulk`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendBulkRequest<'a> {
    member_ids: &'a [String],
}

impl ApiClient {
    /// Send an expense reminder to a single member
    pub async fn send_reminder_to_member(&self, member_id: &str) -> Result<String, ApiError> {
        self.request_ack(
            Method::POST,
            "/api/reminders/send-to-member",
            Some(&SendToMemberRequest { member_id }),
        )
        .await
    }

    /// Send an expense reminder to every member
    ///
    /// Sends an empty JSON body so Content-Length is always set.
    pub async fn send_reminder_to_all(&self) -> Result<String, ApiError> {
        self.request_ack(
            Method::POST,
            "/api/reminders/send-to-all",
            Some(&serde_json::json!({})),
        )
        .await
    }

    /// Send an expense reminder to a selected set of members
    pub async fn send_reminder_bulk(&self, member_ids: &[String]) -> Result<String, ApiError> {
        self.request_ack(
            Method::POST,
            "/api/reminders/send-bulk",
            Some(&SendBulkRequest { member_ids }),
        )
        .await
    }

    /// Send a test reminder to the signed-in admin
    pub async fn send_reminder_test(&self) -> Result<String, ApiError> {
        self.request_ack(Method::POST, "/api/reminders/test", NO_BODY)
            .await
    }
}
