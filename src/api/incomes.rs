//! # Income API
//!
//! Endpoints for the income side of the ledger: personal and
//! family-wide listings, CRUD, and aggregate statistics.

use reqwest::Method;

use crate::api::client::{ApiClient, ApiError, NO_BODY};
use crate::api::entries::{Entry, EntryDraft, EntryStats};

impl ApiClient {
    /// List the signed-in user's incomes
    pub async fn my_incomes(&self) -> Result<Vec<Entry>, ApiError> {
        self.request(Method::GET, "/api/incomes/my", NO_BODY).await
    }

    /// List incomes across the whole family
    ///
    /// Entries carry their [`owner`](crate::api::entries::Entry::user)
    /// in this view.
    pub async fn family_incomes(&self) -> Result<Vec<Entry>, ApiError> {
        self.request(Method::GET, "/api/incomes/family", NO_BODY)
            .await
    }

    /// Fetch a single income by id
    pub async fn income(&self, id: &str) -> Result<Entry, ApiError> {
        self.request(Method::GET, &format!("/api/incomes/{}", id), NO_BODY)
            .await
    }

    /// Record a new income
    pub async fn create_income(&self, draft: &EntryDraft) -> Result<Entry, ApiError> {
        self.request(Method::POST, "/api/incomes", Some(draft)).await
    }

    /// Replace an existing income
    pub async fn update_income(&self, id: &str, draft: &EntryDraft) -> Result<Entry, ApiError> {
        self.request(Method::PUT, &format!("/api/incomes/{}", id), Some(draft))
            .await
    }

    /// Delete an income
    pub async fn delete_income(&self, id: &str) -> Result<String, ApiError> {
        self.request_ack(Method::DELETE, &format!("/api/incomes/{}", id), NO_BODY)
            .await
    }

    /// Aggregate statistics over the signed-in user's incomes
    pub async fn my_income_stats(&self) -> Result<EntryStats, ApiError> {
        self.request(Method::GET, "/api/incomes/my/stats", NO_BODY)
            .await
    }
}
