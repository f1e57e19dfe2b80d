//! # Expense API
//!
//! Endpoints for the expense side of the ledger, mirroring the income
//! group path-for-path.

use reqwest::Method;

use crate::api::client::{ApiClient, ApiError, NO_BODY};
use crate::api::entries::{Entry, EntryDraft, EntryStats};

impl ApiClient {
    /// List the signed-in user's expenses
    pub async fn my_expenses(&self) -> Result<Vec<Entry>, ApiError> {
        self.request(Method::GET, "/api/expenses/my", NO_BODY).await
    }

    /// List expenses across the whole family
    pub async fn family_expenses(&self) -> Result<Vec<Entry>, ApiError> {
        self.request(Method::GET, "/api/expenses/family", NO_BODY)
            .await
    }

    /// Fetch a single expense by id
    pub async fn expense(&self, id: &str) -> Result<Entry, ApiError> {
        self.request(Method::GET, &format!("/api/expenses/{}", id), NO_BODY)
            .await
    }

    /// Record a new expense
    pub async fn create_expense(&self, draft: &EntryDraft) -> Result<Entry, ApiError> {
        self.request(Method::POST, "/api/expenses", Some(draft))
            .await
    }

    /// Replace an existing expense
    pub async fn update_expense(&self, id: &str, draft: &EntryDraft) -> Result<Entry, ApiError> {
        self.request(Method::PUT, &format!("/api/expenses/{}", id), Some(draft))
            .await
    }

    /// Delete an expense
    pub async fn delete_expense(&self, id: &str) -> Result<String, ApiError> {
        self.request_ack(Method::DELETE, &format!("/api/expenses/{}", id), NO_BODY)
            .await
    }

    /// Aggregate statistics over the signed-in user's expenses
    pub async fn my_expense_stats(&self) -> Result<EntryStats, ApiError> {
        self.request(Method::GET, "/api/expenses/my/stats", NO_BODY)
            .await
    }
}
