//! # Ledger Entry Types
//!
//! Incomes and expenses share one wire shape; this module holds the
//! common types used by both endpoint groups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Income categories the service's clients offer by default
///
/// Advisory labels only; the server is the validator of record.
pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Business", "Investment", "Gift", "Other"];

/// Expense categories the service's clients offer by default
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Healthcare",
    "Entertainment",
    "Other",
];

/// Owner of an entry, present in family-wide listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryOwner {
    /// User identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Server-assigned identifier
    pub id: String,
    /// Amount in the family's currency
    pub amount: f64,
    /// Category label
    pub category: String,
    /// When the money moved
    pub date: DateTime<Utc>,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Owner, included in family-wide listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<EntryOwner>,
}

/// Payload for creating or replacing an entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    /// Amount in the family's currency
    pub amount: f64,
    /// Category label
    pub category: String,
    /// When the money moved
    pub date: DateTime<Utc>,
    /// Free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Aggregate statistics for one side of the ledger
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryStats {
    /// Sum over all entries
    pub total: f64,
    /// Number of entries
    pub count: i64,
    /// Sum per category
    #[serde(default)]
    pub by_category: HashMap<String, f64>,
}
