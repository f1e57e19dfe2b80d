//! # Dashboard API
//!
//! Aggregated views over the ledger: totals, per-category breakdowns,
//! per-member statistics for the family view, and monthly trends.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::api::client::{ApiClient, ApiError, NO_BODY};

/// Per-member totals, present in the family dashboard
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStat {
    /// User identifier
    pub user_id: String,
    /// Display name
    pub user_name: String,
    /// Total income
    pub income: f64,
    /// Total expense
    pub expense: f64,
    /// Income minus expense
    pub balance: f64,
}

/// Dashboard summary for a user or a whole family
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// Total income over the period
    pub total_income: f64,
    /// Total expense over the period
    pub total_expense: f64,
    /// Income minus expense
    pub balance: f64,
    /// Income sums per category
    #[serde(default)]
    pub income_by_category: HashMap<String, f64>,
    /// Expense sums per category
    #[serde(default)]
    pub expense_by_category: HashMap<String, f64>,
    /// Per-member totals (family view only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_stats: Option<Vec<MemberStat>>,
}

/// One month of the income/expense trend series
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    /// Month label (e.g., `2026-07`)
    pub month: String,
    /// Income total for the month
    pub income: f64,
    /// Expense total for the month
    pub expense: f64,
}

/// Build a trends path with the optional `months` window
fn trends_path(scope: &str, months: Option<u32>) -> String {
    match months {
        Some(months) => format!("/api/dashboard/{}/trends?months={}", scope, months),
        None => format!("/api/dashboard/{}/trends", scope),
    }
}

impl ApiClient {
    /// Fetch the signed-in user's dashboard
    pub async fn my_dashboard(&self) -> Result<DashboardData, ApiError> {
        self.request(Method::GET, "/api/dashboard/my", NO_BODY)
            .await
    }

    /// Fetch the family-wide dashboard
    pub async fn family_dashboard(&self) -> Result<DashboardData, ApiError> {
        self.request(Method::GET, "/api/dashboard/family", NO_BODY)
            .await
    }

    /// Fetch the signed-in user's monthly trend series
    ///
    /// # Arguments
    ///
    /// * `months` - Window size; the server default applies when `None`
    pub async fn my_trends(&self, months: Option<u32>) -> Result<Vec<MonthlyTrend>, ApiError> {
        self.request(Method::GET, &trends_path("my", months), NO_BODY)
            .await
    }

    /// Fetch the family-wide monthly trend series
    pub async fn family_trends(&self, months: Option<u32>) -> Result<Vec<MonthlyTrend>, ApiError> {
        self.request(Method::GET, &trends_path("family", months), NO_BODY)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_data_deserialization() {
        let json = r#"{
            "totalIncome": 5000.0,
            "totalExpense": 3200.5,
            "balance": 1799.5,
            "incomeByCategory": {"Salary": 5000.0},
            "expenseByCategory": {"Food": 1200.5, "Bills": 2000.0}
        }"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.total_income, 5000.0);
        assert_eq!(data.balance, 1799.5);
        assert_eq!(data.expense_by_category["Food"], 1200.5);
        assert!(data.member_stats.is_none());
    }

    #[test]
    fn test_family_dashboard_with_member_stats() {
        let json = r#"{
            "totalIncome": 900.0,
            "totalExpense": 100.0,
            "balance": 800.0,
            "memberStats": [
                {"userId": "u-1", "userName": "Ada", "income": 600.0, "expense": 50.0, "balance": 550.0},
                {"userId": "u-2", "userName": "Grace", "income": 300.0, "expense": 50.0, "balance": 250.0}
            ]
        }"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        let stats = data.member_stats.unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].user_name, "Ada");
        assert_eq!(stats[1].balance, 250.0);
    }

    #[test]
    fn test_monthly_trend_deserialization() {
        let json = r#"[{"month": "2026-06", "income": 4000.0, "expense": 2500.0}]"#;
        let trends: Vec<MonthlyTrend> = serde_json::from_str(json).unwrap();
        assert_eq!(trends[0].month, "2026-06");
        assert_eq!(trends[0].expense, 2500.0);
    }

    #[test]
    fn test_trends_path() {
        assert_eq!(trends_path("my", None), "/api/dashboard/my/trends");
        assert_eq!(
            trends_path("family", Some(6)),
            "/api/dashboard/family/trends?months=6"
        );
    }
}
