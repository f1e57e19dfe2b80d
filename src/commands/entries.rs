//! # Income & Expense Commands
//!
//! Both sides of the ledger share one command surface; only the
//! endpoints and category vocabulary differ, captured by
//! [`LedgerKind`].
//!
//! ## Usage
//!
//! ```bash
//! famtrack income list
//! famtrack expense add --amount 42.50 --category Food --notes "groceries"
//! famtrack expense list --family
//! famtrack income stats
//! ```

use anyhow::{bail, Result};
use chrono::{DateTime, NaiveDate, Utc};
use colored::Colorize;

use crate::api::entries::{Entry, EntryStats, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
use crate::api::{ApiClient, ApiError, EntryDraft};
use crate::commands::{api_context, report_api_error};
use crate::errors::display_error;
use crate::exit_codes::*;

/// Which side of the ledger a command operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerKind {
    Income,
    Expense,
}

impl LedgerKind {
    /// Singular label for messages
    pub fn singular(&self) -> &'static str {
        match self {
            LedgerKind::Income => "income",
            LedgerKind::Expense => "expense",
        }
    }

    /// Plural label for messages
    pub fn plural(&self) -> &'static str {
        match self {
            LedgerKind::Income => "incomes",
            LedgerKind::Expense => "expenses",
        }
    }

    /// Category vocabulary the service's clients offer for this kind
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            LedgerKind::Income => INCOME_CATEGORIES,
            LedgerKind::Expense => EXPENSE_CATEGORIES,
        }
    }

    async fn list(&self, client: &ApiClient, family: bool) -> Result<Vec<Entry>, ApiError> {
        match (self, family) {
            (LedgerKind::Income, false) => client.my_incomes().await,
            (LedgerKind::Income, true) => client.family_incomes().await,
            (LedgerKind::Expense, false) => client.my_expenses().await,
            (LedgerKind::Expense, true) => client.family_expenses().await,
        }
    }

    async fn get(&self, client: &ApiClient, id: &str) -> Result<Entry, ApiError> {
        match self {
            LedgerKind::Income => client.income(id).await,
            LedgerKind::Expense => client.expense(id).await,
        }
    }

    async fn create(&self, client: &ApiClient, draft: &EntryDraft) -> Result<Entry, ApiError> {
        match self {
            LedgerKind::Income => client.create_income(draft).await,
            LedgerKind::Expense => client.create_expense(draft).await,
        }
    }

    async fn update(
        &self,
        client: &ApiClient,
        id: &str,
        draft: &EntryDraft,
    ) -> Result<Entry, ApiError> {
        match self {
            LedgerKind::Income => client.update_income(id, draft).await,
            LedgerKind::Expense => client.update_expense(id, draft).await,
        }
    }

    async fn delete(&self, client: &ApiClient, id: &str) -> Result<String, ApiError> {
        match self {
            LedgerKind::Income => client.delete_income(id).await,
            LedgerKind::Expense => client.delete_expense(id).await,
        }
    }

    async fn stats(&self, client: &ApiClient) -> Result<EntryStats, ApiError> {
        match self {
            LedgerKind::Income => client.my_income_stats().await,
            LedgerKind::Expense => client.my_expense_stats().await,
        }
    }
}

/// Arguments shared by add and update
pub struct DraftArgs {
    /// Amount in the family's currency
    pub amount: f64,
    /// Category label
    pub category: String,
    /// Date as `YYYY-MM-DD`; today when not provided
    pub date: Option<String>,
    /// Free-form note
    pub notes: Option<String>,
}

impl DraftArgs {
    fn into_draft(self) -> Result<EntryDraft> {
        Ok(EntryDraft {
            amount: self.amount,
            category: self.category,
            date: parse_entry_date(self.date.as_deref())?,
            notes: self.notes,
        })
    }
}

/// Execute the list action
pub async fn execute_list(kind: LedgerKind, family: bool) -> Result<i32> {
    let (client, _store) = api_context()?;

    let entries = match kind.list(&client, family).await {
        Ok(entries) => entries,
        Err(e) => return Ok(report_api_error(&e)),
    };

    if entries.is_empty() {
        println!("{} No {} recorded yet.", "ℹ".blue().bold(), kind.plural());
        return Ok(EXIT_SUCCESS);
    }

    let scope = if family { "family" } else { "your" };
    println!(
        "{} {} {} ({})",
        "✓".green().bold(),
        entries.len(),
        kind.plural(),
        scope
    );
    let total: f64 = entries.iter().map(|e| e.amount).sum();

    for entry in &entries {
        print_entry_line(entry);
    }
    println!("{}", "─".repeat(40).dimmed());
    println!("  Total: {}", format_amount(total).bold());

    Ok(EXIT_SUCCESS)
}

/// Execute the show action
pub async fn execute_show(kind: LedgerKind, id: String) -> Result<i32> {
    let (client, _store) = api_context()?;

    match kind.get(&client, &id).await {
        Ok(entry) => {
            print_entry_details(kind, &entry);
            Ok(EXIT_SUCCESS)
        }
        Err(e) => Ok(report_api_error(&e)),
    }
}

/// Execute the add action
pub async fn execute_add(kind: LedgerKind, args: DraftArgs) -> Result<i32> {
    let draft = match args.into_draft() {
        Ok(draft) => draft,
        Err(e) => {
            display_error(&e.to_string());
            return Ok(EXIT_INVALID_INPUT);
        }
    };
    let (client, _store) = api_context()?;

    match kind.create(&client, &draft).await {
        Ok(entry) => {
            println!(
                "{} Recorded {} {} — {} ({})",
                "✓".green().bold(),
                kind.singular(),
                entry.id.dimmed(),
                format_amount(entry.amount).bold(),
                entry.category
            );
            Ok(EXIT_SUCCESS)
        }
        Err(e) => Ok(report_api_error(&e)),
    }
}

/// Execute the update action
pub async fn execute_update(kind: LedgerKind, id: String, args: DraftArgs) -> Result<i32> {
    let draft = match args.into_draft() {
        Ok(draft) => draft,
        Err(e) => {
            display_error(&e.to_string());
            return Ok(EXIT_INVALID_INPUT);
        }
    };
    let (client, _store) = api_context()?;

    match kind.update(&client, &id, &draft).await {
        Ok(entry) => {
            println!(
                "{} Updated {} {} — {} ({})",
                "✓".green().bold(),
                kind.singular(),
                entry.id.dimmed(),
                format_amount(entry.amount).bold(),
                entry.category
            );
            Ok(EXIT_SUCCESS)
        }
        Err(e) => Ok(report_api_error(&e)),
    }
}

/// Execute the remove action
pub async fn execute_remove(kind: LedgerKind, id: String) -> Result<i32> {
    let (client, _store) = api_context()?;

    match kind.delete(&client, &id).await {
        Ok(_) => {
            println!("{} Deleted {} {}", "✓".green().bold(), kind.singular(), id);
            Ok(EXIT_SUCCESS)
        }
        Err(e) => Ok(report_api_error(&e)),
    }
}

/// Execute the stats action
pub async fn execute_stats(kind: LedgerKind) -> Result<i32> {
    let (client, _store) = api_context()?;

    let stats = match kind.stats(&client).await {
        Ok(stats) => stats,
        Err(e) => return Ok(report_api_error(&e)),
    };

    println!(
        "{} {} {} totalling {}",
        "✓".green().bold(),
        stats.count,
        kind.plural(),
        format_amount(stats.total).bold()
    );

    if !stats.by_category.is_empty() {
        let mut breakdown: Vec<_> = stats.by_category.iter().collect();
        breakdown.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
        for (category, amount) in breakdown {
            println!("  {:<14} {}", category, format_amount(*amount));
        }
    }

    Ok(EXIT_SUCCESS)
}

/// Parse a `YYYY-MM-DD` argument; today when absent
fn parse_entry_date(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        None => Ok(Utc::now()),
        Some(raw) => {
            let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
                bail!("Invalid date '{raw}', expected YYYY-MM-DD");
            };
            let Some(midnight) = date.and_hms_opt(0, 0, 0) else {
                bail!("Invalid date '{raw}'");
            };
            Ok(midnight.and_utc())
        }
    }
}

fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

fn print_entry_line(entry: &Entry) {
    let owner = entry
        .user
        .as_ref()
        .map(|u| format!("  [{}]", u.name))
        .unwrap_or_default();
    let notes = entry
        .notes
        .as_deref()
        .map(|n| format!("  — {}", n))
        .unwrap_or_default();

    println!(
        "  {}  {:>10}  {:<14} {}{}{}",
        entry.date.format("%Y-%m-%d"),
        format_amount(entry.amount),
        entry.category,
        entry.id.dimmed(),
        owner.cyan(),
        notes.dimmed()
    );
}

fn print_entry_details(kind: LedgerKind, entry: &Entry) {
    println!("{}", kind.singular().to_uppercase().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("  Id:       {}", entry.id);
    println!("  Amount:   {}", format_amount(entry.amount).bold());
    println!("  Category: {}", entry.category);
    println!("  Date:     {}", entry.date.format("%Y-%m-%d"));
    if let Some(notes) = &entry.notes {
        println!("  Notes:    {}", notes);
    }
    if let Some(owner) = &entry.user {
        println!("  By:       {}", owner.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_kind_labels() {
        assert_eq!(LedgerKind::Income.singular(), "income");
        assert_eq!(LedgerKind::Expense.plural(), "expenses");
        assert!(LedgerKind::Income.categories().contains(&"Salary"));
        assert!(LedgerKind::Expense.categories().contains(&"Food"));
    }

    #[test]
    fn test_parse_entry_date_explicit() {
        let parsed = parse_entry_date(Some("2026-07-01")).unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2026-07-01 00:00");
    }

    #[test]
    fn test_parse_entry_date_defaults_to_now() {
        let before = Utc::now();
        let parsed = parse_entry_date(None).unwrap();
        assert!(parsed >= before);
    }

    #[test]
    fn test_parse_entry_date_rejects_garbage() {
        assert!(parse_entry_date(Some("July 1st")).is_err());
        assert!(parse_entry_date(Some("2026-13-40")).is_err());
    }

    #[test]
    fn test_draft_args_into_draft() {
        let args = DraftArgs {
            amount: 12.5,
            category: "Food".to_string(),
            date: Some("2026-07-01".to_string()),
            notes: Some("lunch".to_string()),
        };
        let draft = args.into_draft().unwrap();
        assert_eq!(draft.amount, 12.5);
        assert_eq!(draft.category, "Food");
        assert_eq!(draft.notes.as_deref(), Some("lunch"));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234.5), "1234.50");
        assert_eq!(format_amount(0.0), "0.00");
    }
}
