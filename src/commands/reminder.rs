//! # Reminder Command
//!
//! Admin nudges: ask the backend to email expense reminders to one
//! member, a selected set, or the whole family.
//!
//! ## Usage
//!
//! ```bash
//! famtrack remind all
//! famtrack remind member u-42
//! famtrack remind bulk u-42 u-43
//! famtrack remind test
//! ```

use anyhow::Result;
use colored::Colorize;

use crate::commands::{api_context, report_api_error};
use crate::errors::display_error;
use crate::exit_codes::*;

/// Execute the member action
pub async fn execute_member(member_id: String) -> Result<i32> {
    let (client, _store) = api_context()?;

    match client.send_reminder_to_member(&member_id).await {
        Ok(message) => {
            println!("{} {}", "✓".green().bold(), message);
            Ok(EXIT_SUCCESS)
        }
        Err(e) => Ok(report_api_error(&e)),
    }
}

/// Execute the all action
pub async fn execute_all() -> Result<i32> {
    let (client, _store) = api_context()?;

    match client.send_reminder_to_all().await {
        Ok(message) => {
            println!("{} {}", "✓".green().bold(), message);
            Ok(EXIT_SUCCESS)
        }
        Err(e) => Ok(report_api_error(&e)),
    }
}

/// Execute the bulk action
pub async fn execute_bulk(member_ids: Vec<String>) -> Result<i32> {
    if member_ids.is_empty() {
        display_error("Provide at least one member id");
        return Ok(EXIT_INVALID_INPUT);
    }

    let (client, _store) = api_context()?;

    match client.send_reminder_bulk(&member_ids).await {
        Ok(message) => {
            println!("{} {}", "✓".green().bold(), message);
            Ok(EXIT_SUCCESS)
        }
        Err(e) => Ok(report_api_error(&e)),
    }
}

/// Execute the test action
pub async fn execute_test() -> Result<i32> {
    let (client, _store) = api_context()?;

    match client.send_reminder_test().await {
        Ok(message) => {
            println!("{} {}", "✓".green().bold(), message);
            Ok(EXIT_SUCCESS)
        }
        Err(e) => Ok(report_api_error(&e)),
    }
}
