//! # Status Command
//!
//! Implements the status command for checking configuration, API
//! health, and the saved session.
//!
//! ## Usage
//!
//! ```bash
//! famtrack status
//! ```

use anyhow::Result;
use colored::Colorize;

use crate::commands::api_context;
use crate::config::Config;
use crate::exit_codes::*;
use crate::session::SessionStore;

/// Execute the status command
///
/// # Returns
///
/// * `Ok(EXIT_SUCCESS)` - Configured, reachable, and signed in
/// * `Ok(EXIT_CONFIG_ERROR)` - Not signed in
/// * `Ok(EXIT_NETWORK_ERROR)` - Cannot reach the API
pub async fn execute() -> Result<i32> {
    println!("{}", "Famtrack CLI Status".bold());
    println!("{}", "─".repeat(40).dimmed());
    println!();

    // Check configuration
    if Config::exists() {
        println!(
            "{} Configuration: {}",
            "✓".green().bold(),
            "Found".green()
        );
    } else {
        println!(
            "{} Configuration: {}",
            "ℹ".blue().bold(),
            "Using defaults".dimmed()
        );
    }

    let (client, store) = api_context()?;

    println!();
    println!("{} API Endpoint: {}", "ℹ".blue(), client.base_url.cyan());

    match client.health_check().await {
        Ok(true) => {
            println!("{} API Status: {}", "✓".green().bold(), "Healthy".green());
        }
        Ok(false) => {
            println!(
                "{} API Status: {}",
                "⚠".yellow().bold(),
                "Unhealthy".yellow()
            );
            println!("  {} The API returned a non-success status", "→".cyan());
        }
        Err(e) => {
            println!("{} API Status: {}", "✗".red().bold(), "Unreachable".red());
            println!("  {} {}", "Error:".dimmed(), format!("{}", e).dimmed());
            println!();
            println!("{}", "Possible causes:".yellow());
            println!("  • No internet connection");
            println!("  • API server is down");
            println!("  • Firewall blocking the connection");
            return Ok(EXIT_NETWORK_ERROR);
        }
    }

    // Check the saved session
    println!();
    match store.load() {
        Some(session) => {
            println!(
                "{} Signed in: {} ({}, {})",
                "✓".green().bold(),
                session.user.name.bold(),
                session.user.email,
                session.user.role.as_str().dimmed()
            );
            println!(
                "  Family: {} (code {})",
                session
                    .user
                    .family_name
                    .as_deref()
                    .unwrap_or("—")
                    .cyan(),
                session.user.family_code.yellow()
            );
            println!(
                "  Access token: {}",
                mask_token(&session.access_token).dimmed()
            );
            println!(
                "  Refresh token: {}",
                mask_token(&session.refresh_token).dimmed()
            );

            // Exercise the credentials; a stale access token gets
            // refreshed along the way.
            match client.validate_session().await {
                Ok(true) => {
                    println!(
                        "{} Authentication: {}",
                        "✓".green().bold(),
                        "Valid".green()
                    );
                }
                Ok(false) => {
                    println!(
                        "{} Authentication: {}",
                        "⚠".yellow().bold(),
                        "Rejected by the server".yellow()
                    );
                    println!("  {} Run `famtrack login` to sign in again", "→".cyan());
                    return Ok(EXIT_AUTH_ERROR);
                }
                Err(e) => {
                    println!(
                        "{} Authentication: {}",
                        "⚠".yellow().bold(),
                        "Could not be verified".yellow()
                    );
                    println!("  {} {}", "Error:".dimmed(), format!("{}", e).dimmed());
                }
            }

            println!();
            println!(
                "{} Ready. Run `famtrack dashboard` to see where the money went.",
                "✓".green().bold()
            );
            Ok(EXIT_SUCCESS)
        }
        None => {
            println!(
                "{} Not signed in. Run `famtrack login` to get started.",
                "✗".red().bold()
            );
            Ok(EXIT_CONFIG_ERROR)
        }
    }
}

/// Mask a token for display
///
/// Shows the first 8 characters and masks the rest.
fn mask_token(token: &str) -> String {
    if token.len() <= 12 {
        return "*".repeat(token.len());
    }

    let visible = &token[..8];
    let masked_len = token.len() - 8;
    format!("{}{}", visible, "*".repeat(masked_len.min(8)))
}
