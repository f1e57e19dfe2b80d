//! # Login Command
//!
//! Signs into a family account and persists the resulting session so
//! later commands (and later runs) are authenticated.
//!
//! ## Usage
//!
//! ```bash
//! famtrack login --family-code FAM123 --email ada@example.com
//! ```

use anyhow::Result;
use colored::Colorize;

use crate::api::LoginRequest;
use crate::commands::{api_context, prompt_line, report_api_error};
use crate::exit_codes::*;
use crate::session::SessionStore;

/// Arguments for the login command
pub struct LoginArgs {
    /// Join code of the family
    pub family_code: String,
    /// Email address
    pub email: String,
    /// Password; prompted for when not provided
    pub password: Option<String>,
}

/// Execute the login command
///
/// # Returns
///
/// * `Ok(EXIT_SUCCESS)` - Authenticated and session saved
/// * `Ok(EXIT_AUTH_ERROR)` - Credentials rejected
/// * `Ok(EXIT_NETWORK_ERROR)` - Network connectivity issue
/// * `Err(_)` - Could not read input or reach the session store
pub async fn execute(args: LoginArgs) -> Result<i32> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_line("Password")?,
    };

    let (client, store) = api_context()?;

    let request = LoginRequest {
        family_code: args.family_code,
        email: args.email,
        password,
    };

    let data = match client.login(&request).await {
        Ok(data) => data,
        Err(e) => return Ok(report_api_error(&e)),
    };

    let session = data.into_session();
    store.store(&session)?;

    println!(
        "{} Signed in as {} ({})",
        "✓".green().bold(),
        session.user.name.bold(),
        session.user.email
    );
    if let Some(family_name) = &session.user.family_name {
        println!(
            "  Family: {} (code {})",
            family_name.cyan(),
            session.user.family_code.yellow()
        );
    }

    Ok(EXIT_SUCCESS)
}

/// Execute the forgot-code command
///
/// Asks the server to email the family join code to a registered
/// address.
pub async fn execute_forgot_code(email: String) -> Result<i32> {
    let (client, _store) = api_context()?;

    match client.forgot_family_code(&email).await {
        Ok(message) => {
            println!("{} {}", "✓".green().bold(), message);
            Ok(EXIT_SUCCESS)
        }
        Err(e) => Ok(report_api_error(&e)),
    }
}
