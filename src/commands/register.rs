//! # Register Command
//!
//! Creates an account through the service's three-step flow: request a
//! one-time code for the email, verify it, then register — either
//! creating a new family by name or joining an existing one by code.
//!
//! ## Usage
//!
//! ```bash
//! # Start a new family
//! famtrack register --name Ada --email ada@example.com --family-name Lovelace
//!
//! # Join an existing one
//! famtrack register --name Grace --email grace@example.com --family-code FAM123
//! ```

use anyhow::Result;
use colored::Colorize;

use crate::api::RegisterRequest;
use crate::commands::{api_context, prompt_line, report_api_error};
use crate::errors::display_error;
use crate::exit_codes::*;
use crate::session::SessionStore;

/// Arguments for the register command
pub struct RegisterArgs {
    /// Display name
    pub name: String,
    /// Email address to verify and register
    pub email: String,
    /// Password; prompted for when not provided
    pub password: Option<String>,
    /// Name for a newly created family
    pub family_name: Option<String>,
    /// Join code of an existing family
    pub family_code: Option<String>,
}

/// Execute the register command
///
/// # Returns
///
/// * `Ok(EXIT_SUCCESS)` - Registered and session saved
/// * `Ok(EXIT_INVALID_INPUT)` - Family arguments missing or conflicting
/// * `Ok(_)` - API error mapped to its exit code
pub async fn execute(args: RegisterArgs) -> Result<i32> {
    match (&args.family_name, &args.family_code) {
        (Some(_), Some(_)) => {
            display_error("Use either --family-name or --family-code, not both");
            return Ok(EXIT_INVALID_INPUT);
        }
        (None, None) => {
            display_error("Provide --family-name to start a family or --family-code to join one");
            return Ok(EXIT_INVALID_INPUT);
        }
        _ => {}
    }

    let (client, store) = api_context()?;

    // Step 1: get a one-time code to the inbox
    match client.send_otp(&args.email).await {
        Ok(message) => println!("{} {}", "✓".green().bold(), message),
        Err(e) => return Ok(report_api_error(&e)),
    }

    // Step 2: verify it
    let otp = prompt_line("Verification code")?;
    match client.verify_otp(&args.email, &otp).await {
        Ok(message) => println!("{} {}", "✓".green().bold(), message),
        Err(e) => return Ok(report_api_error(&e)),
    }

    // Step 3: register with the verified email
    let password = match args.password {
        Some(password) => password,
        None => prompt_line("Password (min 6 characters)")?,
    };

    let request = RegisterRequest {
        name: args.name,
        email: args.email,
        password,
        family_name: args.family_name,
        family_code: args.family_code,
    };

    let data = match client.register(&request).await {
        Ok(data) => data,
        Err(e) => return Ok(report_api_error(&e)),
    };

    let created_code = data.family_code.clone();
    let session = data.into_session();
    store.store(&session)?;

    println!(
        "{} Welcome, {}! You are signed in.",
        "✓".green().bold(),
        session.user.name.bold()
    );

    // A fresh family means a fresh join code worth surfacing
    let code = created_code.unwrap_or_else(|| session.user.family_code.clone());
    println!(
        "  Family code: {} — share it so others can join.",
        code.yellow().bold()
    );

    Ok(EXIT_SUCCESS)
}
