//! # Logout Command
//!
//! Revokes the refresh token on the server (best-effort) and clears
//! the persisted session. Local state is cleared even when the server
//! call fails — once the user asks to sign out, they sign out.

use anyhow::Result;
use colored::Colorize;

use crate::commands::api_context;
use crate::errors::display_warning;
use crate::exit_codes::*;
use crate::session::SessionStore;

/// Execute the logout command
///
/// # Returns
///
/// * `Ok(EXIT_SUCCESS)` - Session cleared (or there was none)
pub async fn execute() -> Result<i32> {
    let (client, store) = api_context()?;

    let Some(session) = store.load() else {
        println!("{} Not signed in.", "ℹ".blue().bold());
        return Ok(EXIT_SUCCESS);
    };

    if let Err(e) = client.logout(&session.refresh_token).await {
        // The refresh protocol may already have evicted the session;
        // anything else is worth a warning but never blocks sign-out.
        if !e.is_session_expired() {
            display_warning(&format!(
                "Server logout failed ({}); clearing local session anyway",
                e
            ));
        }
    }

    store.clear()?;
    println!("{} Signed out.", "✓".green().bold());

    Ok(EXIT_SUCCESS)
}
