//! # CLI Command Implementations
//!
//! This module contains the implementation of all CLI commands.
//! Each submodule represents a top-level command or command group.
//!
//! ## Available Commands
//!
//! - [`login`] - Sign into a family account (and family-code recovery)
//! - [`register`] - Create an account via the email OTP flow
//! - [`logout`] - Revoke and clear the saved session
//! - [`status`] - Check configuration, API health, and session state
//! - [`config`] - Show and update the stored configuration
//! - [`entries`] - Income and expense listing, CRUD, and statistics
//! - [`dashboard`] - Totals, category breakdowns, and monthly trends
//! - [`family`] - Family info and member management
//! - [`reminder`] - Admin expense reminders

pub mod config;
pub mod dashboard;
pub mod entries;
pub mod family;
pub mod login;
pub mod logout;
pub mod register;
pub mod reminder;
pub mod status;

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::api::{ApiClient, ApiError};
use crate::config::Config;
use crate::errors::*;
use crate::exit_codes::*;
use crate::session::{FileSessionStore, SessionStore};

/// Build the API client and the session store behind it
///
/// The same store instance is returned separately so commands can
/// create or clear sessions themselves; the client only ever reads it
/// and maintains the access token.
pub(crate) fn api_context() -> Result<(ApiClient, Arc<FileSessionStore>)> {
    let config = Config::load_or_default();
    let store = Arc::new(FileSessionStore::new()?);
    let session_store: Arc<dyn SessionStore> = store.clone();
    let client = ApiClient::new(config.base_url(), session_store);
    Ok((client, store))
}

/// Display an API error and map it to an exit code
///
/// `SessionExpired` is the CLI's "redirect to login": the session has
/// already been destroyed by the client, so the only useful output is
/// the hint to sign in again.
pub(crate) fn report_api_error(err: &ApiError) -> i32 {
    match err {
        ApiError::SessionExpired { message } => {
            display_session_expired(message);
            EXIT_AUTH_ERROR
        }
        ApiError::Unauthorized { message } | ApiError::Forbidden { message } => {
            display_auth_error(message);
            EXIT_AUTH_ERROR
        }
        ApiError::Network { message } => {
            display_network_error(message);
            EXIT_NETWORK_ERROR
        }
        ApiError::Server { message, .. } => {
            display_service_error(message);
            EXIT_SERVICE_UNAVAILABLE
        }
        ApiError::Api { message, .. } | ApiError::Rejected { message } => {
            display_error(message);
            EXIT_INVALID_INPUT
        }
        ApiError::ParseError { message } => {
            display_error(message);
            EXIT_ERROR
        }
        ApiError::Storage { message } => {
            display_config_error(message);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Read one line of input from the terminal
pub(crate) fn prompt_line(label: &str) -> Result<String> {
    print!("{}: ", label);
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}
