//! # Error Handling
//!
//! This module provides user-friendly error display functions
//! for the Famtrack CLI.

use colored::Colorize;

/// Display a network error with helpful suggestions
///
/// # Arguments
///
/// * `message` - The error message to display
pub fn display_network_error(message: &str) {
    eprintln!("{} Network error: {}", "✗".red().bold(), message);
    eprintln!();
    eprintln!("{}", "Possible causes:".yellow());
    eprintln!("  • No internet connection");
    eprintln!("  • API server is unreachable");
    eprintln!("  • Firewall blocking the connection");
    eprintln!();
    eprintln!(
        "{} Check your connection and try again.",
        "Tip:".cyan().bold()
    );
}

/// Display an authentication error with helpful suggestions
///
/// # Arguments
///
/// * `message` - The error message to display
pub fn display_auth_error(message: &str) {
    eprintln!("{} Authentication error: {}", "✗".red().bold(), message);
    eprintln!();
    eprintln!("{}", "Possible causes:".yellow());
    eprintln!("  • Credentials are invalid or expired");
    eprintln!("  • You haven't logged in yet");
    eprintln!();
    eprintln!(
        "{} Run `famtrack login` to authenticate.",
        "Tip:".cyan().bold()
    );
}

/// Display a session-expired error
///
/// Printed when the refresh protocol failed and the local session was
/// destroyed; the only way forward is a fresh login.
///
/// # Arguments
///
/// * `message` - The error message to display
pub fn display_session_expired(message: &str) {
    eprintln!("{} Session expired: {}", "✗".red().bold(), message);
    eprintln!();
    eprintln!("Your saved session is no longer valid and has been cleared.");
    eprintln!();
    eprintln!(
        "{} Run `famtrack login` to sign in again.",
        "Tip:".cyan().bold()
    );
}

/// Display a configuration error with helpful suggestions
///
/// # Arguments
///
/// * `message` - The error message to display
pub fn display_config_error(message: &str) {
    eprintln!("{} Configuration error: {}", "✗".red().bold(), message);
    eprintln!();
    eprintln!("{}", "Possible causes:".yellow());
    eprintln!("  • Configuration file is corrupted");
    eprintln!("  • Config directory is not writable");
    eprintln!();
    eprintln!(
        "{} Run `famtrack login` to reconfigure.",
        "Tip:".cyan().bold()
    );
}

/// Display a service unavailable error with helpful suggestions
///
/// # Arguments
///
/// * `message` - The error message to display
pub fn display_service_error(message: &str) {
    eprintln!("{} Service unavailable: {}", "✗".red().bold(), message);
    eprintln!();
    eprintln!("{}", "Possible causes:".yellow());
    eprintln!("  • API server is under maintenance");
    eprintln!("  • Service is temporarily unavailable");
    eprintln!();
    eprintln!("{} Try again in a few minutes.", "Tip:".cyan().bold());
}

/// Display a generic error
///
/// # Arguments
///
/// * `message` - The error message to display
pub fn display_error(message: &str) {
    eprintln!("{} Error: {}", "✗".red().bold(), message);
}

/// Display a warning
///
/// # Arguments
///
/// * `message` - The warning message to display
pub fn display_warning(message: &str) {
    eprintln!("{} Warning: {}", "⚠".yellow().bold(), message);
}

/// Display a success message
///
/// # Arguments
///
/// * `message` - The success message to display
pub fn display_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Display an info message
///
/// # Arguments
///
/// * `message` - The info message to display
pub fn display_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
