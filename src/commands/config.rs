//! # Config Command
//!
//! Shows and updates the stored CLI configuration. The only setting is
//! the API base URL; `FAMTRACK_BASE_URL` always overrides the stored
//! value without touching it.
//!
//! ## Usage
//!
//! ```bash
//! famtrack config show
//! famtrack config set-url https://staging.famtrack.dev
//! ```

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::exit_codes::*;

/// Execute the show action
pub fn execute_show() -> Result<i32> {
    let config = Config::load_or_default();

    println!("{}", "Famtrack Configuration".bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("  Base URL: {}", config.base_url().cyan());
    if !Config::exists() {
        println!("  {}", "(defaults; no config file written yet)".dimmed());
    }

    Ok(EXIT_SUCCESS)
}

/// Execute the set-url action
pub fn execute_set_url(url: String) -> Result<i32> {
    let config = Config::with_url(url);
    config.save()?;

    println!(
        "{} Base URL set to {}",
        "✓".green().bold(),
        config.base_url().cyan()
    );

    Ok(EXIT_SUCCESS)
}
