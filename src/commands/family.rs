//! # Family Command
//!
//! Family info and member management: show the family with its join
//! code, list members, and (for admins) remove members or rename the
//! family.
//!
//! ## Usage
//!
//! ```bash
//! famtrack family show
//! famtrack family members
//! famtrack family remove u-42
//! famtrack family rename "The Lovelaces"
//! ```

use anyhow::Result;
use colored::Colorize;

use crate::api::FamilyMember;
use crate::commands::{api_context, report_api_error};
use crate::exit_codes::*;
use crate::session::Role;

/// Execute the show action
pub async fn execute_show() -> Result<i32> {
    let (client, _store) = api_context()?;

    let family = match client.family().await {
        Ok(family) => family,
        Err(e) => return Ok(report_api_error(&e)),
    };

    println!("{}", family.family_name.bold());
    println!("{}", "─".repeat(40).dimmed());
    println!(
        "  Join code: {} — share it with family members",
        family.family_code.yellow().bold()
    );
    println!("  Members:   {}", family.users.len());
    for member in &family.users {
        print_member_line(member);
    }

    Ok(EXIT_SUCCESS)
}

/// Execute the members action
pub async fn execute_members() -> Result<i32> {
    let (client, _store) = api_context()?;

    let members = match client.family_members().await {
        Ok(members) => members,
        Err(e) => return Ok(report_api_error(&e)),
    };

    println!("{} {} members", "✓".green().bold(), members.len());
    for member in &members {
        print_member_line(member);
    }

    Ok(EXIT_SUCCESS)
}

/// Execute the remove action (admin only)
pub async fn execute_remove(member_id: String) -> Result<i32> {
    let (client, _store) = api_context()?;

    match client.remove_family_member(&member_id).await {
        Ok(message) => {
            println!("{} {}", "✓".green().bold(), message);
            Ok(EXIT_SUCCESS)
        }
        Err(e) => Ok(report_api_error(&e)),
    }
}

/// Execute the rename action (admin only)
pub async fn execute_rename(name: String) -> Result<i32> {
    let (client, _store) = api_context()?;

    match client.rename_family(&name).await {
        Ok(_) => {
            println!("{} Family renamed to {}", "✓".green().bold(), name.bold());
            Ok(EXIT_SUCCESS)
        }
        Err(e) => Ok(report_api_error(&e)),
    }
}

fn print_member_line(member: &FamilyMember) {
    let role = match member.role {
        Role::Admin => member.role.as_str().cyan().bold(),
        Role::Member => member.role.as_str().dimmed(),
    };
    println!(
        "  {:<16} {:<28} {}  {}",
        member.name,
        member.email.dimmed(),
        role,
        member.id.dimmed()
    );
}
