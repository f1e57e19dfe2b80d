//! # Dashboard Command
//!
//! Prints the ledger summary the app's dashboard screen renders:
//! totals, category breakdowns, per-member statistics for the family
//! view, and the monthly trend series.
//!
//! ## Usage
//!
//! ```bash
//! famtrack dashboard
//! famtrack dashboard --family
//! famtrack dashboard --trends --months 6
//! ```

use anyhow::Result;
use colored::Colorize;
use std::collections::HashMap;

use crate::commands::{api_context, report_api_error};
use crate::exit_codes::*;

/// Arguments for the dashboard command
pub struct DashboardArgs {
    /// Show the family-wide view instead of the personal one
    pub family: bool,
    /// Show the monthly trend series instead of the summary
    pub trends: bool,
    /// Trend window in months (server default when absent)
    pub months: Option<u32>,
}

/// Execute the dashboard command
pub async fn execute(args: DashboardArgs) -> Result<i32> {
    let (client, _store) = api_context()?;

    if args.trends {
        let trends = match if args.family {
            client.family_trends(args.months).await
        } else {
            client.my_trends(args.months).await
        } {
            Ok(trends) => trends,
            Err(e) => return Ok(report_api_error(&e)),
        };

        if trends.is_empty() {
            println!("{} No trend data yet.", "ℹ".blue().bold());
            return Ok(EXIT_SUCCESS);
        }

        println!("{}", "Monthly Trends".bold());
        println!("{}", "─".repeat(48).dimmed());
        println!("  {:<10} {:>10} {:>10} {:>10}", "Month", "Income", "Expense", "Net");
        for point in &trends {
            let net = point.income - point.expense;
            println!(
                "  {:<10} {:>10.2} {:>10.2} {:>10}",
                point.month,
                point.income,
                point.expense,
                colored_net(net)
            );
        }
        return Ok(EXIT_SUCCESS);
    }

    let data = match if args.family {
        client.family_dashboard().await
    } else {
        client.my_dashboard().await
    } {
        Ok(data) => data,
        Err(e) => return Ok(report_api_error(&e)),
    };

    let title = if args.family {
        "Family Dashboard"
    } else {
        "My Dashboard"
    };
    println!("{}", title.bold());
    println!("{}", "─".repeat(48).dimmed());
    println!("  Total income:  {}", format!("{:.2}", data.total_income).green());
    println!("  Total expense: {}", format!("{:.2}", data.total_expense).red());
    println!("  Balance:       {}", colored_net(data.balance).bold());

    print_breakdown("Income by category", &data.income_by_category);
    print_breakdown("Expense by category", &data.expense_by_category);

    if let Some(member_stats) = &data.member_stats {
        println!();
        println!("{}", "Per member".bold());
        for member in member_stats {
            println!(
                "  {:<16} income {:>10.2}  expense {:>10.2}  balance {:>10}",
                member.user_name,
                member.income,
                member.expense,
                colored_net(member.balance)
            );
        }
    }

    Ok(EXIT_SUCCESS)
}

fn colored_net(net: f64) -> String {
    let text = format!("{:.2}", net);
    if net >= 0.0 {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

fn print_breakdown(title: &str, breakdown: &HashMap<String, f64>) {
    if breakdown.is_empty() {
        return;
    }

    println!();
    println!("{}", title.bold());
    let mut rows: Vec<_> = breakdown.iter().collect();
    rows.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
    for (category, amount) in rows {
        println!("  {:<16} {:>10.2}", category, amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colored_net_sign_handling() {
        // Colored output still carries the formatted number
        assert!(colored_net(10.0).contains("10.00"));
        assert!(colored_net(-3.5).contains("-3.50"));
    }

    #[test]
    fn test_print_breakdown_empty_is_silent() {
        // Just verify it doesn't panic on the empty map
        print_breakdown("Nothing", &HashMap::new());
    }
}
