//! # Famtrack CLI
//!
//! Famtrack — the family ledger from your terminal
//!
//! Log incomes and expenses, watch the family balance, and keep
//! everyone honest about where the money went.
//!
//! ## Usage
//!
//! ```bash
//! # Authenticate
//! famtrack login --family-code FAM123 --email ada@example.com
//!
//! # Record and inspect the ledger
//! famtrack expense add --amount 42.50 --category Food
//! famtrack dashboard --family
//! ```

use clap::{Parser, Subcommand};
use famtrack::commands;

/// Initialize logger based on verbose flag
fn init_logger(verbose: bool) {
    let mut log_builder = env_logger::Builder::from_default_env();
    if verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
}

/// Main CLI structure
#[derive(Parser)]
#[command(name = "famtrack")]
#[command(about = "Famtrack — the family ledger from your terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Sign into a family account
    Login {
        /// Join code of the family
        #[arg(long, short = 'f', value_name = "CODE")]
        family_code: String,
        /// Email address
        #[arg(long, short = 'e', value_name = "EMAIL")]
        email: String,
        /// Password (prompted for when omitted)
        #[arg(long, short = 'p')]
        password: Option<String>,
    },
    /// Register a new account via email verification
    Register {
        /// Display name
        #[arg(long, short = 'n')]
        name: String,
        /// Email address to verify and register
        #[arg(long, short = 'e', value_name = "EMAIL")]
        email: String,
        /// Password (prompted for when omitted)
        #[arg(long, short = 'p')]
        password: Option<String>,
        /// Create a new family with this name
        #[arg(long, value_name = "NAME", conflicts_with = "family_code")]
        family_name: Option<String>,
        /// Join an existing family by code
        #[arg(long, value_name = "CODE")]
        family_code: Option<String>,
    },
    /// Email the family join code to a registered address
    ForgotCode {
        /// Email address on the account
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// Sign out and clear the saved session
    Logout,
    /// Check configuration, API health, and session state
    Status,
    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Manage incomes
    Income {
        #[command(subcommand)]
        command: LedgerCommands,
    },
    /// Manage expenses
    Expense {
        #[command(subcommand)]
        command: LedgerCommands,
    },
    /// Show ledger summaries and trends
    Dashboard {
        /// Family-wide view instead of the personal one
        #[arg(long)]
        family: bool,
        /// Monthly trend series instead of the summary
        #[arg(long)]
        trends: bool,
        /// Trend window in months (1-24)
        #[arg(long, value_name = "COUNT", requires = "trends")]
        months: Option<u32>,
    },
    /// Family info and member management
    Family {
        #[command(subcommand)]
        command: FamilyCommands,
    },
    /// Send expense reminders (admin)
    Remind {
        #[command(subcommand)]
        command: RemindCommands,
    },
}

/// Income/expense subcommands
#[derive(Subcommand)]
enum LedgerCommands {
    /// List entries
    List {
        /// List the whole family's entries
        #[arg(long)]
        family: bool,
    },
    /// Show a single entry
    Show {
        /// Entry id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Record a new entry
    Add {
        /// Amount
        #[arg(long, short = 'a')]
        amount: f64,
        /// Category label (e.g. Salary, Food)
        #[arg(long, short = 'c')]
        category: String,
        /// Date as YYYY-MM-DD (today when omitted)
        #[arg(long, short = 'd', value_name = "DATE")]
        date: Option<String>,
        /// Free-form note
        #[arg(long)]
        notes: Option<String>,
    },
    /// Replace an existing entry
    Update {
        /// Entry id
        #[arg(value_name = "ID")]
        id: String,
        /// Amount
        #[arg(long, short = 'a')]
        amount: f64,
        /// Category label
        #[arg(long, short = 'c')]
        category: String,
        /// Date as YYYY-MM-DD (today when omitted)
        #[arg(long, short = 'd', value_name = "DATE")]
        date: Option<String>,
        /// Free-form note
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an entry
    Rm {
        /// Entry id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Show aggregate statistics
    Stats,
}

/// Config subcommands
#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Store a new API base URL
    SetUrl {
        /// Base URL (e.g. https://app.famtrack.dev)
        #[arg(value_name = "URL")]
        url: String,
    },
}

/// Family subcommands
#[derive(Subcommand)]
enum FamilyCommands {
    /// Show the family with its join code and roster
    Show,
    /// List the family's members
    Members,
    /// Remove a member (admin)
    Remove {
        /// Member id
        #[arg(value_name = "ID")]
        member_id: String,
    },
    /// Rename the family (admin)
    Rename {
        /// New family name
        #[arg(value_name = "NAME")]
        name: String,
    },
}

/// Reminder subcommands
#[derive(Subcommand)]
enum RemindCommands {
    /// Remind a single member
    Member {
        /// Member id
        #[arg(value_name = "ID")]
        member_id: String,
    },
    /// Remind every member
    All,
    /// Remind a selected set of members
    Bulk {
        /// Member ids
        #[arg(value_name = "ID", required = true)]
        member_ids: Vec<String>,
    },
    /// Send a test reminder to yourself
    Test,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let exit_code = run_command(cli.command).await;
    std::process::exit(exit_code);
}

async fn run_command(command: Commands) -> i32 {
    use famtrack::exit_codes::*;

    match command {
        Commands::Login {
            family_code,
            email,
            password,
        } => {
            let args = commands::login::LoginArgs {
                family_code,
                email,
                password,
            };
            match commands::login::execute(args).await {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("Login error: {}", e);
                    EXIT_CONFIG_ERROR
                }
            }
        }
        Commands::Register {
            name,
            email,
            password,
            family_name,
            family_code,
        } => {
            let args = commands::register::RegisterArgs {
                name,
                email,
                password,
                family_name,
                family_code,
            };
            match commands::register::execute(args).await {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("Register error: {}", e);
                    EXIT_CONFIG_ERROR
                }
            }
        }
        Commands::ForgotCode { email } => {
            match commands::login::execute_forgot_code(email).await {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("Forgot-code error: {}", e);
                    EXIT_ERROR
                }
            }
        }
        Commands::Logout => match commands::logout::execute().await {
            Ok(exit_code) => exit_code,
            Err(e) => {
                eprintln!("Logout error: {}", e);
                EXIT_CONFIG_ERROR
            }
        },
        Commands::Status => match commands::status::execute().await {
            Ok(exit_code) => exit_code,
            Err(e) => {
                eprintln!("Status error: {}", e);
                EXIT_CONFIG_ERROR
            }
        },
        Commands::Config { command } => {
            let result = match command {
                ConfigCommands::Show => commands::config::execute_show(),
                ConfigCommands::SetUrl { url } => commands::config::execute_set_url(url),
            };
            match result {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("Config error: {}", e);
                    EXIT_CONFIG_ERROR
                }
            }
        }
        Commands::Income { command } => {
            run_ledger_command(commands::entries::LedgerKind::Income, command).await
        }
        Commands::Expense { command } => {
            run_ledger_command(commands::entries::LedgerKind::Expense, command).await
        }
        Commands::Dashboard {
            family,
            trends,
            months,
        } => {
            let args = commands::dashboard::DashboardArgs {
                family,
                trends,
                months,
            };
            match commands::dashboard::execute(args).await {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("Dashboard error: {}", e);
                    EXIT_ERROR
                }
            }
        }
        Commands::Family { command } => run_family_command(command).await,
        Commands::Remind { command } => run_remind_command(command).await,
    }
}

async fn run_ledger_command(
    kind: commands::entries::LedgerKind,
    command: LedgerCommands,
) -> i32 {
    use famtrack::exit_codes::*;

    let result = match command {
        LedgerCommands::List { family } => commands::entries::execute_list(kind, family).await,
        LedgerCommands::Show { id } => commands::entries::execute_show(kind, id).await,
        LedgerCommands::Add {
            amount,
            category,
            date,
            notes,
        } => {
            let args = commands::entries::DraftArgs {
                amount,
                category,
                date,
                notes,
            };
            commands::entries::execute_add(kind, args).await
        }
        LedgerCommands::Update {
            id,
            amount,
            category,
            date,
            notes,
        } => {
            let args = commands::entries::DraftArgs {
                amount,
                category,
                date,
                notes,
            };
            commands::entries::execute_update(kind, id, args).await
        }
        LedgerCommands::Rm { id } => commands::entries::execute_remove(kind, id).await,
        LedgerCommands::Stats => commands::entries::execute_stats(kind).await,
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} error: {}", kind.singular(), e);
            EXIT_ERROR
        }
    }
}

async fn run_family_command(command: FamilyCommands) -> i32 {
    use famtrack::exit_codes::*;

    let result = match command {
        FamilyCommands::Show => commands::family::execute_show().await,
        FamilyCommands::Members => commands::family::execute_members().await,
        FamilyCommands::Remove { member_id } => commands::family::execute_remove(member_id).await,
        FamilyCommands::Rename { name } => commands::family::execute_rename(name).await,
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Family error: {}", e);
            EXIT_ERROR
        }
    }
}

async fn run_remind_command(command: RemindCommands) -> i32 {
    use famtrack::exit_codes::*;

    let result = match command {
        RemindCommands::Member { member_id } => commands::reminder::execute_member(member_id).await,
        RemindCommands::All => commands::reminder::execute_all().await,
        RemindCommands::Bulk { member_ids } => commands::reminder::execute_bulk(member_ids).await,
        RemindCommands::Test => commands::reminder::execute_test().await,
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Reminder error: {}", e);
            EXIT_ERROR
        }
    }
}
