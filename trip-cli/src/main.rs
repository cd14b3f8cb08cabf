use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use trip_cli::commands::{budget, convert, documents, plan, routes, savings};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Trip planning calculator: budgets, savings, currency, itineraries,
/// documents, and route comparison.
#[derive(Debug, Parser)]
#[command(name = "tripcraft", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert an amount between currencies
    Convert(convert::ConvertArgs),

    /// Generate a trip plan summary
    Plan(plan::PlanArgs),

    /// Summarize expenses against a budget
    Budget(budget::BudgetArgs),

    /// Compare original vs optimized cost estimates
    Savings(savings::SavingsArgs),

    /// Check travel documents for expiry
    Documents(documents::DocumentsArgs),

    /// Filter, sort, and rank route candidates
    Routes(routes::RoutesArgs),
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match &cli.command {
        Command::Convert(args) => convert::run(args),
        Command::Plan(args) => plan::run(args),
        Command::Budget(args) => budget::run(args),
        Command::Savings(args) => savings::run(args),
        Command::Documents(args) => documents::run(args),
        Command::Routes(args) => routes::run(args),
    }
}
