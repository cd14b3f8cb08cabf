use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rust_decimal::Decimal;
use trip_core::calculations::aggregate_budget;

use crate::csv_input::load_expenses;
use crate::utils::format_amount;

/// Summarize recorded expenses against a total budget.
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Path to the expenses CSV file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Total trip budget
    #[arg(long)]
    pub budget: Decimal,
}

pub fn run(args: &BudgetArgs) -> Result<()> {
    let file = File::open(&args.file)
        .with_context(|| format!("failed to open: {}", args.file.display()))?;
    let expenses = load_expenses(file)
        .with_context(|| format!("failed to parse expenses: {}", args.file.display()))?;

    let snapshot = aggregate_budget(&expenses, args.budget);

    println!("Total budget: {}", format_amount(snapshot.total_budget));
    println!("Total spent:  {}", format_amount(snapshot.total_spent));
    println!("Remaining:    {}", format_amount(snapshot.remaining));
    println!("Budget usage: {}%", snapshot.utilization_percent);
    if snapshot.is_over_budget {
        println!("OVER BUDGET");
    }

    if !snapshot.category_totals.is_empty() {
        println!("By category:");
        for (category, total) in &snapshot.category_totals {
            println!("  {:<16} {:>12}", category.label(), format_amount(*total));
        }
    }

    Ok(())
}
