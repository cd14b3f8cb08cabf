use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use trip_core::calculations::{SavingsTier, calculate_savings};

use crate::csv_input::load_savings_entries;
use crate::utils::format_amount;

/// Compare original against optimized cost estimates.
#[derive(Args, Debug)]
pub struct SavingsArgs {
    /// Path to the comparison CSV file
    #[arg(short, long)]
    pub file: PathBuf,
}

fn tier_marker(tier: SavingsTier) -> &'static str {
    match tier {
        SavingsTier::High => "***",
        SavingsTier::Medium => "**",
        SavingsTier::Low => "",
    }
}

pub fn run(args: &SavingsArgs) -> Result<()> {
    let file = File::open(&args.file)
        .with_context(|| format!("failed to open: {}", args.file.display()))?;
    let entries = load_savings_entries(file)
        .with_context(|| format!("failed to parse savings entries: {}", args.file.display()))?;

    let report = calculate_savings(&entries);

    for line in &report.lines {
        println!(
            "{:<16} {:>12} -> {:>12}  save {:>10} ({}%) {}",
            line.category,
            format_amount(line.original_amount),
            format_amount(line.optimized_amount),
            format_amount(line.savings),
            line.savings_percent,
            tier_marker(SavingsTier::classify(line.savings))
        );
    }
    println!(
        "total: {} -> {}, saving {} ({}%)",
        format_amount(report.total_original),
        format_amount(report.total_optimized),
        format_amount(report.total_savings),
        report.total_savings_percent
    );

    Ok(())
}
