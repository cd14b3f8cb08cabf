use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use trip_core::calculations::{ExpiryStatus, days_until_expiry, evaluate_expiry};

use crate::csv_input::load_documents;

/// Check travel documents for expiry.
#[derive(Args, Debug)]
pub struct DocumentsArgs {
    /// Path to the documents CSV file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Evaluate against this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

pub fn run(args: &DocumentsArgs) -> Result<()> {
    let file = File::open(&args.file)
        .with_context(|| format!("failed to open: {}", args.file.display()))?;
    let documents = load_documents(file)
        .with_context(|| format!("failed to parse documents: {}", args.file.display()))?;

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    for document in &documents {
        let status = evaluate_expiry(document.expiry_date, today);
        let detail = match (status, document.expiry_date) {
            (ExpiryStatus::NoExpiry, _) => "no expiry date".to_string(),
            (_, Some(expiry)) => {
                let days = days_until_expiry(expiry, today);
                format!("expires {expiry} ({days} days)")
            }
            // evaluate_expiry only returns NoExpiry for a missing date.
            (_, None) => String::new(),
        };
        println!(
            "{:<14} {:<24} {:<14} {}",
            document.kind.as_str(),
            document.name,
            status.as_str(),
            detail
        );
    }

    Ok(())
}
