use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use tracing::debug;
use trip_core::calculations::generate_itinerary;
use trip_data::destinations;

use crate::utils::format_amount;

/// Generate a trip plan summary for a destination, date range, and budget.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Destination name (e.g. "Paris, France")
    pub destination: String,

    /// Trip start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,

    /// Trip end date (YYYY-MM-DD); must be after the start date
    #[arg(long)]
    pub end: NaiveDate,

    /// Total trip budget
    #[arg(long)]
    pub budget: Decimal,
}

pub fn run(args: &PlanArgs) -> Result<()> {
    let known = destinations::builtin().context("failed to load built-in destinations")?;
    let coords = match destinations::find(&known, &args.destination) {
        Some(destination) => destination.clone(),
        None => {
            debug!(destination = %args.destination, "unknown destination, using fallback coordinates");
            destinations::fallback()
        }
    };

    let plan = generate_itinerary(&args.destination, args.start, args.end, args.budget)
        .context("cannot generate a trip plan from these inputs")?;

    println!("Trip plan: {}", plan.destination_name);
    println!("  map center:   {:.4}, {:.4}", coords.lat, coords.lng);
    println!("  duration:     {} days", plan.duration_days);
    println!("  total budget: {}", format_amount(plan.total_budget));
    println!("  daily budget: {}", format_amount(plan.daily_budget));
    println!("Budget breakdown:");
    for (category, allocation) in &plan.budget_breakdown {
        println!(
            "  {:<16} {:>12}  ({}%)",
            category.label(),
            format_amount(allocation.amount),
            allocation.percentage
        );
    }

    Ok(())
}
