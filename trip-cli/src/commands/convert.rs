use anyhow::{Context, Result};
use clap::Args;
use trip_core::calculations::{RateSource, convert};
use trip_data::rates;

use crate::utils::{format_amount, parse_optional_decimal};

/// Convert an amount between currencies using the shipped rate table.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Amount to convert. `$` and comma separators are tolerated.
    pub amount: String,

    /// Source currency code (e.g. USD)
    pub from: String,

    /// Target currency code (e.g. EUR)
    pub to: String,
}

pub fn run(args: &ConvertArgs) -> Result<()> {
    // Malformed amounts are a no-op, not an error.
    let Some(amount) = parse_optional_decimal(&args.amount) else {
        return Ok(());
    };

    let table = rates::builtin().context("failed to load built-in exchange rates")?;
    let conversion = convert(&table, amount, &args.from, &args.to);

    println!(
        "{} {} = {} {}",
        conversion.amount, conversion.from, conversion.converted, conversion.to
    );
    println!(
        "rate: 1 {} = {} {} ({})",
        conversion.from,
        conversion.rate.round_dp(4),
        conversion.to,
        conversion.source.as_str()
    );
    if conversion.source == RateSource::Unlisted {
        println!(
            "note: no rate is listed for this pair; the amount was returned unchanged ({})",
            format_amount(conversion.converted)
        );
    }

    Ok(())
}
