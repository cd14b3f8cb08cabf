use rust_decimal::Decimal;

/// Normalizes input for decimal parsing: trims whitespace and removes commas
/// (thousands separator), plus a leading currency sign.
fn normalize_decimal_input(s: &str) -> String {
    s.trim().trim_start_matches('$').replace(',', "")
}

/// Parses a string into an optional [`Decimal`].
///
/// Returns `None` for empty or whitespace-only input, or when parsing fails
/// (logs a warning on parse failure). Callers treat `None` as "abort the
/// operation, keep the previous display" — malformed amounts are never
/// surfaced as user-facing errors.
pub fn parse_optional_decimal(s: &str) -> Option<Decimal> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        None
    } else {
        normalized.parse().map_or_else(
            |e| {
                tracing::warn!(input = %s, "invalid optional decimal: {}", e);
                None
            },
            Some,
        )
    }
}

/// Formats a money amount with a currency sign and thousands separators,
/// e.g. `$1,234.56`. Negative amounts render as `-$200.00`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let s = format!("{rounded:.2}");
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < Decimal::ZERO { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

/// Formats an optional rating for display, using "N/A" when absent.
pub fn format_rating(rating: &Option<Decimal>) -> String {
    rating
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Formats a minute count as `3h 20m`.
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}
