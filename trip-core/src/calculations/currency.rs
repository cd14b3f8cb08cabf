//! Currency conversion over a static bilateral rate table.
//!
//! Lookup order: same currency, directly listed pair, inverse of the reverse
//! pair, then an identity fallback of 1.0 for pairs missing in both
//! directions. The fallback keeps the legacy behavior of returning the input
//! amount unchanged, but the rate source is reported so callers can tell a
//! real conversion from the degradation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::RateTable;

/// Where the applied exchange rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RateSource {
    /// From and to currencies are identical; rate is 1.
    SameCurrency,
    /// The (from, to) pair is listed in the table.
    Direct,
    /// Only the (to, from) pair is listed; the rate is its reciprocal.
    Inverse,
    /// Neither direction is listed; the identity rate 1.0 was assumed.
    Unlisted,
}

impl RateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SameCurrency => "same-currency",
            Self::Direct => "direct",
            Self::Inverse => "inverse",
            Self::Unlisted => "unlisted",
        }
    }
}

/// Result of a single conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub from: String,
    pub to: String,
    pub amount: Decimal,

    /// `amount * rate`, rounded half-up to two decimal places.
    pub converted: Decimal,

    /// The applied rate, unrounded.
    pub rate: Decimal,

    pub source: RateSource,
}

/// Converts `amount` from one currency to another.
///
/// Currency codes are case-insensitive. A pair absent from the table in both
/// directions converts at 1.0 and is reported as [`RateSource::Unlisted`];
/// a warning is logged because the result is almost certainly not a real
/// exchange rate. A reverse pair listed with a zero rate cannot be inverted
/// and is treated the same way.
pub fn convert(
    table: &RateTable,
    amount: Decimal,
    from: &str,
    to: &str,
) -> Conversion {
    let from = from.to_uppercase();
    let to = to.to_uppercase();

    let (rate, source) = if from == to {
        (Decimal::ONE, RateSource::SameCurrency)
    } else if let Some(rate) = table.direct(&from, &to) {
        (rate, RateSource::Direct)
    } else if let Some(reverse) = table.direct(&to, &from)
        && reverse != Decimal::ZERO
    {
        (Decimal::ONE / reverse, RateSource::Inverse)
    } else {
        tracing::warn!(%from, %to, "no exchange rate listed in either direction, assuming 1.0");
        (Decimal::ONE, RateSource::Unlisted)
    };

    Conversion {
        converted: round_half_up(amount * rate),
        rate,
        amount,
        from,
        to,
        source,
    }
}
