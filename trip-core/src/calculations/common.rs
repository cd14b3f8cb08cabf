//! Shared rounding helpers for the trip calculations.
//!
//! All money values round half-up (midpoint away from zero), matching the
//! fixed-point display formatting the product has always used.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use trip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to a whole unit, half-up.
///
/// Daily budgets and per-category allocations are displayed as whole
/// currency units.
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to one decimal place, half-up. Used for percentage displays.
pub fn round_tenth(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
