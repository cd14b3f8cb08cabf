//! Trip plan derivation from a date range and a total budget.
//!
//! Deterministic: duration is the ceiling day count between the dates, the
//! daily budget is the whole-unit rounded quotient, and the category
//! breakdown applies fixed weights (accommodation 35%, food 25%,
//! transportation 20%, activities 15%, miscellaneous 5%). Per-category
//! amounts are rounded independently; the residue against the total is
//! accepted rather than renormalized, so the amounts may differ from the
//! total by at most one unit per category beyond the first.
//!
//! The summary is recomputed in full on every call and never partially
//! updated.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_whole;
use crate::models::ExpenseCategory;

/// Errors that can occur when deriving a trip plan.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItineraryError {
    /// The end date is not strictly after the start date.
    #[error("trip end date {end} is not after start date {start}")]
    EmptyDateRange { start: NaiveDate, end: NaiveDate },

    /// The total budget is zero or negative.
    #[error("total budget must be positive, got {0}")]
    NonPositiveBudget(Decimal),
}

/// One category's slice of the total budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    /// Whole-unit rounded share of the total budget.
    pub amount: Decimal,

    /// Fixed weight as a percentage. The five weights always sum to 100.
    pub percentage: u32,
}

/// Derived trip plan summary. Never stored; recomputed on every generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPlanSummary {
    pub destination_name: String,
    pub duration_days: u32,
    pub total_budget: Decimal,

    /// `total_budget / duration_days`, rounded to a whole unit.
    pub daily_budget: Decimal,

    pub budget_breakdown: BTreeMap<ExpenseCategory, CategoryAllocation>,
}

/// The fixed allocation weights, as (category, weight, percentage).
fn budget_weights() -> [(ExpenseCategory, Decimal, u32); 5] {
    [
        (ExpenseCategory::Accommodation, Decimal::new(35, 2), 35),
        (ExpenseCategory::Food, Decimal::new(25, 2), 25),
        (ExpenseCategory::Transportation, Decimal::new(20, 2), 20),
        (ExpenseCategory::Activities, Decimal::new(15, 2), 15),
        (ExpenseCategory::Miscellaneous, Decimal::new(5, 2), 5),
    ]
}

/// Derives a [`TripPlanSummary`] for a destination, date range, and budget.
///
/// # Errors
///
/// Returns [`ItineraryError`] if the end date is not strictly after the
/// start date or the budget is not positive. The UI validates these upstream,
/// but the library refuses them as well rather than producing a zero-day
/// plan.
pub fn generate_itinerary(
    destination_name: &str,
    start: NaiveDate,
    end: NaiveDate,
    total_budget: Decimal,
) -> Result<TripPlanSummary, ItineraryError> {
    let days = (end - start).num_days();
    if days <= 0 {
        return Err(ItineraryError::EmptyDateRange { start, end });
    }
    if total_budget <= Decimal::ZERO {
        return Err(ItineraryError::NonPositiveBudget(total_budget));
    }

    let duration_days = days as u32;
    let daily_budget = round_whole(total_budget / Decimal::from(duration_days));

    let budget_breakdown = budget_weights()
        .into_iter()
        .map(|(category, weight, percentage)| {
            let allocation = CategoryAllocation {
                amount: round_whole(total_budget * weight),
                percentage,
            };
            (category, allocation)
        })
        .collect();

    Ok(TripPlanSummary {
        destination_name: destination_name.to_string(),
        duration_days,
        total_budget,
        daily_budget,
        budget_breakdown,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn date(
        y: i32,
        m: u32,
        d: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn documented_scenario() {
        let plan = generate_itinerary(
            "Paris, France",
            date(2024, 11, 1),
            date(2024, 11, 8),
            dec!(1400),
        )
        .unwrap();

        assert_eq!(plan.duration_days, 7);
        assert_eq!(plan.daily_budget, dec!(200));

        let accommodation = &plan.budget_breakdown[&ExpenseCategory::Accommodation];
        assert_eq!(accommodation.amount, dec!(490));
        assert_eq!(accommodation.percentage, 35);
    }

    #[test]
    fn percentages_sum_to_exactly_one_hundred() {
        let plan = generate_itinerary("Tokyo, Japan", date(2025, 3, 1), date(2025, 3, 6), dec!(977))
            .unwrap();

        let total: u32 = plan.budget_breakdown.values().map(|a| a.percentage).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn amounts_stay_within_rounding_residue_of_total() {
        // 977 does not divide cleanly across the weights.
        let plan = generate_itinerary("Tokyo, Japan", date(2025, 3, 1), date(2025, 3, 6), dec!(977))
            .unwrap();

        let allocated: Decimal = plan.budget_breakdown.values().map(|a| a.amount).sum();
        let residue = (allocated - dec!(977)).abs();
        // At most one unit per category beyond the first.
        assert!(residue <= dec!(4), "residue {residue} too large");
    }

    #[test]
    fn daily_budget_rounds_half_up() {
        // 1000 / 3 = 333.33.. -> 333
        let plan = generate_itinerary("Bali, Indonesia", date(2025, 5, 1), date(2025, 5, 4), dec!(1000))
            .unwrap();

        assert_eq!(plan.duration_days, 3);
        assert_eq!(plan.daily_budget, dec!(333));
    }

    #[test]
    fn breakdown_covers_all_five_categories() {
        let plan = generate_itinerary(
            "New York City, USA",
            date(2025, 7, 1),
            date(2025, 7, 8),
            dec!(2000),
        )
        .unwrap();

        assert_eq!(plan.budget_breakdown.len(), 5);
        assert!(!plan.budget_breakdown.contains_key(&ExpenseCategory::Shopping));
    }

    #[test]
    fn end_equal_to_start_is_rejected() {
        let result = generate_itinerary("Paris, France", date(2024, 11, 1), date(2024, 11, 1), dec!(500));

        assert_eq!(
            result,
            Err(ItineraryError::EmptyDateRange {
                start: date(2024, 11, 1),
                end: date(2024, 11, 1),
            })
        );
    }

    #[test]
    fn end_before_start_is_rejected() {
        let result = generate_itinerary("Paris, France", date(2024, 11, 8), date(2024, 11, 1), dec!(500));

        assert!(matches!(result, Err(ItineraryError::EmptyDateRange { .. })));
    }

    #[test]
    fn zero_budget_is_rejected() {
        let result = generate_itinerary("Paris, France", date(2024, 11, 1), date(2024, 11, 8), dec!(0));

        assert_eq!(result, Err(ItineraryError::NonPositiveBudget(dec!(0))));
    }
}
