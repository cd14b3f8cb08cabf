//! Budget aggregation over recorded expenses.
//!
//! Pure reduction over an expense list: category totals, grand total,
//! remaining budget, and utilization. Addition is commutative, so the result
//! is independent of expense order.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_tenth;
use crate::models::{Expense, ExpenseCategory};

/// Derived view of a trip budget at a point in time.
///
/// `remaining` may be negative: over-budget is a valid, displayed state, not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub total_budget: Decimal,

    /// Sum of all expense amounts.
    pub total_spent: Decimal,

    /// `total_budget - total_spent`. Negative when over budget.
    pub remaining: Decimal,

    /// Spent over budget as a percentage, rounded to one decimal place.
    /// Zero when `total_budget` is zero (division-by-zero guard, not an
    /// error condition).
    pub utilization_percent: Decimal,

    pub is_over_budget: bool,

    /// Per-category spend. Categories with no expenses are absent.
    pub category_totals: BTreeMap<ExpenseCategory, Decimal>,
}

/// Aggregates an expense list against a total budget.
///
/// An empty list yields `total_spent == 0` and full remaining budget.
pub fn aggregate_budget(
    expenses: &[Expense],
    total_budget: Decimal,
) -> BudgetSnapshot {
    let mut category_totals: BTreeMap<ExpenseCategory, Decimal> = BTreeMap::new();
    let mut total_spent = Decimal::ZERO;

    for expense in expenses {
        total_spent += expense.amount;
        *category_totals.entry(expense.category).or_default() += expense.amount;
    }

    let utilization_percent = if total_budget == Decimal::ZERO {
        Decimal::ZERO
    } else {
        round_tenth(total_spent / total_budget * Decimal::ONE_HUNDRED)
    };

    BudgetSnapshot {
        total_budget,
        total_spent,
        remaining: total_budget - total_spent,
        utilization_percent,
        is_over_budget: total_spent > total_budget,
        category_totals,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn expense(
        category: ExpenseCategory,
        amount: Decimal,
    ) -> Expense {
        Expense {
            category,
            amount,
            description: "test expense".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
        }
    }

    #[test]
    fn aggregate_matches_documented_scenario() {
        let expenses = vec![
            expense(ExpenseCategory::Accommodation, dec!(500)),
            expense(ExpenseCategory::Food, dec!(300)),
        ];

        let snapshot = aggregate_budget(&expenses, dec!(1000));

        assert_eq!(snapshot.total_spent, dec!(800));
        assert_eq!(snapshot.remaining, dec!(200));
        assert_eq!(snapshot.utilization_percent, dec!(80.0));
        assert!(!snapshot.is_over_budget);
    }

    #[test]
    fn aggregate_is_order_independent() {
        let forward = vec![
            expense(ExpenseCategory::Accommodation, dec!(123.45)),
            expense(ExpenseCategory::Food, dec!(67.89)),
            expense(ExpenseCategory::Shopping, dec!(10.66)),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = aggregate_budget(&forward, dec!(500));
        let b = aggregate_budget(&reversed, dec!(500));

        assert_eq!(a, b);
        assert_eq!(a.total_spent, dec!(202.00));
    }

    #[test]
    fn empty_expense_list_yields_zero_spent() {
        let snapshot = aggregate_budget(&[], dec!(1000));

        assert_eq!(snapshot.total_spent, Decimal::ZERO);
        assert_eq!(snapshot.remaining, dec!(1000));
        assert_eq!(snapshot.utilization_percent, Decimal::ZERO);
        assert!(!snapshot.is_over_budget);
        assert!(snapshot.category_totals.is_empty());
    }

    #[test]
    fn over_budget_produces_negative_remaining() {
        let expenses = vec![expense(ExpenseCategory::Activities, dec!(1200))];

        let snapshot = aggregate_budget(&expenses, dec!(1000));

        assert_eq!(snapshot.remaining, dec!(-200));
        assert_eq!(snapshot.utilization_percent, dec!(120.0));
        assert!(snapshot.is_over_budget);
    }

    #[test]
    fn zero_budget_reports_zero_utilization() {
        let expenses = vec![expense(ExpenseCategory::Food, dec!(50))];

        let snapshot = aggregate_budget(&expenses, Decimal::ZERO);

        assert_eq!(snapshot.utilization_percent, Decimal::ZERO);
        assert!(snapshot.is_over_budget);
    }

    #[test]
    fn category_totals_group_same_category() {
        let expenses = vec![
            expense(ExpenseCategory::Food, dec!(25)),
            expense(ExpenseCategory::Food, dec!(30)),
            expense(ExpenseCategory::Transportation, dec!(15)),
        ];

        let snapshot = aggregate_budget(&expenses, dec!(100));

        assert_eq!(
            snapshot.category_totals.get(&ExpenseCategory::Food),
            Some(&dec!(55))
        );
        assert_eq!(
            snapshot
                .category_totals
                .get(&ExpenseCategory::Transportation),
            Some(&dec!(15))
        );
        assert_eq!(snapshot.category_totals.len(), 2);
    }
}
