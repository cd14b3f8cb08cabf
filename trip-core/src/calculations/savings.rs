//! Original-versus-optimized cost comparison.
//!
//! Compares an original cost estimate against an optimized one per category
//! and in aggregate, producing absolute and percentage savings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_tenth;

/// One category's original and optimized cost estimates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsEntry {
    pub category: String,
    pub original_amount: Decimal,
    pub optimized_amount: Decimal,
}

/// Per-category comparison result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsLine {
    pub category: String,
    pub original_amount: Decimal,
    pub optimized_amount: Decimal,

    /// `original - optimized`. Negative when the "optimized" plan costs more.
    pub savings: Decimal,

    /// Savings as a percentage of the original amount, rounded to one
    /// decimal place. Zero when the original amount is zero; this guard is
    /// part of the contract, not an implementation detail.
    pub savings_percent: Decimal,
}

/// Aggregate comparison across all categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsReport {
    pub lines: Vec<SavingsLine>,
    pub total_original: Decimal,
    pub total_optimized: Decimal,
    pub total_savings: Decimal,
    pub total_savings_percent: Decimal,
}

/// Highlight tier for a savings amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsTier {
    /// Savings of 200 or more.
    High,
    /// Savings of 100 up to 200.
    Medium,
    /// Anything below 100, including negative savings.
    Low,
}

impl SavingsTier {
    pub fn classify(savings: Decimal) -> Self {
        if savings >= Decimal::from(200) {
            Self::High
        } else if savings >= Decimal::ONE_HUNDRED {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

fn percent_of(
    part: Decimal,
    whole: Decimal,
) -> Decimal {
    if whole == Decimal::ZERO {
        Decimal::ZERO
    } else {
        round_tenth(part / whole * Decimal::ONE_HUNDRED)
    }
}

/// Computes per-entry and aggregate savings.
pub fn calculate_savings(entries: &[SavingsEntry]) -> SavingsReport {
    let mut lines = Vec::with_capacity(entries.len());
    let mut total_original = Decimal::ZERO;
    let mut total_optimized = Decimal::ZERO;

    for entry in entries {
        let savings = entry.original_amount - entry.optimized_amount;
        lines.push(SavingsLine {
            category: entry.category.clone(),
            original_amount: entry.original_amount,
            optimized_amount: entry.optimized_amount,
            savings,
            savings_percent: percent_of(savings, entry.original_amount),
        });
        total_original += entry.original_amount;
        total_optimized += entry.optimized_amount;
    }

    let total_savings = total_original - total_optimized;

    SavingsReport {
        lines,
        total_original,
        total_optimized,
        total_savings,
        total_savings_percent: percent_of(total_savings, total_original),
    }
}
