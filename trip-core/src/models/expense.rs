use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spending bucket used for grouping expenses and budget allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Accommodation,
    Transportation,
    Food,
    Activities,
    Shopping,
    Miscellaneous,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accommodation => "accommodation",
            Self::Transportation => "transportation",
            Self::Food => "food",
            Self::Activities => "activities",
            Self::Shopping => "shopping",
            Self::Miscellaneous => "miscellaneous",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "accommodation" => Some(Self::Accommodation),
            "transportation" => Some(Self::Transportation),
            "food" => Some(Self::Food),
            "activities" => Some(Self::Activities),
            "shopping" => Some(Self::Shopping),
            "miscellaneous" => Some(Self::Miscellaneous),
            _ => None,
        }
    }

    /// Human-readable label, as shown in category pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accommodation => "Accommodation",
            Self::Transportation => "Transportation",
            Self::Food => "Food & Dining",
            Self::Activities => "Activities",
            Self::Shopping => "Shopping",
            Self::Miscellaneous => "Miscellaneous",
        }
    }
}

/// A single recorded expense. Immutable once created; there is no edit or
/// delete path for expenses within a trip view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
}
