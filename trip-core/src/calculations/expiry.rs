//! Travel document expiry classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Documents within this many days of expiry are flagged as expiring soon.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// Validity classification for a travel document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpiryStatus {
    /// Expiry date is strictly before today.
    Expired,
    /// Expires within the warning window (1 to 30 days from today).
    ExpiringSoon,
    /// Expires more than 30 days out, or exactly today.
    Valid,
    /// The document carries no expiry date and is treated as always valid.
    NoExpiry,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::ExpiringSoon => "expiring-soon",
            Self::Valid => "valid",
            Self::NoExpiry => "no-expiry",
        }
    }
}

/// Whole days from `today` until `expiry`. Negative when already past.
pub fn days_until_expiry(
    expiry: NaiveDate,
    today: NaiveDate,
) -> i64 {
    (expiry - today).num_days()
}

/// Classifies a document expiry date relative to `today`.
///
/// A document expiring exactly today is `Valid`: it is usable through its
/// expiry date. Expired requires the date to be strictly in the past, and
/// the expiring-soon window starts at one day out.
pub fn evaluate_expiry(
    expiry_date: Option<NaiveDate>,
    today: NaiveDate,
) -> ExpiryStatus {
    let Some(expiry) = expiry_date else {
        return ExpiryStatus::NoExpiry;
    };

    let days = days_until_expiry(expiry, today);
    if days < 0 {
        ExpiryStatus::Expired
    } else if days > 0 && days <= EXPIRY_WARNING_DAYS {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Valid
    }
}
