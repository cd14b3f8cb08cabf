use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Passport,
    Visa,
    Ticket,
    Hotel,
    Insurance,
    Vaccination,
    License,
    Other,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passport => "passport",
            Self::Visa => "visa",
            Self::Ticket => "ticket",
            Self::Hotel => "hotel",
            Self::Insurance => "insurance",
            Self::Vaccination => "vaccination",
            Self::License => "license",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "passport" => Some(Self::Passport),
            "visa" => Some(Self::Visa),
            "ticket" => Some(Self::Ticket),
            "hotel" => Some(Self::Hotel),
            "insurance" => Some(Self::Insurance),
            "vaccination" => Some(Self::Vaccination),
            "license" => Some(Self::License),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// A travel document tracked by the user.
///
/// Created on form submit and deleted on explicit user action; documents are
/// never edited in place. A document without an expiry date is treated as
/// always valid rather than flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub kind: DocumentKind,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
