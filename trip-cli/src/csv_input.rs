//! CSV input files accepted by the CLI.
//!
//! ## Expenses (`--file` of `tripcraft budget`)
//!
//! | Column        | Required | Type    | Notes                                      |
//! |---------------|----------|---------|---------------------------------------------|
//! | `category`    | yes      | string  | `accommodation`, `transportation`, `food`, `activities`, `shopping`, `miscellaneous` |
//! | `amount`      | yes      | decimal | Lenient: `$` and `,` tolerated; rows with unparseable amounts are skipped with a warning |
//! | `description` | yes      | string  |                                            |
//! | `date`        | yes      | date    | `YYYY-MM-DD`                               |
//!
//! ## Documents (`--file` of `tripcraft documents`)
//!
//! | Column        | Required | Type   | Notes                                       |
//! |---------------|----------|--------|----------------------------------------------|
//! | `name`        | yes      | string |                                             |
//! | `kind`        | yes      | string | `passport`, `visa`, `ticket`, `hotel`, `insurance`, `vaccination`, `license`, `other` |
//! | `expiry_date` | no       | date   | `YYYY-MM-DD`; leave empty for no expiry      |
//! | `notes`       | no       | string |                                             |
//!
//! ## Savings entries (`--file` of `tripcraft savings`)
//!
//! | Column             | Required | Type    |
//! |--------------------|----------|---------|
//! | `category`         | yes      | string  |
//! | `original_amount`  | yes      | decimal |
//! | `optimized_amount` | yes      | decimal |

use std::io::Read;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use trip_core::calculations::SavingsEntry;
use trip_core::{Document, DocumentKind, Expense, ExpenseCategory};

use crate::utils::parse_optional_decimal;

/// Errors that can occur while loading CLI input CSV files.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `category` cell contained a value outside the closed category set.
    /// Row numbers are 1-based (header = row 0).
    #[error("unrecognised expense category '{category}' on row {row}")]
    InvalidCategory { category: String, row: usize },

    /// A `kind` cell contained a value outside the document kind set.
    #[error("unrecognised document kind '{kind}' on row {row}")]
    InvalidKind { kind: String, row: usize },
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

// ---------------------------------------------------------------------------
// Expenses
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ExpenseRow {
    category: String,
    /// Kept as text so malformed amounts degrade to a skipped row rather
    /// than a hard error.
    amount: String,
    description: String,
    date: NaiveDate,
}

/// Loads expenses from CSV.
///
/// Unknown categories are errors (the category set is closed), but a row
/// whose amount does not parse is silently skipped after a warning —
/// malformed numeric input is a no-op, never a user-facing failure.
pub fn load_expenses<R: Read>(reader: R) -> Result<Vec<Expense>, CsvLoadError> {
    let mut expenses = Vec::new();

    for (index, result) in csv_reader(reader).deserialize().enumerate() {
        let row: ExpenseRow = result?;
        let row_number = index + 1;

        let category = ExpenseCategory::parse(&row.category).ok_or_else(|| {
            CsvLoadError::InvalidCategory {
                category: row.category.clone(),
                row: row_number,
            }
        })?;

        let Some(amount) = parse_optional_decimal(&row.amount) else {
            tracing::warn!(row = row_number, amount = %row.amount, "skipping expense with malformed amount");
            continue;
        };

        expenses.push(Expense {
            category,
            amount,
            description: row.description,
            date: row.date,
        });
    }

    Ok(expenses)
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct DocumentRow {
    name: String,
    kind: String,
    expiry_date: Option<NaiveDate>,
    notes: Option<String>,
}

/// Loads travel documents from CSV. Rows are returned in file order.
pub fn load_documents<R: Read>(reader: R) -> Result<Vec<Document>, CsvLoadError> {
    let mut documents = Vec::new();

    for (index, result) in csv_reader(reader).deserialize().enumerate() {
        let row: DocumentRow = result?;

        let kind = DocumentKind::parse(&row.kind).ok_or_else(|| CsvLoadError::InvalidKind {
            kind: row.kind.clone(),
            row: index + 1,
        })?;

        documents.push(Document {
            name: row.name,
            kind,
            expiry_date: row.expiry_date,
            notes: row.notes.filter(|n| !n.is_empty()),
        });
    }

    Ok(documents)
}

// ---------------------------------------------------------------------------
// Savings entries
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SavingsRow {
    category: String,
    original_amount: Decimal,
    optimized_amount: Decimal,
}

/// Loads original/optimized comparison entries from CSV.
pub fn load_savings_entries<R: Read>(reader: R) -> Result<Vec<SavingsEntry>, CsvLoadError> {
    let mut entries = Vec::new();

    for result in csv_reader(reader).deserialize() {
        let row: SavingsRow = result?;
        entries.push(SavingsEntry {
            category: row.category,
            original_amount: row.original_amount,
            optimized_amount: row.optimized_amount,
        });
    }

    Ok(entries)
}
