mod destination;
mod document;
mod expense;
mod rate_table;
mod route;

pub use destination::Destination;
pub use document::{Document, DocumentKind};
pub use expense::{Expense, ExpenseCategory};
pub use rate_table::RateTable;
pub use route::{Route, TrafficLevel, TransportMode};
