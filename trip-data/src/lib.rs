//! Static reference data shipped with TripCraft: exchange rates, known
//! destinations, and route candidate sets.
//!
//! Each module embeds its CSV via `include_str!` and exposes both a
//! `parse` function (any `Read`) and a `builtin()` constructor for the
//! shipped table. Nothing here performs I/O beyond reading the embedded
//! bytes; there is no network and no persistence.

pub mod destinations;
pub mod rates;
pub mod routes;

pub use destinations::DestinationDataError;
pub use rates::{QUICK_CONVERSIONS, QuickConversion, RateDataError, RateRecord};
pub use routes::RouteDataError;
