//! Derived-value calculations behind the trip planning views.
//!
//! Every function here is a pure, synchronous function of its inputs; the
//! UI layer wraps these with local state and recomputes on each user action.

pub mod budget;
pub mod common;
pub mod currency;
pub mod expiry;
pub mod itinerary;
pub mod routes;
pub mod savings;

pub use budget::{BudgetSnapshot, aggregate_budget};
pub use currency::{Conversion, RateSource, convert};
pub use expiry::{EXPIRY_WARNING_DAYS, ExpiryStatus, days_until_expiry, evaluate_expiry};
pub use itinerary::{CategoryAllocation, ItineraryError, TripPlanSummary, generate_itinerary};
pub use routes::{RouteFilter, RouteRanking, RouteSort, rank_routes};
pub use savings::{SavingsEntry, SavingsLine, SavingsReport, SavingsTier, calculate_savings};
