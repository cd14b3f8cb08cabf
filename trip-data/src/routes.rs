//! Route candidate reference data.
//!
//! ## CSV Format
//!
//! | Column             | Required | Type    | Notes                                   |
//! |--------------------|----------|---------|------------------------------------------|
//! | `id`               | yes      | integer | Unique within the file                   |
//! | `name`             | yes      | string  |                                          |
//! | `transport_mode`   | yes      | string  | `car`, `plane`, `train`, `bus`, `walking`|
//! | `duration_minutes` | yes      | integer |                                          |
//! | `distance`         | yes      | string  | Display-only, e.g. `245 km`              |
//! | `cost`             | yes      | decimal |                                          |
//! | `traffic_level`    | yes      | string  | `light`, `moderate`, `heavy`             |
//! | `rating`           | no       | decimal | Leave cell empty for unrated routes      |
//!
//! Routes load with the bookmark flag cleared; bookmarking is a local,
//! non-persisted toggle.

use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use trip_core::{Route, TrafficLevel, TransportMode};

const BUILTIN_ROUTES_CSV: &str = include_str!("../data/routes.csv");

/// Errors that can occur when loading route candidate data.
#[derive(Debug, Error)]
pub enum RouteDataError {
    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    /// Row numbers are 1-based (header = row 0).
    #[error("unrecognised transport mode '{mode}' on row {row}")]
    InvalidTransportMode { mode: String, row: usize },

    #[error("unrecognised traffic level '{level}' on row {row}")]
    InvalidTrafficLevel { level: String, row: usize },
}

/// Serde-compatible row mirroring the CSV layout exactly.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: u32,
    name: String,
    transport_mode: String,
    duration_minutes: u32,
    distance: String,
    cost: Decimal,
    traffic_level: String,
    rating: Option<Decimal>,
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<Route, RouteDataError> {
    let transport_mode = TransportMode::parse(&row.transport_mode).ok_or_else(|| {
        RouteDataError::InvalidTransportMode {
            mode: row.transport_mode.clone(),
            row: row_number,
        }
    })?;
    let traffic_level = TrafficLevel::parse(&row.traffic_level).ok_or_else(|| {
        RouteDataError::InvalidTrafficLevel {
            level: row.traffic_level.clone(),
            row: row_number,
        }
    })?;

    Ok(Route {
        id: row.id,
        name: row.name,
        transport_mode,
        duration_minutes: row.duration_minutes,
        distance: row.distance,
        cost: row.cost,
        traffic_level,
        rating: row.rating,
        bookmarked: false,
    })
}

/// Parses route candidates from a CSV reader. Rows are returned in file
/// order.
pub fn parse<R: Read>(reader: R) -> Result<Vec<Route>, RouteDataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut routes = Vec::new();
    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        routes.push(convert_row(row, index + 1)?);
    }

    Ok(routes)
}

/// The route candidate set shipped with the product.
pub fn builtin() -> Result<Vec<Route>, RouteDataError> {
    parse(BUILTIN_ROUTES_CSV.as_bytes())
}
