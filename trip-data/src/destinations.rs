//! Destination reference data.
//!
//! ## CSV Format
//!
//! | Column | Required | Type   | Notes                       |
//! |--------|----------|--------|------------------------------|
//! | `name` | yes      | string | e.g. `"Paris, France"`       |
//! | `lat`  | yes      | float  | Decimal degrees              |
//! | `lng`  | yes      | float  | Decimal degrees              |

use std::io::Read;

use thiserror::Error;
use trip_core::Destination;

const BUILTIN_DESTINATIONS_CSV: &str = include_str!("../data/destinations.csv");

/// Errors that can occur when loading destination data.
#[derive(Debug, Error)]
pub enum DestinationDataError {
    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),
}

/// Parses destination records from a CSV reader.
pub fn parse<R: Read>(reader: R) -> Result<Vec<Destination>, DestinationDataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut destinations = Vec::new();
    for result in csv_reader.deserialize() {
        let destination: Destination = result?;
        destinations.push(destination);
    }

    Ok(destinations)
}

/// The destination table shipped with the product.
pub fn builtin() -> Result<Vec<Destination>, DestinationDataError> {
    parse(BUILTIN_DESTINATIONS_CSV.as_bytes())
}

/// Looks up a destination by exact name.
pub fn find<'a>(
    destinations: &'a [Destination],
    name: &str,
) -> Option<&'a Destination> {
    destinations.iter().find(|d| d.name == name)
}

/// Coordinates used when a destination is not in the table (New York City).
pub fn fallback() -> Destination {
    Destination {
        name: "New York City, USA".to_string(),
        lat: 40.7128,
        lng: -74.0060,
    }
}
