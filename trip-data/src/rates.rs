//! Exchange rate reference data.
//!
//! ## CSV Format
//!
//! | Column | Required | Type    | Notes                                  |
//! |--------|----------|---------|----------------------------------------|
//! | `from` | yes      | string  | ISO-style currency code (e.g. `USD`)   |
//! | `to`   | yes      | string  | ISO-style currency code                |
//! | `rate` | yes      | decimal | Units of `to` per one unit of `from`   |
//!
//! The shipped table is deliberately sparse: only USD, EUR, and GBP are
//! listed as base currencies, so most other pairs resolve through the
//! inverse-lookup fallback in `trip_core::calculations::currency` or not at
//! all.

use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use trip_core::RateTable;

const BUILTIN_RATES_CSV: &str = include_str!("../data/exchange_rates.csv");

/// Errors that can occur when loading exchange rate data.
#[derive(Debug, Error)]
pub enum RateDataError {
    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),
}

/// A single record from the exchange rates CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateRecord {
    pub from: String,
    pub to: String,
    pub rate: Decimal,
}

/// A popular currency pair offered as a one-tap preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickConversion {
    pub from: &'static str,
    pub to: &'static str,
}

/// The quick-conversion presets shown next to the converter.
pub const QUICK_CONVERSIONS: [QuickConversion; 4] = [
    QuickConversion {
        from: "USD",
        to: "EUR",
    },
    QuickConversion {
        from: "USD",
        to: "GBP",
    },
    QuickConversion {
        from: "EUR",
        to: "USD",
    },
    QuickConversion {
        from: "GBP",
        to: "USD",
    },
];

/// Parses exchange rate records from a CSV reader.
pub fn parse<R: Read>(reader: R) -> Result<Vec<RateRecord>, RateDataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: RateRecord = result?;
        records.push(record);
    }

    Ok(records)
}

/// Builds a [`RateTable`] from parsed records. Later records replace earlier
/// ones for the same pair.
pub fn rate_table(records: &[RateRecord]) -> RateTable {
    let mut table = RateTable::new();
    for record in records {
        table.insert(&record.from, &record.to, record.rate);
    }
    table
}

/// The exchange rate table shipped with the product.
pub fn builtin() -> Result<RateTable, RateDataError> {
    Ok(rate_table(&parse(BUILTIN_RATES_CSV.as_bytes())?))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_reads_simple_rows() {
        let csv = "from,to,rate\nUSD,EUR,0.85\nEUR,USD,1.18\n";

        let records = parse(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            RateRecord {
                from: "USD".to_string(),
                to: "EUR".to_string(),
                rate: dec!(0.85),
            }
        );
    }

    #[test]
    fn parse_rejects_non_numeric_rate() {
        let csv = "from,to,rate\nUSD,EUR,abc\n";

        assert!(parse(csv.as_bytes()).is_err());
    }

    #[test]
    fn rate_table_keeps_last_duplicate() {
        let csv = "from,to,rate\nUSD,EUR,0.85\nUSD,EUR,0.90\n";

        let table = rate_table(&parse(csv.as_bytes()).unwrap());

        assert_eq!(table.direct("USD", "EUR"), Some(dec!(0.90)));
    }
}
