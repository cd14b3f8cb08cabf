use std::collections::HashMap;

use rust_decimal::Decimal;

/// Sparse bilateral exchange-rate table.
///
/// The table is not guaranteed complete in both directions: a pair may be
/// listed as (from, to), only as the reverse pair, or not at all. Lookup
/// strategy (direct, inverse, fallback) lives in
/// [`crate::calculations::currency`]; this type only stores rates.
///
/// Currency codes are normalized to uppercase on insert and lookup, so
/// `"usd"` and `"USD"` refer to the same currency.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<(String, String), Decimal>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the rate for converting one unit of `from` into `to`.
    /// Replaces any existing entry for the pair.
    pub fn insert(
        &mut self,
        from: &str,
        to: &str,
        rate: Decimal,
    ) {
        self.rates
            .insert((from.to_uppercase(), to.to_uppercase()), rate);
    }

    /// Looks up the directly listed rate for (from, to), if any.
    pub fn direct(
        &self,
        from: &str,
        to: &str,
    ) -> Option<Decimal> {
        self.rates
            .get(&(from.to_uppercase(), to.to_uppercase()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn insert_and_direct_lookup() {
        let mut table = RateTable::new();
        table.insert("USD", "EUR", dec!(0.85));

        assert_eq!(table.direct("USD", "EUR"), Some(dec!(0.85)));
        assert_eq!(table.direct("EUR", "USD"), None);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut table = RateTable::new();
        table.insert("usd", "eur", dec!(0.85));

        assert_eq!(table.direct("USD", "eur"), Some(dec!(0.85)));
    }

    #[test]
    fn insert_replaces_existing_pair() {
        let mut table = RateTable::new();
        table.insert("USD", "EUR", dec!(0.85));
        table.insert("USD", "EUR", dec!(0.90));

        assert_eq!(table.direct("USD", "EUR"), Some(dec!(0.90)));
        assert_eq!(table.len(), 1);
    }
}
