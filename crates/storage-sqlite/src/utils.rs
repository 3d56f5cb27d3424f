use std::str::FromStr;

use log::warn;
use rust_decimal::Decimal;

/// Parses a TEXT decimal column, falling back to zero on malformed data.
pub(crate) fn parse_decimal(value: &str, field: &str) -> Decimal {
    Decimal::from_str(value).unwrap_or_else(|e| {
        warn!("Failed to parse {} '{}' as Decimal: {}. Using 0.", field, value, e);
        Decimal::ZERO
    })
}
