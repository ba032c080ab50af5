//! Amount helpers

use crate::{CitadelError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse a user-supplied amount such as `"0.001"`
pub fn parse_amount(value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim()).map_err(|_| CitadelError::invalid_amount(value))
}

/// Render `amount` with exactly `precision` fractional digits
pub fn precise(amount: Decimal, precision: u32) -> String {
    let rounded = amount.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", precision as usize, rounded)
}
