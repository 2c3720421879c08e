// src/frequency.rs

use std::str::FromStr;
use rust_decimal::Decimal;

/// Parse a CHIRP numeric field (MHz), accepting plain or scientific notation
pub fn parse_mhz(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Parse an offset, where a blank field means no offset
pub fn parse_offset(s: &str) -> Option<Decimal> {
    if s.trim().is_empty() {
        return Some(Decimal::ZERO);
    }
    parse_mhz(s)
}

/// Shortest representation of a frequency: no trailing zeros, no bare decimal point
pub fn format_mhz(freq: &Decimal) -> String {
    freq.normalize().to_string()
}
