// src/power.rs

use std::fmt;
use std::str::FromStr;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Power level of the target radio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerLevel {
    High,
    Low,
}

impl fmt::Display for PowerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerLevel::High => f.pad("High"),
            PowerLevel::Low => f.pad("Low"),
        }
    }
}

/// Parse a CHIRP power string in watts, e.g. "5W", "4.0w", "50"
pub fn parse_watts(s: &str) -> Option<Decimal> {
    let value = s.trim().trim_end_matches(['w', 'W']).trim();
    Decimal::from_str(value).ok()
}

/// Bucket a CHIRP power string into High/Low, anything unreadable is High
pub fn power_level(s: &str, high_threshold: Decimal) -> PowerLevel {
    match parse_watts(s) {
        Some(watts) if watts < high_threshold => PowerLevel::Low,
        _ => PowerLevel::High,
    }
}
