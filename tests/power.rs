#[path = "../src/power.rs"] mod power;

use crate::power::{parse_watts, power_level, PowerLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_watts() {
        assert_eq!(parse_watts("5W"), Some(dec!(5)));
        assert_eq!(parse_watts("4.0w"), Some(dec!(4)));
        assert_eq!(parse_watts("50"), Some(dec!(50)));
        assert_eq!(parse_watts(" 1.5W "), Some(dec!(1.5)));
    }

    #[test]
    fn test_parse_watts_garbage() {
        assert_eq!(parse_watts(""), None);
        assert_eq!(parse_watts("W"), None);
        assert_eq!(parse_watts("High"), None);
        assert_eq!(parse_watts("5mW"), None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(power_level("5W", dec!(5)), PowerLevel::High);
        assert_eq!(power_level("4.9W", dec!(5)), PowerLevel::Low);
        assert_eq!(power_level("50W", dec!(5)), PowerLevel::High);
        assert_eq!(power_level("0.5W", dec!(5)), PowerLevel::Low);
    }

    #[test]
    fn test_unreadable_is_high() {
        assert_eq!(power_level("", dec!(5)), PowerLevel::High);
        assert_eq!(power_level("lots", dec!(5)), PowerLevel::High);
    }

    #[test]
    fn test_custom_threshold() {
        assert_eq!(power_level("5W", dec!(10)), PowerLevel::Low);
        assert_eq!(power_level("10W", dec!(10)), PowerLevel::High);
    }

    #[test]
    fn test_display() {
        assert_eq!(PowerLevel::High.to_string(), "High");
        assert_eq!(PowerLevel::Low.to_string(), "Low");
    }
}
