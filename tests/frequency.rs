#[path = "../src/frequency.rs"] mod frequency;

use crate::frequency::{format_mhz, parse_mhz, parse_offset};

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_mhz("146.940000"), Some(dec!(146.94)));
        assert_eq!(parse_mhz("446"), Some(dec!(446)));
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse_mhz("  147.03 "), Some(dec!(147.03)));
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(parse_mhz("1.4694e2"), Some(dec!(146.94)));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_mhz("abc"), None);
        assert_eq!(parse_mhz(""), None);
        assert_eq!(parse_mhz("146.94 MHz"), None);
    }

    #[test]
    fn test_parse_offset_blank_is_zero() {
        assert_eq!(parse_offset(""), Some(dec!(0)));
        assert_eq!(parse_offset("   "), Some(dec!(0)));
        assert_eq!(parse_offset("0.600000"), Some(dec!(0.6)));
        assert_eq!(parse_offset("x"), None);
    }

    #[test]
    fn test_format_strips_trailing_zeros() {
        assert_eq!(format_mhz(&dec!(446.0)), "446");
        assert_eq!(format_mhz(&dec!(146.940000)), "146.94");
        assert_eq!(format_mhz(&dec!(146.5125)), "146.5125");
    }

    #[test]
    fn test_format_exact_arithmetic() {
        assert_eq!(format_mhz(&(dec!(146.94) - dec!(0.6))), "146.34");
        assert_eq!(format_mhz(&(dec!(442.1) + dec!(5))), "447.1");
        assert_eq!(format_mhz(&(dec!(0.1) + dec!(0.2))), "0.3");
    }

    #[test]
    fn test_format_round_trips() {
        for s in ["146.52", "29.6", "1296.1", "0.5"] {
            let freq = parse_mhz(s).unwrap();
            assert_eq!(format_mhz(&freq), s);
            assert_eq!(parse_mhz(&format_mhz(&freq)), Some(freq));
        }
    }
}
