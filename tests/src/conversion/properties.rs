#![cfg(test)]
use proptest::prelude::*;
use romanus_core::{encode, is_canonical, parse_strict, to_arabic, to_roman};

proptest! {
    #[test]
    fn round_trip(n in 1u64..=3999) {
        let roman = to_roman(n);
        prop_assert_eq!(to_arabic(&roman), Ok(n));
        prop_assert_eq!(parse_strict(&roman), Ok(n));
    }

    #[test]
    fn strict_accepts_only_canonical_form(numeral in "[MDCLXVI]{1,12}") {
        match parse_strict(&numeral) {
            Ok(value) => prop_assert_eq!(encode(value), numeral),
            Err(_) => {
                let value = to_arabic(&numeral).unwrap();
                prop_assert!(value > 3999 || encode(value) != numeral);
            }
        }
    }

    #[test]
    fn lenient_reading_accepts_any_known_symbols(numeral in "[MDCLXVI]{1,12}") {
        prop_assert!(to_arabic(&numeral).is_ok());
    }

    #[test]
    fn foreign_symbols_are_not_a_number(prefix in "[MDCLXVI]{0,4}", bad in "[a-zA-Z0-9 ]", suffix in "[MDCLXVI]{0,4}") {
        prop_assume!(!"MDCLXVI".contains(bad.as_str()));
        let numeral = format!("{prefix}{bad}{suffix}");
        prop_assert!(to_arabic(&numeral).is_err());
        prop_assert!(!is_canonical(&numeral));
    }

    #[test]
    fn to_roman_of_text_is_roman_or_empty(text in "[0-9A-Za-z.]{0,4}") {
        let roman = to_roman(text.as_str());
        prop_assert!(roman.chars().all(|c| "MDCLXVI".contains(c)));
    }

    #[test]
    fn fractions_match_their_whole_part(whole in 0u32..4000, fraction in 0.0f64..0.999) {
        prop_assert_eq!(to_roman(f64::from(whole) + fraction), to_roman(whole));
    }
}
