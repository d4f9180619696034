#![cfg(test)]
use romanus_common::error::NumeralError;
use romanus_core::{encode, is_canonical, parse_strict, to_arabic, to_roman};

#[test]
fn arabic_to_roman() {
    assert_eq!(to_roman(1000), "M");
    assert_eq!(to_roman(1), "I");
    assert_eq!(to_roman(3), "III");
    assert_eq!(to_roman(6), "VI");
}

#[test]
fn fractions_truncate() {
    assert_eq!(to_roman(6.5), "VI");
    assert_eq!(to_roman(0.5), "");
}

#[test]
fn strings_to_roman() {
    assert_eq!(to_roman("12"), "XII");
    assert_eq!(to_roman("A12"), "");
    assert_eq!(to_roman(""), "");
}

#[test]
fn roman_to_arabic() {
    assert_eq!(to_arabic("I"), Ok(1));
    assert_eq!(to_arabic("IV"), Ok(4));
    assert_eq!(to_arabic("XXIV"), Ok(24));
    assert_eq!(to_arabic("XL"), Ok(40));
    assert_eq!(to_arabic("CDXLVIII"), Ok(448));
    assert_eq!(to_arabic("MMDCCLI"), Ok(2751));
}

#[test]
fn roman_to_arabic_not_a_number() {
    assert_eq!(to_arabic(""), Err(NumeralError::Empty));
    assert!(matches!(
        to_arabic("XVAA"),
        Err(NumeralError::UnknownSymbol { symbol: 'A', .. })
    ));
}

#[test]
fn round_trip_over_supported_range() {
    for n in 1..=3999u64 {
        let roman = to_roman(n);
        assert_eq!(to_arabic(&roman), Ok(n), "{n} -> {roman}");
        assert_eq!(to_roman(to_arabic(&roman).unwrap()), roman);
    }
}

#[test]
fn large_values_are_not_capped() {
    assert_eq!(to_roman(4000), "MMMM");
    assert_eq!(to_arabic("MMMM"), Ok(4000));
    assert!(!is_canonical("MMMM"));
}

#[test]
fn lenient_and_strict_agree_on_canonical_numerals() {
    for numeral in ["MCMXCIV", "MMXIV", "MDCCCLXXXVIII", "XIII", "CDXLVIII"] {
        assert_eq!(to_arabic(numeral), parse_strict(numeral));
    }
    assert_eq!(to_arabic("IIII"), Ok(4));
    assert!(parse_strict("IIII").is_err());
    assert_eq!(encode(4), "IV");
}
