#![cfg(test)]
use romanus_common::clock::{FixedYear, YearSource};
use romanus_core::{SystemClock, YearService, roman_year, to_arabic};

#[test]
fn current_year_is_defined() {
    let roman = roman_year();
    assert!(!roman.is_empty(), "current year produced no numeral");
}

#[test]
fn current_year_reads_back() {
    let year = SystemClock.current_year();
    let roman = YearService::new(Box::new(FixedYear(year))).roman_year();
    assert_eq!(to_arabic(&roman), Ok(year as u64));
}

#[test]
fn injected_clock() {
    let service = YearService::new(Box::new(FixedYear(1888)));
    assert_eq!(service.roman_year(), "MDCCCLXXXVIII");
}
