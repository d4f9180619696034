//! # Conversion
//!
//! Both directions between decimal numbers and Roman numerals.
//!
//! Neither direction panics on bad input:
//! * [`to_roman`] returns an empty string when there is no positive whole
//!   number to encode.
//! * [`to_arabic`] returns an error ("not a number") for empty input or
//!   input containing anything other than `M D C L X V I`.

use romanus_common::error::NumeralError;
use tracing::trace;

use crate::input::ArabicInput;
use crate::symbols::{self, SYMBOLS};

/// Converts a decimal value into a Roman numeral.
///
/// Accepts integers, floats (truncated toward zero) and digit strings.
/// Values from 4000 upward are written with as many `M` as needed
/// (`4000` → `"MMMM"`); no upper bound is enforced.
///
/// ```
/// use romanus_core::to_roman;
///
/// assert_eq!(to_roman(6), "VI");
/// assert_eq!(to_roman(6.5), "VI");
/// assert_eq!(to_roman("12"), "XII");
/// assert_eq!(to_roman("A12"), "");
/// ```
pub fn to_roman<T: Into<ArabicInput>>(input: T) -> String {
    let input: ArabicInput = input.into();
    match input.whole_value() {
        Some(value) => encode(value),
        None => {
            trace!(?input, "input has no whole value");
            String::new()
        }
    }
}

/// Greedy decomposition of `value` over the symbol table.
pub fn encode(value: u64) -> String {
    let mut roman = String::new();
    let mut remaining = value;

    for (glyph, arabic) in SYMBOLS {
        while remaining >= arabic {
            remaining -= arabic;
            roman.push_str(glyph);
        }
    }

    roman
}

/// Reads a Roman numeral into its decimal value.
///
/// Reading is lenient: groups are summed front to back without checking
/// their order, so `"IIII"` reads as 4 and `"IC"` as 101. Use
/// [`parse_strict`](crate::parse_strict) to accept canonical numerals only.
///
/// ```
/// use romanus_core::to_arabic;
///
/// assert_eq!(to_arabic("CDXLVIII"), Ok(448));
/// assert!(to_arabic("XVAA").is_err());
/// ```
pub fn to_arabic(roman: &str) -> Result<u64, NumeralError> {
    if roman.is_empty() {
        return Err(NumeralError::Empty);
    }

    let mut total: u64 = 0;
    for group in symbols::groups(roman) {
        let group = group?;
        total = total
            .checked_add(group.value())
            .ok_or(NumeralError::Overflow)?;
    }

    trace!(roman, total, "read roman numeral");
    Ok(total)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
