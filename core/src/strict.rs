//! # Strict Reading
//!
//! Accepts exactly the numerals [`encode`](crate::encode) produces for
//! 1 through 3999, and explains why anything else is rejected.
//!
//! Groups must appear in table order. Within a decade:
//! * a subtractive group (`CM`, `CD`, `XC`, `XL`, `IX`, `IV`) closes it,
//! * a five (`D`, `L`, `V`) may only be followed by the decade's ones,
//! * the ones (`C`, `X`, `I`), like `M`, repeat at most three times.
//!
//! A smaller symbol written before a larger one must form one of the six
//! subtractive pairs.

use romanus_common::error::NumeralError;
use tracing::debug;

use crate::symbols::{self, Group};

/// Smallest table index allowed after the group at each table index.
const FOLLOW_FLOOR: [usize; 13] = [
    0,  // M
    5,  // CM
    4,  // D
    5,  // CD
    4,  // C
    9,  // XC
    8,  // L
    9,  // XL
    8,  // X
    13, // IX
    12, // V
    13, // IV
    12, // I
];

const MAX_RUN: usize = 3;

/// Reads a canonical Roman numeral.
///
/// ```
/// use romanus_core::parse_strict;
///
/// assert_eq!(parse_strict("MCMXCIV"), Ok(1994));
/// assert!(parse_strict("MCMD").is_err());
/// ```
pub fn parse_strict(roman: &str) -> Result<u64, NumeralError> {
    let result = check(roman);
    if let Err(err) = &result {
        debug!(roman, %err, "rejected roman numeral");
    }
    result
}

/// Whether `roman` is the canonical spelling of a number from 1 to 3999.
pub fn is_canonical(roman: &str) -> bool {
    check(roman).is_ok()
}

fn check(roman: &str) -> Result<u64, NumeralError> {
    if roman.is_empty() {
        return Err(NumeralError::Empty);
    }

    let groups: Vec<Group> = symbols::groups(roman).collect::<Result<_, _>>()?;

    let mut total: u64 = 0;
    let mut floor: usize = 0;
    let mut run: usize = 0;
    let mut previous: Option<Group> = None;

    for group in groups {
        if let Some(prev) = previous {
            if !prev.is_pair() && !group.is_pair() && group.value() > prev.value() {
                return Err(NumeralError::InvalidSubtractivePair {
                    pair: format!("{}{}", prev.glyph(), group.glyph()),
                    position: prev.position,
                });
            }
        }

        if group.index < floor {
            return Err(NumeralError::OutOfOrder {
                symbol: group.glyph().to_string(),
                position: group.position,
            });
        }

        run = match previous {
            Some(prev) if prev.index == group.index => run + 1,
            _ => 1,
        };
        if run > MAX_RUN {
            return Err(NumeralError::ExcessiveRepetition {
                symbol: group.glyph().to_string(),
                position: group.position,
            });
        }

        floor = FOLLOW_FLOOR[group.index];
        total += group.value();
        previous = Some(group);
    }

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
