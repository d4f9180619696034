//! # Symbol Table
//!
//! The thirteen groups a Roman numeral is made of, from largest to smallest.
//!
//! The order matters: encoding walks the table top to bottom, and strict
//! reading uses table positions to decide which group may follow which.

use romanus_common::error::NumeralError;

pub const SYMBOLS: [(&str, u64); 13] = [
    ("M", 1_000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Table position of the group spelled by `first` (and `second`, for pairs).
pub fn lookup(first: char, second: Option<char>) -> Option<usize> {
    SYMBOLS.iter().position(|(glyph, _)| {
        let mut chars = glyph.chars();
        chars.next() == Some(first) && chars.next() == second
    })
}

/// One symbol table entry found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub index: usize,
    /// Character offset of the group's first symbol.
    pub position: usize,
}

impl Group {
    pub fn glyph(&self) -> &'static str {
        SYMBOLS[self.index].0
    }

    pub fn value(&self) -> u64 {
        SYMBOLS[self.index].1
    }

    pub fn is_pair(&self) -> bool {
        self.glyph().len() == 2
    }
}

/// Splits a numeral into groups, front to back.
///
/// A pair is taken whenever the current and next character spell one;
/// otherwise the current character stands alone. Iteration ends after the
/// first unknown symbol.
pub fn groups(roman: &str) -> Groups {
    Groups {
        chars: roman.chars().collect(),
        position: 0,
    }
}

pub struct Groups {
    chars: Vec<char>,
    position: usize,
}

impl Iterator for Groups {
    type Item = Result<Group, NumeralError>;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.position;
        let current = *self.chars.get(position)?;
        let next = self.chars.get(position + 1).copied();

        if let Some(index) = next.and_then(|next| lookup(current, Some(next))) {
            self.position += 2;
            return Some(Ok(Group { index, position }));
        }

        match lookup(current, None) {
            Some(index) => {
                self.position += 1;
                Some(Ok(Group { index, position }))
            }
            None => {
                self.position = self.chars.len();
                Some(Err(NumeralError::UnknownSymbol {
                    symbol: current,
                    position,
                }))
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
