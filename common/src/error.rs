//! # Numeral Errors
//!
//! Every way a Roman numeral can fail to produce a number.
//!
//! Positions are character offsets (not byte offsets) into the input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// Nothing to read.
    #[error("roman numeral cannot be empty")]
    Empty,

    /// A character outside `M D C L X V I`.
    #[error("unknown roman numeral symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    /// A smaller symbol placed before a larger one it may not be subtracted from.
    #[error("invalid subtractive pair '{pair}' at position {position}")]
    InvalidSubtractivePair { pair: String, position: usize },

    /// A group appearing after one it should have preceded, or after a
    /// group that already covers its decade.
    #[error("'{symbol}' at position {position} is out of order")]
    OutOfOrder { symbol: String, position: usize },

    /// More than three consecutive M, C, X or I.
    #[error("'{symbol}' repeated too many times at position {position}")]
    ExcessiveRepetition { symbol: String, position: usize },

    /// The running total no longer fits in 64 bits.
    #[error("roman numeral value overflows")]
    Overflow,
}

impl NumeralError {
    /// Offset of the offending character, when the error has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::UnknownSymbol { position, .. }
            | Self::InvalidSubtractivePair { position, .. }
            | Self::OutOfOrder { position, .. }
            | Self::ExcessiveRepetition { position, .. } => Some(*position),
            Self::Empty | Self::Overflow => None,
        }
    }
}

/// Raised when text does not spell a whole, non-negative decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalParseError {
    #[error("decimal number cannot be empty")]
    Empty,

    #[error("invalid digit '{digit}' in '{input}'")]
    InvalidDigit { digit: char, input: String },

    #[error("decimal number '{0}' is too large")]
    TooLarge(String),
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = NumeralError::UnknownSymbol { symbol: 'A', position: 2 };
        assert_eq!(err.to_string(), "unknown roman numeral symbol 'A' at position 2");

        let err = NumeralError::InvalidSubtractivePair { pair: "IC".into(), position: 0 };
        assert_eq!(err.to_string(), "invalid subtractive pair 'IC' at position 0");

        assert_eq!(NumeralError::Empty.to_string(), "roman numeral cannot be empty");
    }

    #[test]
    fn test_position() {
        assert_eq!(NumeralError::Empty.position(), None);
        assert_eq!(NumeralError::Overflow.position(), None);
        assert_eq!(
            NumeralError::OutOfOrder { symbol: "D".into(), position: 3 }.position(),
            Some(3)
        );
    }
}
