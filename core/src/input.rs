//! # Decimal Input
//!
//! A decimal value handed to [`to_roman`](crate::to_roman) may be an
//! integer, a float, or text that spells a number. This module decides
//! which whole number, if any, each of them stands for.
//!
//! * Floats are truncated toward zero (`6.5` → `6`, `0.5` → `0`).
//! * Text must consist of ASCII digits only (`"12"`); anything else,
//!   including the empty string, stands for no number at all.
//! * Negative and non-finite values stand for no number.

use romanus_common::error::DecimalParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum ArabicInput {
    Integer(i128),
    Number(f64),
    Text(String),
}

impl ArabicInput {
    /// The non-negative whole number to encode, or `None` when the input
    /// does not describe one.
    pub fn whole_value(&self) -> Option<u64> {
        match self {
            Self::Integer(value) => u64::try_from(*value).ok(),
            Self::Number(value) => truncate(*value),
            Self::Text(text) => parse_decimal(text).ok(),
        }
    }
}

fn truncate(value: f64) -> Option<u64> {
    if !value.is_finite() {
        return None;
    }
    let whole = value.trunc();
    if whole < 0.0 {
        return None;
    }
    // `as` saturates at u64::MAX for anything larger.
    Some(whole as u64)
}

/// Parses a whole-number literal made of ASCII digits.
pub fn parse_decimal(text: &str) -> Result<u64, DecimalParseError> {
    if text.is_empty() {
        return Err(DecimalParseError::Empty);
    }

    if let Some(digit) = text.chars().find(|c| !c.is_ascii_digit()) {
        return Err(DecimalParseError::InvalidDigit {
            digit,
            input: text.to_string(),
        });
    }

    text.parse::<u64>()
        .map_err(|_| DecimalParseError::TooLarge(text.to_string()))
}

macro_rules! integer_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ArabicInput {
                fn from(value: $ty) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_input!(u8, u16, u32, u64, i8, i16, i32, i64);

impl From<usize> for ArabicInput {
    fn from(value: usize) -> Self {
        Self::Integer(i128::try_from(value).unwrap_or(i128::MAX))
    }
}

impl From<f64> for ArabicInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for ArabicInput {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for ArabicInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ArabicInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ArabicInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
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
