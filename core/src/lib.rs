//! # Romanus Core
//!
//! Conversion between decimal numbers and Roman numerals.
//!
//! * **[`symbols`]**: The ordered symbol table both directions are built on.
//! * **[`input`]**: What counts as a decimal number on the way in.
//! * **[`convert`]**: Greedy decimal → Roman encoding and lenient Roman → decimal reading.
//! * **[`strict`]**: Reading that only accepts canonical numerals.
//! * **[`year`]**: The current year, in Roman numerals.
//!
//! ```
//! use romanus_core::{to_arabic, to_roman};
//!
//! assert_eq!(to_roman(2751), "MMDCCLI");
//! assert_eq!(to_arabic("MMDCCLI"), Ok(2751));
//! ```

pub mod convert;
pub mod input;
pub mod strict;
pub mod symbols;
pub mod year;

pub use convert::{encode, to_arabic, to_roman};
pub use input::ArabicInput;
pub use strict::{is_canonical, parse_strict};
pub use year::{SystemClock, YearService, roman_year};
