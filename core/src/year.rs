//! # Roman Year
//!
//! Reports the current calendar year in Roman numerals.
//!
//! The year is read through the [`YearSource`] port so callers (and tests)
//! can supply their own clock.

use chrono::{Datelike, Local};
use romanus_common::clock::YearSource;
use tracing::debug;

use crate::convert::to_roman;

/// Reads the year from the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl YearSource for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Service producing the current year as a Roman numeral.
pub struct YearService {
    source: Box<dyn YearSource>,
}

impl YearService {
    pub fn new(source: Box<dyn YearSource>) -> Self {
        Self { source }
    }

    pub fn year(&self) -> i32 {
        self.source.current_year()
    }

    /// The current year, e.g. `"MMXXVI"`.
    ///
    /// Empty only if the clock reports a year before 1.
    pub fn roman_year(&self) -> String {
        let year = self.year();
        let roman = to_roman(year);
        debug!(year, %roman, "converted current year");
        roman
    }
}

impl Default for YearService {
    fn default() -> Self {
        Self::new(Box::new(SystemClock))
    }
}

/// The current year on the system clock, in Roman numerals.
pub fn roman_year() -> String {
    YearService::default().roman_year()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
