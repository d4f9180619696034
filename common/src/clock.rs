//! # Clock Port
//!
//! The current calendar year is the only thing the converter reads from
//! the outside world. Implementations live in the core crate.

/// Supplies the current calendar year.
pub trait YearSource {
    fn current_year(&self) -> i32;
}

/// A year that never changes. Useful wherever the wall clock must not leak in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedYear(pub i32);

impl YearSource for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}
