//! # Romanus Common
//!
//! Shared models used by every crate in the workspace.
//!
//! * **[`config`]**: Runtime settings collected by the front end.
//! * **[`error`]**: Errors raised while reading numerals.
//! * **[`clock`]**: The port through which the current year is obtained.
//! * **[`log`]**: Thin tracing macros with the tool's message vocabulary.

pub mod clock;
pub mod config;
pub mod error;
pub mod log;
