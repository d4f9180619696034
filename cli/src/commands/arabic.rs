use colored::*;
use romanus_common::config::Config;
use romanus_common::error::NumeralError;
use romanus_common::{success, warn};
use romanus_core::{encode, is_canonical, parse_strict, to_arabic};
use unicode_width::UnicodeWidthStr;

use crate::terminal::{colors, print};

pub fn arabic(numeral: &str, cfg: &Config) -> anyhow::Result<()> {
    let result = if cfg.strict {
        parse_strict(numeral)
    } else {
        to_arabic(numeral)
    };
    let value: u64 = result.map_err(|err| anyhow::anyhow!(describe_error(numeral, &err)))?;

    match canonical_hint(numeral, value, cfg.strict) {
        Some(hint) => warn!("{hint}"),
        None if cfg.strict => success!("'{numeral}' is canonical"),
        None => {}
    }

    if cfg.quiet == 0 {
        print::aligned_line("roman", numeral.color(colors::ACCENT));
    }
    print::numeral(&value.to_string(), cfg.quiet);
    Ok(())
}

/// Names the canonical spelling when a leniently read numeral is not it.
fn canonical_hint(numeral: &str, value: u64, strict: bool) -> Option<String> {
    if strict || is_canonical(numeral) {
        return None;
    }
    Some(format!(
        "'{numeral}' is not canonical, {value} is written {}",
        encode(value)
    ))
}

/// The error message, with a caret under the offending symbol when known.
fn describe_error(numeral: &str, err: &NumeralError) -> String {
    let message = format!("'{numeral}' is not a number: {err}");
    let Some(position) = err.position() else {
        return message;
    };

    let prefix: String = numeral.chars().take(position).collect();
    let indent: String = " ".repeat(UnicodeWidthStr::width(prefix.as_str()));
    format!("{message}\n  {numeral}\n  {indent}^")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
