use romanus_common::config::Config;
use romanus_common::warn;
use romanus_core::encode;
use romanus_core::input::parse_decimal;

use crate::terminal::print;

/// Largest value the front end will spell out.
///
/// Past 3999 every thousand is another `M`, so the output grows linearly
/// with the value itself.
pub const MAX_VALUE: u64 = 1_000_000;

pub fn roman(value: &str, cfg: &Config) -> anyhow::Result<()> {
    let number: u64 = parse_decimal(value)
        .map_err(|err| anyhow::anyhow!("no roman numeral for '{value}': {err}"))?;

    if number == 0 {
        anyhow::bail!("no roman numeral for '{value}': zero has no roman numeral");
    }
    if number > MAX_VALUE {
        anyhow::bail!("{value} is too large to write out, the limit is {MAX_VALUE}");
    }
    if number > 3999 {
        warn!("{value} is above MMMCMXCIX, thousands are written as repeated 'M'");
    }

    let roman: String = encode(number);

    if cfg.quiet == 0 {
        print::aligned_line("decimal", value);
    }
    print::numeral(&roman, cfg.quiet);
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
