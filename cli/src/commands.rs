pub mod arabic;
pub mod roman;
pub mod year;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "romanus")]
#[command(version, about = "Convert between decimal numbers and Roman numerals.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print only the result (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Hide the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Only accept canonical numerals between I and MMMCMXCIX
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Convert a decimal number into a Roman numeral
    #[command(alias = "r")]
    Roman { value: String },
    /// Convert a Roman numeral into a decimal number
    #[command(alias = "a")]
    Arabic { numeral: String },
    /// Show the current year in Roman numerals
    #[command(alias = "y")]
    Year,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
