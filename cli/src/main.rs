mod commands;
mod terminal;

use commands::{CommandLine, Commands, arabic, roman, year};
use romanus_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
        no_banner: commands.no_banner,
        strict: commands.strict,
    };

    logging::init_logging(&cfg);
    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Roman { value } => {
            print::header("decimal to roman", cfg.quiet);
            roman::roman(&value, &cfg)
        }
        Commands::Arabic { numeral } => {
            print::header("roman to decimal", cfg.quiet);
            arabic::arabic(&numeral, &cfg)
        }
        Commands::Year => {
            print::header("current year", cfg.quiet);
            year::year(&cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
