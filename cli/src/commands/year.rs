use romanus_common::config::Config;
use romanus_common::info;
use romanus_core::YearService;

use crate::terminal::print;

pub fn year(cfg: &Config) -> anyhow::Result<()> {
    report(&YearService::default(), cfg)
}

fn report(service: &YearService, cfg: &Config) -> anyhow::Result<()> {
    let year: i32 = service.year();
    let roman: String = service.roman_year();
    info!("the clock reports {year}");

    if roman.is_empty() {
        anyhow::bail!("the clock reports year {year}, which has no roman numeral");
    }

    if cfg.quiet == 0 {
        print::aligned_line("year", year.to_string());
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

#[cfg(test)]
mod tests {
    use super::*;
    use romanus_common::clock::FixedYear;

    const CFG: Config = Config {
        quiet: 0,
        verbose: false,
        no_banner: true,
        strict: false,
    };

    #[test]
    fn test_current_year() {
        assert!(year(&CFG).is_ok());
    }

    #[test]
    fn test_year_without_numeral_fails() {
        let service = YearService::new(Box::new(FixedYear(0)));
        let err = report(&service, &CFG).unwrap_err();
        assert!(err.to_string().contains("year 0"), "{err}");
    }

    #[test]
    fn test_fixed_year() {
        let service = YearService::new(Box::new(FixedYear(1888)));
        assert!(report(&service, &CFG).is_ok());
    }
}
