#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Suppresses decoration (banner, headers) when greater than zero.
    pub quiet: u8,
    /// Raises the default log filter to `debug`.
    pub verbose: bool,
    pub no_banner: bool,
    /// Only canonical numerals between 1 and 3999 are read.
    ///
    /// When disabled, numerals are summed pair by pair without any
    /// ordering or repetition checks.
    pub strict: bool,
}
