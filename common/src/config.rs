#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the banner printed before the first header.
    pub no_banner: bool,
    /// Suppresses decorative output and lowers the log level to warnings.
    /// Each level hides a bit more.
    ///
    /// Results and errors are always printed.
    pub quiet: u8,
    /// Prints IPv6 hex digits in uppercase.
    ///
    /// Does not affect parsing, which is case-insensitive.
    pub uppercase: bool,
}
