use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;

/// Prefixes log events with a coloured level marker. Results on
/// [`PRINT_TARGET`] are written as they are.
pub struct NetparamFormatter;

fn level_marker(level: &Level) -> ColoredString {
    match *level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[?]".blue(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::ERROR => "[-]".red().bold(),
    }
}

impl<S, N> FormatEvent<S, N> for NetparamFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        if meta.target() != PRINT_TARGET {
            write!(writer, "{} ", level_marker(meta.level()))?;
        }
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Log level used when `RUST_LOG` is not set.
///
/// `-q` lowers it to warnings, `-v` raises it. Results are unaffected either way.
fn default_level(verbose: u8, quiet: u8) -> &'static str {
    match (quiet, verbose) {
        (q, _) if q > 0 => "warn",
        (_, 0) => "info",
        (_, 1) => "debug",
        _ => "trace",
    }
}

/// Builds the filter from a `RUST_LOG`-style string, or the flag-based
/// default when there is none.
///
/// The result target is always enabled at `info`, so a restrictive filter
/// only hides log lines, never results.
pub fn build_filter(rust_log: Option<&str>, verbose: u8, quiet: u8) -> EnvFilter {
    let base: &str = match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ => default_level(verbose, quiet),
    };

    EnvFilter::builder().parse_lossy(format!("{base},{PRINT_TARGET}=info"))
}

/// Installs the global subscriber.
pub fn init_logging(verbose: u8, quiet: u8) {
    let rust_log: Option<String> = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(rust_log.as_deref(), verbose, quiet))
        .event_format(NetparamFormatter)
        .init();
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
