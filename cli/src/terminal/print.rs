use crate::terminal::colors;
use colored::*;
use netparam_common::config::Config;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Events on this target are results. They are printed verbatim and are never
/// filtered out by the log level.
pub const PRINT_TARGET: &str = "netparam::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    let text_content: String = format!("⟦ NETPARAM v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();

    print(&format!("{}{}{}", sep, text_content.bright_green().bold(), sep));
}

/// Centred section title, e.g. `──────⟦ PARSING ADDRESSES ⟧──────`.
pub fn header(msg: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let dash_count: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(title.as_str()));
    let left: usize = dash_count / 2;

    print(&format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        title.bright_green(),
        "─".repeat(dash_count - left).bright_black()
    ));
}

/// Title line above one address, e.g. `[0] 192.168.0.1`.
pub fn entry_title(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

/// Prints `key...: value` lines with the colons lined up on the longest key.
pub fn aligned_block(pairs: &[(&str, ColoredString)]) {
    let width: usize = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in pairs {
        print(&aligned_line(key, value, width));
    }
}

fn aligned_line(key: &str, value: &ColoredString, width: usize) -> String {
    let dots: String = ".".repeat(width + 1 - key.len());
    format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    )
}

pub fn fat_separator(cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).bright_black()));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
