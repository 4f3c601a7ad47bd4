use colored::*;
use netparam_common::config::Config;
use netparam_common::network::address::Address;
use tracing::warn;

use crate::commands::parse_address;
use crate::terminal::{colors, format, print};

pub fn compare(first: &str, second: &str, cfg: &Config) -> anyhow::Result<()> {
    let a: Address = parse_address(first)?;
    let b: Address = parse_address(second)?;

    if a.family() != b.family() {
        warn!("Comparing an {} address with an {} address", a.family(), b.family());
    }

    let verdict: ColoredString = if a == b {
        "equal".color(colors::MATCH).bold()
    } else {
        "not equal".color(colors::MISMATCH).bold()
    };

    print::aligned_block(&[
        ("First", format::address_colored(&a, cfg)),
        ("Second", format::address_colored(&b, cfg)),
        ("Result", verdict),
    ]);

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
