use crate::terminal::colors;
use colored::*;
use netparam_common::config::Config;
use netparam_common::network::address::Address;

/// Canonical text of an address, upper-cased on request.
pub fn address_text(addr: &Address, cfg: &Config) -> String {
    let text: String = addr.to_string();
    if cfg.uppercase {
        text.to_ascii_uppercase()
    } else {
        text
    }
}

pub fn address_colored(addr: &Address, cfg: &Config) -> ColoredString {
    let color = match addr {
        Address::V4(_) => colors::IPV4_ADDR,
        Address::V6(_) => colors::IPV6_ADDR,
    };
    address_text(addr, cfg).color(color)
}

/// Space separated hex bytes, e.g. `c0 a8 00 01`.
pub fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<String>>()
        .join(" ")
}

/// Individual octets (IPv4) or groups (IPv6), separated by commas.
pub fn parts(addr: &Address) -> String {
    match addr {
        Address::V4(v4) => v4
            .octets()
            .iter()
            .map(u8::to_string)
            .collect::<Vec<String>>()
            .join(", "),
        Address::V6(v6) => v6
            .groups()
            .iter()
            .map(|g| format!("0x{g:04x}"))
            .collect::<Vec<String>>()
            .join(", "),
    }
}

pub fn to_key_value_pairs(addr: &Address, cfg: &Config) -> Vec<(&'static str, ColoredString)> {
    let parts_key: &str = match addr {
        Address::V4(_) => "Octets",
        Address::V6(_) => "Groups",
    };

    vec![
        ("Family", addr.family().to_string().color(colors::ACCENT)),
        ("Address", address_colored(addr, cfg)),
        ("Binary", hex_bytes(&addr.to_binary()).color(colors::BINARY)),
        (parts_key, parts(addr).color(colors::TEXT_DEFAULT)),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
