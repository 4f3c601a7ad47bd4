use anyhow::Context;
use netparam_common::config::Config;
use netparam_common::network::address::Address;

use crate::commands::parse::print_details;
use crate::terminal::format;

/// Decodes a hex byte string into an address.
///
/// A missing argument is passed down as "no buffer" so the library reports it.
pub fn decode(hex: Option<&str>, cfg: &Config) -> anyhow::Result<()> {
    let bytes: Option<Vec<u8>> = hex.map(parse_hex_bytes).transpose()?;

    let addr = Address::from_raw(bytes.as_deref()).context("failed to decode address")?;

    let label = format::hex_bytes(&addr.to_binary());
    print_details(0, &label, &addr, cfg);
    Ok(())
}

/// Parses hex such as `c0a80001`, `0xC0A80001` or `c0:a8:00:01`.
///
/// `:`, `-` and whitespace between bytes are ignored.
fn parse_hex_bytes(s: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed: &str = s.trim();
    let without_prefix: &str = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let digits: Vec<char> = without_prefix
        .chars()
        .filter(|c| !matches!(c, ':' | '-') && !c.is_whitespace())
        .collect();

    if let Some(bad) = digits.iter().find(|c| !c.is_ascii_hexdigit()) {
        anyhow::bail!("invalid hex digit '{bad}' in '{s}'");
    }
    if digits.len() % 2 != 0 {
        anyhow::bail!("hex string '{s}' has an odd number of digits");
    }

    digits
        .chunks(2)
        .map(|pair| {
            let byte_str: String = pair.iter().collect();
            u8::from_str_radix(&byte_str, 16)
                .with_context(|| format!("invalid hex byte '{byte_str}' in '{s}'"))
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
