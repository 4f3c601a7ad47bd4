use netparam_common::config::Config;
use netparam_common::network::address::Address;
use tracing::debug;

use crate::commands::parse_address;
use crate::terminal::{format, print};

pub fn parse(addresses: &[String], cfg: &Config) -> anyhow::Result<()> {
    let parsed: Vec<Address> = addresses
        .iter()
        .map(|s| parse_address(s))
        .collect::<anyhow::Result<Vec<Address>>>()?;

    debug!(count = parsed.len(), "all addresses parsed");

    for (idx, addr) in parsed.iter().enumerate() {
        if idx > 0 {
            print::fat_separator(cfg);
        }
        print_details(idx, &addresses[idx], addr, cfg);
    }

    Ok(())
}

pub fn print_details(idx: usize, input: &str, addr: &Address, cfg: &Config) {
    print::entry_title(idx, input);
    print::aligned_block(&format::to_key_value_pairs(addr, cfg));
}
