pub mod compare;
pub mod decode;
pub mod parse;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use netparam_common::network::address::Address;

#[derive(Parser)]
#[command(name = "netparam")]
#[command(about = "Parse, convert and compare IPv4 and IPv6 addresses.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hide decorative output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug logs, twice for trace logs
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print IPv6 hex digits in uppercase
    #[arg(long, global = true)]
    pub upper: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the text, binary and octet/group form of one or more addresses
    #[command(alias = "p")]
    Parse {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Turn a hex byte string (4 or 16 bytes) back into an address
    #[command(alias = "d")]
    Decode { hex: Option<String> },
    /// Check whether two addresses are equal
    #[command(alias = "c")]
    Compare { first: String, second: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parses a command line argument, naming it in the error.
pub fn parse_address(s: &str) -> anyhow::Result<Address> {
    s.parse::<Address>()
        .with_context(|| format!("failed to parse address '{s}'"))
}
