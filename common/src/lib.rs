//! # netparam common
//!
//! Address value types shared by the `netparam` binary and its tests.
//!
//! * **[`network::ipv4`]**: [`Ipv4Address`], four octets in dotted-decimal notation.
//! * **[`network::ipv6`]**: [`Ipv6Address`], eight 16-bit groups in colon-hex notation.
//! * **[`network::address`]**: [`Address`], either of the two, picked by notation or buffer size.
//! * **[`config`]**: runtime options handed down from the command line.

pub mod config;
pub mod network;

pub use network::address::{Address, Family};
pub use network::error::AddressError;
pub use network::ipv4::Ipv4Address;
pub use network::ipv6::Ipv6Address;
