//! # Address
//!
//! An address of either family, for callers that do not know up front which
//! one they are holding.
//!
//! The family is picked from the input itself:
//! * **Text**: anything containing a `:` is colon-hex (IPv6), everything else dotted-decimal (IPv4).
//! * **Binary**: 4 bytes are IPv4, 16 bytes are IPv6.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use tracing::debug;

use crate::network::error::AddressError;
use crate::network::{ipv4, ipv6};
use crate::network::ipv4::Ipv4Address;
use crate::network::ipv6::Ipv6Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    V4(Ipv4Address),
    V6(Ipv6Address),
}

impl Address {
    /// Decodes a binary buffer, choosing the family by its length.
    pub fn from_raw(buffer: Option<&[u8]>) -> Result<Self, AddressError> {
        let Some(bytes) = buffer else {
            debug!("no buffer supplied for address decoding");
            return Err(AddressError::NullInput);
        };

        match bytes.len() {
            ipv4::BINARY_LENGTH => Ipv4Address::from_binary(bytes).map(Address::V4),
            ipv6::BINARY_LENGTH => Ipv6Address::from_binary(bytes).map(Address::V6),
            actual => {
                debug!(len = actual, "binary buffer matches no address family");
                Err(AddressError::UnknownFamilySize { actual })
            }
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self, Address::V4(_))
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self, Address::V6(_))
    }

    pub fn to_binary(&self) -> Vec<u8> {
        match self {
            Address::V4(addr) => addr.to_binary().to_vec(),
            Address::V6(addr) => addr.to_binary().to_vec(),
        }
    }

    /// Zeroes the address, keeping its family.
    pub fn clear(&mut self) {
        match self {
            Address::V4(addr) => addr.clear(),
            Address::V6(addr) => addr.clear(),
        }
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AddressError::EmptyInput);
        }

        if s.contains(':') {
            Ipv6Address::parse(s).map(Address::V6)
        } else {
            Ipv4Address::parse(s).map(Address::V4)
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::V4(addr) => addr.fmt(f),
            Address::V6(addr) => addr.fmt(f),
        }
    }
}

impl From<Ipv4Address> for Address {
    fn from(addr: Ipv4Address) -> Self {
        Address::V4(addr)
    }
}

impl From<Ipv6Address> for Address {
    fn from(addr: Ipv6Address) -> Self {
        Address::V6(addr)
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => Address::V4(v4.into()),
            IpAddr::V6(v6) => Address::V6(v6.into()),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr {
            Address::V4(v4) => IpAddr::V4(v4.into()),
            Address::V6(v6) => IpAddr::V6(v6.into()),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
