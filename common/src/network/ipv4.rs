//! # IPv4 Address
//!
//! A fixed four-octet address with dotted-decimal parsing and formatting.
//!
//! The binary form is the four octets in the order they are written, so
//! `192.168.0.1` travels as `[0xC0, 0xA8, 0x00, 0x01]`.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::network::error::AddressError;

/// Number of octets in an IPv4 address.
pub const OCTET_COUNT: usize = 4;

/// Length of the binary form in bytes.
pub const BINARY_LENGTH: usize = OCTET_COUNT;

const SEPARATOR: char = '.';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Address {
    octets: [u8; OCTET_COUNT],
}

impl Ipv4Address {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            octets: [a, b, c, d],
        }
    }

    /// Parses dotted-decimal text such as `192.168.0.1`.
    ///
    /// Every segment must be plain decimal digits with a value of at most 255.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        parse_dotted(s)
            .inspect(|addr| trace!(input = s, %addr, "parsed IPv4 address"))
            .inspect_err(|e| debug!(input = s, error = %e, "rejected IPv4 address"))
    }

    /// Builds an address from exactly four bytes.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, AddressError> {
        let octets: [u8; OCTET_COUNT] = bytes.try_into().map_err(|_| {
            debug!(len = bytes.len(), "rejected IPv4 binary buffer");
            AddressError::InvalidSize {
                expected: BINARY_LENGTH,
                actual: bytes.len(),
            }
        })?;
        Ok(Self { octets })
    }

    /// Like [`Ipv4Address::from_binary`], for callers that may not have a buffer at all.
    pub fn from_raw(buffer: Option<&[u8]>) -> Result<Self, AddressError> {
        Self::from_binary(buffer.ok_or(AddressError::NullInput)?)
    }

    /// Overwrites this address from a buffer.
    ///
    /// On error the address is left untouched.
    pub fn set_from_binary(&mut self, buffer: Option<&[u8]>) -> Result<(), AddressError> {
        *self = Self::from_raw(buffer)?;
        Ok(())
    }

    pub const fn to_binary(&self) -> [u8; BINARY_LENGTH] {
        self.octets
    }

    /// Writes the binary form into `dest`, which must be exactly four bytes long.
    pub fn to_binary_into(&self, dest: &mut [u8]) -> Result<(), AddressError> {
        if dest.len() != BINARY_LENGTH {
            return Err(AddressError::InvalidSize {
                expected: BINARY_LENGTH,
                actual: dest.len(),
            });
        }
        dest.copy_from_slice(&self.octets);
        Ok(())
    }

    pub const fn octets(&self) -> [u8; OCTET_COUNT] {
        self.octets
    }

    pub fn octet(&self, index: usize) -> Result<u8, AddressError> {
        self.octets
            .get(index)
            .copied()
            .ok_or(AddressError::IndexOutOfRange {
                index,
                max: OCTET_COUNT - 1,
            })
    }

    pub fn set_octet(&mut self, index: usize, value: u8) -> Result<(), AddressError> {
        let slot = self
            .octets
            .get_mut(index)
            .ok_or(AddressError::IndexOutOfRange {
                index,
                max: OCTET_COUNT - 1,
            })?;
        *slot = value;
        Ok(())
    }

    /// Resets every octet to zero.
    pub fn clear(&mut self) {
        self.octets = [0; OCTET_COUNT];
    }

    pub fn is_unspecified(&self) -> bool {
        self.octets == [0; OCTET_COUNT]
    }
}

/// Walks the text once, closing a segment at every separator and once more
/// at the end of input.
fn parse_dotted(s: &str) -> Result<Ipv4Address, AddressError> {
    if s.is_empty() {
        return Err(AddressError::InvalidFormat("empty input".into()));
    }

    let mut octets = [0u8; OCTET_COUNT];
    let mut count: usize = 0;

    for segment in s.split(SEPARATOR) {
        if count == OCTET_COUNT {
            return Err(AddressError::InvalidFormat(format!(
                "'{s}' has more than {OCTET_COUNT} segments"
            )));
        }
        octets[count] = parse_segment(segment, s)?;
        count += 1;
    }

    if count != OCTET_COUNT {
        return Err(AddressError::InvalidFormat(format!(
            "'{s}' has {count} segments, expected {OCTET_COUNT}"
        )));
    }

    Ok(Ipv4Address { octets })
}

/// Converts one decimal segment, rejecting anything that is not a digit.
///
/// Leading zeros are accepted (`010` is 10). The value is bounded while
/// accumulating so long digit runs cannot overflow.
fn parse_segment(segment: &str, original_s: &str) -> Result<u8, AddressError> {
    if segment.is_empty() {
        return Err(AddressError::InvalidFormat(format!(
            "empty segment in '{original_s}'"
        )));
    }

    let mut value: u16 = 0;
    for ch in segment.chars() {
        let Some(digit) = ch.to_digit(10) else {
            return Err(AddressError::InvalidFormat(format!(
                "'{ch}' is not a decimal digit in '{original_s}'"
            )));
        };
        value = value * 10 + digit as u16;
        if value > u8::MAX as u16 {
            return Err(AddressError::NumericOverflow {
                segment: segment.to_string(),
            });
        }
    }

    Ok(value as u8)
}

impl FromStr for Ipv4Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl From<[u8; OCTET_COUNT]> for Ipv4Address {
    fn from(octets: [u8; OCTET_COUNT]) -> Self {
        Self { octets }
    }
}

impl TryFrom<&[u8]> for Ipv4Address {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_binary(bytes)
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self {
            octets: addr.octets(),
        }
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.octets)
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
