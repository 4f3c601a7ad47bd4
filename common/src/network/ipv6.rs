//! # IPv6 Address
//!
//! A fixed eight-group address with colon-hex parsing and formatting.
//!
//! Every group has to be written out: the `::` shorthand is not understood
//! on input and never produced on output. Formatting is always lowercase and
//! zero-padded to four digits per group.
//!
//! The binary form is sixteen bytes with each group in big-endian (network)
//! order, independent of the host's endianness.

use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::network::error::AddressError;

/// Number of 16-bit groups in an IPv6 address.
pub const GROUP_COUNT: usize = 8;

/// Length of the binary form in bytes.
pub const BINARY_LENGTH: usize = GROUP_COUNT * 2;

/// Maximum hex digits a single group may contain.
const MAX_GROUP_DIGITS: usize = 4;

const SEPARATOR: char = ':';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv6Address {
    groups: [u16; GROUP_COUNT],
}

impl Ipv6Address {
    pub const fn new(groups: [u16; GROUP_COUNT]) -> Self {
        Self { groups }
    }

    /// Parses fully written colon-hex text such as `2001:0db8:0:0:0:ff00:42:8329`.
    ///
    /// Digits are case-insensitive and each group holds one to four of them.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        parse_colon_hex(s)
            .inspect(|addr| trace!(input = s, %addr, "parsed IPv6 address"))
            .inspect_err(|e| debug!(input = s, error = %e, "rejected IPv6 address"))
    }

    /// Builds an address from exactly sixteen big-endian bytes.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, AddressError> {
        let bytes: [u8; BINARY_LENGTH] = bytes.try_into().map_err(|_| {
            debug!(len = bytes.len(), "rejected IPv6 binary buffer");
            AddressError::InvalidSize {
                expected: BINARY_LENGTH,
                actual: bytes.len(),
            }
        })?;
        Ok(Self::from(bytes))
    }

    /// Like [`Ipv6Address::from_binary`], for callers that may not have a buffer at all.
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

    pub fn to_binary(&self) -> [u8; BINARY_LENGTH] {
        let mut bytes = [0u8; BINARY_LENGTH];
        for (chunk, group) in bytes.chunks_exact_mut(2).zip(self.groups) {
            chunk.copy_from_slice(&group.to_be_bytes());
        }
        bytes
    }

    /// Writes the binary form into `dest`, which must be exactly sixteen bytes long.
    pub fn to_binary_into(&self, dest: &mut [u8]) -> Result<(), AddressError> {
        if dest.len() != BINARY_LENGTH {
            return Err(AddressError::InvalidSize {
                expected: BINARY_LENGTH,
                actual: dest.len(),
            });
        }
        dest.copy_from_slice(&self.to_binary());
        Ok(())
    }

    pub fn octets(&self) -> [u8; BINARY_LENGTH] {
        self.to_binary()
    }

    pub const fn groups(&self) -> [u16; GROUP_COUNT] {
        self.groups
    }

    pub fn group(&self, index: usize) -> Result<u16, AddressError> {
        self.groups
            .get(index)
            .copied()
            .ok_or(AddressError::IndexOutOfRange {
                index,
                max: GROUP_COUNT - 1,
            })
    }

    pub fn set_group(&mut self, index: usize, value: u16) -> Result<(), AddressError> {
        let slot = self
            .groups
            .get_mut(index)
            .ok_or(AddressError::IndexOutOfRange {
                index,
                max: GROUP_COUNT - 1,
            })?;
        *slot = value;
        Ok(())
    }

    /// Resets every group to zero.
    pub fn clear(&mut self) {
        self.groups = [0; GROUP_COUNT];
    }

    pub fn is_unspecified(&self) -> bool {
        self.groups == [0; GROUP_COUNT]
    }
}

/// Linear scan over the input.
///
/// Starts at the first group and finishes after the eighth with nothing left
/// over. A group closes at a separator or at the end of input.
fn parse_colon_hex(s: &str) -> Result<Ipv6Address, AddressError> {
    if s.is_empty() {
        return Err(AddressError::EmptyInput);
    }

    let mut groups = [0u16; GROUP_COUNT];
    let mut count: usize = 0;
    let mut value: u16 = 0;
    let mut digits: usize = 0;

    for (position, ch) in s.char_indices() {
        if ch == SEPARATOR {
            close_group(&mut groups, &mut count, value, digits)?;
            if count == GROUP_COUNT {
                // Something follows the eighth group
                return Err(AddressError::WrongGroupCount {
                    expected: GROUP_COUNT,
                    found: count + 1,
                });
            }
            value = 0;
            digits = 0;
            continue;
        }

        let Some(nibble) = ch.to_digit(16) else {
            return Err(AddressError::InvalidCharacter { ch, position });
        };
        if digits == MAX_GROUP_DIGITS {
            return Err(overlong_group(s, position, count, digits));
        }
        value = (value << 4) | nibble as u16;
        digits += 1;
    }

    close_group(&mut groups, &mut count, value, digits)?;

    if count != GROUP_COUNT {
        return Err(AddressError::WrongGroupCount {
            expected: GROUP_COUNT,
            found: count,
        });
    }

    Ok(Ipv6Address { groups })
}

/// Builds the error for a group that already holds four digits and has more.
///
/// The rest of the group is checked first, so a bad character anywhere in it
/// wins over the length. Otherwise `len` counts hex digits up to the next
/// separator.
fn overlong_group(s: &str, position: usize, group: usize, digits: usize) -> AddressError {
    let rest = s[position..]
        .char_indices()
        .take_while(|&(_, ch)| ch != SEPARATOR);

    let mut extra: usize = 0;
    for (offset, ch) in rest {
        if !ch.is_ascii_hexdigit() {
            return AddressError::InvalidCharacter {
                ch,
                position: position + offset,
            };
        }
        extra += 1;
    }

    AddressError::InvalidGroupLength {
        group,
        len: digits + extra,
    }
}

fn close_group(
    groups: &mut [u16; GROUP_COUNT],
    count: &mut usize,
    value: u16,
    digits: usize,
) -> Result<(), AddressError> {
    if digits == 0 {
        return Err(AddressError::InvalidGroupLength {
            group: *count,
            len: 0,
        });
    }
    groups[*count] = value;
    *count += 1;
    Ok(())
}

impl FromStr for Ipv6Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i != 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{group:04x}")?;
        }
        Ok(())
    }
}

impl From<[u16; GROUP_COUNT]> for Ipv6Address {
    fn from(groups: [u16; GROUP_COUNT]) -> Self {
        Self { groups }
    }
}

impl From<[u8; BINARY_LENGTH]> for Ipv6Address {
    fn from(bytes: [u8; BINARY_LENGTH]) -> Self {
        let mut groups = [0u16; GROUP_COUNT];
        for (group, pair) in groups.iter_mut().zip(bytes.chunks_exact(2)) {
            *group = u16::from_be_bytes([pair[0], pair[1]]);
        }
        Self { groups }
    }
}

impl TryFrom<&[u8]> for Ipv6Address {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_binary(bytes)
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self {
            groups: addr.segments(),
        }
    }
}

impl From<Ipv6Address> for Ipv6Addr {
    fn from(addr: Ipv6Address) -> Self {
        Ipv6Addr::from(addr.groups)
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
