use thiserror::Error;

/// Everything that can go wrong while building or converting an address.
///
/// Parsing and decoding never hand out a partially filled address; the caller
/// either gets a complete value or one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The text to parse had zero length.
    #[error("empty address string")]
    EmptyInput,

    /// Dotted-decimal text that is not four decimal segments.
    #[error("invalid address format: {0}")]
    InvalidFormat(String),

    /// A decimal segment that does not fit into an octet.
    #[error("segment '{segment}' is out of range (0-255)")]
    NumericOverflow { segment: String },

    /// A character that is not a hex digit or separator.
    #[error("invalid character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    /// A hex group with no digits or more than four.
    #[error("group {group} has {len} hex digits (expected 1-4)")]
    InvalidGroupLength { group: usize, len: usize },

    /// Colon-hex text with a group count other than eight.
    #[error("expected {expected} groups, found {found}")]
    WrongGroupCount { expected: usize, found: usize },

    /// No binary buffer was supplied.
    #[error("no binary buffer supplied")]
    NullInput,

    /// A binary buffer of the wrong length for the requested family.
    #[error("invalid binary size: expected {expected} bytes, got {actual}")]
    InvalidSize { expected: usize, actual: usize },

    /// A binary buffer whose length fits neither family (4 or 16 bytes).
    #[error("binary size {actual} matches no address family (expected 4 or 16 bytes)")]
    UnknownFamilySize { actual: usize },

    /// An octet or group index past the end of the address.
    #[error("index {index} is out of range (0-{max})")]
    IndexOutOfRange { index: usize, max: usize },
}
