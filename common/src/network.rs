pub mod address;
pub mod error;
pub mod ipv4;
pub mod ipv6;
