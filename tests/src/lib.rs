//! Integration tests for `netparam-common`, exercised only through its public API.

#[cfg(test)]
mod address;
#[cfg(test)]
mod util;
