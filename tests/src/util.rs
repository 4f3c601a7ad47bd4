use netparam_common::{Ipv4Address, Ipv6Address};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How many random addresses each property test checks.
pub const SAMPLES: usize = 2_000;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x6e65_7470_6172_616d)
}

pub fn random_ipv4(rng: &mut StdRng) -> Ipv4Address {
    let mut bytes = [0u8; 4];
    rng.fill(&mut bytes);
    Ipv4Address::from(bytes)
}

pub fn random_ipv6(rng: &mut StdRng) -> Ipv6Address {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    Ipv6Address::from(bytes)
}

/// Writes an IPv6 address with unpadded groups and random digit case.
pub fn loose_ipv6_text(addr: &Ipv6Address, rng: &mut StdRng) -> String {
    addr.groups()
        .iter()
        .map(|g| {
            if rng.random_bool(0.5) {
                format!("{g:X}")
            } else {
                format!("{g:x}")
            }
        })
        .collect::<Vec<String>>()
        .join(":")
}
