#![cfg(test)]
use netparam_common::{AddressError, Ipv6Address};
use std::net::Ipv6Addr;

use crate::util::{self, SAMPLES};

#[test]
fn text_round_trip_is_stable() {
    let mut rng = util::rng();
    for _ in 0..SAMPLES {
        let addr = util::random_ipv6(&mut rng);
        let first: Ipv6Address = addr.to_string().parse().unwrap();
        assert_eq!(first, addr);
        assert_eq!(first.to_string(), addr.to_string());
    }
}

#[test]
fn loose_text_parses_to_canonical() {
    let mut rng = util::rng();
    for _ in 0..SAMPLES {
        let addr = util::random_ipv6(&mut rng);
        let loose = util::loose_ipv6_text(&addr, &mut rng);
        let parsed = Ipv6Address::parse(&loose).unwrap();
        assert_eq!(parsed, addr, "'{loose}' parsed to the wrong address");
    }
}

#[test]
fn binary_round_trip_is_stable() {
    let mut rng = util::rng();
    for _ in 0..SAMPLES {
        let addr = util::random_ipv6(&mut rng);
        let decoded = Ipv6Address::from_binary(&addr.to_binary()).unwrap();
        assert_eq!(decoded, addr);
        assert_eq!(Ipv6Address::from_binary(&decoded.to_binary()).unwrap(), decoded);
    }
}

#[test]
fn binary_matches_std_network_order() {
    let mut rng = util::rng();
    for _ in 0..SAMPLES {
        let addr = util::random_ipv6(&mut rng);
        let std_addr = Ipv6Addr::from(addr.to_binary());
        assert_eq!(std_addr.segments(), addr.groups());
    }
}

#[test]
fn documented_scenarios() -> anyhow::Result<()> {
    let text = "2001:0db8:0000:0000:0000:ff00:0042:8329";
    assert_eq!(Ipv6Address::parse(text)?.to_string(), text);

    assert!(matches!(
        Ipv6Address::parse("not_an_ip_address"),
        Err(AddressError::InvalidCharacter { .. })
    ));
    assert!(matches!(
        Ipv6Address::parse("2001:0db8:00000:0000:0000:ff00:0042:8329"),
        Err(AddressError::InvalidGroupLength { group: 2, len: 5 })
    ));
    Ok(())
}

#[test]
fn boundaries() {
    assert_eq!(Ipv6Address::parse(""), Err(AddressError::EmptyInput));
    assert!(matches!(
        Ipv6Address::from_binary(&[0u8; 15]),
        Err(AddressError::InvalidSize { actual: 15, .. })
    ));
    assert!(matches!(
        Ipv6Address::from_binary(&[0u8; 17]),
        Err(AddressError::InvalidSize { actual: 17, .. })
    ));
    assert_eq!(Ipv6Address::from_raw(None), Err(AddressError::NullInput));
}

#[test]
fn every_single_group_change_breaks_equality() {
    let base = Ipv6Address::new([1, 2, 3, 4, 5, 6, 7, 8]);
    for i in 0..8 {
        let mut changed = base;
        changed.set_group(i, 0xffff).unwrap();
        assert_ne!(changed, base, "changing group {i} kept the address equal");
    }
}

#[test]
fn clear_twice_is_clear_once() {
    let mut rng = util::rng();
    let mut once = util::random_ipv6(&mut rng);
    once.clear();
    let mut twice = once;
    twice.clear();
    assert_eq!(once, twice);
    assert!(twice.is_unspecified());
}
