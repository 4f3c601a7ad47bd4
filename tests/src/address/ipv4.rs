#![cfg(test)]
use netparam_common::{AddressError, Ipv4Address};
use std::net::Ipv4Addr;

use crate::util::{self, SAMPLES};

#[test]
fn text_round_trip_is_stable() {
    let mut rng = util::rng();
    for _ in 0..SAMPLES {
        let addr = util::random_ipv4(&mut rng);
        let first: Ipv4Address = addr.to_string().parse().unwrap();
        let second: Ipv4Address = first.to_string().parse().unwrap();
        assert_eq!(first, addr);
        assert_eq!(second, first);
    }
}

#[test]
fn binary_round_trip_is_stable() {
    let mut rng = util::rng();
    for _ in 0..SAMPLES {
        let addr = util::random_ipv4(&mut rng);
        let bytes = addr.to_binary();
        let decoded = Ipv4Address::from_binary(&bytes).unwrap();
        assert_eq!(decoded, addr);
        assert_eq!(Ipv4Address::from_binary(&decoded.to_binary()).unwrap(), decoded);
    }
}

#[test]
fn text_matches_std() {
    let mut rng = util::rng();
    for _ in 0..SAMPLES {
        let addr = util::random_ipv4(&mut rng);
        let text = addr.to_string();
        let std_addr: Ipv4Addr = text.parse().unwrap();
        assert_eq!(text, std_addr.to_string());
        assert_eq!(addr.octets(), std_addr.octets());
    }
}

#[test]
fn documented_scenario() -> anyhow::Result<()> {
    let addr = Ipv4Address::parse("192.168.0.1")?;
    assert_eq!(addr.octets(), [192, 168, 0, 1]);
    assert_eq!(addr.to_string(), "192.168.0.1");
    assert_eq!(addr.to_binary(), [0xC0, 0xA8, 0x00, 0x01]);
    Ok(())
}

#[test]
fn boundaries() {
    assert!(matches!(
        Ipv4Address::parse(""),
        Err(AddressError::InvalidFormat(_))
    ));
    assert!(matches!(
        Ipv4Address::from_binary(&[0u8; 5]),
        Err(AddressError::InvalidSize { actual: 5, .. })
    ));
    assert_eq!(
        Ipv4Address::parse("255.255.255.255").unwrap().to_binary(),
        [0xFF; 4]
    );
    assert!(matches!(
        Ipv4Address::parse("255.255.255.256"),
        Err(AddressError::NumericOverflow { .. })
    ));
}

#[test]
fn every_single_octet_change_breaks_equality() {
    let base = Ipv4Address::new(10, 20, 30, 40);
    for i in 0..4 {
        let mut changed = base;
        let old = changed.octet(i).unwrap();
        changed.set_octet(i, old.wrapping_add(1)).unwrap();
        assert_ne!(changed, base, "changing octet {i} kept the address equal");
    }
}
