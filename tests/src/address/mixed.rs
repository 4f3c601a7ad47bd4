#![cfg(test)]
use netparam_common::{Address, AddressError, Family, Ipv6Address};
use std::net::IpAddr;

use crate::util::{self, SAMPLES};

#[test]
fn family_is_detected_from_text_and_binary() {
    let mut rng = util::rng();
    for _ in 0..SAMPLES / 10 {
        let v4 = Address::from(util::random_ipv4(&mut rng));
        let v6 = Address::from(util::random_ipv6(&mut rng));

        for addr in [v4, v6] {
            let from_text: Address = addr.to_string().parse().unwrap();
            let from_binary = Address::from_raw(Some(addr.to_binary().as_slice())).unwrap();
            assert_eq!(from_text, addr);
            assert_eq!(from_binary, addr);
        }

        assert_eq!(v4.family(), Family::V4);
        assert_eq!(v6.family(), Family::V6);
    }
}

#[test]
fn std_ip_addr_round_trip() {
    let mut rng = util::rng();
    for _ in 0..SAMPLES / 10 {
        let addr = Address::from(util::random_ipv6(&mut rng));
        let ip = IpAddr::from(addr);
        assert_eq!(Address::from(ip), addr);
    }
}

#[test]
fn rejected_inputs() {
    assert_eq!("".parse::<Address>(), Err(AddressError::EmptyInput));
    assert_eq!(Address::from_raw(None), Err(AddressError::NullInput));
    assert_eq!(
        Address::from_raw(Some(&[0u8; 8][..])),
        Err(AddressError::UnknownFamilySize { actual: 8 })
    );
    // A family-specific decoder names the one size it wanted
    assert_eq!(
        Ipv6Address::from_binary(&[0u8; 4]),
        Err(AddressError::InvalidSize {
            expected: 16,
            actual: 4
        })
    );
}

#[test]
fn errors_render_for_humans() {
    let err = "1:2:3:4:5:6:7".parse::<Address>().unwrap_err();
    assert_eq!(err.to_string(), "expected 8 groups, found 7");

    let err = "300.1.1.1".parse::<Address>().unwrap_err();
    assert_eq!(err.to_string(), "segment '300' is out of range (0-255)");
}
