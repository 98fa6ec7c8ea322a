use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Validates an IPv4 address, or IPv4/IPv6 when `allow_ipv6` is set.
///
/// Unless `allow_special` is set, private and reserved ranges are rejected.
pub fn is_valid_ip(value: &str, allow_ipv6: bool, allow_special: bool) -> bool {
    match value.parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => allow_special || !is_special_v4(addr),
        Ok(IpAddr::V6(addr)) => allow_ipv6 && (allow_special || !is_special_v6(addr)),
        Err(_) => false,
    }
}

pub fn is_special_v4(addr: Ipv4Addr) -> bool {
    let [a, b, _, _] = addr.octets();
    let private = a == 10 || (a == 172 && (16..=31).contains(&b)) || (a == 192 && b == 168);
    let reserved = a == 0 || a == 127 || (a == 169 && b == 254) || a >= 240;
    private || reserved
}

pub fn is_special_v6(addr: Ipv6Addr) -> bool {
    let segments = addr.segments();
    let unique_local = (segments[0] & 0xfe00) == 0xfc00;
    let link_local = (segments[0] & 0xffc0) == 0xfe80;
    let documentation = segments[0] == 0x2001 && segments[1] == 0x0db8;
    let mapped_v4 = segments[..5].iter().all(|s| *s == 0) && segments[5] == 0xffff;
    addr.is_unspecified()
        || addr.is_loopback()
        || unique_local
        || link_local
        || documentation
        || mapped_v4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_ipv4_passes_by_default() {
        assert!(is_valid_ip("120.40.44.171", false, false));
    }

    #[test]
    fn private_and_reserved_ipv4_rejected_unless_special_allowed() {
        for addr in ["192.168.1.1", "10.0.0.1", "172.20.1.1", "127.0.0.1", "255.255.255.255"] {
            assert!(!is_valid_ip(addr, true, false), "{addr} should be rejected");
            assert!(is_valid_ip(addr, true, true), "{addr} should be accepted");
        }
        assert!(is_valid_ip("172.32.0.1", false, false));
    }

    #[test]
    fn ipv6_requires_opt_in() {
        let addr = "24a6:57:c:36cf:0000:5efe:109.205.140.116";
        assert!(!is_valid_ip(addr, false, false));
        assert!(!is_valid_ip(addr, false, true));
        assert!(is_valid_ip(addr, true, false));
    }

    #[test]
    fn special_ipv6_ranges_rejected() {
        for addr in ["fe80:4:6c:8c74:0000:5efe:109.205.140.116", "::1", "::", "fd00::1", "::ffff:1.2.3.4"] {
            assert!(!is_valid_ip(addr, true, false), "{addr} should be rejected");
            assert!(is_valid_ip(addr, true, true), "{addr} should be accepted");
        }
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(!is_valid_ip("22.x", true, true));
        assert!(!is_valid_ip("1.2.3", true, true));
        assert!(!is_valid_ip("", true, true));
    }
}
