//! Subnet calculation from a network prefix.
//!
//! The calculator takes a [`Prefix`] and derives the network address,
//! broadcast address, subnet mask and total address count. It is a pure
//! function: no I/O, no logging, no shared state.

use crate::models::{cidr_mask, Prefix, SubnetInfo, MAX_LENGTH};
use std::net::{IpAddr, Ipv4Addr};

/// Reasons a prefix cannot be turned into a [`SubnetInfo`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The prefix length does not fit its address family.
    InvalidPrefix,
    /// The address is not IPv4.
    UnsupportedFamily,
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CalcError::InvalidPrefix => write!(f, "invalid prefix"),
            CalcError::UnsupportedFamily => write!(f, "IPv6 not supported yet"),
        }
    }
}

impl std::error::Error for CalcError {}

/// Subnet mask and its complement for a given prefix length.
struct Masks {
    subnet: u32,
    wildcard: u32,
}

fn calc_masks(bits: u8) -> Result<Masks, CalcError> {
    let subnet = cidr_mask(bits).map_err(|_| CalcError::InvalidPrefix)?;
    Ok(Masks {
        subnet,
        wildcard: !subnet,
    })
}

/// Single host (/32): the address is its own network and broadcast.
fn single_host_info(addr: Ipv4Addr) -> SubnetInfo {
    SubnetInfo {
        network_address: addr,
        broadcast_ip: addr,
        subnet_mask: Ipv4Addr::new(255, 255, 255, 255),
        total_ip: 1,
    }
}

/// Calculate subnet information for the given IPv4 prefix.
///
/// Any address inside a subnet produces the same result: host bits are
/// masked off before the network and broadcast addresses are derived, so
/// `192.168.1.77/24` and `192.168.1.0/24` are equivalent inputs.
///
/// # Errors
/// [`CalcError::InvalidPrefix`] when the prefix length is out of range for
/// its address family, [`CalcError::UnsupportedFamily`] for IPv6 input.
///
/// # Examples
/// ```
/// use snc::{subnet_info, Prefix};
/// let prefix = Prefix::new("192.168.1.0/24").unwrap();
/// let info = subnet_info(prefix).unwrap();
/// assert_eq!(info.broadcast_ip.to_string(), "192.168.1.255");
/// assert_eq!(info.total_ip, 256);
/// ```
pub fn subnet_info(prefix: Prefix) -> Result<SubnetInfo, CalcError> {
    if !prefix.is_valid() {
        return Err(CalcError::InvalidPrefix);
    }

    let addr = match prefix.addr {
        IpAddr::V4(addr) => addr,
        IpAddr::V6(_) => return Err(CalcError::UnsupportedFamily),
    };

    if prefix.bits == MAX_LENGTH {
        return Ok(single_host_info(addr));
    }

    let masks = calc_masks(prefix.bits)?;
    let network_bits = u32::from(addr) & masks.subnet;
    let broadcast_bits = network_bits | masks.wildcard;
    let total_ip = 1u64 << (MAX_LENGTH - prefix.bits);

    Ok(SubnetInfo {
        network_address: Ipv4Addr::from(network_bits),
        broadcast_ip: Ipv4Addr::from(broadcast_bits),
        subnet_mask: Ipv4Addr::from(masks.subnet),
        total_ip,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(cidr: &str) -> SubnetInfo {
        subnet_info(Prefix::new(cidr).unwrap()).unwrap()
    }

    #[test]
    fn test_invalid_prefix() {
        let prefix = Prefix {
            addr: IpAddr::V4(Ipv4Addr::new(10, 0, 0, 0)),
            bits: 33,
        };
        let err = subnet_info(prefix).unwrap_err();
        assert_eq!(err, CalcError::InvalidPrefix);
        assert_eq!(err.to_string(), "invalid prefix");
    }

    #[test]
    fn test_ipv6_rejected() {
        let prefix = Prefix::new("2001:db8::/64").unwrap();
        let err = subnet_info(prefix).unwrap_err();
        assert_eq!(err, CalcError::UnsupportedFamily);
        assert_eq!(err.to_string(), "IPv6 not supported yet");
    }

    #[test]
    fn test_single_host() {
        let got = info("192.168.1.2/32");
        assert_eq!(got.network_address, Ipv4Addr::new(192, 168, 1, 2));
        assert_eq!(got.broadcast_ip, Ipv4Addr::new(192, 168, 1, 2));
        assert_eq!(got.subnet_mask, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(got.total_ip, 1);
    }

    #[test]
    fn test_default_route() {
        let got = info("0.0.0.0/0");
        assert_eq!(got.network_address, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(got.broadcast_ip, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(got.subnet_mask, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(got.total_ip, 4294967296);

        // every address maps to the same /0 subnet
        assert_eq!(info("255.255.255.255/0"), got);
        assert_eq!(info("128.128.128.128/0"), got);
    }

    #[test]
    fn test_point_to_point() {
        let got = info("10.0.0.4/31");
        assert_eq!(got.network_address, Ipv4Addr::new(10, 0, 0, 4));
        assert_eq!(got.broadcast_ip, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(got.subnet_mask, Ipv4Addr::new(255, 255, 255, 254));
        assert_eq!(got.total_ip, 2);
    }

    #[test]
    fn test_mid_range() {
        let got = info("172.16.5.200/20");
        assert_eq!(got.network_address, Ipv4Addr::new(172, 16, 0, 0));
        assert_eq!(got.broadcast_ip, Ipv4Addr::new(172, 16, 15, 255));
        assert_eq!(got.subnet_mask, Ipv4Addr::new(255, 255, 240, 0));
        assert_eq!(got.total_ip, 4096);
    }

    #[test]
    fn test_common_sizes() {
        let cases = [
            ("10.0.0.0/8", "10.0.0.0", "10.255.255.255", "255.0.0.0", 16777216u64),
            ("192.168.0.0/16", "192.168.0.0", "192.168.255.255", "255.255.0.0", 65536),
            ("192.168.1.0/24", "192.168.1.0", "192.168.1.255", "255.255.255.0", 256),
            ("10.0.0.64/26", "10.0.0.64", "10.0.0.127", "255.255.255.192", 64),
            ("192.168.1.8/30", "192.168.1.8", "192.168.1.11", "255.255.255.252", 4),
        ];
        for (cidr, network, broadcast, mask, total) in cases {
            let got = info(cidr);
            assert_eq!(got.network_address.to_string(), network, "{}", cidr);
            assert_eq!(got.broadcast_ip.to_string(), broadcast, "{}", cidr);
            assert_eq!(got.subnet_mask.to_string(), mask, "{}", cidr);
            assert_eq!(got.total_ip, total, "{}", cidr);
        }
    }

    #[test]
    fn test_any_address_in_subnet() {
        // all of these live in 172.16.1.0/24
        let expected = info("172.16.1.0/24");
        for cidr in [
            "172.16.1.1/24",
            "172.16.1.128/24",
            "172.16.1.254/24",
            "172.16.1.255/24",
        ] {
            assert_eq!(info(cidr), expected, "{}", cidr);
        }

        // and these in 10.64.0.0/20
        let expected = info("10.64.0.0/20");
        for cidr in ["10.64.0.1/20", "10.64.8.128/20", "10.64.15.255/20"] {
            assert_eq!(info(cidr), expected, "{}", cidr);
        }
    }

    #[test]
    fn test_count_matches_address_range() {
        for cidr in [
            "0.0.0.0/0",
            "16.0.0.0/4",
            "10.0.0.0/8",
            "172.16.0.0/12",
            "192.168.0.0/16",
            "192.168.1.0/25",
            "10.0.0.0/31",
        ] {
            let got = info(cidr);
            let span =
                u64::from(u32::from(got.broadcast_ip)) - u64::from(u32::from(got.network_address));
            assert_eq!(got.total_ip, span + 1, "{}", cidr);
        }
    }

    #[test]
    fn test_mask_shape() {
        for bits in 0..=31u8 {
            let prefix = Prefix {
                addr: IpAddr::V4(Ipv4Addr::new(10, 20, 30, 40)),
                bits,
            };
            let got = subnet_info(prefix).unwrap();
            let mask = u32::from(got.subnet_mask);
            assert_eq!(mask.leading_ones(), u32::from(bits), "/{}", bits);
            assert_eq!(mask.count_ones(), u32::from(bits), "/{}", bits);
        }
    }
}
