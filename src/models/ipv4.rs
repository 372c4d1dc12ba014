//! Network prefix and CIDR mask arithmetic.
//!
//! Provides the [`Prefix`] input type (IP address plus prefix length) and the
//! subnet mask conversion used by the calculator.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::IpAddr;
use std::str::FromStr;

/// Maximum prefix length for an IPv4 address (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Maximum prefix length for an IPv6 address (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use snc::models::cidr_mask;
/// assert_eq!(cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        // Shift right then left in u64 so that len == 0 stays in range.
        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// An IP address paired with a prefix length, as written in CIDR notation.
///
/// The address is kept family-agnostic so that an IPv6 input can be carried
/// to the calculator and rejected there with a proper error.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Prefix {
    /// The IP address.
    pub addr: IpAddr,
    /// The prefix length (0-32 for IPv4, 0-128 for IPv6).
    pub bits: u8,
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.bits);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(de::Error::custom(format!("invalid CIDR format: {}", s)));
        }

        let addr = IpAddr::from_str(parts[0])
            .map_err(|_| de::Error::custom(format!("invalid IP address: {}", parts[0])))?;
        let bits = u8::from_str(parts[1])
            .map_err(|_| de::Error::custom(format!("invalid prefix length: {}", parts[1])))?;

        let prefix = Prefix { addr, bits };
        if !prefix.is_valid() {
            return Err(de::Error::custom(format!(
                "prefix length out of range: {}",
                s
            )));
        }
        Ok(prefix)
    }
}

impl Prefix {
    /// Create a new [`Prefix`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Prefix, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err("Invalid address/mask".into());
        }
        let addr: IpAddr = parts[0]
            .parse()
            .map_err(|_| format!("Invalid address {}", parts[0]))?;
        let bits: u8 = parts[1].parse()?;
        let prefix = Prefix { addr, bits };
        if !prefix.is_valid() {
            return Err("Network length is too long".into());
        }
        Ok(prefix)
    }

    /// Maximum prefix length for this address family.
    pub fn max_bits(&self) -> u8 {
        match self.addr {
            IpAddr::V4(_) => MAX_LENGTH,
            IpAddr::V6(_) => MAX_LENGTH_V6,
        }
    }

    /// Whether the prefix length fits the address family.
    pub fn is_valid(&self) -> bool {
        self.bits <= self.max_bits()
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.bits)
    }
}
