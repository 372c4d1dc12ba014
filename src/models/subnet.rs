//! Calculated subnet data model.

use serde::Serialize;
use std::net::Ipv4Addr;

/// Calculated information about an IPv4 subnet.
///
/// Holds the four values derived from a prefix: the network address (host
/// bits cleared), the broadcast address (host bits set), the subnet mask,
/// and the total address count. `total_ip` is 64-bit so that the /0 value
/// of 2^32 is representable exactly.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubnetInfo {
    /// Address of the subnet with all host bits cleared.
    pub network_address: Ipv4Addr,
    /// Address of the subnet with all host bits set.
    pub broadcast_ip: Ipv4Addr,
    /// Subnet mask as a dotted-quad address.
    pub subnet_mask: Ipv4Addr,
    /// Total number of addresses in the subnet (1 to 2^32).
    pub total_ip: u64,
}

impl std::fmt::Display for SubnetInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "network={} broadcast={} mask={} total={}",
            self.network_address, self.broadcast_ip, self.subnet_mask, self.total_ip
        )
    }
}
