//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Prefix`] - an IP address with CIDR prefix length
//! - [`SubnetInfo`] - the calculated subnet properties

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{cidr_mask, Prefix, MAX_LENGTH, MAX_LENGTH_V6};
pub use subnet::SubnetInfo;
