// cargo watch -x 'fmt' -x 'run -- 192.168.1.0/24'

//! IPv4 subnet calculator.
//!
//! Given a network prefix in CIDR notation, derive the network address,
//! broadcast address, subnet mask and total address count. The calculation
//! itself lives in [`calc::subnet_info`] and is a pure function; the rest of
//! the crate is the CLI front end around it.

pub mod calc;
pub mod cli;
pub mod models;
pub mod output;

pub use calc::{subnet_info, CalcError};
pub use models::{Prefix, SubnetInfo};
