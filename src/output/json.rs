//! JSON output for the subnet report.

use crate::models::SubnetInfo;
use std::error::Error;

/// Render the subnet info as pretty-printed JSON.
pub fn to_json(info: &SubnetInfo) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(info)?)
}
