//! Terminal output for the subnet report.

use crate::models::SubnetInfo;
use colored::Colorize;

/// Column where the values start, wide enough for the longest label.
const LABEL_WIDTH: usize = 20;

/// Pad a label so the value column lines up.
///
/// Padding is applied to the label rather than the value because the value
/// may carry ANSI style codes, which would throw off width formatting.
pub fn format_label(label: &str) -> String {
    format!("{label:<LABEL_WIDTH$}")
}

/// Print the four-line subnet report with bold values.
pub fn print_report(info: &SubnetInfo) {
    println!("{}{}", format_label("Network Address:"), info.network_address.to_string().bold());
    println!("{}{}", format_label("Broadcast Address:"), info.broadcast_ip.to_string().bold());
    println!("{}{}", format_label("Subnet Mask:"), info.subnet_mask.to_string().bold());
    println!("{}{}", format_label("Total IPs:"), info.total_ip.to_string().bold());
}
