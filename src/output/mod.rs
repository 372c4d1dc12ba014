//! Output formatting for subnet results.
//!
//! This module handles rendering a [`crate::models::SubnetInfo`]:
//! - [`terminal`] - aligned labels with bold values
//! - [`json`] - machine-readable JSON

mod json;
mod terminal;

pub use json::to_json;
pub use terminal::{format_label, print_report};
