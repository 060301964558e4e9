//! Output formatting for comparison results.
//!
//! - Terminal: Human-readable summary table with colors
//! - JSON: Machine-readable serialization

mod json;
mod terminal;

pub use json::{from_json, to_json, to_json_pretty};
pub use terminal::format_summary;
