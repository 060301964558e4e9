//! JSON serialization for comparison results.

use crate::result::ComparisonResult;

/// Serialize a result to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (non-finite samples serialize as `null`,
/// so this should not happen in practice).
pub fn to_json(result: &ComparisonResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a result to a pretty-printed JSON string.
///
/// # Errors
///
/// See [`to_json`].
pub fn to_json_pretty(result: &ComparisonResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Parse a result previously produced by [`to_json`] or [`to_json_pretty`].
///
/// # Errors
///
/// Returns an error if `json` does not have the result shape.
pub fn from_json(json: &str) -> Result<ComparisonResult, serde_json::Error> {
    serde_json::from_str(json)
}
