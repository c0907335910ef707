//! DOT format utilities.

/// Escape double quotes for embedding a value in a quoted DOT attribute.
///
/// Only `"` is transformed; newlines and other control characters pass
/// through untouched and remain the caller's responsibility.
pub fn escape_quotes(input: &str) -> String {
    input.replace('"', "\\\"")
}
