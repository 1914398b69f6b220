//! Whitespace normalization for recognized text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of two or more whitespace characters.
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s\s+").expect("Invalid whitespace run regex"));

/// Collapses newlines and whitespace runs in recognized text.
///
/// Every literal newline becomes a single space, any remaining run of two
/// or more whitespace characters collapses to one space, and the result is
/// trimmed. Applied to every piece of text taken from recognized content or
/// table cells before it is stored in an output record.
pub fn normalize(text: &str) -> String {
    let unfolded = text.replace('\n', " ");
    WHITESPACE_RUN.replace_all(&unfolded, " ").trim().to_string()
}
