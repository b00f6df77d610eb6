//! Configuration file parsing utilities.
//!
//! `settings.conf` is a flat `key = value` file. These helpers handle comment
//! skipping, key normalization and loose boolean values.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Remove a trailing `#` or `//` comment from a value.
///
/// Inputs:
/// - `s`: Raw value text
///
/// Output:
/// - The value without comment, trimmed.
///
/// Details:
/// - A marker only starts a comment at the beginning of the value or after whitespace,
///   so URL fragments (`/#top`) and paths such as `https://host//api` survive.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    let end = s
        .char_indices()
        .find(|&(i, c)| {
            let starts_marker = c == '#' || s[i..].starts_with("//");
            starts_marker && s[..i].chars().next_back().is_none_or(char::is_whitespace)
        })
        .map_or(s.len(), |(i, _)| i);
    s[..end].trim()
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Keys are lower-cased with `.`, `-` and spaces mapped to `_`
/// - Inline comments are stripped from the value
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_value) = line.trim().split_once('=')?;
    let key = raw_key
        .trim()
        .to_lowercase()
        .replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_value).to_string()))
}

/// Whether `value` spells an enabled flag (`true`, `1`, `yes`, `on`).
#[must_use]
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Whether `value` spells a disabled flag (`false`, `0`, `no`, `off`).
#[must_use]
pub fn is_falsy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
