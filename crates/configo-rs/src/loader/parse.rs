//! Line parser for the `key = value` config format.

use regex::Regex;
use std::sync::LazyLock;

/// Separator between key and value; only the first occurrence counts.
const SEPARATOR: char = '=';

/// Keys start with an alphanumeric and continue with alphanumerics, `.`, `_` or `-`.
static KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("key pattern is a valid regex")
});

/// Reason a single line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineError {
    /// No `=` on the line.
    MissingSeparator,
    /// Key is empty or fails the key pattern.
    InvalidKey,
}

/// Split a line into its key and value.
pub(crate) fn parse_line(line: &str) -> Result<(&str, &str), LineError> {
    let (raw_key, raw_value) = line
        .split_once(SEPARATOR)
        .ok_or(LineError::MissingSeparator)?;

    let key = strip_quotes(raw_key.trim());
    if !is_valid_key(key) {
        return Err(LineError::InvalidKey);
    }

    Ok((key, strip_quotes(raw_value.trim())))
}

/// Check a key against the key pattern.
pub(crate) fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && KEY_PATTERN.is_match(key)
}

/// Remove one pair of surrounding double quotes, if both are present.
fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_layer_of_quotes() {
        assert_eq!(strip_quotes("\"value\""), "value");
        assert_eq!(strip_quotes("\"\"value\"\""), "\"value\"");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("\"open"), "\"open");
        assert_eq!(strip_quotes("\"\""), "");
    }

    #[test]
    fn key_pattern() {
        for key in ["a", "A1", "0", "db.host", "max_conn", "feature-x.enabled"] {
            assert!(is_valid_key(key), "{key}");
        }
        for key in ["", ".hidden", "_x", "-x", "has space", "a=b", "key!", "ключ"] {
            assert!(!is_valid_key(key), "{key}");
        }
    }
}
