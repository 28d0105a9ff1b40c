//! Line-oriented `key=value` property file parser.
//!
//! Parses the property files written by the SDK project tools into an
//! ordered map. Empty lines and lines starting with `#` are skipped; every
//! other line, including one holding only whitespace, must be a
//! `key=value` pair or the whole parse fails.

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex_lite::Regex;

/// Ordered property map, in first-appearance order.
pub type PropertyMap = IndexMap<String, String>;

/// Errors that can occur when parsing a property file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: \"{content}\" is not a valid property")]
    InvalidLine { line: usize, content: String },
}

fn property_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([a-zA-Z0-9._-]+)\s*=\s*(.*)$").expect("property pattern is valid")
    })
}

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9._-]+$").expect("key pattern is valid"))
}

/// Parse property file contents.
///
/// A key that appears more than once keeps its first position and takes
/// its last value.
pub fn parse_str(contents: &str) -> Result<PropertyMap, ParseError> {
    let pattern = property_pattern();
    let mut map = PropertyMap::new();

    for (index, line) in contents.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let caps = pattern.captures(line).ok_or_else(|| ParseError::InvalidLine {
            line: index + 1,
            content: line.to_string(),
        })?;

        map.insert(caps[1].to_string(), caps[2].to_string());
    }

    Ok(map)
}

/// Whether `key` can be written as a property name and read back.
pub fn is_valid_key(key: &str) -> bool {
    key_pattern().is_match(key)
}
