//! Property store errors

use std::path::PathBuf;

use super::kind::PropertyType;

/// Errors surfaced by the property store.
///
/// Absence (missing folder or file) is never an error: `load` and
/// `merge` report it as `None` or a no-op.
#[derive(Debug, thiserror::Error)]
pub enum PropertiesError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: propfile::ParseError,
    },

    #[error("Expected a {expected} property file, got {found}")]
    WrongKind {
        expected: PropertyType,
        found: PropertyType,
    },

    #[error("'{0}' is not a valid property name")]
    InvalidKey(String),

    #[error("Value of '{key}' cannot contain line breaks")]
    InvalidValue { key: String },

    #[error("Unknown property file kind: '{0}' (expected build, default or local)")]
    UnknownKind(String),
}
