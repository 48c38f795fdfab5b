//! Error types for config loading and lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned while building a store or reading values from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base config file could not be opened.
    #[error("missing mandatory config file {}: {source}", .path.display())]
    MissingMandatoryFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening or reading a config file failed for a reason other than a
    /// tolerated missing file.
    #[error("failed to read config {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A line has no `=` separator.
    #[error("invalid config entry at {}:{line}: {content:?}", .path.display())]
    InvalidEntry {
        path: PathBuf,
        line: usize,
        content: String,
    },
    /// A key is empty or does not match the key pattern.
    #[error("invalid key at {}:{line}: {content:?}", .path.display())]
    InvalidKey {
        path: PathBuf,
        line: usize,
        content: String,
    },
    /// The requested key is not present.
    #[error("config entry with key '{key}' does not exist")]
    MissingKey { key: String },
    /// The value exists but does not parse as the requested type.
    #[error("config value '{value}' for key '{key}' is not {expected}")]
    TypeMismatch {
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl ConfigError {
    /// True for per-key lookup failures, false for construction failures.
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            ConfigError::MissingKey { .. } | ConfigError::TypeMismatch { .. }
        )
    }
}
