//! Configuration error taxonomy.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors surfaced by configuration loading, reconstruction, and validation.
///
/// Nothing here is retried or silently recovered: a configuration error
/// indicates an authoring mistake that must be corrected at the source.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("unsupported config format {extension:?} for {path} (use .yaml, .yml, or .json)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("failed to parse {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("type mismatch for {field}: {message}")]
    TypeMismatch { field: String, message: String },

    #[error("invalid value for {field}: {message}")]
    InvalidField { field: String, message: String },

    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration validation failed:\n{}", join_indented(.messages))]
    ValidationFailed { messages: Vec<String> },
}

fn join_indented(messages: &[String]) -> String {
    messages
        .iter()
        .map(|m| format!("  - {m}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl ConfigError {
    /// Stable error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ConfigError::FileNotFound { .. } => 10,
            ConfigError::UnsupportedFormat { .. } => 11,
            ConfigError::ParseError { .. } => 12,
            ConfigError::MissingField(_) => 13,
            ConfigError::UnknownField(_) => 14,
            ConfigError::TypeMismatch { .. } => 15,
            ConfigError::InvalidField { .. } => 16,
            ConfigError::Io { .. } => 17,
            ConfigError::ValidationFailed { .. } => 18,
        }
    }
}
