use std::io;

use thiserror::Error;

/// Library-wide error type for dapp operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required user input is missing or malformed. The tool is never launched.
    #[error("{0}")]
    Validation(String),

    /// The docker-app executable could not be found or started.
    #[error("Failed to launch '{executable}': {details}")]
    Launch { executable: String, details: String },

    /// The invocation was cancelled before it produced a result.
    #[error("Invocation cancelled")]
    Cancelled,

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Command identifier not present in the dispatch table.
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON serialization error.
    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Validation(_)
            | AppError::Configuration(_)
            | AppError::UnknownCommand(_)
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::Launch { .. } => io::ErrorKind::NotFound,
            AppError::Cancelled => io::ErrorKind::Interrupted,
            AppError::TomlSerialize(_) | AppError::Json(_) => io::ErrorKind::InvalidData,
        }
    }
}
