//! Error types for the testpulse library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using testpulse's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while profiling a test suite.
///
/// Classification itself is total: a file that matches nothing is
/// `TestCategory::Unknown`, never an error. Only caller contract
/// violations and configuration problems surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file not found.
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Caller supplied input that violates the API contract, such as
    /// non-UTF-8 file content.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl Error {
    /// Create a new config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
