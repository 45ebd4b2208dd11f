//! Error types for the clinic-bot application.

use thiserror::Error;

/// A shared error type for the entire clinic-bot application.
///
/// Provides typed error variants with automatic conversion from common
/// error types via the `From` trait.
#[derive(Error, Debug)]
pub enum ClinicError {
    /// Configuration error (missing secrets, unreadable config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Messaging transport error (Telegram Bot API)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Language-generation service error
    #[error("Generation error: {0}")]
    Generation(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl ClinicError {
    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }
}

impl From<std::io::Error> for ClinicError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ClinicError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ClinicError>`.
pub type Result<T> = std::result::Result<T, ClinicError>;
