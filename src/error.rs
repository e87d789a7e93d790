//! Error types for the store and its shell.

use thiserror::Error;

/// Main error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty command")]
    EmptyCommand,

    #[error("Command is not valid UTF-8")]
    InvalidEncoding,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} takes {expected} argument(s), got {got}")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Line editor error: {0}")]
    Editor(String),
}

impl StoreError {
    /// Whether this error is a malformed-command rejection rather than a
    /// failure of the environment.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            StoreError::EmptyCommand
                | StoreError::InvalidEncoding
                | StoreError::UnknownCommand(_)
                | StoreError::Arity { .. }
        )
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Deserialization(e.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for StoreError {
    fn from(e: rustyline::error::ReadlineError) -> Self {
        match e {
            rustyline::error::ReadlineError::Io(io) => StoreError::Io(io),
            other => StoreError::Editor(other.to_string()),
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
