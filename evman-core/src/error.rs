//! Error types for the evman ecosystem.

use thiserror::Error;

use crate::validate::FieldError;

/// Errors that can occur in evman operations.
#[derive(Error, Debug)]
pub enum EvmanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for evman operations.
pub type EvmanResult<T> = Result<T, EvmanError>;
