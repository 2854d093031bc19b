//! Error types for the address book application layer.
//!
//! Domain validation failures live in [`crate::domain::ValidationError`];
//! this module covers everything around the domain, using `thiserror`.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while running the demonstration scenario.
#[derive(Error, Debug)]
pub enum DemoError {
    /// A phone number was rejected
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A contact the scenario relies on is not in the book
    #[error("Contact not found: {0}")]
    MissingContact(String),

    /// Writing the report failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with DemoError
pub type DemoResult<T> = Result<T, DemoError>;
