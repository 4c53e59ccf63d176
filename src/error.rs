//! Error types for the earnings ticker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the error conditions that can occur while parsing salary input and
//! loading configuration. The accrual calculation itself cannot fail.

use thiserror::Error;

/// The main error type for the earnings ticker.
///
/// # Example
///
/// ```
/// use earnings_ticker::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/ticker.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/ticker.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot run with.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field, dotted from the document root.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Salary input was missing, non-numeric or not strictly positive.
    #[error("Invalid salary parameter '{field}': {message}")]
    InvalidParameters {
        /// The parameter that was invalid.
        field: String,
        /// A description of what made the parameter invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
