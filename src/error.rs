//! Error types for the Attrition Metrics Engine.
//!
//! The metrics computation itself is infallible: empty slices, missing
//! optional fields and unknown filter values are all valid data states.
//! Errors only arise while loading configuration or ingesting a roster.

use thiserror::Error;

/// The main error type for the Attrition Metrics Engine.
///
/// # Example
///
/// ```
/// use attrition_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
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

    /// Roster file was not found or could not be opened.
    #[error("Dataset not found: {path}")]
    DatasetNotFound {
        /// The path that could not be opened.
        path: String,
    },

    /// A roster row could not be decoded.
    #[error("Failed to parse dataset at line {line}: {message}")]
    DatasetParseError {
        /// The 1-based line of the offending row (0 when unknown).
        line: u64,
        /// A description of the parse error.
        message: String,
    },

    /// An employee record violated the roster contract.
    #[error("Invalid employee '{employee_id}' field '{field}': {message}")]
    InvalidEmployee {
        /// The employee id of the rejected row (may be empty).
        employee_id: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
