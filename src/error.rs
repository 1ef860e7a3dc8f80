//! Error types for the maternity calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a calculation.

use thiserror::Error;

/// The main error type for the maternity calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use maternity_engine::error::EngineError;
///
/// let error = EngineError::UnknownCity {
///     city: "999999".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown city: 999999");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The city identifier has no registered policy.
    #[error("Unknown city: {city}")]
    UnknownCity {
        /// The city code or name that was looked up.
        city: String,
    },

    /// A policy record contained malformed data. This indicates a
    /// configuration bug, not a caller error.
    #[error("Invalid policy for city '{city}': {message}")]
    InvalidPolicy {
        /// The city the policy belongs to.
        city: String,
        /// A description of what made the policy invalid.
        message: String,
    },

    /// The leave start date was unparseable or nonsensical.
    #[error("Invalid leave start date '{value}': {message}")]
    InvalidDate {
        /// The raw date value supplied by the caller.
        value: String,
        /// A description of the parse or range failure.
        message: String,
    },

    /// A salary figure was negative or missing where the leave period
    /// requires it.
    #[error("Invalid salary field '{field}': {message}")]
    InvalidSalary {
        /// The salary field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    Calculation {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
