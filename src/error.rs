//! Error types for the driver earnings estimator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop an estimate from being produced. The
//! calculation itself never fails; these errors come from form validation
//! and configuration loading.

use thiserror::Error;

/// The main error type for the earnings estimator.
///
/// The first group of variants are advisory: they describe a form the user
/// can correct and resubmit. Their display text is the message shown in
/// place of the result.
///
/// # Example
///
/// ```
/// use driver_earnings::error::EstimatorError;
///
/// let error = EstimatorError::MissingWeekendChoice;
/// assert_eq!(error.to_string(), "Please select weekend work option");
/// ```
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// Weekly hours were outside the allowed range or could not be parsed.
    #[error("Please select valid hours (20-90)")]
    InvalidHours {
        /// The raw value that was rejected.
        value: String,
    },

    /// The weekend yes/no choice was not made.
    #[error("Please select weekend work option")]
    MissingWeekendChoice,

    /// No car category was selected.
    #[error("Please select a car category")]
    MissingCarCategory,

    /// The car category value did not match any known category.
    #[error("Unknown car category: {value}")]
    UnknownCarCategory {
        /// The unrecognised value.
        value: String,
    },

    /// The time slot name did not match any known slot.
    #[error("Unknown time slot: {value}")]
    UnknownTimeSlot {
        /// The unrecognised value.
        value: String,
    },

    /// A `slot=multiplier` pair was missing its multiplier or the
    /// multiplier was not a number.
    #[error("Expected SLOT=MULTIPLIER with a numeric multiplier, got '{value}'")]
    InvalidTimeSelection {
        /// The raw pair that was rejected.
        value: String,
    },

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

    /// Configuration parsed but holds values the formula cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },
}

impl EstimatorError {
    /// Returns true for errors caused by the user's form input.
    pub fn is_advisory(&self) -> bool {
        matches!(
            self,
            EstimatorError::InvalidHours { .. }
                | EstimatorError::MissingWeekendChoice
                | EstimatorError::MissingCarCategory
                | EstimatorError::UnknownCarCategory { .. }
                | EstimatorError::UnknownTimeSlot { .. }
                | EstimatorError::InvalidTimeSelection { .. }
        )
    }
}

/// A type alias for Results that return EstimatorError.
pub type EstimatorResult<T> = Result<T, EstimatorError>;
