//! series::errors — validation failures for observed-series construction.
//!
//! Purpose
//! -------
//! Define the error enum and result alias for [`ObservedSeries`] validation.
//! All variants carry enough payload (index, offending value) to pinpoint the
//! bad input without re-scanning the data.
//!
//! Conventions
//! -----------
//! - Indices are 0-based.
//! - Errors implement `Display`/`Error` with messages phrased in terms of the
//!   domain constraint that was violated.
//!
//! [`ObservedSeries`]: crate::series::ObservedSeries
use chrono::NaiveDate;

/// Result alias for series construction and access.
pub type SeriesResult<T> = Result<T, SeriesError>;

/// Validation failures for an observed series.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// Series contains no observations.
    EmptySeries,

    /// Date and value columns have different lengths.
    LengthMismatch { dates: usize, values: usize },

    /// A value is NaN or ±∞.
    NonFiniteValue { index: usize, value: f64 },

    /// Dates are not strictly increasing (duplicates included).
    NonIncreasingDate { index: usize, prev: NaiveDate, curr: NaiveDate },
}

impl std::error::Error for SeriesError {}

impl std::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesError::EmptySeries => {
                write!(f, "Observed series is empty.")
            }
            SeriesError::LengthMismatch { dates, values } => {
                write!(f, "Date column has {dates} entries but value column has {values}.")
            }
            SeriesError::NonFiniteValue { index, value } => {
                write!(f, "Series value at index {index} is non-finite: {value}")
            }
            SeriesError::NonIncreasingDate { index, prev, curr } => {
                write!(
                    f,
                    "Dates must be strictly increasing; index {index} has {curr} after {prev}."
                )
            }
        }
    }
}
