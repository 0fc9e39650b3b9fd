//! series — validated, immutable input for the forecasting pipeline.
//!
//! Purpose
//! -------
//! Provide the single data container every pipeline stage reads: a dated
//! scalar series with strictly increasing calendar dates and finite values.
//! Validation happens exactly once, at construction; after that, downstream
//! code can assume well-formed data and index alignment.
//!
//! Key behaviors
//! -------------
//! - Reject empty input, mismatched column lengths, non-finite values, and
//!   non-increasing (or duplicate) dates with structured [`SeriesError`]
//!   values rather than panics.
//! - Expose the values as an `ndarray` view so model code can slice and dot
//!   without copying.
//!
//! Invariants & assumptions
//! ------------------------
//! - `dates.len() == values.len() >= 1`.
//! - `dates` is strictly increasing; `values` contains only finite `f64`.
//! - The container is immutable once constructed; no stage mutates it.
//!
//! Conventions
//! -----------
//! - Index 0 is the oldest observation, the last index the newest.
//! - Calendar semantics stop at `NaiveDate`; no timezones, no intraday
//!   resolution.
//!
//! Downstream usage
//! ----------------
//! - The stationarity test and ARMA estimator consume `values()`; the
//!   pipeline uses `last_date()` to extend the calendar axis for forecast
//!   consumers.
//! - Implementations of [`SeriesSource`](crate::pipeline::SeriesSource)
//!   produce an `ObservedSeries` from whatever storage they wrap; parsing is
//!   their concern, validation is this module's.

pub mod errors;

pub use self::errors::{SeriesError, SeriesResult};

use chrono::NaiveDate;
use ndarray::{Array1, ArrayView1};

/// A dated scalar series: the pipeline's immutable input.
///
/// Construction via [`ObservedSeries::new`] enforces the invariants; fields
/// are private so the invariants cannot be broken afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedSeries {
    dates: Vec<NaiveDate>,
    values: Array1<f64>,
}

impl ObservedSeries {
    /// Construct a validated [`ObservedSeries`].
    ///
    /// # Checks
    /// 1. `dates` and `values` have equal, non-zero length.
    /// 2. Every value is finite.
    /// 3. Dates are strictly increasing (duplicates rejected).
    ///
    /// # Errors
    /// - [`SeriesError::EmptySeries`] for zero-length input.
    /// - [`SeriesError::LengthMismatch`] when the columns disagree.
    /// - [`SeriesError::NonFiniteValue`] with the first offending index/value.
    /// - [`SeriesError::NonIncreasingDate`] with the first offending pair.
    pub fn new(dates: Vec<NaiveDate>, values: Array1<f64>) -> SeriesResult<Self> {
        if dates.is_empty() && values.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        if dates.len() != values.len() {
            return Err(SeriesError::LengthMismatch { dates: dates.len(), values: values.len() });
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(SeriesError::NonFiniteValue { index, value });
            }
        }
        for (index, pair) in dates.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(SeriesError::NonIncreasingDate {
                    index: index + 1,
                    prev: pair[0],
                    curr: pair[1],
                });
            }
        }
        Ok(ObservedSeries { dates, values })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed series; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// View of the value column, oldest first.
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    /// The date column, oldest first.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// The newest observed value.
    pub fn last_value(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// The newest observation date.
    pub fn last_date(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }
}
