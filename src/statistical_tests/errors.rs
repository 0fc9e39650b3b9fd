//! statistical_tests::errors — shared error types for stationarity testing.
//!
//! Purpose
//! -------
//! Provide error enums and result aliases for statistical test routines.
//! This keeps test-specific validation and runtime failures localized
//! while exposing a clean error surface to the rest of the crate.
//!
//! Key behaviors
//! -------------
//! - Define [`AdfResult`] and [`AdfError`] as the canonical result and
//!   error types for the augmented Dickey–Fuller test and its validation
//!   helpers.
//! - Attach human-readable `Display` messages to each error variant so
//!   that diagnostics and logs are meaningful without additional context.
//!
//! Invariants & assumptions
//! ------------------------
//! - Statistical test modules which use this error type are expected to
//!   validate their inputs (lengths, finiteness, degeneracy) and return
//!   [`AdfResult<T>`] instead of panicking.
//! - `AdfError` values are assumed to be small, cheap to clone, and
//!   suitable for use in both unit tests and higher-level orchestration
//!   code.
//!
//! Conventions
//! -----------
//! - This module is focused on statistical-test errors; model-specific
//!   error types (ARMA, GARCH, optimization) live in their own `errors`
//!   modules under the relevant subtrees.
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "need at least 20 observations") rather than low-level details.
//!
//! Downstream usage
//! ----------------
//! - The ADF test module and its input validation helpers return
//!   [`AdfResult<T>`] to propagate failures cleanly to callers.
//! - The pipeline wraps [`AdfError`] into its own error type via `From`
//!   so a single error surface reaches the caller.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module verify that each [`AdfError`] variant's
//!   `Display` message embeds its payload (e.g., offending value or lag
//!   index).
//! - Integration tests in the statistical-test modules exercise these
//!   errors indirectly via input validation and test execution.

pub type AdfResult<T> = Result<T, AdfError>;

/// AdfError — error conditions for the augmented Dickey–Fuller test.
///
/// Variants
/// --------
/// - `InsufficientData { n, min }`
///   The input series does not contain enough observations to run the
///   lag-augmented regression with a meaningful sample.
/// - `InvalidData(value: f64)`
///   A data element is non-finite (NaN or ±∞) and cannot be used in the
///   regression.
/// - `DegenerateSeries`
///   The series is constant (or its first differences are all zero), so
///   the unit-root regression is undefined.
/// - `SingularDesign(lag: usize)`
///   The OLS normal equations at the given lag order could not be
///   solved (collinear regressors).
/// - `ZeroResidualVariance(lag: usize)`
///   The regression at the given lag order fit the differences exactly,
///   leaving no residual variance to scale the test statistic.
///
/// Invariants
/// ----------
/// - Each variant carries just enough information (offending value or
///   lag index) to allow downstream logging and debugging without
///   leaking large data structures.
#[derive(Debug, Clone, PartialEq)]
pub enum AdfError {
    //------ Input validation errors ------
    InsufficientData { n: usize, min: usize },
    InvalidData(f64),
    DegenerateSeries,
    //------ Regression errors ------
    SingularDesign(usize),
    ZeroResidualVariance(usize),
}

impl std::error::Error for AdfError {}

impl std::fmt::Display for AdfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdfError::InsufficientData { n, min } => {
                write!(f, "Insufficient data: got {n} observations, need at least {min}.")
            }
            AdfError::InvalidData(value) => {
                write!(f, "Invalid data value: {value}. Must be a finite number.")
            }
            AdfError::DegenerateSeries => {
                write!(f, "Degenerate series: all observations are identical.")
            }
            AdfError::SingularDesign(lag) => {
                write!(f, "Singular regression design at lag {lag}.")
            }
            AdfError::ZeroResidualVariance(lag) => {
                write!(f, "Zero residual variance in regression at lag {lag}.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic `Display` formatting for AdfError variants.
    // - Embedding of payload values (n, min, lag) into error messages.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `AdfError::InsufficientData` includes both the actual
    // and required counts in its `Display` representation.
    //
    // Given
    // -----
    // - An `AdfError::InsufficientData` with n = 7, min = 20.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "7" and "20".
    fn adf_error_insufficient_data_includes_counts_in_display() {
        // Arrange
        let err = AdfError::InsufficientData { n: 7, min: 20 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains('7') && msg.contains("20"),
            "Display message should include both counts.\nGot: {msg}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that `AdfError::SingularDesign` reports the lag index in its
    // `Display` representation.
    //
    // Given
    // -----
    // - An `AdfError::SingularDesign` with lag = 3.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "3".
    fn adf_error_singular_design_includes_lag_in_display() {
        // Arrange
        let err = AdfError::SingularDesign(3);

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('3'), "Display message should include offending lag.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `AdfError::DegenerateSeries` formats to a non-empty,
    // human-readable message.
    //
    // Given
    // -----
    // - An `AdfError::DegenerateSeries` value.
    //
    // Expect
    // ------
    // - `format!("{err}")` is non-empty.
    fn adf_error_degenerate_series_has_nonempty_display_message() {
        // Arrange
        let err = AdfError::DegenerateSeries;

        // Act
        let msg = err.to_string();

        // Assert
        assert!(!msg.trim().is_empty(), "Display message should not be empty.");
    }
}
