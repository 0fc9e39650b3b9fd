//! statistical_tests — stationarity diagnostics and helpers.
//!
//! Purpose
//! -------
//! Collect statistical-test routines and their shared infrastructure for
//! time-series diagnostics. This subtree currently implements the
//! augmented Dickey–Fuller unit-root test together with common input
//! validation and error handling.
//!
//! Key behaviors
//! -------------
//! - Expose a unit-root test with automatic lag selection via
//!   [`AdfOutcome`] and its constructor [`AdfOutcome::adf`](adf::AdfOutcome::adf).
//! - Centralize test input guards in [`validate_input`], ensuring series
//!   length, finiteness, and degeneracy are checked once in a consistent
//!   way across test modules.
//! - Provide a dedicated error type [`AdfError`] and result alias
//!   [`AdfResult`] for statistical tests.
//!
//! Invariants & assumptions
//! ------------------------
//! - Time-series inputs for test routines are expected to be finite,
//!   real-valued observations; modules call [`validate_input`] before
//!   performing any lag-based computations.
//! - Statistical tests in this subtree report failures via [`AdfResult`]
//!   and never panic on user-facing invalid inputs; panics indicate
//!   programming errors (e.g., out-of-range indexing not caught by
//!   validation).
//! - [`AdfError`] variants are small and cloneable so they can be used
//!   comfortably in both unit tests and higher-level orchestration code.
//!
//! Conventions
//! -----------
//! - This subtree is focused on *statistical tests*; model-specific error
//!   types (ARMA, GARCH, optimization) live in their own `errors` modules
//!   under the relevant subtrees.
//! - Error messages are phrased in terms of domain constraints such as
//!   "need at least 20 observations" rather than low-level details.
//! - Public entry points for tests are thin wrappers that delegate shape
//!   checks to [`validate_input`] and propagate [`AdfError`] via
//!   [`AdfResult`].
//!
//! Downstream usage
//! ----------------
//! - Typical code imports the main surface as:
//!
//!   ```rust,ignore
//!   use duration_forecast::statistical_tests::{AdfOutcome, AdfResult};
//!
//!   let outcome: AdfOutcome = AdfOutcome::adf(series.values().as_slice().unwrap())?;
//!   ```
//!
//!   and only refers to `statistical_tests::errors` or
//!   `statistical_tests::validation` directly when matching on
//!   [`AdfError`] or reusing [`validate_input`].
//! - The forecasting pipeline calls [`AdfOutcome::adf`](adf::AdfOutcome::adf)
//!   on the observed series before model fitting and records the verdict
//!   in its outcome report.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` messages and payload
//!   embedding for [`AdfError`] variants.
//! - Unit tests in [`validation`] exercise all branches of
//!   [`validate_input`], including insufficient data, non-finite values,
//!   and constant series.
//! - Unit tests in [`adf`] cover the Schwert lag bound, the MacKinnon
//!   p-value mapping, the verdict boundary, and end-to-end behavior on
//!   synthetic stationary and unit-root series.

pub mod adf;
pub mod errors;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::adf::{ADF_SIGNIFICANCE, AdfOutcome, Verdict};
pub use self::errors::{AdfError, AdfResult};
pub use self::validation::validate_input;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use duration_forecast::statistical_tests::prelude::*;
//
// to import the main statistical-testing surface in a single line.

pub mod prelude {
    pub use super::adf::{AdfOutcome, Verdict};
    pub use super::errors::{AdfError, AdfResult};
}
