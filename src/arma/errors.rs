//! arma::errors — error types for ARMA(1,1) estimation and forecasting.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the ARMA parameter
//! types, the maximum-likelihood fitting routine, and the mean forecast.
//!
//! Key behaviors
//! -------------
//! - Define [`ArmaResult`] and [`ArmaError`] as the canonical result and
//!   error types for the mean-process model.
//! - Wrap optimizer failures ([`OptError`]) via `From`, so `?` works
//!   across the fit path without manual conversion.
//!
//! Invariants & assumptions
//! ------------------------
//! - The error dependency points one way: model errors wrap optimizer
//!   errors, never the reverse.
//! - Variants carry scalar payloads only (counts, values, status
//!   strings); no data arrays are captured.
//!
//! Downstream usage
//! ----------------
//! - The pipeline wraps [`ArmaError`] into its own error type via `From`
//!   so a single error surface reaches the caller.
use crate::optimization::errors::OptError;

pub type ArmaResult<T> = Result<T, ArmaError>;

/// ArmaError — failure modes of the ARMA(1,1) mean-process model.
///
/// Variants
/// --------
/// - `InsufficientData { n, min }`
///   The series is too short to identify the three model parameters.
/// - `InvalidData { index, value }`
///   A series element is non-finite (NaN or ±∞).
/// - `InvalidCoefficient { name, value, reason }`
///   A directly constructed parameter set violates stationarity or
///   invertibility (|phi| < 1, |theta| < 1 required).
/// - `InvalidHorizon(horizon)`
///   A forecast was requested for a zero-length horizon.
/// - `ModelNotFitted`
///   A forecast or accessor was used before a successful `fit`.
/// - `FitDivergence { status }`
///   The solver stopped without reporting a terminating status; the
///   payload carries the optimizer's status string.
/// - `Optimization(OptError)`
///   Any other optimizer-layer failure, forwarded unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum ArmaError {
    //------ Input validation errors ------
    InsufficientData { n: usize, min: usize },
    InvalidData { index: usize, value: f64 },
    InvalidCoefficient { name: &'static str, value: f64, reason: &'static str },
    InvalidHorizon(usize),
    //------ Fitting and forecasting errors ------
    ModelNotFitted,
    FitDivergence { status: String },
    Optimization(OptError),
}

impl std::error::Error for ArmaError {}

impl std::fmt::Display for ArmaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArmaError::InsufficientData { n, min } => {
                write!(f, "Insufficient data: got {n} observations, need at least {min}.")
            }
            ArmaError::InvalidData { index, value } => {
                write!(f, "Invalid data value {value} at index {index}. Must be a finite number.")
            }
            ArmaError::InvalidCoefficient { name, value, reason } => {
                write!(f, "Invalid ARMA coefficient {name} = {value}: {reason}")
            }
            ArmaError::InvalidHorizon(horizon) => {
                write!(f, "Invalid forecast horizon {horizon}: must be at least one step.")
            }
            ArmaError::ModelNotFitted => {
                write!(f, "Model has not been fitted yet. Call `fit` before forecasting.")
            }
            ArmaError::FitDivergence { status } => {
                write!(f, "ARMA fit did not converge: {status}")
            }
            ArmaError::Optimization(err) => write!(f, "Optimization error: {err}"),
        }
    }
}

impl From<OptError> for ArmaError {
    fn from(err: OptError) -> Self {
        ArmaError::Optimization(err)
    }
}
