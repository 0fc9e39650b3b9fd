//! garch::errors — error types for GARCH(1,1) estimation and forecasting.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the GARCH parameter
//! types, the maximum-likelihood fitting routine, and the volatility
//! forecast.
//!
//! Key behaviors
//! -------------
//! - Define [`GarchResult`] and [`GarchError`] as the canonical result
//!   and error types for the variance model.
//! - Wrap optimizer failures ([`OptError`]) via `From`.
//! - `NonStationaryVariance` surfaces a fitted persistence `α + β ≥ 1`
//!   instead of silently clamping it; callers decide how to react.
//!
//! Invariants & assumptions
//! ------------------------
//! - The error dependency points one way: model errors wrap optimizer
//!   errors, never the reverse.
//!
//! Downstream usage
//! ----------------
//! - The pipeline wraps [`GarchError`] into its own error type via
//!   `From` so a single error surface reaches the caller.
use crate::optimization::errors::OptError;

pub type GarchResult<T> = Result<T, GarchError>;

/// GarchError — failure modes of the GARCH(1,1) variance model.
///
/// Variants
/// --------
/// - `InsufficientData { n, min }`
///   The residual series is too short to identify the three parameters.
/// - `InvalidData { index, value }`
///   A residual element is non-finite (NaN or ±∞).
/// - `ZeroVariance`
///   The residual series has no sample variance, so the variance
///   recursion cannot be seeded.
/// - `InvalidCoefficient { name, value, reason }`
///   A coefficient violates positivity (`omega > 0`, `alpha >= 0`,
///   `beta >= 0`).
/// - `NonStationaryVariance { coeff_sum }`
///   The fitted persistence `α + β` is at or above one, so the variance
///   process has no finite long-run level.
/// - `InvalidHorizon(horizon)`
///   A forecast was requested for a zero-length horizon.
/// - `ModelNotFitted`
///   A forecast or accessor was used before a successful `fit`.
/// - `FitDivergence { status }`
///   The solver stopped without reporting a terminating status.
/// - `Optimization(OptError)`
///   Any other optimizer-layer failure, forwarded unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum GarchError {
    //------ Input validation errors ------
    InsufficientData { n: usize, min: usize },
    InvalidData { index: usize, value: f64 },
    ZeroVariance,
    InvalidCoefficient { name: &'static str, value: f64, reason: &'static str },
    InvalidHorizon(usize),
    //------ Fitting and forecasting errors ------
    NonStationaryVariance { coeff_sum: f64 },
    ModelNotFitted,
    FitDivergence { status: String },
    Optimization(OptError),
}

impl std::error::Error for GarchError {}

impl std::fmt::Display for GarchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GarchError::InsufficientData { n, min } => {
                write!(f, "Insufficient data: got {n} residuals, need at least {min}.")
            }
            GarchError::InvalidData { index, value } => {
                write!(
                    f,
                    "Invalid residual value {value} at index {index}. Must be a finite number."
                )
            }
            GarchError::ZeroVariance => {
                write!(f, "Residual series has zero sample variance.")
            }
            GarchError::InvalidCoefficient { name, value, reason } => {
                write!(f, "Invalid GARCH coefficient {name} = {value}: {reason}")
            }
            GarchError::InvalidHorizon(horizon) => {
                write!(f, "Invalid forecast horizon {horizon}: must be at least one step.")
            }
            GarchError::NonStationaryVariance { coeff_sum } => {
                write!(
                    f,
                    "Non-stationary variance process: alpha + beta = {coeff_sum} is not below one."
                )
            }
            GarchError::ModelNotFitted => {
                write!(f, "Model has not been fitted yet. Call `fit` before forecasting.")
            }
            GarchError::FitDivergence { status } => {
                write!(f, "GARCH fit did not converge: {status}")
            }
            GarchError::Optimization(err) => write!(f, "Optimization error: {err}"),
        }
    }
}

impl From<OptError> for GarchError {
    fn from(err: OptError) -> Self {
        GarchError::Optimization(err)
    }
}
