//! forecast::errors — error types for forecast assembly, simulation,
//! and confidence bands.
//!
//! Purpose
//! -------
//! Provide the error enum shared by the forecast engine, the Monte
//! Carlo path simulator, and the confidence-band builder.
//!
//! Key behaviors
//! -------------
//! - Wrap model-layer failures ([`ArmaError`], [`GarchError`]) via
//!   `From`, so the engine propagates the first error it meets.
//! - Carry parameter-validation failures (horizon, path count,
//!   confidence level) with their offending values.
//!
//! Downstream usage
//! ----------------
//! - The pipeline wraps [`ForecastError`] into its own error type via
//!   `From` so a single error surface reaches the caller.
use crate::arma::errors::ArmaError;
use crate::garch::errors::GarchError;

/// ForecastError — failure modes of the forecast layer.
///
/// Variants
/// --------
/// - `InvalidHorizon(horizon)`
///   A zero-step forecast was requested; there is no default horizon.
/// - `SeriesLengthMismatch { series, residuals }`
///   The observed series and the mean model's residual sequence are not
///   index-aligned.
/// - `LengthMismatch { mean, std }`
///   The mean and volatility paths differ in length.
/// - `NonFiniteValue { index, value }`
///   A forecast element is NaN or ±∞.
/// - `NegativeStd { index, value }`
///   A per-step standard deviation is negative.
/// - `InvalidPathCount(count)`
///   A simulation with zero paths was requested.
/// - `InvalidConfidenceLevel(level)`
///   The confidence level is outside the open interval (0, 1).
/// - `Arma(ArmaError)` / `Garch(GarchError)`
///   Model-layer failures, forwarded unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    //------ Parameter validation errors ------
    InvalidHorizon(usize),
    InvalidPathCount(usize),
    InvalidConfidenceLevel(f64),
    //------ Forecast consistency errors ------
    SeriesLengthMismatch { series: usize, residuals: usize },
    LengthMismatch { mean: usize, std: usize },
    NonFiniteValue { index: usize, value: f64 },
    NegativeStd { index: usize, value: f64 },
    //------ Forwarded model errors ------
    Arma(ArmaError),
    Garch(GarchError),
}

impl std::error::Error for ForecastError {}

impl std::fmt::Display for ForecastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastError::InvalidHorizon(horizon) => {
                write!(f, "Invalid forecast horizon {horizon}: must be at least one step.")
            }
            ForecastError::InvalidPathCount(count) => {
                write!(f, "Invalid path count {count}: must simulate at least one path.")
            }
            ForecastError::InvalidConfidenceLevel(level) => {
                write!(
                    f,
                    "Invalid confidence level {level}: must lie strictly between zero and one."
                )
            }
            ForecastError::SeriesLengthMismatch { series, residuals } => {
                write!(
                    f,
                    "Series length {series} does not match the residual sequence length {residuals}."
                )
            }
            ForecastError::LengthMismatch { mean, std } => {
                write!(
                    f,
                    "Mean path length {mean} does not match volatility path length {std}."
                )
            }
            ForecastError::NonFiniteValue { index, value } => {
                write!(f, "Non-finite forecast value {value} at step {index}.")
            }
            ForecastError::NegativeStd { index, value } => {
                write!(f, "Negative standard deviation {value} at step {index}.")
            }
            ForecastError::Arma(err) => write!(f, "Mean model error: {err}"),
            ForecastError::Garch(err) => write!(f, "Variance model error: {err}"),
        }
    }
}

impl From<ArmaError> for ForecastError {
    fn from(err: ArmaError) -> Self {
        ForecastError::Arma(err)
    }
}

impl From<GarchError> for ForecastError {
    fn from(err: GarchError) -> Self {
        ForecastError::Garch(err)
    }
}
