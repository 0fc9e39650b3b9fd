//! forecast::engine — combine mean and volatility forecasts at one
//! horizon.
//!
//! Purpose
//! -------
//! Join the fitted mean process and the fitted variance process into a
//! single [`ForecastResult`]: a mean path and a per-step standard
//! deviation path of equal length. The first model error encountered
//! aborts assembly; there is no default horizon at this layer.
use crate::arma::model::ArmaFit;
use crate::forecast::errors::ForecastError;
use crate::garch::model::GarchFit;
use crate::series::ObservedSeries;
use ndarray::Array1;

/// Point forecast with per-step uncertainty.
///
/// Fields
/// ------
/// - `horizon`: number of steps, equal to both path lengths.
/// - `mean`: conditional mean path from the ARMA model.
/// - `std`: per-step standard deviations from the GARCH model, all
///   non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    pub horizon: usize,
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
}

impl ForecastResult {
    /// Construct a validated forecast from a mean path and a volatility
    /// path.
    ///
    /// # Errors
    /// - [`ForecastError::InvalidHorizon`] on empty paths.
    /// - [`ForecastError::LengthMismatch`] if the paths differ in length.
    /// - [`ForecastError::NonFiniteValue`] on NaN or infinite elements.
    /// - [`ForecastError::NegativeStd`] on a negative standard deviation.
    pub fn new(mean: Array1<f64>, std: Array1<f64>) -> Result<Self, ForecastError> {
        if mean.is_empty() {
            return Err(ForecastError::InvalidHorizon(0));
        }
        if mean.len() != std.len() {
            return Err(ForecastError::LengthMismatch { mean: mean.len(), std: std.len() });
        }
        for (index, &value) in mean.iter().chain(std.iter()).enumerate() {
            if !value.is_finite() {
                return Err(ForecastError::NonFiniteValue { index: index % mean.len(), value });
            }
        }
        for (index, &value) in std.iter().enumerate() {
            if value < 0.0 {
                return Err(ForecastError::NegativeStd { index, value });
            }
        }
        let horizon = mean.len();
        Ok(Self { horizon, mean, std })
    }
}

/// Build a combined forecast from both fitted models at `horizon` steps.
///
/// The mean model forecasts from the last observation and the last
/// residual; the variance model forecasts from the last residual and
/// the last conditional variance. Both paths must come from the same
/// fitted sample, which is checked through the series/residual
/// alignment.
///
/// # Errors
/// - [`ForecastError::InvalidHorizon`] if `horizon == 0`.
/// - [`ForecastError::SeriesLengthMismatch`] if `series` is not
///   index-aligned with the mean model's residuals.
/// - Forwarded [`ForecastError::Arma`] / [`ForecastError::Garch`]
///   failures, first error wins.
pub fn build_forecast(
    arma: &ArmaFit, garch: &GarchFit, series: &ObservedSeries, horizon: usize,
) -> Result<ForecastResult, ForecastError> {
    if horizon == 0 {
        return Err(ForecastError::InvalidHorizon(horizon));
    }
    if series.len() != arma.residuals.len() {
        return Err(ForecastError::SeriesLengthMismatch {
            series: series.len(),
            residuals: arma.residuals.len(),
        });
    }
    let last_residual = arma.residuals[arma.residuals.len() - 1];
    let mean = arma.forecast(series.last_value(), horizon)?;
    let std = garch.forecast_volatility(last_residual, horizon)?;
    ForecastResult::new(mean, std)
}
