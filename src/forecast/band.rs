//! forecast::band — symmetric normal confidence bands.
//!
//! Purpose
//! -------
//! Turn a point forecast with per-step standard deviations into a
//! two-sided confidence band: `z = Φ⁻¹((1 + level) / 2)`, then
//! `lower = mean − z·std` and `upper = mean + z·std`.
use crate::forecast::{engine::ForecastResult, errors::ForecastError};
use ndarray::Array1;
use statrs::distribution::{ContinuousCDF, Normal};

/// Two-sided confidence band around a forecast mean.
///
/// Both arrays have the forecast's length and satisfy
/// `lower <= mean <= upper` elementwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceBand {
    pub lower: Array1<f64>,
    pub upper: Array1<f64>,
}

/// Build a symmetric confidence band at the given two-sided `level`.
///
/// # Errors
/// [`ForecastError::InvalidConfidenceLevel`] unless `0 < level < 1`.
pub fn build_band(
    forecast: &ForecastResult, level: f64,
) -> Result<ConfidenceBand, ForecastError> {
    if !level.is_finite() || level <= 0.0 || level >= 1.0 {
        return Err(ForecastError::InvalidConfidenceLevel(level));
    }
    let standard_normal = Normal::new(0.0, 1.0).expect("standard normal");
    let z = standard_normal.inverse_cdf((1.0 + level) / 2.0);
    let half_width = forecast.std.mapv(|s| z * s);
    Ok(ConfidenceBand {
        lower: &forecast.mean - &half_width,
        upper: &forecast.mean + &half_width,
    })
}
