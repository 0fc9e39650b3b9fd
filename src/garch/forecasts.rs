//! garch::forecasts — multi-step volatility forecast from a fitted
//! GARCH(1,1).
//!
//! Purpose
//! -------
//! Extend a fitted variance process `h` steps past the end of the
//! residual sample:
//!
//! - `v[0] = ω + α·ε²[T] + β·σ²[T]`
//! - `v[i] = ω + (α + β)·v[i−1]` for `i ≥ 1`
//!
//! and return the per-step standard deviations `√v[i]`. The variance
//! path decays geometrically toward the long-run level
//! `ω / (1 − α − β)`.
use crate::garch::{
    errors::{GarchError, GarchResult},
    model::GarchFit,
};
use ndarray::Array1;

impl GarchFit {
    /// Forecast per-step volatility (standard deviations) `horizon`
    /// steps ahead.
    ///
    /// `last_residual` is the final residual `ε[T]` of the fitted
    /// sample; the final conditional variance `σ²[T]` is taken from the
    /// fit itself.
    ///
    /// # Errors
    /// [`GarchError::InvalidHorizon`] if `horizon == 0`.
    pub fn forecast_volatility(
        &self, last_residual: f64, horizon: usize,
    ) -> GarchResult<Array1<f64>> {
        if horizon == 0 {
            return Err(GarchError::InvalidHorizon(horizon));
        }
        let omega = self.params.omega;
        let alpha = self.params.alpha;
        let beta = self.params.beta;
        let last_variance = self.cond_variance[self.cond_variance.len() - 1];
        let mut variance = Array1::zeros(horizon);
        variance[0] = omega + alpha * last_residual * last_residual + beta * last_variance;
        for i in 1..horizon {
            variance[i] = omega + (alpha + beta) * variance[i - 1];
        }
        Ok(variance.mapv(f64::sqrt))
    }
}
