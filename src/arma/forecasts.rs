//! arma::forecasts — multi-step mean forecast from a fitted ARMA(1,1).
//!
//! Purpose
//! -------
//! Extend a fitted mean process `h` steps past the end of the sample.
//! Future shocks enter at their expectation of zero, so the MA term
//! contributes only at the first step:
//!
//! - `f[0] = c + φ·y[T] + θ·ε[T]`
//! - `f[i] = c + φ·f[i−1]` for `i ≥ 1`
//!
//! The path decays geometrically toward the unconditional mean
//! `c / (1 − φ)`.
use crate::arma::{
    errors::{ArmaError, ArmaResult},
    model::ArmaFit,
};
use ndarray::Array1;

impl ArmaFit {
    /// Forecast the conditional mean `horizon` steps ahead.
    ///
    /// `last_value` is the final observation `y[T]` of the fitted
    /// sample; the final residual `ε[T]` is taken from the fit itself.
    ///
    /// # Errors
    /// [`ArmaError::InvalidHorizon`] if `horizon == 0`.
    pub fn forecast(&self, last_value: f64, horizon: usize) -> ArmaResult<Array1<f64>> {
        if horizon == 0 {
            return Err(ArmaError::InvalidHorizon(horizon));
        }
        let c = self.params.intercept;
        let phi = self.params.phi;
        let theta = self.params.theta;
        let last_residual = self.residuals[self.residuals.len() - 1];
        let mut path = Array1::zeros(horizon);
        path[0] = c + phi * last_value + theta * last_residual;
        for i in 1..horizon {
            path[i] = c + phi * path[i - 1];
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arma::params::ArmaParams;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The first-step MA contribution and the geometric recursion.
    // - Degenerate coefficients (phi = theta = 0) yielding a constant path.
    // - Horizon validation.
    //
    // They intentionally DO NOT cover:
    // - Fitting; model tests own that.
    // -------------------------------------------------------------------------

    fn fit_with(params: ArmaParams, residuals: Array1<f64>) -> ArmaFit {
        ArmaFit { params, residuals, log_likelihood: -1.0 }
    }

    #[test]
    // Purpose
    // -------
    // Verify the forecast recursion against hand-computed values.
    //
    // Given
    // -----
    // - c = 1, phi = 0.5, theta = 0.25, y[T] = 2, ε[T] = 0.4, h = 3.
    //
    // Expect
    // ------
    // - f[0] = 1 + 1 + 0.1 = 2.1, f[1] = 1 + 1.05 = 2.05,
    //   f[2] = 1 + 1.025 = 2.025.
    fn forecast_matches_hand_computed_recursion() {
        // Arrange
        let params = ArmaParams::new(1.0, 0.5, 0.25).expect("params should be valid");
        let fit = fit_with(params, array![0.0, 0.4]);

        // Act
        let path = fit.forecast(2.0, 3).expect("forecast should succeed");

        // Assert
        assert_relative_eq!(path[0], 2.1);
        assert_relative_eq!(path[1], 2.05);
        assert_relative_eq!(path[2], 2.025);
    }

    #[test]
    // Purpose
    // -------
    // Verify that with phi = theta = 0 the forecast is the constant
    // intercept at every step.
    //
    // Given
    // -----
    // - c = 0.7, phi = 0, theta = 0, any last value and residual, h = 5.
    //
    // Expect
    // ------
    // - Every element equals 0.7.
    fn zero_lag_coefficients_forecast_the_intercept() {
        // Arrange
        let params = ArmaParams::new(0.7, 0.0, 0.0).expect("params should be valid");
        let fit = fit_with(params, array![0.3, -0.2]);

        // Act
        let path = fit.forecast(5.0, 5).expect("forecast should succeed");

        // Assert
        for &value in path.iter() {
            assert_relative_eq!(value, 0.7);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a zero horizon is rejected.
    //
    // Given
    // -----
    // - Any fitted state and horizon = 0.
    //
    // Expect
    // ------
    // - ArmaError::InvalidHorizon(0).
    fn zero_horizon_is_rejected() {
        // Arrange
        let params = ArmaParams::new(0.0, 0.1, 0.1).expect("params should be valid");
        let fit = fit_with(params, array![0.0]);

        // Act / Assert
        assert!(matches!(fit.forecast(1.0, 0), Err(ArmaError::InvalidHorizon(0))));
    }
}
