//! garch::model — Gaussian MLE for the GARCH(1,1) variance process.
//!
//! Purpose
//! -------
//! Fit `σ²[t] = ω + α·ε²[t−1] + β·σ²[t−1]` to the mean model's residual
//! sequence by maximizing the Gaussian log-likelihood through the
//! crate's L-BFGS layer, and expose the fitted state needed downstream
//! (coefficients, conditional variance path, attained log-likelihood).
//!
//! Key behaviors
//! -------------
//! - [`GarchModel`] implements [`LogLikelihood`] over an unconstrained
//!   θ-vector `[softplus⁻¹(ω), logit(α), logit(β)]`; the recursion is
//!   seeded with the sample variance of the residuals.
//! - [`GarchModel::fit`] starts from a point whose implied long-run
//!   variance equals the sample variance (`ω₀ = 0.1·s²`, `α₀ = 0.1`,
//!   `β₀ = 0.8`), rejects non-terminating solves with
//!   [`GarchError::FitDivergence`], and validates the fitted point:
//!   a persistence `α + β ≥ 1` is surfaced as
//!   [`GarchError::NonStationaryVariance`], never clamped.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input residuals must hold at least [`GARCH_MIN_OBS`] finite values
//!   with positive sample variance.
//! - `σ²[t] > 0` at every iterate because `ω > 0` by construction, so
//!   the likelihood recursion is always well defined.
//!
//! Downstream usage
//! ----------------
//! - `GarchFit::forecast_volatility` (in [`crate::garch::forecasts`])
//!   produces the per-step standard deviations for the forecast engine.
use crate::garch::{
    errors::{GarchError, GarchResult},
    params::GarchParams,
};
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        Cost, LogLikelihood, MLEOptions, OptimOutcome, Theta, maximize,
        validation::validate_theta_input,
    },
    numerical_stability::{safe_logit, safe_softplus_inv},
};
use ndarray::{Array1, array};

/// Minimum number of residuals required to fit the three parameters.
pub const GARCH_MIN_OBS: usize = 10;

/// Fitted state of a GARCH(1,1) model.
///
/// Fields
/// ------
/// - `params`: coefficients in model space, covariance-stationary.
/// - `cond_variance`: conditional variance path `σ²[t]`, index-aligned
///   with the residual series.
/// - `log_likelihood`: attained Gaussian log-likelihood `ℓ(θ̂)`.
#[derive(Debug, Clone, PartialEq)]
pub struct GarchFit {
    pub params: GarchParams,
    pub cond_variance: Array1<f64>,
    pub log_likelihood: f64,
}

/// GARCH(1,1) conditional variance model.
///
/// Holds optimizer configuration before fitting, and the raw optimizer
/// outcome plus the derived [`GarchFit`] afterwards.
#[derive(Debug, Clone, Default)]
pub struct GarchModel {
    pub options: MLEOptions,
    pub results: Option<OptimOutcome>,
    pub fitted: Option<GarchFit>,
}

impl GarchModel {
    /// Create an unfitted model with the given optimizer options.
    pub fn new(options: MLEOptions) -> Self {
        Self { options, results: None, fitted: None }
    }

    /// Fit the model to a residual series by Gaussian MLE.
    ///
    /// # Errors
    /// - [`GarchError::InsufficientData`] if fewer than
    ///   [`GARCH_MIN_OBS`] residuals are provided.
    /// - [`GarchError::InvalidData`] on non-finite elements.
    /// - [`GarchError::ZeroVariance`] if the sample variance is zero.
    /// - [`GarchError::FitDivergence`] if the solver stopped without a
    ///   terminating status.
    /// - [`GarchError::NonStationaryVariance`] if the fitted persistence
    ///   is at or above one.
    /// - [`GarchError::Optimization`] for optimizer-layer failures.
    pub fn fit(&mut self, residuals: &Array1<f64>) -> GarchResult<()> {
        validate_residuals(residuals)?;
        let variance = sample_variance(residuals);
        if variance <= 0.0 {
            return Err(GarchError::ZeroVariance);
        }
        let theta0 = array![safe_softplus_inv(0.1 * variance), safe_logit(0.1), safe_logit(0.8)];
        let opts = self.options.clone();
        let outcome = maximize(&*self, theta0, residuals, &opts)?;
        if !outcome.converged {
            return Err(GarchError::FitDivergence { status: outcome.status.clone() });
        }
        let params = GarchParams::from_theta(&outcome.theta_hat).validated()?;
        let cond_variance = variance_recursion(&params, residuals);
        let log_likelihood = outcome.value;
        self.results = Some(outcome);
        self.fitted = Some(GarchFit { params, cond_variance, log_likelihood });
        Ok(())
    }

    /// Borrow the fitted state.
    ///
    /// # Errors
    /// [`GarchError::ModelNotFitted`] if `fit` has not succeeded yet.
    pub fn fitted(&self) -> GarchResult<&GarchFit> {
        self.fitted.as_ref().ok_or(GarchError::ModelNotFitted)
    }
}

impl LogLikelihood for GarchModel {
    type Data = Array1<f64>;

    /// Gaussian log-likelihood
    /// `ℓ(θ) = −½ Σ_t (ln 2π + ln σ²[t] + ε²[t] / σ²[t])`.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost> {
        let params = GarchParams::from_theta(theta);
        let sigma2 = variance_recursion(&params, data);
        let ln_2pi = (2.0 * std::f64::consts::PI).ln();
        let mut ll = 0.0;
        for (&eps, &s2) in data.iter().zip(sigma2.iter()) {
            ll -= 0.5 * (ln_2pi + s2.ln() + eps * eps / s2);
        }
        Ok(ll)
    }

    /// Reject malformed θ-vectors before optimization starts. Data
    /// validation happens once in [`GarchModel::fit`].
    fn check(&self, theta: &Theta, _data: &Self::Data) -> OptResult<()> {
        validate_theta_input(theta, 3)
    }
}

/// Conditional variance path of the GARCH(1,1) recursion, seeded with
/// the sample variance of the residual series.
fn variance_recursion(params: &GarchParams, data: &Array1<f64>) -> Array1<f64> {
    let mut sigma2 = Array1::zeros(data.len());
    sigma2[0] = sample_variance(data);
    for t in 1..data.len() {
        let eps_prev = data[t - 1];
        sigma2[t] = params.omega + params.alpha * eps_prev * eps_prev + params.beta * sigma2[t - 1];
    }
    sigma2
}

/// Population variance around the sample mean.
fn sample_variance(data: &Array1<f64>) -> f64 {
    let n = data.len() as f64;
    let mean = data.sum() / n;
    data.mapv(|x| (x - mean) * (x - mean)).sum() / n
}

/// Validate residual length and finiteness for fitting.
fn validate_residuals(data: &Array1<f64>) -> GarchResult<()> {
    if data.len() < GARCH_MIN_OBS {
        return Err(GarchError::InsufficientData { n: data.len(), min: GARCH_MIN_OBS });
    }
    for (index, &value) in data.iter().enumerate() {
        if !value.is_finite() {
            return Err(GarchError::InvalidData { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::loglik_optimizer::{LineSearcher, Tolerances};
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The variance recursion and log-likelihood against hand-computed
    //   values.
    // - Input validation and the not-fitted accessor.
    // - A full MLE fit on a deterministic residual sample, and rejection
    //   of a budget-starved solve.
    //
    // They intentionally DO NOT cover:
    // - Volatility forecasting; that lives in garch::forecasts.
    // -------------------------------------------------------------------------

    /// Deterministic noise in [-1, 1) from a 64-bit LCG, same generator
    /// as the stationarity-test fixtures.
    fn lcg_noise(seed: u64, n: usize) -> Vec<f64> {
        let mut state = seed;
        (0..n)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                ((state >> 33) as f64) / f64::from(1u32 << 30) - 1.0
            })
            .collect()
    }

    #[test]
    // Purpose
    // -------
    // Verify the variance recursion against values computed by hand.
    //
    // Given
    // -----
    // - Residuals [1, -1, 2, 0] (sample variance 1.25) with
    //   omega = 0.5, alpha = 0.2, beta = 0.5.
    //
    // Expect
    // ------
    // - σ²[0] = 1.25, σ²[1] = 0.5 + 0.2 + 0.625 = 1.325,
    //   σ²[2] = 0.5 + 0.2 + 0.6625 = 1.3625,
    //   σ²[3] = 0.5 + 0.8 + 0.68125 = 1.98125.
    fn variance_recursion_matches_hand_computation() {
        // Arrange
        let params = GarchParams::new(0.5, 0.2, 0.5).expect("params should be valid");
        let data = array![1.0, -1.0, 2.0, 0.0];

        // Act
        let sigma2 = variance_recursion(&params, &data);

        // Assert
        assert_relative_eq!(sigma2[0], 1.25);
        assert_relative_eq!(sigma2[1], 1.325);
        assert_relative_eq!(sigma2[2], 1.3625);
        assert_relative_eq!(sigma2[3], 1.98125, max_relative = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify the log-likelihood sum against a direct computation on a
    // short series.
    //
    // Given
    // -----
    // - Residuals [1, -1, 2, 0] and θ mapping to some valid params.
    //
    // Expect
    // ------
    // - The trait value equals the explicitly summed per-observation
    //   terms.
    fn value_matches_explicit_sum() {
        // Arrange
        let model = GarchModel::default();
        let data = array![1.0, -1.0, 2.0, 0.0];
        let theta = array![0.0, 0.0, -1.0];
        let params = GarchParams::from_theta(&theta);
        let sigma2 = variance_recursion(&params, &data);
        let ln_2pi = (2.0 * std::f64::consts::PI).ln();
        let expected: f64 = data
            .iter()
            .zip(sigma2.iter())
            .map(|(&e, &s2)| -0.5 * (ln_2pi + s2.ln() + e * e / s2))
            .sum();

        // Act
        let ll = model.value(&theta, &data).expect("likelihood should evaluate");

        // Assert
        assert_relative_eq!(ll, expected, max_relative = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify input validation and the not-fitted accessor.
    //
    // Given
    // -----
    // - A short series, a constant series, and a fresh model.
    //
    // Expect
    // ------
    // - InsufficientData, ZeroVariance, and ModelNotFitted.
    fn fit_rejects_bad_input_and_unfitted_access_fails() {
        // Arrange
        let mut model = GarchModel::default();
        let constant = Array1::from_elem(20, 0.5);

        // Act / Assert
        assert!(matches!(
            model.fit(&array![1.0, 2.0, 3.0]),
            Err(GarchError::InsufficientData { n: 3, min: GARCH_MIN_OBS })
        ));
        assert!(matches!(model.fit(&constant), Err(GarchError::ZeroVariance)));
        assert!(matches!(model.fitted(), Err(GarchError::ModelNotFitted)));
    }

    #[test]
    // Purpose
    // -------
    // Verify that a full fit on homoskedastic noise terminates and
    // produces a stationary parameter set with a positive variance path.
    //
    // Given
    // -----
    // - 300 deterministic i.i.d. residuals in [-1, 1).
    //
    // Expect
    // ------
    // - fit succeeds, persistence < 1, omega > 0, conditional variance
    //   path of length 300 with all entries positive.
    fn fit_recovers_a_stationary_model_on_noise_sample() {
        // Arrange
        let data = Array1::from(lcg_noise(9, 300));
        let mut model = GarchModel::default();

        // Act
        model.fit(&data).expect("fit should succeed on homoskedastic noise");
        let fit = model.fitted().expect("fitted state should be present");

        // Assert
        assert!(fit.params.persistence() < 1.0);
        assert!(fit.params.omega > 0.0);
        assert_eq!(fit.cond_variance.len(), 300);
        assert!(fit.cond_variance.iter().all(|&v| v > 0.0));
        assert!(fit.log_likelihood.is_finite());
    }

    #[test]
    // Purpose
    // -------
    // Verify that a solve starved of its budget is rejected instead of
    // silently accepted as a fitted variance model.
    //
    // Given
    // -----
    // - The 300-point noise sample with tol_grad = 1e-300, max_iter = 1.
    //
    // Expect
    // ------
    // - fit returns FitDivergence and the model stays unfitted.
    fn starved_budget_surfaces_fit_divergence() {
        // Arrange
        let data = Array1::from(lcg_noise(9, 300));
        let tols = Tolerances::new(Some(1e-300), None, Some(1)).expect("tolerances are valid");
        let opts = MLEOptions::new(tols, LineSearcher::MoreThuente, false, None)
            .expect("options are valid");
        let mut model = GarchModel::new(opts);

        // Act
        let result = model.fit(&data);

        // Assert
        assert!(matches!(result, Err(GarchError::FitDivergence { .. })));
        assert!(matches!(model.fitted(), Err(GarchError::ModelNotFitted)));
    }
}
