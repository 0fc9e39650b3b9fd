//! arma::model — Gaussian MLE for the ARMA(1,1) mean process.
//!
//! Purpose
//! -------
//! Fit `y[t] = c + φ·y[t−1] + θ·ε[t−1] + ε[t]` to an observed series by
//! maximizing the concentrated Gaussian log-likelihood through the
//! crate's L-BFGS layer, and expose the fitted state needed downstream
//! (coefficients, residual sequence, attained log-likelihood).
//!
//! Key behaviors
//! -------------
//! - [`ArmaModel`] implements [`LogLikelihood`] over an unconstrained
//!   θ-vector `[c, atanh(φ), atanh(θ)]`; the innovation variance is
//!   concentrated out as `σ̂² = mean(ε²)`, so only three parameters are
//!   optimized.
//! - Residual convention: the prediction for `t = 0` is the
//!   unconditional mean `c / (1 − φ)`, so `ε[0] = y[0] − c/(1−φ)`; for
//!   `t ≥ 1` residuals are one-step prediction errors of the recursion.
//! - [`ArmaModel::fit`] validates the input, runs the optimizer from
//!   `θ₀ = [mean(y), 0, 0]`, and rejects non-terminating solves with
//!   [`ArmaError::FitDivergence`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Input series must hold at least [`ARMA_MIN_OBS`] finite values.
//! - The tanh parameterization keeps every optimizer iterate stationary
//!   and invertible, so the likelihood recursion is always well defined.
//!
//! Downstream usage
//! ----------------
//! - `ArmaFit::forecast` (in [`crate::arma::forecasts`]) produces the
//!   mean path; the residual sequence feeds the GARCH variance model.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the residual recursion and the concentrated
//!   likelihood against hand-computed values, and run a full fit on a
//!   deterministic autoregressive sample.
use crate::arma::{
    errors::{ArmaError, ArmaResult},
    params::ArmaParams,
};
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        Cost, LogLikelihood, MLEOptions, OptimOutcome, Theta, maximize,
        validation::validate_theta_input,
    },
};
use ndarray::{Array1, array};

/// Minimum number of observations required to fit the three parameters.
pub const ARMA_MIN_OBS: usize = 3;

/// Fitted state of an ARMA(1,1) model.
///
/// Fields
/// ------
/// - `params`: coefficients in model space.
/// - `residuals`: one-step prediction errors, index-aligned with the
///   input series (`residuals.len() == n`).
/// - `log_likelihood`: attained concentrated log-likelihood `ℓ(θ̂)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmaFit {
    pub params: ArmaParams,
    pub residuals: Array1<f64>,
    pub log_likelihood: f64,
}

/// ARMA(1,1) mean-process model.
///
/// Holds optimizer configuration before fitting, and the raw optimizer
/// outcome plus the derived [`ArmaFit`] afterwards.
#[derive(Debug, Clone, Default)]
pub struct ArmaModel {
    pub options: MLEOptions,
    pub results: Option<OptimOutcome>,
    pub fitted: Option<ArmaFit>,
}

impl ArmaModel {
    /// Create an unfitted model with the given optimizer options.
    pub fn new(options: MLEOptions) -> Self {
        Self { options, results: None, fitted: None }
    }

    /// Fit the model to `data` by concentrated Gaussian MLE.
    ///
    /// Starting point: `θ₀ = [mean(y), 0, 0]`, i.e. a white-noise model
    /// centered on the sample mean.
    ///
    /// # Errors
    /// - [`ArmaError::InsufficientData`] if `data.len() < ARMA_MIN_OBS`.
    /// - [`ArmaError::InvalidData`] on non-finite elements.
    /// - [`ArmaError::FitDivergence`] if the solver stopped without a
    ///   terminating status.
    /// - [`ArmaError::Optimization`] for optimizer-layer failures.
    pub fn fit(&mut self, data: &Array1<f64>) -> ArmaResult<()> {
        validate_series(data)?;
        let mean = data.sum() / data.len() as f64;
        let theta0 = array![mean, 0.0, 0.0];
        let opts = self.options.clone();
        let outcome = maximize(&*self, theta0, data, &opts)?;
        if !outcome.converged {
            return Err(ArmaError::FitDivergence { status: outcome.status.clone() });
        }
        let params = ArmaParams::from_theta(&outcome.theta_hat);
        let residuals = residual_recursion(&params, data);
        let log_likelihood = outcome.value;
        self.results = Some(outcome);
        self.fitted = Some(ArmaFit { params, residuals, log_likelihood });
        Ok(())
    }

    /// Borrow the fitted state.
    ///
    /// # Errors
    /// [`ArmaError::ModelNotFitted`] if `fit` has not succeeded yet.
    pub fn fitted(&self) -> ArmaResult<&ArmaFit> {
        self.fitted.as_ref().ok_or(ArmaError::ModelNotFitted)
    }
}

impl LogLikelihood for ArmaModel {
    type Data = Array1<f64>;

    /// Concentrated Gaussian log-likelihood
    /// `ℓ(θ) = −n/2 · (ln 2π + ln σ̂² + 1)` with `σ̂² = mean(ε²)`.
    ///
    /// A perfectly fitting θ drives `σ̂²` to zero and the value to `+∞`;
    /// the optimizer adapter rejects the non-finite cost, so no guard is
    /// needed here.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost> {
        let params = ArmaParams::from_theta(theta);
        let residuals = residual_recursion(&params, data);
        let n = data.len() as f64;
        let sigma2 = residuals.mapv(|e| e * e).sum() / n;
        Ok(-0.5 * n * ((2.0 * std::f64::consts::PI).ln() + sigma2.ln() + 1.0))
    }

    /// Reject malformed θ-vectors before optimization starts. Data
    /// validation happens once in [`ArmaModel::fit`].
    fn check(&self, theta: &Theta, _data: &Self::Data) -> OptResult<()> {
        validate_theta_input(theta, 3)
    }
}

/// One-step prediction errors of the ARMA(1,1) recursion.
///
/// `ε[0] = y[0] − c/(1−φ)`, then
/// `ε[t] = y[t] − c − φ·y[t−1] − θ·ε[t−1]`.
fn residual_recursion(params: &ArmaParams, data: &Array1<f64>) -> Array1<f64> {
    let mut residuals = Array1::zeros(data.len());
    residuals[0] = data[0] - params.unconditional_mean();
    for t in 1..data.len() {
        residuals[t] = data[t]
            - params.intercept
            - params.phi * data[t - 1]
            - params.theta * residuals[t - 1];
    }
    residuals
}

/// Validate series length and finiteness for fitting.
fn validate_series(data: &Array1<f64>) -> ArmaResult<()> {
    if data.len() < ARMA_MIN_OBS {
        return Err(ArmaError::InsufficientData { n: data.len(), min: ARMA_MIN_OBS });
    }
    for (index, &value) in data.iter().enumerate() {
        if !value.is_finite() {
            return Err(ArmaError::InvalidData { index, value });
        }
    }
    Ok(())
}
