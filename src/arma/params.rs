//! arma::params — parameter set for the ARMA(1,1) mean process.
//!
//! Purpose
//! -------
//! Hold the model-space coefficients of `y[t] = c + φ·y[t−1] + θ·ε[t−1]
//! + ε[t]` and define the mapping from the optimizer's unconstrained
//! θ-space into model space.
//!
//! Key behaviors
//! -------------
//! - [`ArmaParams::new`] validates user-supplied coefficients
//!   (stationarity `|φ| < 1`, invertibility `|θ| < 1`, finite intercept).
//! - [`ArmaParams::from_theta`] maps an unconstrained vector
//!   `[c, x₁, x₂]` to `(c, tanh(x₁), tanh(x₂))`, so any point the
//!   optimizer visits is a stationary, invertible model.
//! - [`ArmaParams::unconditional_mean`] returns `c / (1 − φ)`, the
//!   long-run level the forecast recursion converges to.
//!
//! Invariants & assumptions
//! ------------------------
//! - `from_theta` expects a length-3 vector with finite entries; the
//!   optimizer's `check` hook enforces this before any evaluation.
//!
//! Conventions
//! -----------
//! - θ-space layout is `[intercept, atanh(φ), atanh(θ)]` throughout the
//!   fitting code.
use crate::arma::errors::{ArmaError, ArmaResult};
use crate::optimization::loglik_optimizer::Theta;

/// Coefficients of an ARMA(1,1) process in model space.
///
/// Fields
/// ------
/// - `intercept`: the constant `c`.
/// - `phi`: autoregressive coefficient, `|phi| < 1`.
/// - `theta`: moving-average coefficient, `|theta| < 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmaParams {
    pub intercept: f64,
    pub phi: f64,
    pub theta: f64,
}

impl ArmaParams {
    /// Construct a validated parameter set.
    ///
    /// # Rules
    /// - `intercept` must be finite.
    /// - `phi` must satisfy `|phi| < 1` (stationarity).
    /// - `theta` must satisfy `|theta| < 1` (invertibility).
    ///
    /// # Errors
    /// Returns [`ArmaError::InvalidCoefficient`] naming the first
    /// offending coefficient.
    pub fn new(intercept: f64, phi: f64, theta: f64) -> ArmaResult<Self> {
        if !intercept.is_finite() {
            return Err(ArmaError::InvalidCoefficient {
                name: "intercept",
                value: intercept,
                reason: "Intercept must be finite.",
            });
        }
        if !phi.is_finite() || phi.abs() >= 1.0 {
            return Err(ArmaError::InvalidCoefficient {
                name: "phi",
                value: phi,
                reason: "AR coefficient must satisfy |phi| < 1.",
            });
        }
        if !theta.is_finite() || theta.abs() >= 1.0 {
            return Err(ArmaError::InvalidCoefficient {
                name: "theta",
                value: theta,
                reason: "MA coefficient must satisfy |theta| < 1.",
            });
        }
        Ok(Self { intercept, phi, theta })
    }

    /// Map an unconstrained optimizer vector `[c, x₁, x₂]` into model
    /// space via `phi = tanh(x₁)`, `theta = tanh(x₂)`.
    ///
    /// The caller is responsible for the length-3, all-finite contract
    /// (enforced by the model's `check` hook and by `theta_hat`
    /// validation after optimization).
    pub fn from_theta(theta: &Theta) -> Self {
        Self { intercept: theta[0], phi: theta[1].tanh(), theta: theta[2].tanh() }
    }

    /// Long-run level of the process, `c / (1 − φ)`.
    pub fn unconditional_mean(&self) -> f64 {
        self.intercept / (1.0 - self.phi)
    }
}
