//! garch::params — parameter set for the GARCH(1,1) variance process.
//!
//! Purpose
//! -------
//! Hold the model-space coefficients of
//! `σ²[t] = ω + α·ε²[t−1] + β·σ²[t−1]` and define the mapping from the
//! optimizer's unconstrained θ-space into model space.
//!
//! Key behaviors
//! -------------
//! - [`GarchParams::new`] validates positivity (`ω > 0`, `α ≥ 0`,
//!   `β ≥ 0`) and covariance stationarity (`α + β < 1`). A persistence
//!   at or above one is reported as
//!   [`GarchError::NonStationaryVariance`], never clamped.
//! - [`GarchParams::from_theta`] maps `[x₀, x₁, x₂]` to
//!   `(softplus(x₀), logistic(x₁), logistic(x₂))`, so positivity holds
//!   by construction at every optimizer iterate. Stationarity is NOT
//!   enforced during optimization; it is checked once on the fitted
//!   point via [`GarchParams::validated`].
//!
//! Conventions
//! -----------
//! - θ-space layout is `[softplus⁻¹(ω), logit(α), logit(β)]` throughout
//!   the fitting code.
use crate::garch::errors::{GarchError, GarchResult};
use crate::optimization::loglik_optimizer::Theta;
use crate::optimization::numerical_stability::{safe_logistic, safe_softplus};

/// Coefficients of a GARCH(1,1) process in model space.
///
/// Fields
/// ------
/// - `omega`: baseline variance, `omega > 0`.
/// - `alpha`: shock loading, `alpha >= 0`.
/// - `beta`: variance persistence, `beta >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GarchParams {
    pub omega: f64,
    pub alpha: f64,
    pub beta: f64,
}

impl GarchParams {
    /// Construct a validated, covariance-stationary parameter set.
    ///
    /// # Errors
    /// - [`GarchError::InvalidCoefficient`] for a non-positive `omega`
    ///   or negative `alpha`/`beta` (or any non-finite value).
    /// - [`GarchError::NonStationaryVariance`] if `alpha + beta >= 1`.
    pub fn new(omega: f64, alpha: f64, beta: f64) -> GarchResult<Self> {
        if !omega.is_finite() || omega <= 0.0 {
            return Err(GarchError::InvalidCoefficient {
                name: "omega",
                value: omega,
                reason: "Baseline variance must be strictly positive.",
            });
        }
        if !alpha.is_finite() || alpha < 0.0 {
            return Err(GarchError::InvalidCoefficient {
                name: "alpha",
                value: alpha,
                reason: "Shock loading must be non-negative.",
            });
        }
        if !beta.is_finite() || beta < 0.0 {
            return Err(GarchError::InvalidCoefficient {
                name: "beta",
                value: beta,
                reason: "Variance persistence must be non-negative.",
            });
        }
        let coeff_sum = alpha + beta;
        if coeff_sum >= 1.0 {
            return Err(GarchError::NonStationaryVariance { coeff_sum });
        }
        Ok(Self { omega, alpha, beta })
    }

    /// Map an unconstrained optimizer vector into model space.
    ///
    /// Positivity holds by construction; the stationarity constraint
    /// `α + β < 1` is deferred to [`GarchParams::validated`].
    pub fn from_theta(theta: &Theta) -> Self {
        Self {
            omega: safe_softplus(theta[0]),
            alpha: safe_logistic(theta[1]),
            beta: safe_logistic(theta[2]),
        }
    }

    /// Re-run the full constructor checks on these values.
    ///
    /// Used after optimization, where `from_theta` may have produced a
    /// persistence at or above one.
    pub fn validated(self) -> GarchResult<Self> {
        Self::new(self.omega, self.alpha, self.beta)
    }

    /// Variance persistence `α + β`.
    pub fn persistence(&self) -> f64 {
        self.alpha + self.beta
    }

    /// Long-run variance `ω / (1 − α − β)`.
    pub fn unconditional_variance(&self) -> f64 {
        self.omega / (1.0 - self.persistence())
    }
}
