//! arma — ARMA(1,1) mean process: parameters, MLE fit, mean forecast.
//!
//! Purpose
//! -------
//! Model the conditional mean of the observed series as
//! `y[t] = c + φ·y[t−1] + θ·ε[t−1] + ε[t]` and expose the fitted
//! residual sequence for downstream variance modeling.
//!
//! Layout
//! ------
//! - [`errors`]: `ArmaError` / `ArmaResult`.
//! - [`params`]: model-space coefficients and the θ-space mapping.
//! - [`model`]: `ArmaModel` (the `LogLikelihood` implementor) and
//!   `ArmaFit` (fitted state).
//! - [`forecasts`]: multi-step mean forecast on `ArmaFit`.
//!
//! Downstream usage
//! ----------------
//! - `ArmaFit::residuals` is the input series for the GARCH model.
//! - `ArmaFit::forecast` supplies the mean path to the forecast engine.

pub mod errors;
pub mod forecasts;
pub mod model;
pub mod params;

// ---- Re-exports (primary public surface) ----
pub use self::errors::{ArmaError, ArmaResult};
pub use self::model::{ARMA_MIN_OBS, ArmaFit, ArmaModel};
pub use self::params::ArmaParams;

/// Convenience prelude for downstream modules.
pub mod prelude {
    pub use super::errors::{ArmaError, ArmaResult};
    pub use super::model::{ARMA_MIN_OBS, ArmaFit, ArmaModel};
    pub use super::params::ArmaParams;
}
