//! garch — GARCH(1,1) variance process: parameters, MLE fit, volatility
//! forecast.
//!
//! Purpose
//! -------
//! Model the conditional variance of the mean model's residuals as
//! `σ²[t] = ω + α·ε²[t−1] + β·σ²[t−1]` and supply per-step volatility
//! forecasts for uncertainty quantification.
//!
//! Layout
//! ------
//! - [`errors`]: `GarchError` / `GarchResult`.
//! - [`params`]: model-space coefficients and the θ-space mapping.
//! - [`model`]: `GarchModel` (the `LogLikelihood` implementor) and
//!   `GarchFit` (fitted state).
//! - [`forecasts`]: multi-step volatility forecast on `GarchFit`.
//!
//! Downstream usage
//! ----------------
//! - `GarchFit::forecast_volatility` supplies the per-step standard
//!   deviations to the forecast engine.

pub mod errors;
pub mod forecasts;
pub mod model;
pub mod params;

// ---- Re-exports (primary public surface) ----
pub use self::errors::{GarchError, GarchResult};
pub use self::model::{GARCH_MIN_OBS, GarchFit, GarchModel};
pub use self::params::GarchParams;

/// Convenience prelude for downstream modules.
pub mod prelude {
    pub use super::errors::{GarchError, GarchResult};
    pub use super::model::{GARCH_MIN_OBS, GarchFit, GarchModel};
    pub use super::params::GarchParams;
}
