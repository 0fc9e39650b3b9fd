//! forecast — point forecast assembly, Monte Carlo simulation,
//! confidence bands, and limit checks.
//!
//! Purpose
//! -------
//! Everything downstream of the fitted models: join the mean and
//! volatility forecasts at one horizon, simulate trajectories around
//! them, wrap the mean in a symmetric normal band, and test the band
//! against a fixed corridor.
//!
//! Layout
//! ------
//! - [`errors`]: `ForecastError`.
//! - [`engine`]: `ForecastResult` and `build_forecast`.
//! - [`simulate`]: `SimulationEnsemble` and `simulate_paths`.
//! - [`band`]: `ConfidenceBand` and `build_band`.
//! - [`breach`]: `BreachReport` and `check_breach`.

pub mod band;
pub mod breach;
pub mod engine;
pub mod errors;
pub mod simulate;

// ---- Re-exports (primary public surface) ----
pub use self::band::{ConfidenceBand, build_band};
pub use self::breach::{BreachReport, check_breach};
pub use self::engine::{ForecastResult, build_forecast};
pub use self::errors::ForecastError;
pub use self::simulate::{SimulationEnsemble, simulate_paths};

/// Convenience prelude for downstream modules.
pub mod prelude {
    pub use super::band::{ConfidenceBand, build_band};
    pub use super::breach::{BreachReport, check_breach};
    pub use super::engine::{ForecastResult, build_forecast};
    pub use super::errors::ForecastError;
    pub use super::simulate::{SimulationEnsemble, simulate_paths};
}
