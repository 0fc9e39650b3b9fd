//! forecast::simulate — Monte Carlo paths around a point forecast.
//!
//! Purpose
//! -------
//! Draw simulated trajectories around the forecast mean: per path, one
//! independent normal shock per step with the step's standard
//! deviation, added to the step's mean. Sampling is per-step marginal;
//! the volatility recursion is not re-simulated inside paths.
//!
//! Key behaviors
//! -------------
//! - Reproducible runs via an optional `u64` seed
//!   (`StdRng::seed_from_u64`); entropy seeding otherwise.
//! - Steps with zero standard deviation copy the mean directly, since
//!   a zero-scale normal distribution is degenerate.
//!
//! Invariants & assumptions
//! ------------------------
//! - The ensemble matrix is `path_count × horizon`; row `p` is one
//!   complete trajectory.
//! - Single-threaded; a fixed seed fully determines the ensemble.
use crate::forecast::{engine::ForecastResult, errors::ForecastError};
use ndarray::Array2;
use rand::{SeedableRng, distributions::Distribution, rngs::StdRng};
use statrs::distribution::Normal;

/// Monte Carlo ensemble of simulated forecast trajectories.
///
/// Fields
/// ------
/// - `horizon`: steps per path.
/// - `path_count`: number of simulated paths.
/// - `paths`: `path_count × horizon` matrix, one row per path.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationEnsemble {
    pub horizon: usize,
    pub path_count: usize,
    pub paths: Array2<f64>,
}

/// Simulate `path_count` trajectories around `forecast`.
///
/// Each element is `mean[i] + shock`, with `shock ~ N(0, std[i]²)`
/// drawn independently per path and step.
///
/// # Errors
/// [`ForecastError::InvalidPathCount`] if `path_count == 0`.
pub fn simulate_paths(
    forecast: &ForecastResult, path_count: usize, seed: Option<u64>,
) -> Result<SimulationEnsemble, ForecastError> {
    if path_count == 0 {
        return Err(ForecastError::InvalidPathCount(path_count));
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    // Normal::new rejects a zero scale; those steps are deterministic.
    let step_shocks: Vec<Option<Normal>> = forecast
        .std
        .iter()
        .map(|&std| if std > 0.0 { Normal::new(0.0, std).ok() } else { None })
        .collect();
    let mut paths = Array2::zeros((path_count, forecast.horizon));
    for p in 0..path_count {
        for (i, shock) in step_shocks.iter().enumerate() {
            paths[(p, i)] = match shock {
                Some(dist) => forecast.mean[i] + dist.sample(&mut rng),
                None => forecast.mean[i],
            };
        }
    }
    Ok(SimulationEnsemble { horizon: forecast.horizon, path_count, paths })
}
