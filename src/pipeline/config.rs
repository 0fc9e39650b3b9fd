//! pipeline::config — run configuration and its defaults.
//!
//! Purpose
//! -------
//! Hold every tunable of an end-to-end run in one value. Defaults are
//! named constants, never inlined at call sites, so the canonical
//! 30-day / 1000-path / 99% / ±1 run is spelled out in exactly one
//! place.
use crate::optimization::loglik_optimizer::MLEOptions;

/// Default forecast horizon in steps (days).
pub const DEFAULT_HORIZON: usize = 30;
/// Default number of Monte Carlo paths.
pub const DEFAULT_PATH_COUNT: usize = 1000;
/// Default two-sided confidence level for the band.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.99;
/// Default upper corridor limit.
pub const DEFAULT_UPPER_LIMIT: f64 = 1.0;
/// Default lower corridor limit.
pub const DEFAULT_LOWER_LIMIT: f64 = -1.0;

/// Configuration of a pipeline run.
///
/// Fields
/// ------
/// - `horizon`: forecast length in steps.
/// - `path_count`: Monte Carlo ensemble size.
/// - `confidence_level`: two-sided band level, strictly inside (0, 1).
/// - `upper_limit` / `lower_limit`: breach corridor.
/// - `seed`: optional RNG seed for reproducible ensembles.
/// - `mle_options`: optimizer settings shared by both model fits.
///
/// Numeric validity (positive horizon and path count, admissible
/// confidence level) is enforced by the forecast layer when the values
/// are used, so a config can be built freely and adjusted field by
/// field.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub horizon: usize,
    pub path_count: usize,
    pub confidence_level: f64,
    pub upper_limit: f64,
    pub lower_limit: f64,
    pub seed: Option<u64>,
    pub mle_options: MLEOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            path_count: DEFAULT_PATH_COUNT,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            upper_limit: DEFAULT_UPPER_LIMIT,
            lower_limit: DEFAULT_LOWER_LIMIT,
            seed: None,
            mle_options: MLEOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The default configuration matching the named constants.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the default config reproduces the canonical run
    // parameters.
    //
    // Given
    // -----
    // - PipelineConfig::default().
    //
    // Expect
    // ------
    // - 30 steps, 1000 paths, 0.99 level, ±1 corridor, no seed.
    fn default_config_matches_named_constants() {
        // Arrange / Act
        let config = PipelineConfig::default();

        // Assert
        assert_eq!(config.horizon, DEFAULT_HORIZON);
        assert_eq!(config.path_count, DEFAULT_PATH_COUNT);
        assert_eq!(config.confidence_level, DEFAULT_CONFIDENCE_LEVEL);
        assert_eq!(config.upper_limit, DEFAULT_UPPER_LIMIT);
        assert_eq!(config.lower_limit, DEFAULT_LOWER_LIMIT);
        assert_eq!(config.seed, None);
    }
}
