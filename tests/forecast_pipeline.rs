//! Integration tests for the end-to-end forecasting pipeline.
//!
//! These scenarios exercise the public surface only: a dated series in,
//! a full [`PipelineOutcome`] out. The canonical fixture is a 60-day
//! oscillating series with small noise, whose 99% band stays well
//! inside the ±1 corridor; scaling the same series a hundredfold blows
//! the band through the upper limit.
use chrono::{Days, NaiveDate};
use duration_forecast::prelude::*;
use ndarray::Array1;

// -------------------------------------------------------------------------
// Scope
// -----
// These tests cover:
// - The quiet 60-observation scenario producing no corridor breach.
// - A hundredfold volatility scale-up producing an upper breach.
// - Band monotonicity in the confidence level at the pipeline level.
// - Ensemble reproducibility and convergence under a fixed seed.
//
// They intentionally DO NOT cover:
// - Stage-level edge cases; the unit tests in each module own those.
// -------------------------------------------------------------------------

/// Deterministic noise in [-1, 1) from a 64-bit LCG, same generator as
/// the in-crate test fixtures.
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

/// 60 daily observations oscillating around zero with small noise,
/// scaled by `scale`.
fn oscillating_series(scale: f64) -> ObservedSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let n = 60;
    let dates = (0..n).map(|i| start + Days::new(i as u64)).collect();
    let noise = lcg_noise(21, n);
    let values = Array1::from(
        (0..n)
            .map(|t| scale * (0.5 * if t % 2 == 0 { 1.0 } else { -1.0 } + 0.1 * noise[t]))
            .collect::<Vec<_>>(),
    );
    ObservedSeries::new(dates, values).expect("series should be valid")
}

fn config_with_seed(seed: u64) -> PipelineConfig {
    PipelineConfig { seed: Some(seed), ..PipelineConfig::default() }
}

#[test]
// Purpose
// -------
// Verify the quiet scenario: a bounded oscillation far inside the
// corridor produces no breach on either side over the default 30-day
// horizon.
//
// Given
// -----
// - The 60-observation oscillating series at unit scale, default
//   config (0.99 level, ±1 corridor, 1000 paths) with a fixed seed.
//
// Expect
// ------
// - breach_upper == false and breach_lower == false, with all pipeline
//   products sized to the 30-step horizon.
fn quiet_oscillation_stays_inside_the_corridor() {
    // Arrange
    let series = oscillating_series(1.0);
    let config = config_with_seed(7);

    // Act
    let outcome = run_pipeline(&series, &config).expect("pipeline should succeed");

    // Assert
    assert!(!outcome.breach.breach_upper);
    assert!(!outcome.breach.breach_lower);
    assert_eq!(outcome.forecast.horizon, 30);
    assert_eq!(outcome.band.upper.len(), 30);
    assert_eq!(outcome.ensemble.paths.dim(), (1000, 30));
}

#[test]
// Purpose
// -------
// Verify the shocked scenario: injecting a hundredfold variance shock
// into the residual feed (values ×10) inflates the fitted volatility
// until the upper band edge leaves the corridor, while the mean path
// stays small. The unshocked residual feed stays breach-free.
//
// Given
// -----
// - ARMA fitted on the quiet 60-day series; GARCH fitted once on the
//   raw residuals and once on the shocked residuals; 99% bands against
//   the ±1 corridor over 30 steps.
//
// Expect
// ------
// - breach_upper == false for the quiet feed, true for the shocked one.
fn volatility_shock_in_the_residual_feed_breaches_the_upper_limit() {
    // Arrange
    let series = oscillating_series(1.0);
    let values = series.values().to_owned();
    let mut arma = ArmaModel::default();
    arma.fit(&values).expect("mean fit should succeed");
    let arma_fit = arma.fitted().expect("fitted state should be present").clone();
    let last_residual = arma_fit.residuals[arma_fit.residuals.len() - 1];
    // Variance scales with the square of the residuals.
    let shocked_residuals = arma_fit.residuals.mapv(|e| 10.0 * e);

    let mut quiet_garch = GarchModel::default();
    quiet_garch.fit(&arma_fit.residuals).expect("quiet variance fit should succeed");
    let mut shocked_garch = GarchModel::default();
    shocked_garch.fit(&shocked_residuals).expect("shocked variance fit should succeed");

    let mean = arma_fit.forecast(series.last_value(), 30).expect("mean forecast should succeed");

    // Act
    let quiet_std = quiet_garch
        .fitted()
        .expect("fitted state should be present")
        .forecast_volatility(last_residual, 30)
        .expect("volatility forecast should succeed");
    let shocked_std = shocked_garch
        .fitted()
        .expect("fitted state should be present")
        .forecast_volatility(10.0 * last_residual, 30)
        .expect("volatility forecast should succeed");
    let quiet_forecast =
        ForecastResult::new(mean.clone(), quiet_std).expect("forecast should assemble");
    let shocked_forecast =
        ForecastResult::new(mean, shocked_std).expect("forecast should assemble");
    let quiet_band = build_band(&quiet_forecast, 0.99).expect("band should build");
    let shocked_band = build_band(&shocked_forecast, 0.99).expect("band should build");
    let quiet_report = check_breach(&quiet_band, 1.0, -1.0);
    let shocked_report = check_breach(&shocked_band, 1.0, -1.0);

    // Assert
    assert!(!quiet_report.breach_upper);
    assert!(shocked_report.breach_upper);
}

#[test]
// Purpose
// -------
// Verify that raising the confidence level from 0.95 to 0.99 widens
// the band at every step, end to end.
//
// Given
// -----
// - Two runs on the same series and seed, differing only in level.
//
// Expect
// ------
// - The 0.99 band contains the 0.95 band elementwise, strictly
//   wherever the forecast volatility is positive.
fn higher_confidence_level_widens_the_band_end_to_end() {
    // Arrange
    let series = oscillating_series(1.0);
    let narrow_config = PipelineConfig { confidence_level: 0.95, ..config_with_seed(7) };
    let wide_config = PipelineConfig { confidence_level: 0.99, ..config_with_seed(7) };

    // Act
    let narrow = run_pipeline(&series, &narrow_config).expect("pipeline should succeed");
    let wide = run_pipeline(&series, &wide_config).expect("pipeline should succeed");

    // Assert
    for i in 0..30 {
        assert!(wide.band.upper[i] > narrow.band.upper[i]);
        assert!(wide.band.lower[i] < narrow.band.lower[i]);
    }
}

#[test]
// Purpose
// -------
// Verify ensemble reproducibility and convergence: a fixed seed
// reproduces the ensemble exactly, and with 1000 paths the per-step
// ensemble average tracks the forecast mean.
//
// Given
// -----
// - Two runs with seed 42 and one with seed 43 on the same series.
//
// Expect
// ------
// - Identical ensembles for the repeated seed, a different ensemble
//   for the other seed, and per-step sample means and standard
//   deviations within a few standard errors of the forecast values.
fn fixed_seed_reproduces_and_converges() {
    // Arrange
    let series = oscillating_series(1.0);

    // Act
    let a = run_pipeline(&series, &config_with_seed(42)).expect("pipeline should succeed");
    let b = run_pipeline(&series, &config_with_seed(42)).expect("pipeline should succeed");
    let c = run_pipeline(&series, &config_with_seed(43)).expect("pipeline should succeed");

    // Assert
    assert_eq!(a.ensemble.paths, b.ensemble.paths);
    assert_ne!(a.ensemble.paths, c.ensemble.paths);
    for i in 0..30 {
        let column = a.ensemble.paths.column(i);
        let column_mean = column.sum() / 1000.0;
        // Five standard errors of the per-step sample mean.
        let mean_tolerance = 5.0 * a.forecast.std[i] / (1000.0_f64).sqrt() + 1e-12;
        assert!(
            (column_mean - a.forecast.mean[i]).abs() <= mean_tolerance,
            "step {i}: ensemble mean {column_mean} vs forecast mean {}",
            a.forecast.mean[i]
        );
        let column_std =
            (column.mapv(|x| (x - column_mean) * (x - column_mean)).sum() / 999.0).sqrt();
        // Five standard errors of a normal sample's standard deviation,
        // sigma / sqrt(2n).
        let std_tolerance = 5.0 * a.forecast.std[i] / (2000.0_f64).sqrt() + 1e-12;
        assert!(
            (column_std - a.forecast.std[i]).abs() <= std_tolerance,
            "step {i}: ensemble std {column_std} vs forecast std {}",
            a.forecast.std[i]
        );
    }
}
