//! pipeline::run — the end-to-end forecasting sequence.
//!
//! Purpose
//! -------
//! Execute the full chain on a validated series, strictly in order and
//! aborting on the first error:
//!
//! 1. ADF stationarity pre-check (recorded, never gating).
//! 2. ARMA(1,1) fit on the series.
//! 3. GARCH(1,1) fit on the ARMA residuals.
//! 4. Forecast assembly at the configured horizon.
//! 5. Monte Carlo path simulation.
//! 6. Confidence band construction.
//! 7. Corridor breach check.
//!
//! Every intermediate product is carried in the immutable
//! [`PipelineOutcome`]; nothing is shared through mutable state between
//! stages.
use crate::arma::model::ArmaModel;
use crate::forecast::{
    band::{ConfidenceBand, build_band},
    breach::{BreachReport, check_breach},
    engine::{ForecastResult, build_forecast},
    simulate::{SimulationEnsemble, simulate_paths},
};
use crate::garch::model::GarchModel;
use crate::pipeline::{config::PipelineConfig, errors::PipelineResult};
use crate::series::ObservedSeries;
use crate::statistical_tests::adf::AdfOutcome;
use chrono::{Days, NaiveDate};
use ndarray::Array1;

/// Everything a single pipeline run produces.
///
/// Fields
/// ------
/// - `stationarity`: the ADF pre-check result (informational).
/// - `forecast`: mean and per-step volatility paths.
/// - `ensemble`: simulated trajectories around the forecast.
/// - `band`: two-sided confidence band at the configured level.
/// - `breach`: corridor check of the band.
/// - `last_date`: final observation date, anchor for forecast dates.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub stationarity: AdfOutcome,
    pub forecast: ForecastResult,
    pub ensemble: SimulationEnsemble,
    pub band: ConfidenceBand,
    pub breach: BreachReport,
    pub last_date: NaiveDate,
}

impl PipelineOutcome {
    /// Calendar dates for the forecast steps: the day after the last
    /// observation through `horizon` days out.
    pub fn forecast_dates(&self) -> Vec<NaiveDate> {
        (1..=self.forecast.horizon as u64)
            .map(|i| self.last_date + Days::new(i))
            .collect()
    }
}

/// Run the full forecasting pipeline on a validated series.
///
/// The stationarity verdict is recorded in the outcome but does not
/// stop the run; all other stage failures abort immediately.
///
/// # Errors
/// Any stage error, wrapped into [`crate::pipeline::PipelineError`].
pub fn run_pipeline(
    series: &ObservedSeries, config: &PipelineConfig,
) -> PipelineResult<PipelineOutcome> {
    let values_vec = series.values().to_vec();
    let stationarity = AdfOutcome::adf(&values_vec)?;
    let values = Array1::from(values_vec);

    let mut arma = ArmaModel::new(config.mle_options.clone());
    arma.fit(&values)?;
    let arma_fit = arma.fitted()?.clone();

    let mut garch = GarchModel::new(config.mle_options.clone());
    garch.fit(&arma_fit.residuals)?;
    let garch_fit = garch.fitted()?.clone();

    let forecast = build_forecast(&arma_fit, &garch_fit, series, config.horizon)?;
    let ensemble = simulate_paths(&forecast, config.path_count, config.seed)?;
    let band = build_band(&forecast, config.confidence_level)?;
    let breach = check_breach(&band, config.upper_limit, config.lower_limit);

    Ok(PipelineOutcome {
        stationarity,
        forecast,
        ensemble,
        band,
        breach,
        last_date: series.last_date(),
    })
}
