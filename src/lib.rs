//! duration_forecast — ARMA-GARCH forecasting of an active-duration series
//! with Monte Carlo confidence bands and IPS-limit breach detection.
//!
//! Purpose
//! -------
//! Turn a historical daily "active duration" series into a one-month-ahead
//! forecast with a calibrated uncertainty envelope and a boolean risk signal
//! against fixed policy thresholds (IPS limits). The crate covers the full
//! statistical pipeline: stationarity diagnosis, ARMA(1,1) mean estimation,
//! GARCH(1,1) volatility estimation on the mean-process residuals, horizon
//! forecasting of both processes, Monte Carlo path simulation, confidence-band
//! construction, and threshold evaluation.
//!
//! Key behaviors
//! -------------
//! - Validate input once into an immutable [`series::ObservedSeries`] that all
//!   downstream stages read and none mutate.
//! - Diagnose stationarity via an augmented Dickey–Fuller test
//!   ([`statistical_tests`]); the verdict is reported but never gates fitting.
//! - Fit both models by maximum likelihood through a shared Argmin-backed
//!   L-BFGS layer ([`optimization`]), with parameters mapped from an
//!   unconstrained θ-space into their stationarity/positivity domains.
//! - Combine mean and volatility forecasts into a [`forecast::ForecastResult`],
//!   simulate a seedable normal path ensemble, derive a symmetric confidence
//!   band, and evaluate it against configurable upper/lower limits.
//! - Orchestrate the whole flow as a single linear pipeline ([`pipeline`])
//!   that aborts on the first typed error; there is no partial-forecast mode.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numeric sequences are finite `f64` arrays; constructors reject NaN
//!   and ±∞ up front so inner loops can assume well-formed data.
//! - Fitted GARCH parameters must satisfy `alpha + beta < 1`; a violating fit
//!   is surfaced as an error, never clamped or silently accepted.
//! - Residual, variance, and forecast sequences keep strict index alignment
//!   with the series (or horizon) that produced them.
//! - The crate performs no I/O and no logging; data loading and rendering
//!   live behind the [`pipeline::SeriesSource`] and [`pipeline::ResultSink`]
//!   boundary traits. The only observer surface is the optional `obs_slog`
//!   feature on the optimizer layer.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; forecast index `i` is the (i+1)-step-ahead value.
//! - Each module carries its own error enum and `Result` alias; the pipeline
//!   unifies them into [`pipeline::PipelineError`] via `From` conversions.
//! - Magic numbers from the originating workflow (horizon 30, 1000 paths,
//!   99% confidence, ±1 limits) exist only as named defaults on
//!   [`pipeline::PipelineConfig`].
//!
//! Downstream usage
//! ----------------
//! - Typical flow: build an [`series::ObservedSeries`] (directly or through a
//!   `SeriesSource`), call [`pipeline::run_pipeline`] with a
//!   [`pipeline::PipelineConfig`], and hand the resulting
//!   [`pipeline::PipelineOutcome`] to a `ResultSink` for rendering.
//! - Advanced callers can drive the stages individually: `ArmaModel::fit`,
//!   `GarchModel::fit`, `build_forecast`, `simulate_paths`, `build_band`,
//!   `check_breach`.

pub mod arma;
pub mod forecast;
pub mod garch;
pub mod optimization;
pub mod pipeline;
pub mod series;
pub mod statistical_tests;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use duration_forecast::prelude::*;
//
// to import the main pipeline surface in a single line.

pub mod prelude {
    pub use crate::arma::{ArmaFit, ArmaModel, ArmaParams};
    pub use crate::forecast::{
        BreachReport, ConfidenceBand, ForecastResult, SimulationEnsemble, build_band,
        build_forecast, check_breach, simulate_paths,
    };
    pub use crate::garch::{GarchFit, GarchModel, GarchParams};
    pub use crate::pipeline::{
        PipelineConfig, PipelineError, PipelineOutcome, PipelineResult, ResultSink, SeriesSource,
        run_pipeline,
    };
    pub use crate::series::{ObservedSeries, SeriesError, SeriesResult};
    pub use crate::statistical_tests::{AdfOutcome, Verdict};
}
