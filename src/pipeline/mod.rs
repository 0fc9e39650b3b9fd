//! pipeline — end-to-end orchestration of the forecasting chain.
//!
//! Purpose
//! -------
//! Wire the stages together: stationarity pre-check, mean-process fit,
//! variance fit on the residuals, forecast assembly, path simulation,
//! confidence band, and corridor breach check. Configuration lives in
//! [`PipelineConfig`]; every product of a run lives in the immutable
//! [`PipelineOutcome`].
//!
//! Layout
//! ------
//! - [`config`]: run configuration and its named defaults.
//! - [`errors`]: `PipelineError` / `PipelineResult`, the unified error
//!   surface.
//! - [`run`]: `run_pipeline` and `PipelineOutcome`.
//! - [`sinks`]: `SeriesSource` / `ResultSink` boundary traits, the text
//!   renderer, and `run_from_source`.

pub mod config;
pub mod errors;
pub mod run;
pub mod sinks;

// ---- Re-exports (primary public surface) ----
pub use self::config::{
    DEFAULT_CONFIDENCE_LEVEL, DEFAULT_HORIZON, DEFAULT_LOWER_LIMIT, DEFAULT_PATH_COUNT,
    DEFAULT_UPPER_LIMIT, PipelineConfig,
};
pub use self::errors::{PipelineError, PipelineResult};
pub use self::run::{PipelineOutcome, run_pipeline};
pub use self::sinks::{ResultSink, SeriesSource, TextSink, render_text, run_from_source};

/// Convenience prelude for downstream crates.
pub mod prelude {
    pub use super::config::PipelineConfig;
    pub use super::errors::{PipelineError, PipelineResult};
    pub use super::run::{PipelineOutcome, run_pipeline};
    pub use super::sinks::{ResultSink, SeriesSource, TextSink, render_text, run_from_source};
}
