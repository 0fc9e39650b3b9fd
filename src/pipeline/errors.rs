//! pipeline::errors — unified error surface for the end-to-end run.
//!
//! Purpose
//! -------
//! Collect every stage's error type behind one enum so callers handle a
//! single `Result`. Each stage error converts in via `From`, which lets
//! the pipeline body be a straight sequence of `?` operators.
//!
//! Conventions
//! -----------
//! - The dependency points one way: the pipeline wraps stage errors;
//!   no stage module knows about [`PipelineError`].
use crate::arma::errors::ArmaError;
use crate::forecast::errors::ForecastError;
use crate::garch::errors::GarchError;
use crate::series::errors::SeriesError;
use crate::statistical_tests::errors::AdfError;

pub type PipelineResult<T> = Result<T, PipelineError>;

/// PipelineError — any failure of the forecasting pipeline.
///
/// Variants
/// --------
/// - `Series(SeriesError)` — input series construction or validation.
/// - `Stationarity(AdfError)` — the ADF pre-check.
/// - `Arma(ArmaError)` — mean-process fitting.
/// - `Garch(GarchError)` — variance-process fitting.
/// - `Forecast(ForecastError)` — forecast assembly, simulation, band
///   building, or their parameter validation.
/// - `Render(String)` — a result sink failed to write its output; the
///   payload is the underlying I/O error text.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    Series(SeriesError),
    Stationarity(AdfError),
    Arma(ArmaError),
    Garch(GarchError),
    Forecast(ForecastError),
    Render(String),
}

impl std::error::Error for PipelineError {}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Series(err) => write!(f, "Series error: {err}"),
            PipelineError::Stationarity(err) => write!(f, "Stationarity test error: {err}"),
            PipelineError::Arma(err) => write!(f, "ARMA error: {err}"),
            PipelineError::Garch(err) => write!(f, "GARCH error: {err}"),
            PipelineError::Forecast(err) => write!(f, "Forecast error: {err}"),
            PipelineError::Render(text) => write!(f, "Render error: {text}"),
        }
    }
}

impl From<SeriesError> for PipelineError {
    fn from(err: SeriesError) -> Self {
        PipelineError::Series(err)
    }
}

impl From<AdfError> for PipelineError {
    fn from(err: AdfError) -> Self {
        PipelineError::Stationarity(err)
    }
}

impl From<ArmaError> for PipelineError {
    fn from(err: ArmaError) -> Self {
        PipelineError::Arma(err)
    }
}

impl From<GarchError> for PipelineError {
    fn from(err: GarchError) -> Self {
        PipelineError::Garch(err)
    }
}

impl From<ForecastError> for PipelineError {
    fn from(err: ForecastError) -> Self {
        PipelineError::Forecast(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Stage-error conversions and their `Display` nesting.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that each stage error converts into its pipeline variant
    // and that the display nests the stage message.
    //
    // Given
    // -----
    // - An AdfError and a GarchError converted via `From`.
    //
    // Expect
    // ------
    // - Matching variants; the GARCH display contains the persistence
    //   message.
    fn stage_errors_wrap_into_pipeline_error() {
        // Arrange / Act
        let adf: PipelineError = AdfError::DegenerateSeries.into();
        let garch: PipelineError = GarchError::NonStationaryVariance { coeff_sum: 1.1 }.into();

        // Assert
        assert!(matches!(adf, PipelineError::Stationarity(AdfError::DegenerateSeries)));
        assert!(format!("{garch}").contains("1.1"));
    }
}
