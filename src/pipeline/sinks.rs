//! pipeline::sinks — boundary traits and the default text renderer.
//!
//! Purpose
//! -------
//! Keep the pipeline core free of I/O. A [`SeriesSource`] produces the
//! validated input series; a [`ResultSink`] consumes the finished
//! [`PipelineOutcome`]. The core depends on neither concrete
//! implementation, and [`run_from_source`] wires the three together for
//! callers that want the whole chain in one call.
//!
//! Key behaviors
//! -------------
//! - [`render_text`] reproduces the classic console report: the ADF
//!   statistic and p-value, the stationarity verdict, and the corridor
//!   breach warning.
//! - [`TextSink`] writes that report to any `std::io::Write`.
use crate::pipeline::{
    config::PipelineConfig,
    errors::{PipelineError, PipelineResult},
    run::{PipelineOutcome, run_pipeline},
};
use crate::series::ObservedSeries;
use std::io::Write;

/// Producer of a validated input series.
pub trait SeriesSource {
    fn series(&self) -> PipelineResult<ObservedSeries>;
}

/// Consumer of a finished pipeline outcome.
pub trait ResultSink {
    fn consume(&mut self, outcome: &PipelineOutcome) -> PipelineResult<()>;
}

/// Pull a series from `source`, run the pipeline, and hand the outcome
/// to `sink`. The outcome is also returned for further inspection.
pub fn run_from_source<S: SeriesSource, K: ResultSink>(
    source: &S, sink: &mut K, config: &PipelineConfig,
) -> PipelineResult<PipelineOutcome> {
    let series = source.series()?;
    let outcome = run_pipeline(&series, config)?;
    sink.consume(&outcome)?;
    Ok(outcome)
}

/// Render the console report for a finished run.
///
/// Wording follows the traditional report: an ADF line, a p-value
/// line, a verdict line, and a one-line risk summary against the IPS
/// corridor.
pub fn render_text(outcome: &PipelineOutcome, config: &PipelineConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("ADF Statistic: {}\n", outcome.stationarity.stat()));
    out.push_str(&format!("p-value: {}\n", outcome.stationarity.p_value()));
    if outcome.stationarity.verdict().is_stationary() {
        out.push_str("The data is stationary (p-value <= 0.05).\n");
    } else {
        out.push_str(
            "The data is non-stationary (p-value > 0.05). Consider differencing the data.\n",
        );
    }
    if outcome.breach.any() {
        out.push_str(
            "Warning: There is a risk of breaching the IPS limits in the forecast period.\n",
        );
    } else {
        out.push_str(&format!(
            "The forecast suggests minimal risk of breaching the IPS limits \
             in the forecast period ({:.0}% confidence).\n",
            config.confidence_level * 100.0
        ));
    }
    out
}

/// A [`ResultSink`] that writes the text report to any writer.
pub struct TextSink<W: Write> {
    writer: W,
    config: PipelineConfig,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W, config: PipelineConfig) -> Self {
        Self { writer, config }
    }

    /// Consume the sink and recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for TextSink<W> {
    fn consume(&mut self, outcome: &PipelineOutcome) -> PipelineResult<()> {
        self.writer
            .write_all(render_text(outcome, &self.config).as_bytes())
            .map_err(|err| PipelineError::Render(err.to_string()))
    }
}
