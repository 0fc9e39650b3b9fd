//! statistical_tests::adf — augmented Dickey–Fuller unit-root test.
//!
//! Purpose
//! -------
//! Implement the augmented Dickey–Fuller (ADF) test for a unit root in a
//! univariate series, with a constant term and no deterministic trend.
//! Provides a data-driven lag selector (AIC) and a MacKinnon-style
//! approximate p-value for the t-statistic on the lagged level.
//!
//! Key behaviors
//! -------------
//! - Regress Δyₜ on a constant, the lagged level yₜ₋₁, and lagged
//!   differences Δyₜ₋₁,…,Δyₜ₋ₖ via OLS.
//! - Bound the candidate lag order by the Schwert rule
//!   ⌊12·(n/100)^{1/4}⌋ and select k by minimizing AIC on a common
//!   sample, as automatic lag selection does in standard econometrics
//!   packages.
//! - Map the resulting τ statistic into an approximate p-value using the
//!   MacKinnon (1994) response-surface regression for the
//!   constant-no-trend case.
//! - Classify the series via [`Verdict`] against the fixed 5%
//!   significance level.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input validation (length, finiteness, degeneracy) is delegated to
//!   `statistical_tests::validation::validate_input`, which returns
//!   [`AdfResult`] rather than panicking.
//! - The regression always includes a constant; the caller cannot select
//!   other deterministic specifications.
//! - Candidate lags whose regressions are singular on the common sample
//!   are skipped during selection; the test fails only when no candidate
//!   lag admits a well-posed regression.
//!
//! Conventions
//! -----------
//! - Differences are indexed as Δyₜ = yₜ₊₁ − yₜ for t = 0,…,n−2, so the
//!   lagged level paired with Δyₜ is yₜ.
//! - A p-value at or below [`ADF_SIGNIFICANCE`] yields
//!   [`Verdict::Stationary`]; the boundary itself counts as rejection of
//!   the unit root.
//! - Error handling uses the dedicated [`AdfError`] type from
//!   `statistical_tests::errors` and the result alias
//!   [`AdfResult<T> = Result<T, AdfError>`].
//!
//! Downstream usage
//! ----------------
//! - Call [`AdfOutcome::adf`] on the raw observed series before model
//!   fitting; the forecasting pipeline records the verdict and proceeds
//!   to differencing decisions based on it.
//! - Higher-level reporting uses the accessors (`stat`, `p_value`,
//!   `used_lag`, `verdict`) without depending on the internal layout.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module verify the Schwert lag bound, the
//!   monotone mapping from τ to p-value, the verdict boundary at the 5%
//!   level, and end-to-end behavior on synthetic stationary and
//!   unit-root series.
//! - Entry-point validation is exercised by tests that pass invalid
//!   inputs to [`AdfOutcome::adf`] and assert an error is returned
//!   rather than a panic.
use crate::statistical_tests::errors::{AdfError, AdfResult};
use crate::statistical_tests::validation::validate_input;
use nalgebra::{DMatrix, DVector};
use statrs::distribution::{ContinuousCDF, Normal};

/// Significance level used to turn an ADF p-value into a [`Verdict`].
pub const ADF_SIGNIFICANCE: f64 = 0.05;

// MacKinnon (1994) response-surface coefficients for the
// constant-no-trend specification, with the admissible τ range outside
// which the approximation is pinned to 0 or 1.
const MACKINNON_COEFFS: [f64; 3] = [2.1659, 1.4412, 0.038269];
const MACKINNON_TAU_MIN: f64 = -18.83;
const MACKINNON_TAU_MAX: f64 = 2.74;

/// Classification of a series by the ADF test at the 5% level.
///
/// - `Stationary`: the unit-root null was rejected (p ≤ 0.05).
/// - `NonStationary`: the unit-root null was not rejected (p > 0.05).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    Stationary,
    NonStationary,
}

impl Verdict {
    /// Map a p-value to a verdict against [`ADF_SIGNIFICANCE`].
    ///
    /// The boundary is inclusive: a p-value exactly equal to the
    /// significance level rejects the unit root.
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value <= ADF_SIGNIFICANCE { Verdict::Stationary } else { Verdict::NonStationary }
    }

    /// Convenience predicate for pipeline control flow.
    pub fn is_stationary(&self) -> bool {
        matches!(self, Verdict::Stationary)
    }
}

/// AdfOutcome — outcome of the augmented Dickey–Fuller test.
///
/// Purpose
/// -------
/// Represent the outcome of a single ADF run: the τ statistic at the
/// AIC-selected lag order, its approximate p-value, the lag order used,
/// and the resulting stationarity verdict.
///
/// Fields
/// ------
/// - `stat`: `f64`
///   The τ statistic, i.e. the OLS t-ratio on the lagged level.
/// - `p_value`: `f64`
///   Approximate MacKinnon p-value of `stat`, in [0, 1].
/// - `used_lag`: `usize`
///   The AIC-selected number of lagged differences in the regression.
/// - `verdict`: [`Verdict`]
///   Classification against the 5% significance level.
///
/// Invariants
/// ----------
/// - `stat` is finite whenever construction succeeds.
/// - `p_value` lies in the closed interval [0, 1].
/// - `used_lag` never exceeds the Schwert bound for the input length.
///
/// Notes
/// -----
/// - Designed as a simple value object; it does not own the original
///   data and derives `Copy`, making it cheap to pass around.
#[derive(Debug, Copy, Clone)]
pub struct AdfOutcome {
    stat: f64,
    p_value: f64,
    used_lag: usize,
    verdict: Verdict,
}

impl AdfOutcome {
    /// Run the augmented Dickey–Fuller test with automatic lag selection.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Input series {yₜ} of length n ≥ 20 with finite, non-constant
    ///   values.
    ///
    /// Returns
    /// -------
    /// `AdfResult<AdfOutcome>`
    ///   - `Ok(AdfOutcome)` on success, containing the τ statistic at
    ///     the selected lag, its p-value, the lag used, and the verdict.
    ///   - `Err(AdfError)` when validation fails or no candidate lag
    ///     admits a well-posed regression.
    ///
    /// Errors
    /// ------
    /// - `AdfError::InsufficientData`, `AdfError::InvalidData`,
    ///   `AdfError::DegenerateSeries` from input validation.
    /// - `AdfError::SingularDesign(lag)` when every candidate regression
    ///   has collinear regressors.
    /// - `AdfError::ZeroResidualVariance(lag)` when the selected
    ///   regression fits the differences exactly.
    ///
    /// Panics
    /// ------
    /// - Never panics under normal operation; all user-facing invalid
    ///   inputs are surfaced as `AdfError` values.
    ///
    /// Notes
    /// -----
    /// - Internally, this method:
    ///   - differences the series once,
    ///   - bounds the lag order by the Schwert rule,
    ///   - fits each candidate lag on the common (maxlag-trimmed)
    ///     sample and scores it by AIC,
    ///   - refits the winning lag on its full available sample, and
    ///   - converts the τ statistic into a p-value via the MacKinnon
    ///     approximation.
    pub fn adf(data: &[f64]) -> AdfResult<Self> {
        validate_input(data)?;
        let diffs: Vec<f64> = data.windows(2).map(|w| w[1] - w[0]).collect();
        let max_lag = schwert_max_lag(data.len());
        let used_lag = select_lag_by_aic(data, &diffs, max_lag)?;
        let fit = fit_adf_regression(data, &diffs, used_lag, used_lag)?;
        let stat = fit.tau;
        let p_value = mackinnon_p(stat);

        Ok(AdfOutcome { stat, p_value, used_lag, verdict: Verdict::from_p_value(p_value) })
    }

    /// The τ statistic (t-ratio on the lagged level).
    pub fn stat(&self) -> f64 {
        self.stat
    }

    /// Approximate MacKinnon p-value of [`stat`](Self::stat).
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// AIC-selected number of lagged differences.
    pub fn used_lag(&self) -> usize {
        self.used_lag
    }

    /// Stationarity classification at the 5% level.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

//
// ---------- Private helpers (compact docs) ----------
//

/// OLS results needed by the lag selector and the final statistic.
struct AdfRegression {
    tau: f64,
    ssr: f64,
    nobs: usize,
    nparams: usize,
}

/// Schwert (1989) rule of thumb for the maximum lag order,
/// ⌊12·(n/100)^{1/4}⌋, capped so the common estimation sample keeps a
/// workable number of degrees of freedom.
#[inline]
fn schwert_max_lag(n: usize) -> usize {
    let schwert = (12.0 * (n as f64 / 100.0).powf(0.25)).floor() as usize;
    let diffs_len = n - 1;
    let cap = (diffs_len / 2).saturating_sub(2);
    schwert.min(cap)
}

/// Fit the ADF regression Δyₜ = β₀ + ρ·yₜ + Σᵢ γᵢ·Δyₜ₋ᵢ + εₜ for a given
/// lag order, using rows t = trim,…,m−1 where m = diffs.len().
///
/// `trim` controls the first usable row: lag selection passes the shared
/// maxlag so all candidates see the same sample; the final refit passes
/// `lag` to use every available observation.
///
/// Returns the t-ratio on ρ together with the sums needed for AIC.
fn fit_adf_regression(
    data: &[f64], diffs: &[f64], lag: usize, trim: usize,
) -> AdfResult<AdfRegression> {
    let m = diffs.len();
    let nparams = lag + 2;
    let nobs = m - trim;
    if nobs <= nparams {
        return Err(AdfError::InsufficientData { n: data.len(), min: nparams + trim + 2 });
    }

    let x = DMatrix::from_fn(nobs, nparams, |r, c| {
        let t = trim + r;
        match c {
            0 => 1.0,
            1 => data[t],
            _ => diffs[t - (c - 1)],
        }
    });
    let y = DVector::from_fn(nobs, |r, _| diffs[trim + r]);

    let xtx = x.transpose() * &x;
    let xtx_inv = xtx.try_inverse().ok_or(AdfError::SingularDesign(lag))?;
    let coefs = &xtx_inv * (x.transpose() * &y);
    let residuals = &y - &x * &coefs;
    let ssr = residuals.dot(&residuals);

    let dof = (nobs - nparams) as f64;
    let sigma2 = ssr / dof;
    let se_rho = (sigma2 * xtx_inv[(1, 1)]).sqrt();
    if !se_rho.is_finite() || se_rho <= 0.0 {
        return Err(AdfError::ZeroResidualVariance(lag));
    }

    Ok(AdfRegression { tau: coefs[1] / se_rho, ssr, nobs, nparams })
}

/// Select the lag order 0..=max_lag minimizing AIC on the common
/// maxlag-trimmed sample. Candidates whose regressions are singular or
/// degenerate are skipped; if every candidate fails the last error is
/// propagated.
fn select_lag_by_aic(data: &[f64], diffs: &[f64], max_lag: usize) -> AdfResult<usize> {
    let mut best: Option<(usize, f64)> = None;
    let mut last_err = AdfError::SingularDesign(0);

    for lag in 0..=max_lag {
        match fit_adf_regression(data, diffs, lag, max_lag) {
            Ok(fit) => {
                let n = fit.nobs as f64;
                let aic = n * (fit.ssr / n).ln() + 2.0 * fit.nparams as f64;
                if best.map_or(true, |(_, best_aic)| aic < best_aic) {
                    best = Some((lag, aic));
                }
            }
            Err(e) => last_err = e,
        }
    }

    match best {
        Some((lag, _)) => Ok(lag),
        None => Err(last_err),
    }
}

/// Approximate p-value for the τ statistic via the MacKinnon (1994)
/// response-surface regression (constant, no trend). Outside the
/// admissible τ range the p-value is pinned to 0 or 1.
#[inline]
fn mackinnon_p(tau: f64) -> f64 {
    if tau < MACKINNON_TAU_MIN {
        return 0.0;
    }
    if tau > MACKINNON_TAU_MAX {
        return 1.0;
    }
    let z = MACKINNON_COEFFS[0] + MACKINNON_COEFFS[1] * tau + MACKINNON_COEFFS[2] * tau * tau;
    let normal = Normal::new(0.0, 1.0).expect("standard normal");
    normal.cdf(z).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The Schwert lag bound and its small-sample cap.
    // - Monotonicity and boundary pinning of the MacKinnon approximation.
    // - The inclusive 5% verdict boundary.
    // - End-to-end behavior on synthetic stationary and unit-root series.
    //
    // They intentionally DO NOT cover:
    // - Asymptotic size or power properties of the test (handled by
    //   simulation studies, not unit tests).
    // -------------------------------------------------------------------------

    /// Deterministic noise in (-1, 1) from a 64-bit LCG. Used to build
    /// reproducible stationary and random-walk test series.
    fn lcg_noise(len: usize, seed: u64) -> Vec<f64> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                ((state >> 33) as f64 / (1u64 << 30) as f64) - 1.0
            })
            .collect()
    }

    #[test]
    // Purpose
    // -------
    // Verify the Schwert bound at a round sample size and its cap for
    // short series.
    //
    // Given
    // -----
    // - n = 100 (Schwert gives exactly 12) and n = 20 (Schwert gives 8
    //   but the degrees-of-freedom cap binds at 7).
    //
    // Expect
    // ------
    // - schwert_max_lag(100) == 12 and schwert_max_lag(20) == 7.
    fn schwert_max_lag_matches_rule_and_cap() {
        // Arrange / Act / Assert
        assert_eq!(schwert_max_lag(100), 12);
        assert_eq!(schwert_max_lag(20), 7);
    }

    #[test]
    // Purpose
    // -------
    // Verify that the MacKinnon approximation is monotone increasing in
    // τ on the admissible range and pinned to 0/1 outside it.
    //
    // Given
    // -----
    // - A grid of τ values spanning the admissible range, plus extremes.
    //
    // Expect
    // ------
    // - p(-25) == 0.0 and p(5) == 1.0.
    // - p is non-decreasing across the grid and always in [0, 1].
    fn mackinnon_p_is_monotone_and_pinned() {
        // Arrange
        let grid = [-18.0, -10.0, -5.0, -3.0, -1.0, 0.0, 1.0, 2.5];

        // Act / Assert
        assert_eq!(mackinnon_p(-25.0), 0.0);
        assert_eq!(mackinnon_p(5.0), 1.0);
        let mut prev = 0.0;
        for &tau in &grid {
            let p = mackinnon_p(tau);
            assert!((0.0..=1.0).contains(&p), "p-value out of range at tau = {tau}: {p}");
            assert!(p >= prev, "p-value should be non-decreasing at tau = {tau}");
            prev = p;
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the verdict boundary: a p-value exactly at the significance
    // level counts as stationary, anything above does not.
    //
    // Given
    // -----
    // - p-values of 0.05, 0.050001, and 0.01.
    //
    // Expect
    // ------
    // - Stationary, NonStationary, Stationary respectively.
    fn verdict_boundary_is_inclusive_at_five_percent() {
        // Arrange / Act / Assert
        assert_eq!(Verdict::from_p_value(0.05), Verdict::Stationary);
        assert_eq!(Verdict::from_p_value(0.050001), Verdict::NonStationary);
        assert_eq!(Verdict::from_p_value(0.01), Verdict::Stationary);
        assert!(Verdict::Stationary.is_stationary());
        assert!(!Verdict::NonStationary.is_stationary());
    }

    #[test]
    // Purpose
    // -------
    // Verify that white noise is classified as stationary with a
    // strongly negative τ statistic.
    //
    // Given
    // -----
    // - 200 observations of deterministic LCG noise.
    //
    // Expect
    // ------
    // - `adf` succeeds with a finite negative statistic, a p-value at
    //   most 0.05, and Verdict::Stationary.
    fn adf_classifies_white_noise_as_stationary() {
        // Arrange
        let data = lcg_noise(200, 42);

        // Act
        let outcome = AdfOutcome::adf(&data).expect("ADF should run on white noise");

        // Assert
        assert!(outcome.stat().is_finite());
        assert!(outcome.stat() < 0.0, "white noise should mean-revert: tau = {}", outcome.stat());
        assert!(outcome.p_value() <= ADF_SIGNIFICANCE);
        assert_eq!(outcome.verdict(), Verdict::Stationary);
        assert!(outcome.used_lag() <= schwert_max_lag(data.len()));
    }

    #[test]
    // Purpose
    // -------
    // Verify that a random walk (cumulative sum of noise) is not
    // classified as stationary.
    //
    // Given
    // -----
    // - The running sum of 200 deterministic LCG noise draws.
    //
    // Expect
    // ------
    // - `adf` succeeds with a p-value above 0.05 and
    //   Verdict::NonStationary.
    fn adf_classifies_random_walk_as_non_stationary() {
        // Arrange
        let noise = lcg_noise(200, 7);
        let mut level = 0.0;
        let data: Vec<f64> = noise
            .iter()
            .map(|&e| {
                level += e;
                level
            })
            .collect();

        // Act
        let outcome = AdfOutcome::adf(&data).expect("ADF should run on a random walk");

        // Assert
        assert!(outcome.p_value() > ADF_SIGNIFICANCE);
        assert_eq!(outcome.verdict(), Verdict::NonStationary);
    }

    #[test]
    // Purpose
    // -------
    // Ensure that invalid inputs are surfaced as errors rather than
    // panics.
    //
    // Given
    // -----
    // - A short series and a constant series.
    //
    // Expect
    // ------
    // - InsufficientData for the first; DegenerateSeries for the second.
    fn adf_invalid_inputs_return_errors() {
        // Arrange
        let short = vec![1.0_f64, 2.0, 3.0];
        let constant = vec![5.0_f64; 30];

        // Act / Assert
        assert!(matches!(
            AdfOutcome::adf(&short),
            Err(AdfError::InsufficientData { n: 3, .. })
        ));
        assert!(matches!(AdfOutcome::adf(&constant), Err(AdfError::DegenerateSeries)));
    }
}
