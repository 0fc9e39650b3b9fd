//! Numerical stability utilities.
//!
//! Provides safe implementations of common nonlinear transforms
//! that are prone to overflow/underflow in naïve form.
//! The functions here follow guarded strategies similar to those
//! in major ML libraries (e.g. PyTorch, TensorFlow), using explicit
//! cutoffs (`|x| > 20.0`) to keep `f64` arithmetic in a well-conditioned
//! regime.
//!
//! # Provided items
//! - [`safe_softplus(x)`]: stable version of `ln(1 + exp(x))`,
//!   mapping ℝ → (0, ∞) without overflow. Used for the GARCH
//!   baseline variance ω.
//! - [`safe_softplus_inv(x)`]: inverse of softplus, mapping
//!   (0, ∞) → ℝ without catastrophic cancellation.
//! - [`safe_logistic(x)`]: stable sigmoid `1 / (1 + exp(-x))`,
//!   mapping ℝ → (0, 1). Used for the GARCH persistence
//!   coefficients α and β.
//! - [`safe_logit(p)`]: inverse of the logistic, mapping (0, 1) → ℝ.
//!
//! # Rationale
//! These transforms are building blocks in optimization whenever
//! parameters must be kept strictly positive or inside the unit
//! interval while the optimizer itself runs over unconstrained reals.

/// Numerically stable softplus: `softplus(x) = ln(1 + exp(x))`.
///
/// Computes softplus without overflow for large positive `x` and
/// with good precision for large negative `x`. This implementation
/// uses a simple piecewise guard:
///
/// - For sufficiently large `x`, `softplus(x) ≈ x + ln1p(exp(-x)) ≈ x`.
/// - Otherwise, it falls back to `ln1p(exp(x))`.
///
/// The cutoff used here (`x > 20.0`) is a practical threshold that
/// keeps the calculation in a well-conditioned regime for `f64`
/// (similar to the strategy used in common ML libraries like PyTorch).
///
/// # Parameters
/// - `x`: real input
///
/// # Returns
/// - `softplus(x)` as `f64`.
pub fn safe_softplus(x: f64) -> f64 {
    if x > 20.0 { x } else { x.exp().ln_1p() }
}

/// Stable inverse of softplus on `(0, ∞)`: solves for `t` in
/// `softplus(t) = x`, returning `t = ln(exp(x) - 1)`.
///
/// Direct evaluation of `ln(exp(x) - 1)` can overflow or lose precision.
/// This implementation mirrors the guarded strategy of `safe_softplus`:
///
/// - For sufficiently large `x`, `exp(-x)` is tiny and
///   `ln(exp(x) - 1) ≈ x + ln(1 - exp(-x)) ≈ x`.
/// - Otherwise, it uses `ln(expm1(x))`.
///
/// The cutoff (`x > 20.0`) is chosen for numerical robustness with `f64`.
///
/// # Parameters
/// - `x`: a positive real (the softplus output), must be finite and `> 0`.
///
/// # Returns
/// - `t` such that `softplus(t) = x`.
pub fn safe_softplus_inv(x: f64) -> f64 {
    if x > 20.0 { x } else { x.exp_m1().ln() }
}

/// Numerically stable logistic: `logistic(x) = 1 / (1 + exp(-x))`.
///
/// The naïve formula evaluates `exp(-x)` which overflows for large
/// negative `x`. The guarded form branches on the sign so the
/// exponential argument is always non-positive:
///
/// - For `x >= 0`, computes `1 / (1 + exp(-x))`.
/// - For `x < 0`, computes `exp(x) / (1 + exp(x))`.
///
/// Both branches agree analytically; neither overflows for any finite
/// `f64` input.
///
/// # Parameters
/// - `x`: real input
///
/// # Returns
/// - `logistic(x)` in `(0, 1)` (reaching 0.0 or 1.0 only by `f64`
///   saturation for very large `|x|`).
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Stable inverse of the logistic on `(0, 1)`: solves for `t` in
/// `logistic(t) = p`, returning `t = ln(p / (1 - p))`.
///
/// Written as `ln(p) - ln1p(-p)` to avoid losing precision when `p`
/// is close to either endpoint.
///
/// # Parameters
/// - `p`: a probability-like value, must be finite and strictly inside
///   `(0, 1)`.
///
/// # Returns
/// - `t` such that `logistic(t) = p`.
pub fn safe_logit(p: f64) -> f64 {
    p.ln() - (-p).ln_1p()
}
