//! numerical_stability — numerically robust scalar transformations.
//!
//! Purpose
//! -------
//! Collect numerically stable scalar transforms for mapping between the
//! unconstrained optimizer space and model-space parameters in the ARMA
//! and GARCH layers. This module centralizes the guarded transform logic
//! so the rest of the optimization and model layers can assume
//! well-conditioned `f64` arithmetic.
//!
//! Key behaviors
//! -------------
//! - Provide stable scalar transforms (`safe_softplus`, `safe_logistic`,
//!   and their inverses) for mapping unconstrained reals into strictly
//!   positive or (0, 1) parameters without overflow/underflow.
//! - Keep each transform a pure scalar function so model workspaces can
//!   apply them element-wise inside tight likelihood loops.
//!
//! Invariants & assumptions
//! ------------------------
//! - All public transforms assume finite `f64` inputs; domain and shape
//!   validation (e.g., positivity, length checks) is enforced in the
//!   model and optimizer layers, not here.
//! - Inverse transforms additionally assume their argument lies strictly
//!   inside the forward transform's range.
//!
//! Conventions
//! -----------
//! - GARCH parameter layout in θ-space follows `θ = (θ_ω, θ_α, θ_β)`
//!   with `ω = softplus(θ_ω)`, `α = logistic(θ_α)`, `β = logistic(θ_β)`.
//! - ARMA roots use the standard library's `tanh`/`atanh`, which are
//!   already well-conditioned; no guarded wrappers are provided here.
//! - This module never logs, performs I/O, or touches global state; it is
//!   pure numerical helpers suitable for use inside tight inner loops.
//!
//! Downstream usage
//! ----------------
//! - GARCH workspaces use these transforms to map optimizer-space
//!   parameters into model-space `(ω, α, β)` and to seed the optimizer
//!   from model-space starting values via the inverses.
//! - Higher-level front-ends are expected to depend only on the
//!   re-exported surface, not on internal implementation details of
//!   [`transformations`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] cover agreement with naïve
//!   formulas on safe grids, tail behavior where the naïve forms
//!   overflow, and transform/inverse round trips.
//! - Integration tests in the model modules exercise higher-level
//!   invariants (GARCH stationarity, parameter validation) rather than
//!   re-testing these low-level numeric primitives.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{safe_logistic, safe_logit, safe_softplus, safe_softplus_inv};
