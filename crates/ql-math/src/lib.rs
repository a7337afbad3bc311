//! # ql-math
//!
//! Numerical helpers for the closed-form pricer: the standard normal
//! distribution (via `statrs`) and floating-point comparison.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Probability distributions.
pub mod distributions;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, close_enough, is_zero};
pub use distributions::{normal_cdf, normal_pdf};
