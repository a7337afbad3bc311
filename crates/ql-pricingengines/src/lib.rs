//! # ql-pricingengines
//!
//! Pricing engines.
//!
//! - [`AnalyticEuropeanEngine`]: Garman-Kohlhagen closed form for European
//!   FX options, with the pure [`garman_kohlhagen`] function behind it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_european_engine;

pub use analytic_european_engine::{garman_kohlhagen, AnalyticEuropeanEngine};
