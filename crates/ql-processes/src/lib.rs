//! # ql-processes
//!
//! Stochastic processes that bundle market data for pricing engines.
//!
//! The FX engine consumes a [`GarmanKohlhagenProcess`]: a spot quote plus
//! foreign, domestic and volatility curves.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Garman-Kohlhagen FX process.
pub mod garman_kohlhagen_process;

/// The `StochasticProcess1D` trait.
pub mod stochastic_process;

pub use garman_kohlhagen_process::GarmanKohlhagenProcess;
pub use stochastic_process::StochasticProcess1D;
