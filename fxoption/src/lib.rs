//! # fxoption
//!
//! Garman-Kohlhagen pricing and Greeks for European FX vanilla options.
//!
//! This crate is a **façade** over the `ql-*` workspace crates.  It hosts
//! the two request-level operations, [`price`] and [`greeks`], the TOML
//! configuration that yields an [`EvaluationContext`](time::EvaluationContext),
//! and the `fxoption` command-line binary.
//!
//! ## Quick start
//!
//! ```rust
//! use fxoption::{price, greeks, FxOptionRequest};
//! use fxoption::instruments::OptionType;
//! use fxoption::time::{Date, EvaluationContext};
//!
//! let ctx = EvaluationContext::new(Date::from_ymd(2025, 1, 2)?);
//! let request = FxOptionRequest {
//!     option_type: OptionType::Call,
//!     spot: 1.10,
//!     strike: 1.10,
//!     domestic_rate: 0.03,
//!     foreign_rate: 0.01,
//!     volatility: 0.10,
//!     days_to_maturity: 365,
//! };
//! let npv = price(&ctx, &request)?;
//! let g = greeks(&ctx, &request)?;
//! assert!((npv - 0.054_637_669).abs() < 1e-8);
//! assert!(g.delta > 0.0 && g.gamma > 0.0);
//! # Ok::<(), fxoption::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// TOML configuration.
pub mod config;

/// The `price` and `greeks` operations.
pub mod pricer;

/// Core types, aliases, and error definitions.
pub use ql_core as core;

/// Date, calendar, day counter, and evaluation context types.
pub use ql_time as time;

/// Normal distribution and comparison helpers.
pub use ql_math as math;

/// Market quotes.
pub use ql_quotes as quotes;

/// Term structure implementations.
pub use ql_termstructures as termstructures;

/// Stochastic process definitions.
pub use ql_processes as processes;

/// Financial instruments.
pub use ql_instruments as instruments;

/// Pricing engines.
pub use ql_pricingengines as pricingengines;

pub use config::{ConfigError, PricerConfig};
pub use pricer::{evaluate, greeks, price, FxGreeks, FxOptionRequest};
