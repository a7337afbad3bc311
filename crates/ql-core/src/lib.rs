//! # ql-core
//!
//! Core types, traits, and error definitions shared by every crate of the
//! FX option pricer.
//!
//! This crate provides the foundational building blocks: numeric type
//! aliases, the error enum with its `ensure!` family of macros, the
//! reference-counted [`Handle`], and the publish/subscribe registry used by
//! observable market data.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_arg!` / `ensure_domain!` / `fail!`
/// macros.
pub mod errors;

/// Shared reference handle (`Handle<T>`).
pub mod handle;

/// Design patterns: observer / observable.
pub mod patterns;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Integer type used for general-purpose counting.
pub type Integer = i32;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor in (0, 1] for positive rates.
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use handle::Handle;
