//! # ql-instruments
//!
//! The vanilla option instrument: payoff, European exercise, and the
//! engine/results contract used to price it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod exercise;
pub mod instrument;
pub mod option;
pub mod payoff;

pub use exercise::EuropeanExercise;
pub use instrument::{Greeks, Instrument, OptionResults, PricingEngine};
pub use option::{VanillaOption, VanillaOptionArguments};
pub use payoff::{OptionType, Payoff, PlainVanillaPayoff, StrikedPayoff};
