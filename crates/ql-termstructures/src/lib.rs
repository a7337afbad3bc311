//! # ql-termstructures
//!
//! Flat yield curves and constant Black volatility, anchored at a reference
//! date and queried by date or by year fraction.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `TermStructure`: base trait for all term structures.
pub mod term_structure;

/// `YieldTermStructure`: yield / interest-rate term structures.
pub mod yield_term_structure;

/// `FlatForward`: constant forward-rate yield curve.
pub mod flat_forward;

/// `VolatilityTermStructure`: base trait for volatility term structures.
pub mod volatility_term_structure;

/// `BlackVolTermStructure`: Black-volatility term structures and `BlackConstantVol`.
pub mod black_vol_term_structure;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use black_vol_term_structure::{BlackConstantVol, BlackVolTermStructure};
pub use flat_forward::FlatForward;
pub use term_structure::{TermStructure, TermStructureData};
pub use volatility_term_structure::VolatilityTermStructure;
pub use yield_term_structure::YieldTermStructure;
