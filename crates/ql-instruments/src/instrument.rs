//! `Instrument` and `PricingEngine` traits, and option pricing results.
//!
//! Instruments are immutable values.  A pricing engine is not attached to
//! the instrument; it is passed to each pricing call, so one instrument can
//! be priced by different engines without any shared mutable state.

use ql_core::{errors::{Error, Result}, Real};
use ql_time::Date;
use std::collections::HashMap;

/// Base trait for all financial instruments.
pub trait Instrument: std::fmt::Debug + Send + Sync {
    /// The maturity or last relevant date.
    fn maturity_date(&self) -> Option<Date>;

    /// Whether the instrument has expired as seen from `evaluation_date`.
    ///
    /// An instrument maturing on the evaluation date is still alive.
    fn is_expired(&self, evaluation_date: Date) -> bool {
        self.maturity_date()
            .is_some_and(|maturity| maturity < evaluation_date)
    }
}

/// A pricing engine for instruments described by `Args`.
///
/// Engines are dispatched statically: the caller picks the engine type.
pub trait PricingEngine<Args>: std::fmt::Debug + Send + Sync {
    /// What the engine produces.
    type Results;

    /// Price the instrument described by `args`.
    fn calculate(&self, args: &Args) -> Result<Self::Results>;
}

/// First and second order sensitivities of an option value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Greeks {
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// ∂V/∂σ, per unit of volatility.
    pub vega: Real,
    /// ∂V/∂t, per year.
    pub theta: Real,
    /// ∂V/∂r_d, per unit of domestic rate.
    pub rho: Real,
}

impl Greeks {
    /// Theta per calendar day on a 365-day year.
    pub fn theta_per_day(&self) -> Real {
        self.theta / 365.0
    }
}

/// Results of pricing a vanilla option.
#[derive(Debug, Clone, Default)]
pub struct OptionResults {
    /// Net present value in domestic currency.
    pub npv: Real,
    /// Forward rate to maturity.
    pub forward: Real,
    /// The Greek set; `None` where it is undefined (zero variance).
    pub greeks: Option<Greeks>,
    /// ∂V/∂r_f, sensitivity to the foreign rate.
    pub foreign_rho: Option<Real>,
    /// Additional named diagnostics (discount factors, variance, ...).
    pub additional_results: HashMap<String, Real>,
}

impl OptionResults {
    /// Results carrying only an NPV and forward.
    pub fn from_npv(npv: Real, forward: Real) -> Self {
        Self {
            npv,
            forward,
            ..Self::default()
        }
    }

    /// Add a named result.
    pub fn with_result(mut self, key: impl Into<String>, value: Real) -> Self {
        self.additional_results.insert(key.into(), value);
        self
    }

    /// The Greek set, or a domain error if it is undefined for this
    /// valuation.
    pub fn greeks(&self) -> Result<Greeks> {
        self.greeks.ok_or_else(|| {
            Error::Domain("greeks are undefined when the total variance is zero".into())
        })
    }
}
