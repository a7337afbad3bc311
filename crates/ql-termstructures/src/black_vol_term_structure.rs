//! `BlackVolTermStructure`: Black-volatility term structures.
//!
//! Provides the `BlackVolTermStructure` trait and its flat implementation,
//! `BlackConstantVol`.

use crate::term_structure::{TermStructure, TermStructureData};
use crate::volatility_term_structure::VolatilityTermStructure;
use ql_core::{ensure_arg, errors::Result, Real, Time, Volatility};
use ql_time::{Calendar, Date, DayCounter, EvaluationContext};
use std::sync::Arc;

/// A Black-volatility term structure.
///
/// Implementors provide [`black_vol_impl`](BlackVolTermStructure::black_vol_impl);
/// the variance `σ²·t` is derived from it unless overridden.
pub trait BlackVolTermStructure: VolatilityTermStructure {
    /// Black volatility for a range-checked time `t` and strike.
    fn black_vol_impl(&self, t: Time, strike: Real) -> Volatility;

    /// Black variance `σ²·t` for a range-checked time `t` and strike.
    fn black_variance_impl(&self, t: Time, strike: Real) -> Real {
        let vol = self.black_vol_impl(t, strike);
        vol * vol * t
    }

    /// Black volatility for a date and strike.
    fn black_vol(&self, date: Date, strike: Real) -> Result<Volatility> {
        let t = self.checked_time(date)?;
        self.check_strike(strike)?;
        Ok(self.black_vol_impl(t, strike))
    }

    /// Black variance for a date and strike.
    ///
    /// Zero at the reference date; a domain error before it.
    fn black_variance(&self, date: Date, strike: Real) -> Result<Real> {
        let t = self.checked_time(date)?;
        self.check_strike(strike)?;
        Ok(self.black_variance_impl(t, strike))
    }

    /// Black volatility for a time and strike.
    fn black_vol_time(&self, t: Time, strike: Real) -> Result<Volatility> {
        self.check_time(t)?;
        self.check_strike(strike)?;
        Ok(self.black_vol_impl(t, strike))
    }

    /// Black variance for a time and strike.
    fn black_variance_time(&self, t: Time, strike: Real) -> Result<Real> {
        self.check_time(t)?;
        self.check_strike(strike)?;
        Ok(self.black_variance_impl(t, strike))
    }
}

// ── BlackConstantVol ──────────────────────────────────────────────────────────

/// A flat (constant) Black volatility surface.
///
/// `σ(t, K) = constant` for all `t >= 0` and all strikes `K`.
#[derive(Debug, Clone)]
pub struct BlackConstantVol {
    data: TermStructureData,
    volatility: Volatility,
}

impl BlackConstantVol {
    /// Create a constant Black vol surface.
    ///
    /// Fails with `InvalidArgument` if `volatility` is negative or not
    /// finite.  Zero is allowed and gives zero variance everywhere.
    pub fn new(
        reference_date: Date,
        calendar: Arc<dyn Calendar>,
        volatility: Volatility,
        day_counter: Arc<dyn DayCounter>,
    ) -> Result<Self> {
        Self::from_data(
            TermStructureData::new(reference_date, calendar, day_counter),
            volatility,
        )
    }

    /// Create a constant surface anchored at the evaluation date of `ctx`.
    pub fn from_context(ctx: &EvaluationContext, volatility: Volatility) -> Result<Self> {
        Self::from_data(TermStructureData::from_context(ctx), volatility)
    }

    fn from_data(data: TermStructureData, volatility: Volatility) -> Result<Self> {
        ensure_arg!(
            volatility.is_finite() && volatility >= 0.0,
            "volatility must be finite and non-negative, got {volatility}"
        );
        Ok(Self { data, volatility })
    }

    /// The constant volatility value.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }
}

impl TermStructure for BlackConstantVol {
    fn reference_date(&self) -> Date {
        self.data.reference_date
    }

    fn day_counter(&self) -> &dyn DayCounter {
        &*self.data.day_counter
    }

    fn calendar(&self) -> &dyn Calendar {
        &*self.data.calendar
    }
}

impl VolatilityTermStructure for BlackConstantVol {
    fn min_strike(&self) -> Real {
        f64::NEG_INFINITY
    }

    fn max_strike(&self) -> Real {
        f64::INFINITY
    }
}

impl BlackVolTermStructure for BlackConstantVol {
    fn black_vol_impl(&self, _t: Time, _strike: Real) -> Volatility {
        self.volatility
    }

    fn black_variance_impl(&self, t: Time, _strike: Real) -> Real {
        self.volatility * self.volatility * t
    }
}
