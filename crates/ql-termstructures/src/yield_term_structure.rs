//! `YieldTermStructure`: interest-rate term structures.
//!
//! Discount factors, continuously-compounded zero rates and forward rates
//! are related by `P(t) = exp(-z(t)·t)`; implementors supply the discount
//! factor and may override the others when they have a closed form.

use crate::term_structure::TermStructure;
use ql_core::{errors::Result, DiscountFactor, Rate, Time};
use ql_time::Date;

/// Small time step used for instantaneous forward rates.
const DT: Time = 1.0e-4;

/// A yield (interest-rate) term structure.
pub trait YieldTermStructure: TermStructure {
    // ── Low-level impl hooks ─────────────────────────────────────────────

    /// Discount factor for a time `t >= 0` already range-checked.
    fn discount_impl(&self, t: Time) -> DiscountFactor;

    /// Continuously-compounded zero rate for time `t`.
    ///
    /// Default: `-ln P(t) / t`, with the instantaneous forward at `t = 0`.
    fn zero_rate_impl(&self, t: Time) -> Rate {
        if t == 0.0 {
            return self.forward_rate_impl(0.0);
        }
        -self.discount_impl(t).ln() / t
    }

    /// Instantaneous forward rate at time `t`.
    ///
    /// Default: central difference of `-ln P`.
    fn forward_rate_impl(&self, t: Time) -> Rate {
        let t1 = (t - DT / 2.0).max(0.0);
        let t2 = t1 + DT;
        (self.discount_impl(t1).ln() - self.discount_impl(t2).ln()) / (t2 - t1)
    }

    // ── Public interface ─────────────────────────────────────────────────

    /// Discount factor for a date.
    ///
    /// Fails with a domain error if `date` precedes the reference date.
    fn discount(&self, date: Date) -> Result<DiscountFactor> {
        let t = self.checked_time(date)?;
        Ok(self.discount_impl(t))
    }

    /// Discount factor for a time.
    fn discount_time(&self, t: Time) -> Result<DiscountFactor> {
        self.check_time(t)?;
        Ok(self.discount_impl(t))
    }

    /// Continuously-compounded zero rate from the reference date to `date`.
    fn zero_rate(&self, date: Date) -> Result<Rate> {
        let t = self.checked_time(date)?;
        Ok(self.zero_rate_impl(t))
    }

    /// Continuously-compounded zero rate for time `t`.
    fn zero_rate_time(&self, t: Time) -> Result<Rate> {
        self.check_time(t)?;
        Ok(self.zero_rate_impl(t))
    }

    /// Continuously-compounded forward rate between two dates.
    ///
    /// Equal dates give the instantaneous forward at that date.
    fn forward_rate(&self, d1: Date, d2: Date) -> Result<Rate> {
        let t1 = self.checked_time(d1)?;
        let t2 = self.checked_time(d2)?;
        if t1 == t2 {
            return Ok(self.forward_rate_impl(t1));
        }
        Ok((self.discount_impl(t1) / self.discount_impl(t2)).ln() / (t2 - t1))
    }
}
