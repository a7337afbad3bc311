//! `VolatilityTermStructure`: base trait for volatility term structures.
//!
//! Extends `TermStructure` with the business-day convention used to turn
//! option tenors into expiry dates and with the admissible strike range.

use crate::term_structure::TermStructure;
use ql_core::{ensure_domain, errors::Result, Real};
use ql_time::{BusinessDayConvention, Date, Period};

/// Base trait for all volatility term structures.
pub trait VolatilityTermStructure: TermStructure {
    /// The business-day convention used for option-expiry adjustments.
    fn business_day_convention(&self) -> BusinessDayConvention {
        BusinessDayConvention::Following
    }

    /// The minimum strike for which the term structure is defined.
    fn min_strike(&self) -> Real;

    /// The maximum strike for which the term structure is defined.
    fn max_strike(&self) -> Real;

    /// Expiry date of an option with tenor `period`, rolled on the
    /// structure's calendar.
    fn option_date_from_tenor(&self, period: Period) -> Result<Date> {
        self.calendar().advance(
            self.reference_date(),
            period,
            self.business_day_convention(),
        )
    }

    /// Fail with a domain error if `strike` is outside the strike range.
    fn check_strike(&self, strike: Real) -> Result<()> {
        ensure_domain!(
            strike >= self.min_strike() && strike <= self.max_strike(),
            "strike ({strike}) is outside the curve domain [{}, {}]",
            self.min_strike(),
            self.max_strike()
        );
        Ok(())
    }
}
