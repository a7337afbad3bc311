//! `FlatForward`: a yield term structure with a constant forward rate.
//!
//! The simplest possible yield curve: one continuously-compounded rate that
//! applies for all maturities.  Used for both legs of an FX option, the
//! domestic (discounting) curve and the foreign (carry) curve.

use crate::term_structure::{TermStructure, TermStructureData};
use crate::yield_term_structure::YieldTermStructure;
use ql_core::{ensure_arg, errors::Result, DiscountFactor, Rate, Time};
use ql_time::{Calendar, Date, DayCounter, EvaluationContext};
use std::sync::Arc;

/// A flat (constant) forward-rate yield term structure.
///
/// `P(t) = exp(-r·t)`.  The rate may be negative.
#[derive(Debug, Clone)]
pub struct FlatForward {
    data: TermStructureData,
    rate: Rate,
}

impl FlatForward {
    /// Create a flat curve with continuously-compounded `rate`.
    ///
    /// Fails with `InvalidArgument` if `rate` is NaN or infinite.
    pub fn new(
        reference_date: Date,
        rate: Rate,
        day_counter: Arc<dyn DayCounter>,
        calendar: Arc<dyn Calendar>,
    ) -> Result<Self> {
        Self::from_data(TermStructureData::new(reference_date, calendar, day_counter), rate)
    }

    /// Create a flat curve anchored at the evaluation date of `ctx`.
    pub fn from_context(ctx: &EvaluationContext, rate: Rate) -> Result<Self> {
        Self::from_data(TermStructureData::from_context(ctx), rate)
    }

    fn from_data(data: TermStructureData, rate: Rate) -> Result<Self> {
        ensure_arg!(rate.is_finite(), "flat rate must be finite, got {rate}");
        Ok(Self { data, rate })
    }

    /// The continuously-compounded flat rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl TermStructure for FlatForward {
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

impl YieldTermStructure for FlatForward {
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        (-self.rate * t).exp()
    }

    fn zero_rate_impl(&self, _t: Time) -> Rate {
        self.rate
    }

    fn forward_rate_impl(&self, _t: Time) -> Rate {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ql_time::{Actual360, Actual365Fixed, NullCalendar};

    fn curve(rate: Rate) -> FlatForward {
        let ref_date = Date::from_ymd(2025, 1, 2).unwrap();
        FlatForward::new(ref_date, rate, Arc::new(Actual365Fixed), Arc::new(NullCalendar)).unwrap()
    }

    #[test]
    fn discount_at_reference_is_one() {
        let c = curve(0.05);
        assert_eq!(c.discount(c.reference_date()).unwrap(), 1.0);
        assert_eq!(c.discount_time(0.0).unwrap(), 1.0);
    }

    #[test]
    fn discount_by_time() {
        let c = curve(0.05);
        assert_abs_diff_eq!(c.discount_time(1.0).unwrap(), (-0.05_f64).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(c.discount_time(10.0).unwrap(), (-0.5_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn discount_by_date() {
        let c = curve(0.03);
        let d = Date::from_ymd(2025, 4, 2).unwrap();
        assert_abs_diff_eq!(
            c.discount(d).unwrap(),
            (-0.03 * 90.0 / 365.0_f64).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn date_before_reference_is_domain_error() {
        let c = curve(0.03);
        let before = Date::from_ymd(2025, 1, 1).unwrap();
        assert!(c.discount(before).unwrap_err().is_domain());
        assert!(c.discount_time(-0.1).unwrap_err().is_domain());
    }

    #[test]
    fn negative_rate_allowed() {
        let c = curve(-0.005);
        assert!(c.discount_time(2.0).unwrap() > 1.0);
    }

    #[test]
    fn non_finite_rate_rejected() {
        let ref_date = Date::from_ymd(2025, 1, 2).unwrap();
        let err = FlatForward::new(ref_date, f64::NAN, Arc::new(Actual365Fixed), Arc::new(NullCalendar))
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn rates_are_flat() {
        let c = curve(0.04);
        let d1 = Date::from_ymd(2026, 1, 2).unwrap();
        let d2 = Date::from_ymd(2027, 6, 30).unwrap();
        assert_abs_diff_eq!(c.zero_rate(d2).unwrap(), 0.04, epsilon = 1e-15);
        assert_abs_diff_eq!(c.forward_rate(d1, d2).unwrap(), 0.04, epsilon = 1e-12);
        assert_abs_diff_eq!(c.forward_rate(d1, d1).unwrap(), 0.04, epsilon = 1e-15);
    }

    #[test]
    fn context_conventions_are_used() {
        let ctx = EvaluationContext::new(Date::from_ymd(2025, 1, 2).unwrap())
            .with_day_counter(Arc::new(Actual360));
        let c = FlatForward::from_context(&ctx, 0.02).unwrap();
        assert_eq!(c.reference_date(), ctx.evaluation_date());
        assert_eq!(c.calendar().name(), "TARGET");
        let d = Date::from_ymd(2025, 7, 1).unwrap();
        assert_abs_diff_eq!(c.time_from_reference(d), 180.0 / 360.0, epsilon = 1e-15);
    }
}
