//! `TermStructure`: base trait for all term structures.
//!
//! Every term structure has a **reference date**, a **day counter**, and a
//! **maximum date**.  Queries outside `[reference date, max date]` are a
//! domain error.

use ql_core::{ensure_domain, errors::Result, Time};
use ql_time::{Calendar, Date, DayCounter, EvaluationContext};
use std::sync::Arc;

/// Base trait for all term structures.
pub trait TermStructure: std::fmt::Debug + Send + Sync {
    /// The date at which discount = 1.0 and from which time is measured.
    fn reference_date(&self) -> Date;

    /// The day counter used for date → time-fraction conversions.
    fn day_counter(&self) -> &dyn DayCounter;

    /// The calendar used for date adjustments.
    fn calendar(&self) -> &dyn Calendar;

    /// The latest date for which the curve can be used.
    fn max_date(&self) -> Date {
        Date::MAX
    }

    /// The latest time for which the curve can be used.
    fn max_time(&self) -> Time {
        self.time_from_reference(self.max_date())
    }

    /// Convert a date to a year fraction relative to the reference date.
    ///
    /// Dates before the reference date give negative times; use
    /// [`checked_time`](TermStructure::checked_time) where that is an error.
    fn time_from_reference(&self, date: Date) -> Time {
        self.day_counter().year_fraction(self.reference_date(), date)
    }

    /// Year fraction to `date`, failing with a domain error if `date` lies
    /// outside `[reference date, max date]`.
    fn checked_time(&self, date: Date) -> Result<Time> {
        ensure_domain!(
            date >= self.reference_date(),
            "date {date} is before the reference date {}",
            self.reference_date()
        );
        ensure_domain!(
            date <= self.max_date(),
            "date {date} is past the max curve date {}",
            self.max_date()
        );
        Ok(self.time_from_reference(date))
    }

    /// Fail with a domain error unless `0 <= t <= max_time`.
    fn check_time(&self, t: Time) -> Result<()> {
        ensure_domain!(t >= 0.0, "negative time ({t}) given");
        ensure_domain!(
            t <= self.max_time(),
            "time ({t}) is past the max curve time ({})",
            self.max_time()
        );
        Ok(())
    }
}

// ── Shared state for concrete term structures ─────────────────────────────────

/// Reference date and conventions shared by the concrete curves.
#[derive(Debug, Clone)]
pub struct TermStructureData {
    /// Reference date.
    pub reference_date: Date,
    /// Calendar for date adjustments.
    pub calendar: Arc<dyn Calendar>,
    /// Day counter for time calculations.
    pub day_counter: Arc<dyn DayCounter>,
}

impl TermStructureData {
    /// Bundle a reference date with its conventions.
    pub fn new(
        reference_date: Date,
        calendar: Arc<dyn Calendar>,
        day_counter: Arc<dyn DayCounter>,
    ) -> Self {
        Self {
            reference_date,
            calendar,
            day_counter,
        }
    }

    /// Anchor at the evaluation date of `ctx`, using its conventions.
    pub fn from_context(ctx: &EvaluationContext) -> Self {
        Self::new(
            ctx.evaluation_date(),
            ctx.calendar().clone(),
            ctx.day_counter().clone(),
        )
    }
}
