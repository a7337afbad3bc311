//! `EvaluationContext`: the valuation date and date conventions of a
//! pricing request.
//!
//! There is no process-wide "today": each request carries its own context
//! by value, so concurrent requests with different evaluation dates never
//! interfere and tests can inject any date.

use crate::calendar::Calendar;
use crate::calendars::Target;
use crate::date::Date;
use crate::day_counter::{Actual365Fixed, DayCounter};
use crate::period::Period;
use ql_core::errors::Result;
use std::sync::Arc;

/// Evaluation date plus the calendar and day counter used to build market
/// objects for a request.
#[derive(Debug, Clone)]
pub struct EvaluationContext {
    evaluation_date: Date,
    calendar: Arc<dyn Calendar>,
    day_counter: Arc<dyn DayCounter>,
}

impl EvaluationContext {
    /// Context anchored at `evaluation_date`, with the TARGET calendar and
    /// Actual/365 (Fixed).
    pub fn new(evaluation_date: Date) -> Self {
        Self {
            evaluation_date,
            calendar: Arc::new(Target),
            day_counter: Arc::new(Actual365Fixed),
        }
    }

    /// Context anchored at today's date from the system clock.
    pub fn today() -> Result<Self> {
        Ok(Self::new(Date::todays_date()?))
    }

    /// Replace the calendar.
    pub fn with_calendar(mut self, calendar: Arc<dyn Calendar>) -> Self {
        self.calendar = calendar;
        self
    }

    /// Replace the day counter.
    pub fn with_day_counter(mut self, day_counter: Arc<dyn DayCounter>) -> Self {
        self.day_counter = day_counter;
        self
    }

    /// The evaluation date.
    pub fn evaluation_date(&self) -> Date {
        self.evaluation_date
    }

    /// The calendar.
    pub fn calendar(&self) -> &Arc<dyn Calendar> {
        &self.calendar
    }

    /// The day counter.
    pub fn day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }

    /// The evaluation date moved forward by `days` calendar days.
    pub fn maturity_after_days(&self, days: i32) -> Result<Date> {
        Period::days(days).from_date(self.evaluation_date)
    }
}
