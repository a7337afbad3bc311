//! # ql-time
//!
//! Date, calendar, day counter and evaluation-context types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and holiday-free implementations.
pub mod calendar;

/// Concrete holiday calendars.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `DayCounter` trait and actual-day conventions.
pub mod day_counter;

/// `EvaluationContext`: per-request valuation date and conventions.
pub mod evaluation_context;

/// `Period`: a time span in a `TimeUnit`.
pub mod period;

/// `TimeUnit`: days, weeks, months, years.
pub mod time_unit;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, NullCalendar, WeekendsOnly};
pub use calendars::{calendar_from_name, Target};
pub use date::Date;
pub use day_counter::{day_counter_from_name, Actual360, Actual365Fixed, DayCounter};
pub use evaluation_context::EvaluationContext;
pub use period::Period;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
