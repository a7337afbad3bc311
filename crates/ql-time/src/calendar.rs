//! `Calendar` trait and the two holiday-free calendars.
//!
//! A calendar knows which dates are business days and can roll dates
//! according to a [`BusinessDayConvention`].

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::period::Period;
use crate::time_unit::TimeUnit;
use ql_core::errors::Result;

/// A financial calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"TARGET"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on this calendar's weekend.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => roll(self, date, 1),
            BusinessDayConvention::Preceding => roll(self, date, -1),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = roll(self, date, 1)?;
                if adjusted.month() != date.month() {
                    roll(self, date, -1)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = roll(self, date, -1)?;
                if adjusted.month() != date.month() {
                    roll(self, date, 1)
                } else {
                    Ok(adjusted)
                }
            }
        }
    }

    /// Advance `date` by `period`.
    ///
    /// A period in days counts business days; weeks, months and years move
    /// in calendar time and the result is rolled with `convention`.
    fn advance(
        &self,
        date: Date,
        period: Period,
        convention: BusinessDayConvention,
    ) -> Result<Date> {
        match period.unit {
            TimeUnit::Days => {
                let step = period.length.signum();
                let mut remaining = period.length.abs();
                let mut d = self.adjust(date, convention)?;
                while remaining > 0 {
                    d = d.add_days(step)?;
                    if self.is_business_day(d) {
                        remaining -= 1;
                    }
                }
                Ok(d)
            }
            _ => self.adjust(date.advance_by(period)?, convention),
        }
    }

    /// Business days in `(d1, d2]`; negative if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let (start, end, sign) = if d2 >= d1 { (d1, d2, 1) } else { (d2, d1, -1) };
        let count = ((start.serial() + 1)..=end.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|d| self.is_business_day(*d))
            .count() as i32;
        sign * count
    }
}

fn roll<C: Calendar + ?Sized>(cal: &C, mut date: Date, step: i32) -> Result<Date> {
    while cal.is_holiday(date) {
        date = date.add_days(step)?;
    }
    Ok(date)
}

/// Every day is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }

    fn is_weekend(&self, _date: Date) -> bool {
        false
    }
}

/// Saturdays and Sundays are holidays; no other holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}
