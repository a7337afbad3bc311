//! `DayCounter` trait and the actual-day conventions.
//!
//! A day counter turns a pair of dates into the year fraction used for
//! discounting and variance scaling.  Reversed date pairs produce negative
//! fractions instead of failing, so date arithmetic stays total.

use crate::date::Date;
use ql_core::errors::{Error, Result};
use ql_core::{Real, Time};
use std::sync::Arc;

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/365 (Fixed)"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    fn day_count(&self, d1: Date, d2: Date) -> i64;

    /// Fraction of a year between `d1` and `d2`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

/// Actual/365 (Fixed): `actual_days / 365`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        i64::from(d1.days_between(d2))
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 365.0
    }
}

/// Actual/360: `actual_days / 360`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual360;

impl DayCounter for Actual360 {
    fn name(&self) -> &str {
        "Actual/360"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        i64::from(d1.days_between(d2))
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Look up a day counter by name (`"Actual/365 (Fixed)"`, `"Actual/365"`,
/// `"A365F"`, `"Actual/360"`, `"A360"`; case-insensitive).
pub fn day_counter_from_name(name: &str) -> Result<Arc<dyn DayCounter>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "actual/365 (fixed)" | "actual/365" | "act/365" | "a365f" => Ok(Arc::new(Actual365Fixed)),
        "actual/360" | "act/360" | "a360" => Ok(Arc::new(Actual360)),
        _ => Err(Error::InvalidArgument(format!("unknown day counter '{name}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn actual365_fixed() {
        let dc = Actual365Fixed;
        let d1 = date(2023, 1, 1);
        let d2 = date(2024, 1, 1);
        assert_eq!(dc.day_count(d1, d2), 365);
        assert_abs_diff_eq!(dc.year_fraction(d1, d2), 1.0, epsilon = 1e-15);
        // Leap year: 366 days is slightly more than one year.
        let d3 = date(2025, 1, 1);
        assert_abs_diff_eq!(dc.year_fraction(d2, d3), 366.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn reversed_dates_give_negative_fraction() {
        let dc = Actual365Fixed;
        let d1 = date(2025, 1, 2);
        let d2 = date(2024, 12, 3);
        assert_abs_diff_eq!(dc.year_fraction(d1, d2), -30.0 / 365.0, epsilon = 1e-15);
        assert_abs_diff_eq!(dc.year_fraction(d1, d1), 0.0);
    }

    #[test]
    fn actual360() {
        let dc = Actual360;
        let d1 = date(2023, 1, 1);
        let d2 = date(2023, 7, 1);
        assert_abs_diff_eq!(dc.year_fraction(d1, d2), 181.0 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(day_counter_from_name("Actual/365 (Fixed)").unwrap().name(), "Actual/365 (Fixed)");
        assert_eq!(day_counter_from_name("A360").unwrap().name(), "Actual/360");
        assert!(day_counter_from_name("30/360").is_err());
    }
}
