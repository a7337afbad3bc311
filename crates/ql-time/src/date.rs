//! `Date`: a calendar date stored as a day serial number.
//!
//! Serial 1 is January 1, 1900 and serial 0 is the null sentinel.  Calendar
//! field extraction and parsing are delegated to `chrono::NaiveDate`; the
//! serial form keeps day arithmetic and comparisons trivially cheap.
//!
//! The valid range is 1901-01-01 to 2199-12-31.

use crate::period::Period;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use chrono::{Datelike, Local, Months, NaiveDate};
use ql_core::errors::{Error, Result};

/// Days from 0001-01-01 (day 1 of the common era) to 1899-12-31.
const EPOCH_DAYS_FROM_CE: i32 = 693_595;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

impl Date {
    /// The null date sentinel (serial 0).
    pub const NULL: Date = Date(0);

    /// Minimum valid date: January 1, 1901.
    pub const MIN: Date = Date(366);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number, checking the valid range.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        let naive = NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())
            .ok_or_else(|| Error::Date(format!("{year}-{month:02}-{day:02} is not a date")))?;
        Self::from_naive(naive)
    }

    /// Convert from a `chrono::NaiveDate`.
    pub fn from_naive(naive: NaiveDate) -> Result<Self> {
        Self::from_serial(naive.num_days_from_ce() - EPOCH_DAYS_FROM_CE)
    }

    /// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
    pub fn parse_iso(s: &str) -> Result<Self> {
        let naive = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| Error::Date(format!("cannot parse '{s}' as YYYY-MM-DD: {e}")))?;
        Self::from_naive(naive)
    }

    /// Today's date according to the local system clock.
    pub fn todays_date() -> Result<Self> {
        Self::from_naive(Local::now().date_naive())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `true` if this is the null date sentinel.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// The equivalent `chrono::NaiveDate`, or `None` for the null date.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        if self.is_null() {
            return None;
        }
        NaiveDate::from_num_days_from_ce_opt(self.0 + EPOCH_DAYS_FROM_CE)
    }

    /// Calendar fields of the serial.  The null date reads as its serial,
    /// 31 December 1899, so field accessors never report a year outside
    /// 1899..=2199.
    fn naive(&self) -> NaiveDate {
        // Serial 0 and every serial in [MIN, MAX] map to a chrono date.
        NaiveDate::from_num_days_from_ce_opt(self.0 + EPOCH_DAYS_FROM_CE).unwrap_or(NaiveDate::MIN)
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        self.naive().year() as u16
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.naive().month() as u8
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.naive().day() as u8
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        self.naive().ordinal() as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from(self.naive().weekday())
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` calendar days.  Returns an error if the result is out
    /// of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("{self} + {n} days overflows")))?;
        Self::from_serial(serial)
    }

    /// Advance by `n` units of calendar time.
    ///
    /// Month and year steps clamp to the end of the target month
    /// (January 31 + 1M = February 28/29).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(n.saturating_mul(7)),
            TimeUnit::Months => {
                let months = Months::new(n.unsigned_abs());
                let shifted = if n >= 0 {
                    self.naive().checked_add_months(months)
                } else {
                    self.naive().checked_sub_months(months)
                };
                let naive = shifted
                    .ok_or_else(|| Error::Date(format!("{self} + {n} months overflows")))?;
                Self::from_naive(naive)
            }
            TimeUnit::Years => self.advance(n.saturating_mul(12), TimeUnit::Months),
        }
    }

    /// Advance by a [`Period`].
    pub fn advance_by(self, period: Period) -> Result<Self> {
        self.advance(period.length, period.unit)
    }

    /// Number of calendar days from `self` to `other` (positive if
    /// `other > self`).
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let first_of_next = self
            .naive()
            .with_day(1)
            .and_then(|d| d.checked_add_months(Months::new(1)));
        match first_of_next.and_then(|d| d.pred_opt()) {
            Some(last) => Date(last.num_days_from_ce() - EPOCH_DAYS_FROM_CE),
            None => self,
        }
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_naive() {
            Some(d) => write!(f, "{}", d.format("%-d %B %Y")),
            None => write!(f, "null date"),
        }
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_naive() {
            Some(d) => write!(f, "Date({})", d.format("%Y-%m-%d")),
            None => write!(f, "Date(null)"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
