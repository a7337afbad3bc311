//! `Period`: a signed time span expressed in a [`TimeUnit`].

use crate::date::Date;
use crate::time_unit::TimeUnit;
use ql_core::errors::Result;

/// A time span made up of an integer length and a [`TimeUnit`].
///
/// Option maturities are expressed as `Period::days(n)` from the evaluation
/// date.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    /// Number of units.
    pub length: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// A period of `n` calendar days.
    pub fn days(n: i32) -> Self {
        Self::new(n, TimeUnit::Days)
    }

    /// The date reached by moving `self` forward from `date`.
    pub fn from_date(self, date: Date) -> Result<Date> {
        date.advance_by(self)
    }
}

impl std::ops::Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        Period::new(-self.length, self.unit)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self.unit {
            TimeUnit::Days => "D",
            TimeUnit::Weeks => "W",
            TimeUnit::Months => "M",
            TimeUnit::Years => "Y",
        };
        write!(f, "{}{abbr}", self.length)
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}
