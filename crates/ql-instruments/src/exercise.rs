//! European exercise.
//!
//! An exercise defines *when* an option can be exercised.  Only European
//! exercise exists here: a single maturity date.

use ql_time::Date;
use std::fmt;

/// Exercise at a single maturity date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EuropeanExercise {
    maturity: Date,
}

impl EuropeanExercise {
    /// Create a European exercise expiring on `maturity`.
    pub fn new(maturity: Date) -> Self {
        Self { maturity }
    }

    /// The maturity date.
    pub fn maturity_date(&self) -> Date {
        self.maturity
    }

    /// The last possible exercise date, which is the maturity.
    pub fn last_date(&self) -> Date {
        self.maturity
    }
}

impl fmt::Display for EuropeanExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "European({})", self.maturity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn european_exercise() {
        let expiry = Date::from_ymd(2026, 6, 15).unwrap();
        let ex = EuropeanExercise::new(expiry);
        assert_eq!(ex.maturity_date(), expiry);
        assert_eq!(ex.last_date(), expiry);
        assert_eq!(ex.to_string(), "European(15 June 2026)");
    }
}
