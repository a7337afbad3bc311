//! TARGET (Trans-European Automated Real-time Gross settlement Express
//! Transfer) calendar.

use crate::calendar::Calendar;
use crate::date::Date;

/// TARGET calendar, the ECB settlement calendar.
///
/// Holidays besides weekends:
/// * New Year's Day (January 1)
/// * Good Friday and Easter Monday (since 2000)
/// * Labour Day (May 1, since 2000)
/// * Christmas Day and Boxing Day (December 25 and 26)
/// * December 31 in 1998, 1999 and 2001
#[derive(Debug, Clone, Copy, Default)]
pub struct Target;

impl Calendar for Target {
    fn name(&self) -> &str {
        "TARGET"
    }

    fn is_business_day(&self, date: Date) -> bool {
        if self.is_weekend(date) {
            return false;
        }
        let (y, m, d) = (date.year(), date.month(), date.day_of_month());
        let easter_monday = easter_monday(y);
        let doy = date.day_of_year();
        let holiday = (m == 1 && d == 1)
            || (y >= 2000 && (doy == easter_monday || doy + 3 == easter_monday))
            || (y >= 2000 && m == 5 && d == 1)
            || (m == 12 && (d == 25 || d == 26))
            || (m == 12 && d == 31 && matches!(y, 1998 | 1999 | 2001));
        !holiday
    }
}

/// Day of the year (1-based) of Easter Monday in the Gregorian calendar.
fn easter_monday(year: u16) -> u16 {
    // Anonymous Gregorian algorithm (Meeus/Jones/Butcher).
    let y = i32::from(year);
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    let sunday = Date::from_ymd(year, month as u8, day as u8)
        .map(|d| d.day_of_year())
        .unwrap_or(0);
    sunday + 1
}
