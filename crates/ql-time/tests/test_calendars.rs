//! Integration tests for the TARGET calendar and business-day rolling.

use ql_time::{BusinessDayConvention, Calendar, Date, Period, Target};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn target_holidays_2024() {
    let expected = [
        date(2024, 1, 1),
        date(2024, 3, 29),
        date(2024, 4, 1),
        date(2024, 5, 1),
        date(2024, 12, 25),
        date(2024, 12, 26),
    ];
    let cal = Target;
    let mut holidays = Vec::new();
    let mut d = date(2024, 1, 1);
    while d <= date(2024, 12, 31) {
        if cal.is_holiday(d) && !cal.is_weekend(d) {
            holidays.push(d);
        }
        d = d.add_days(1).unwrap();
    }
    assert_eq!(holidays, expected);
}

#[test]
fn target_special_closing_days() {
    let cal = Target;
    assert!(cal.is_holiday(date(1999, 12, 31)));
    assert!(cal.is_holiday(date(2001, 12, 31)));
    assert!(cal.is_business_day(date(2002, 12, 31)));
    // Easter holidays only apply from 2000 onwards.
    assert!(cal.is_business_day(date(1999, 4, 5)));
}

#[test]
fn roll_over_easter() {
    let cal = Target;
    let good_friday = date(2025, 4, 18);
    assert_eq!(
        cal.adjust(good_friday, BusinessDayConvention::Following).unwrap(),
        date(2025, 4, 22)
    );
    assert_eq!(
        cal.adjust(good_friday, BusinessDayConvention::Preceding).unwrap(),
        date(2025, 4, 17)
    );
    assert_eq!(
        cal.advance(date(2025, 4, 17), Period::days(1), BusinessDayConvention::Following)
            .unwrap(),
        date(2025, 4, 22)
    );
}

#[test]
fn business_days_in_a_target_year() {
    let cal = Target;
    // 261 weekdays less six weekday holidays.
    let n = cal.business_days_between(date(2024, 12, 31), date(2025, 12, 31));
    assert_eq!(n, 255);
}
