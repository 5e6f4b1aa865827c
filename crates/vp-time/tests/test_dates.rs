//! Integration tests for `Date` and `DateRange`.
//!
//! Calendar arithmetic is cross-checked against `chrono`, which uses an
//! independent proleptic-Gregorian implementation.

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

use vp_time::{days_between_inclusive, Date, DateRange, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn every_day_of_2024_and_2025_matches_chrono() {
    let mut naive = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut d = date(2024, 1, 1);
    while naive.year() < 2026 {
        assert_eq!(d.year() as i32, naive.year());
        assert_eq!(d.month() as u32, naive.month());
        assert_eq!(d.day_of_month() as u32, naive.day());
        assert_eq!(d.weekday(), Weekday::from(naive.weekday()), "{d}");
        naive += Duration::days(1);
        d = d.add_days(1).unwrap();
    }
}

#[test]
fn known_weekdays() {
    assert_eq!(date(2025, 11, 27).weekday(), Weekday::Thursday); // Thanksgiving
    assert_eq!(date(2025, 12, 25).weekday(), Weekday::Thursday);
    assert_eq!(date(2024, 7, 4).weekday(), Weekday::Thursday);
    assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
}

#[test]
fn leap_day_rollover() {
    assert_eq!(date(2024, 2, 28).add_days(2).unwrap(), date(2024, 3, 1));
    assert_eq!(date(2025, 2, 28).add_days(1).unwrap(), date(2025, 3, 1));
    assert_eq!(date(2100, 2, 28).add_days(1).unwrap(), date(2100, 3, 1));
    assert_eq!(date(2000, 2, 28).add_days(1).unwrap(), date(2000, 2, 29));
}

#[test]
fn year_range_spans_whole_year() {
    let r = DateRange::year(2025).unwrap();
    assert_eq!(r.start(), date(2025, 1, 1));
    assert_eq!(r.end(), date(2025, 12, 31));
    assert_eq!(r.iter().count(), 365);
    assert_eq!(days_between_inclusive(r.start(), r.end()), 365);
}

proptest! {
    #[test]
    fn shift_roundtrip(serial_offset in 0i32..100_000, n in -5_000i32..5_000) {
        let Ok(d) = Date::MIN.add_days(serial_offset) else { return Ok(()); };
        if let Ok(shifted) = d.add_days(n) {
            prop_assert_eq!(shifted.add_days(-n).unwrap(), d);
            prop_assert_eq!(d.days_until(shifted), n);
        }
    }

    #[test]
    fn shift_matches_chrono(offset in 0i32..60_000, n in -400i32..400) {
        let d = date(1950, 1, 1).add_days(offset).unwrap();
        let expected = NaiveDate::from(d) + Duration::days(n as i64);
        prop_assert_eq!(NaiveDate::from(d.add_days(n).unwrap()), expected);
    }

    #[test]
    fn weekday_weekend_partition(offset in 0i32..60_000, len in 1i32..800) {
        let start = date(1950, 1, 1).add_days(offset).unwrap();
        let r = DateRange::new(start, start.add_days(len - 1).unwrap()).unwrap();
        prop_assert_eq!(r.len_days(), len as u32);
        prop_assert_eq!(r.count_weekdays() + r.count_weekends(), len as u32);
        let walked = r.iter().filter(|d| d.is_weekend()).count() as u32;
        prop_assert_eq!(r.count_weekends(), walked);
    }

    #[test]
    fn iso_display_parses_back(offset in 0i32..109_000) {
        let Ok(d) = Date::MIN.add_days(offset) else { return Ok(()); };
        prop_assert_eq!(d.to_string().parse::<Date>().unwrap(), d);
    }
}
