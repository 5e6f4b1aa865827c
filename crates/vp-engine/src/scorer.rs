//! Efficiency scoring of a single window.
//!
//! A window costs one vacation day for every weekday in it, minus one for
//! every holiday record dated inside it. Holiday records are counted as
//! given: two records on the same day, or a record on a Saturday, still each
//! reduce the cost. [`distinct_free_days`] gives the deduplicated view.

use std::collections::HashSet;

use vp_time::{holidays_within, Date, DateRange, Holiday};

use crate::plan::VacationPlan;

/// Score `range` against `holidays`.
pub fn score(range: &DateRange, holidays: &[Holiday]) -> VacationPlan {
    let total_days_off = range.len_days();
    let weekend_days = range.count_weekends();
    let holiday_days = holidays_within(holidays, *range).count() as u32;
    let vacation_days_spent = range.count_weekdays().saturating_sub(holiday_days);

    VacationPlan {
        start_date: range.start(),
        end_date: range.end(),
        total_days_off,
        vacation_days_spent,
        weekend_days,
        holiday_days,
        efficiency_ratio: efficiency_ratio(total_days_off, vacation_days_spent),
    }
}

/// `total / spent`, or `0.0` when nothing is spent.
pub fn efficiency_ratio(total_days_off: u32, vacation_days_spent: u32) -> f64 {
    if vacation_days_spent == 0 {
        0.0
    } else {
        f64::from(total_days_off) / f64::from(vacation_days_spent)
    }
}

/// Days in `range` that are a weekend day or carry at least one holiday.
pub fn distinct_free_days(range: &DateRange, holidays: &[Holiday]) -> u32 {
    let holiday_dates = holiday_dates_within(range, holidays);
    range
        .iter()
        .filter(|d| d.is_weekend() || holiday_dates.contains(d))
        .count() as u32
}

/// Weekdays in `range` not covered by any holiday: the days to request off.
pub fn vacation_dates(range: &DateRange, holidays: &[Holiday]) -> Vec<Date> {
    let holiday_dates = holiday_dates_within(range, holidays);
    range
        .iter()
        .filter(|d| !d.is_weekend() && !holiday_dates.contains(d))
        .collect()
}

fn holiday_dates_within(range: &DateRange, holidays: &[Holiday]) -> HashSet<Date> {
    holidays_within(holidays, *range).map(|h| h.date).collect()
}
