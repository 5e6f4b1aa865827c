//! `DateRange` — an inclusive span of calendar days.
//!
//! Day counts are inclusive on both ends: a range from a date to itself is
//! one day long. Weekday/weekend counts are computed from whole weeks plus a
//! short remainder walk, so they cost the same for a weekend as for a year.

use crate::date::{weekday_from_serial, Date};
use vp_core::ensure;
use vp_core::errors::Result;

/// Inclusive day count between `a` and `b`.
///
/// Requires `b >= a`, in which case the result is at least 1. Passing
/// `b < a` is a caller error and yields a non-positive count.
pub fn days_between_inclusive(a: Date, b: Date) -> i32 {
    b - a + 1
}

/// An inclusive range of dates, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create a range; fails if `start > end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        ensure!(start <= end, "range start {start} is after end {end}");
        Ok(Self { start, end })
    }

    /// A single-day range.
    pub fn single(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// The whole calendar year `year` (January 1 to December 31).
    pub fn year(year: u16) -> Result<Self> {
        Self::new(Date::first_of_year(year)?, Date::last_of_year(year)?)
    }

    /// First day of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the range.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Number of days in the range (inclusive, always >= 1).
    pub fn len_days(&self) -> u32 {
        days_between_inclusive(self.start, self.end) as u32
    }

    /// Return `true` if `date` lies within the range.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Return `true` if `other` lies entirely within this range.
    pub fn encloses(&self, other: &DateRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Number of Saturdays and Sundays in the range.
    pub fn count_weekends(&self) -> u32 {
        let len = self.len_days();
        let full_weeks = len / 7;
        let remainder = (0..len % 7)
            .filter(|&i| weekday_from_serial(self.start.serial() + i as i32).is_weekend())
            .count() as u32;
        full_weeks * 2 + remainder
    }

    /// Number of Monday–Friday days in the range.
    pub fn count_weekdays(&self) -> u32 {
        self.len_days() - self.count_weekends()
    }

    /// Iterate over every date in the range, in order.
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: self.start.serial(),
            last: self.end.serial(),
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = Date;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

/// Iterator over the dates of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: i32,
    last: i32,
}

impl Iterator for DateRangeIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.next > self.last {
            return None;
        }
        let serial = self.next;
        self.next += 1;
        Some(Date::from_serial_in_range(serial))
    }

    fn nth(&mut self, n: usize) -> Option<Date> {
        let skip = i32::try_from(n).unwrap_or(i32::MAX);
        self.next = self.next.saturating_add(skip);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.last - self.next + 1).max(0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRangeIter {}
