//! # vp-time
//!
//! Calendar-day arithmetic for vacation-planner: dates, weekdays, inclusive
//! date ranges, and holiday records.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `DateRange` — inclusive span of dates with weekday/weekend counts.
pub mod date_range;

/// `Holiday` records and categories.
pub mod holiday;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{Date, MAX_YEAR, MIN_YEAR};
pub use date_range::{days_between_inclusive, DateRange, DateRangeIter};
pub use holiday::{holidays_within, Holiday, HolidayCategory};
pub use weekday::Weekday;
