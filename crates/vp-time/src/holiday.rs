//! `Holiday` — a named non-working day supplied by an external source.
//!
//! Holiday lists are treated as plain data: the engine neither deduplicates
//! nor sorts them, and a list may mention the same date more than once.

use crate::date::Date;
use crate::date_range::DateRange;
use vp_core::errors::Result;

/// Who grants the day off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HolidayCategory {
    /// Public / government holiday.
    Public,
    /// Company or organization holiday.
    Organizational,
}

impl std::fmt::Display for HolidayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayCategory::Public => write!(f, "public"),
            HolidayCategory::Organizational => write!(f, "organizational"),
        }
    }
}

/// A single holiday record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    /// The calendar day.
    pub date: Date,
    /// Display name, e.g. `"New Year's Day"`.
    pub name: String,
    /// Public or organizational.
    pub category: HolidayCategory,
}

impl Holiday {
    /// Create a holiday record.
    pub fn new(date: Date, name: impl Into<String>, category: HolidayCategory) -> Self {
        Self {
            date,
            name: name.into(),
            category,
        }
    }

    /// Create a public holiday.
    pub fn public(date: Date, name: impl Into<String>) -> Self {
        Self::new(date, name, HolidayCategory::Public)
    }

    /// Create an organizational holiday.
    pub fn organizational(date: Date, name: impl Into<String>) -> Self {
        Self::new(date, name, HolidayCategory::Organizational)
    }

    /// Build a holiday from an ISO `YYYY-MM-DD` date string.
    pub fn parse(date: &str, name: impl Into<String>, category: HolidayCategory) -> Result<Self> {
        Ok(Self::new(date.parse()?, name, category))
    }

    /// Return `true` if this holiday falls on a Saturday or Sunday.
    pub fn is_on_weekend(&self) -> bool {
        self.date.is_weekend()
    }
}

/// Holidays in `holidays` whose date lies within `range`, in input order.
pub fn holidays_within(
    holidays: &[Holiday],
    range: DateRange,
) -> impl Iterator<Item = &Holiday> + '_ {
    holidays.iter().filter(move |h| range.contains(h.date))
}
