//! `VacationPlan` — a scored time-off window.

use vp_time::{holidays_within, Date, DateRange, Holiday};

/// A candidate window together with its cost and payoff.
///
/// Invariants, as produced by [`score`](crate::scorer::score):
/// * `total_days_off` is the inclusive length of `start_date..=end_date`;
/// * `vacation_days_spent <= total_days_off`;
/// * `efficiency_ratio == total_days_off / vacation_days_spent`, or `0.0`
///   when nothing is spent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VacationPlan {
    /// First day off.
    pub start_date: Date,
    /// Last day off.
    pub end_date: Date,
    /// Calendar days in the window.
    pub total_days_off: u32,
    /// Weekdays in the window not covered by a holiday record.
    pub vacation_days_spent: u32,
    /// Saturdays and Sundays in the window.
    pub weekend_days: u32,
    /// Holiday records dated inside the window (duplicates and weekend
    /// holidays included).
    pub holiday_days: u32,
    /// Days off per vacation day spent.
    pub efficiency_ratio: f64,
}

impl VacationPlan {
    /// The window as a [`DateRange`].
    pub fn range(&self) -> DateRange {
        // start <= end holds for every scored plan; fall back to the start
        // day for hand-built records that violate it.
        DateRange::new(self.start_date, self.end_date)
            .unwrap_or_else(|_| DateRange::single(self.start_date))
    }

    /// `(start, end)` identity used for deduplication.
    pub fn key(&self) -> (Date, Date) {
        (self.start_date, self.end_date)
    }

    /// Weekend days plus holiday records.
    ///
    /// A holiday on a weekend is counted twice here; see
    /// [`distinct_free_days`](crate::scorer::distinct_free_days) for the
    /// deduplicated figure.
    pub fn free_days(&self) -> u32 {
        self.weekend_days + self.holiday_days
    }

    /// Return `true` if the window is at least `target` days long.
    pub fn meets_target(&self, target: u32) -> bool {
        self.total_days_off >= target
    }

    /// Qualitative band for the efficiency ratio.
    pub fn rating(&self) -> EfficiencyRating {
        EfficiencyRating::from_ratio(self.efficiency_ratio)
    }

    /// Holidays from `holidays` that fall inside this plan, in input order.
    pub fn holidays_included<'a>(&self, holidays: &'a [Holiday]) -> Vec<&'a Holiday> {
        holidays_within(holidays, self.range()).collect()
    }
}

impl std::fmt::Display for VacationPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to {}: {} days off for {} vacation days ({:.1}x)",
            self.start_date,
            self.end_date,
            self.total_days_off,
            self.vacation_days_spent,
            self.efficiency_ratio
        )
    }
}

/// Qualitative efficiency band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EfficiencyRating {
    /// Below 1.5 days off per vacation day.
    Fair,
    /// At least 1.5.
    Good,
    /// At least 2.0.
    Great,
    /// At least 2.5.
    Excellent,
}

impl EfficiencyRating {
    /// Classify a ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 2.5 {
            EfficiencyRating::Excellent
        } else if ratio >= 2.0 {
            EfficiencyRating::Great
        } else if ratio >= 1.5 {
            EfficiencyRating::Good
        } else {
            EfficiencyRating::Fair
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            EfficiencyRating::Fair => "Fair",
            EfficiencyRating::Good => "Good",
            EfficiencyRating::Great => "Great",
            EfficiencyRating::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
