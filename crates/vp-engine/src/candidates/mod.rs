//! Candidate window generation.
//!
//! A [`CandidateSource`] turns a [`SearchContext`] into a lazy, finite
//! stream of [`DateRange`] values confined to the search year. Sources do not
//! score or filter; [`retained_plans`] scores each candidate and keeps those
//! that are affordable and long enough.
//!
//! | Source | Windows |
//! |--------|---------|
//! | [`HolidayAnchored`] | ending before, starting at/after, or centred on each holiday |
//! | [`StandaloneSampler`] | weekly cursor × start offset × vacation-day count |
//! | [`ExhaustiveScan`] | every affordable `(start, end)` pair |

use std::collections::HashSet;

use vp_core::errors::Result;
use vp_time::{Date, DateRange, Holiday};

use crate::constraints::{GeneratorConfig, SearchConstraints};
use crate::plan::VacationPlan;
use crate::scorer::score;

mod anchored;
mod exhaustive;
mod standalone;

pub use anchored::HolidayAnchored;
pub use exhaustive::ExhaustiveScan;
pub use standalone::StandaloneSampler;

/// Lazy stream of candidate windows borrowed from a [`SearchContext`].
pub type Candidates<'a> = Box<dyn Iterator<Item = DateRange> + 'a>;

/// A strategy for proposing candidate windows.
pub trait CandidateSource: std::fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Stream candidate windows. Every window lies inside `ctx.year()`.
    fn candidates<'a>(&self, ctx: &'a SearchContext<'a>) -> Candidates<'a>;
}

/// Everything a source needs, resolved once per search.
#[derive(Debug)]
pub struct SearchContext<'a> {
    holidays: &'a [Holiday],
    holiday_dates: HashSet<Date>,
    holidays_in_year: u32,
    year: DateRange,
    remaining: u32,
    target: u32,
    config: &'a GeneratorConfig,
}

impl<'a> SearchContext<'a> {
    /// Resolve `constraints` against `holidays`.
    ///
    /// Fails if the constraints do not validate. A non-positive budget is
    /// clamped to zero, which no window can satisfy except one spending
    /// nothing.
    pub fn new(holidays: &'a [Holiday], constraints: &'a SearchConstraints) -> Result<Self> {
        constraints.validate()?;
        let year = DateRange::year(constraints.year)?;
        let in_year: Vec<&Holiday> = holidays.iter().filter(|h| year.contains(h.date)).collect();
        Ok(Self {
            holidays,
            holiday_dates: in_year.iter().map(|h| h.date).collect(),
            holidays_in_year: in_year.len() as u32,
            year,
            remaining: u32::try_from(constraints.remaining_days().max(0)).unwrap_or(u32::MAX),
            target: constraints.target_consecutive_days,
            config: &constraints.generator,
        })
    }

    /// The full holiday list, as supplied.
    pub fn holidays(&self) -> &'a [Holiday] {
        self.holidays
    }

    /// January 1 to December 31 of the search year.
    pub fn year(&self) -> DateRange {
        self.year
    }

    /// Vacation days still available.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Minimum goal-meeting window length.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Generator tuning.
    pub fn config(&self) -> &'a GeneratorConfig {
        self.config
    }

    /// Holiday records dated inside the search year, duplicates included.
    pub fn holidays_in_year(&self) -> u32 {
        self.holidays_in_year
    }

    /// A weekday with no holiday on it.
    pub fn is_working_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.holiday_dates.contains(&date)
    }

    /// Window of `len` days starting `offset` days after `anchor`, if it fits
    /// inside the year.
    pub fn window(&self, anchor: Date, offset: i32, len: u32) -> Option<DateRange> {
        let start = anchor.add_days(offset).ok()?;
        let end = start.add_days(len.checked_sub(1)? as i32).ok()?;
        let range = DateRange::new(start, end).ok()?;
        self.year.encloses(&range).then_some(range)
    }

    /// Score a window against the full holiday list.
    pub fn score(&self, range: &DateRange) -> VacationPlan {
        score(range, self.holidays)
    }

    /// Affordable and at least the target length.
    pub fn retains(&self, plan: &VacationPlan) -> bool {
        plan.vacation_days_spent <= self.remaining && plan.meets_target(self.target)
    }
}

/// Score every candidate from `source` and keep the retained ones, lazily.
pub fn retained_plans<'a>(
    source: &dyn CandidateSource,
    ctx: &'a SearchContext<'a>,
) -> impl Iterator<Item = VacationPlan> + 'a {
    source
        .candidates(ctx)
        .map(move |range| ctx.score(&range))
        .filter(move |plan| ctx.retains(plan))
}
