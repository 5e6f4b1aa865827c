//! Search inputs: the user's budget and goal, and the generator's knobs.
//!
//! Everything the engine needs is passed in explicitly through
//! [`SearchConstraints`]; there is no process-wide state.

use vp_core::ensure;
use vp_core::errors::{Error, Result};
use vp_time::{Date, MAX_YEAR, MIN_YEAR};

/// Default minimum window length for a plan to count as goal-meeting.
pub const DEFAULT_TARGET_CONSECUTIVE_DAYS: u32 = 7;

/// Default maximum number of recommendations returned.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Which candidate sources feed the ranker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchStrategy {
    /// Holiday-anchored windows, topped up by standalone sampling when they
    /// yield too few plans. Bounded, not guaranteed optimal.
    #[default]
    Anchored,
    /// Every `(start, end)` pair in the year. Finds the best ratio the year
    /// allows.
    Exhaustive,
}

/// Tuning for the holiday-anchored and standalone generators.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// How far a window ending before a holiday may slide back (days).
    pub lead_offset: u32,
    /// How far a window starting at a holiday may slide forward (days).
    pub trail_offset: u32,
    /// Standalone sampling runs when fewer anchored plans survive.
    pub min_anchored_yield: usize,
    /// Longest window the anchored generator tries, unless the target is
    /// longer.
    pub max_window_len: u32,
    /// Start offsets (days after each weekly cursor) tried by the sampler.
    pub standalone_offsets: Vec<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            lead_offset: 5,
            trail_offset: 3,
            min_anchored_yield: 20,
            max_window_len: 31,
            standalone_offsets: (0..7).collect(),
        }
    }
}

impl GeneratorConfig {
    /// Set the backward slide for windows ending before a holiday.
    pub fn with_lead_offset(mut self, days: u32) -> Self {
        self.lead_offset = days;
        self
    }

    /// Set the forward slide for windows starting at a holiday.
    pub fn with_trail_offset(mut self, days: u32) -> Self {
        self.trail_offset = days;
        self
    }

    /// Set the anchored-yield threshold below which sampling kicks in.
    pub fn with_min_anchored_yield(mut self, n: usize) -> Self {
        self.min_anchored_yield = n;
        self
    }

    /// Set the longest anchored window length.
    pub fn with_max_window_len(mut self, days: u32) -> Self {
        self.max_window_len = days;
        self
    }

    /// Set the sampler's start offsets within each week.
    pub fn with_standalone_offsets(mut self, offsets: impl Into<Vec<u32>>) -> Self {
        self.standalone_offsets = offsets.into();
        self
    }
}

/// The user's vacation budget, goal, and search settings.
///
/// # Example
/// ```
/// use vp_engine::{SearchConstraints, SearchStrategy};
///
/// let c = SearchConstraints::new(15, 3)
///     .with_year(2025)
///     .with_target_consecutive_days(9)
///     .with_strategy(SearchStrategy::Exhaustive);
/// assert_eq!(c.remaining_days(), 12);
/// assert!(c.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConstraints {
    /// Vacation days granted for the year.
    pub available_vacation_days: u32,
    /// Vacation days already taken or booked.
    pub used_vacation_days: u32,
    /// Minimum window length for a plan to count as goal-meeting.
    pub target_consecutive_days: u32,
    /// Calendar year searched (January 1 to December 31).
    pub year: u16,
    /// Candidate sources to use.
    pub strategy: SearchStrategy,
    /// Generator tuning.
    pub generator: GeneratorConfig,
    /// Maximum number of plans returned.
    pub result_limit: usize,
}

impl Default for SearchConstraints {
    fn default() -> Self {
        Self {
            available_vacation_days: 0,
            used_vacation_days: 0,
            target_consecutive_days: DEFAULT_TARGET_CONSECUTIVE_DAYS,
            year: current_year(),
            strategy: SearchStrategy::default(),
            generator: GeneratorConfig::default(),
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl SearchConstraints {
    /// Constraints for the current year with the default 7-day target.
    pub fn new(available_vacation_days: u32, used_vacation_days: u32) -> Self {
        Self {
            available_vacation_days,
            used_vacation_days,
            ..Self::default()
        }
    }

    /// Set the calendar year to search.
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = year;
        self
    }

    /// Set the goal length.
    pub fn with_target_consecutive_days(mut self, days: u32) -> Self {
        self.target_consecutive_days = days;
        self
    }

    /// Choose the candidate sources.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the generator tuning.
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Set the maximum number of plans returned.
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    /// Days still available: `available − used`, possibly negative.
    pub fn remaining_days(&self) -> i64 {
        i64::from(self.available_vacation_days) - i64::from(self.used_vacation_days)
    }

    /// Check that the constraints describe a searchable year and goal.
    ///
    /// A non-positive remaining budget is not an error; it simply yields no
    /// recommendations.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_consecutive_days >= 1,
            "target consecutive days must be >= 1, got {}",
            self.target_consecutive_days
        );
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(Error::InvalidArgument(format!(
                "year {} out of range [{MIN_YEAR}, {MAX_YEAR}]",
                self.year
            )));
        }
        Ok(())
    }
}

/// The local calendar year, or the last supported year if the clock is
/// outside the supported range.
pub fn current_year() -> u16 {
    Date::today().map_or(MAX_YEAR, |d| d.year())
}
