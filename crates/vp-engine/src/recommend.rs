//! The `recommend` pipeline: generate, score, filter, rank.
//!
//! ```text
//! holidays + constraints ─► SearchContext
//!                              │
//!          Anchored ───────────┼──────────── Exhaustive
//!     HolidayAnchored          │             ExhaustiveScan
//!     (+ StandaloneSampler     │
//!      below min yield)        │
//!                              ▼
//!                     score ─► retain ─► PlanRanker ─► top N
//! ```

use tracing::{debug, trace, warn};
use vp_time::Holiday;

use crate::candidates::{
    retained_plans, CandidateSource, ExhaustiveScan, HolidayAnchored, SearchContext,
    StandaloneSampler,
};
use crate::constraints::{SearchConstraints, SearchStrategy};
use crate::plan::VacationPlan;
use crate::ranker::PlanRanker;

/// What each stage of one [`recommend_with_stats`] call produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendStats {
    /// Distinct retained plans from holiday-anchored windows.
    pub anchored_retained: usize,
    /// Whether standalone sampling ran.
    pub standalone_engaged: bool,
    /// Retained plans from standalone sampling, before deduplication.
    pub standalone_retained: usize,
    /// Retained plans from the exhaustive scan.
    pub exhaustive_retained: usize,
    /// Plans returned after ranking.
    pub returned: usize,
}

/// Best vacation windows for `constraints`, ranked.
///
/// Never fails: a spent budget or constraints that do not validate give an
/// empty result.
///
/// # Example
/// ```
/// use vp_engine::{recommend, SearchConstraints};
/// use vp_time::{Date, Holiday};
///
/// let new_year = Date::from_ymd(2025, 1, 1).unwrap();
/// let holidays = vec![Holiday::public(new_year, "New Year's Day")];
/// let constraints = SearchConstraints::new(3, 0)
///     .with_year(2025)
///     .with_target_consecutive_days(5);
///
/// let plans = recommend(&holidays, &constraints);
/// assert_eq!(plans[0].start_date, new_year);
/// assert_eq!(plans[0].total_days_off, 5);
/// assert_eq!(plans[0].vacation_days_spent, 2);
/// ```
pub fn recommend(holidays: &[Holiday], constraints: &SearchConstraints) -> Vec<VacationPlan> {
    recommend_with_stats(holidays, constraints).0
}

/// [`recommend`] from plain arguments. `year` defaults to the current year
/// and `target_consecutive_days` to 7.
pub fn recommend_for(
    holidays: &[Holiday],
    available_vacation_days: u32,
    used_vacation_days: u32,
    year: Option<u16>,
    target_consecutive_days: Option<u32>,
) -> Vec<VacationPlan> {
    let mut constraints = SearchConstraints::new(available_vacation_days, used_vacation_days);
    if let Some(year) = year {
        constraints = constraints.with_year(year);
    }
    if let Some(target) = target_consecutive_days {
        constraints = constraints.with_target_consecutive_days(target);
    }
    recommend(holidays, &constraints)
}

/// [`recommend`], also reporting how many plans each source contributed.
pub fn recommend_with_stats(
    holidays: &[Holiday],
    constraints: &SearchConstraints,
) -> (Vec<VacationPlan>, RecommendStats) {
    let mut stats = RecommendStats::default();

    if constraints.remaining_days() <= 0 {
        debug!(
            available = constraints.available_vacation_days,
            used = constraints.used_vacation_days,
            "no vacation days remaining"
        );
        return (Vec::new(), stats);
    }

    let ctx = match SearchContext::new(holidays, constraints) {
        Ok(ctx) => ctx,
        Err(err) => {
            warn!(%err, "rejected search constraints");
            return (Vec::new(), stats);
        }
    };

    let candidates = match constraints.strategy {
        SearchStrategy::Anchored => {
            let mut plans = PlanRanker::dedup(retained_plans(&HolidayAnchored, &ctx));
            stats.anchored_retained = plans.len();

            let min_yield = ctx.config().min_anchored_yield;
            if plans.len() < min_yield {
                trace!(
                    anchored = plans.len(),
                    min_yield,
                    source = StandaloneSampler.name(),
                    "anchored yield low: sampling whole year"
                );
                stats.standalone_engaged = true;
                let before = plans.len();
                plans.extend(retained_plans(&StandaloneSampler, &ctx));
                stats.standalone_retained = plans.len() - before;
            }
            plans
        }
        SearchStrategy::Exhaustive => {
            let plans: Vec<VacationPlan> = retained_plans(&ExhaustiveScan, &ctx).collect();
            stats.exhaustive_retained = plans.len();
            plans
        }
    };

    let ranked = PlanRanker::new(ctx.target())
        .with_limit(constraints.result_limit)
        .rank(candidates);
    stats.returned = ranked.len();

    debug!(
        year = constraints.year,
        remaining = ctx.remaining(),
        target = ctx.target(),
        strategy = ?constraints.strategy,
        anchored = stats.anchored_retained,
        standalone = stats.standalone_retained,
        exhaustive = stats.exhaustive_retained,
        returned = stats.returned,
        "ranked vacation plans"
    );

    (ranked, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vp_time::Date;

    fn new_year_2025() -> Vec<Holiday> {
        vec![Holiday::public(
            Date::from_ymd(2025, 1, 1).unwrap(),
            "New Year's Day",
        )]
    }

    #[test]
    fn spent_budget_is_empty() {
        let c = SearchConstraints::new(5, 5).with_year(2025);
        let (plans, stats) = recommend_with_stats(&new_year_2025(), &c);
        assert!(plans.is_empty());
        assert_eq!(stats, RecommendStats::default());

        let c = SearchConstraints::new(2, 5).with_year(2025);
        assert!(recommend(&new_year_2025(), &c).is_empty());
    }

    #[test]
    fn invalid_constraints_are_empty() {
        let c = SearchConstraints::new(5, 0).with_year(1850);
        assert!(recommend(&new_year_2025(), &c).is_empty());
        let c = SearchConstraints::new(5, 0)
            .with_year(2025)
            .with_target_consecutive_days(0);
        assert!(recommend(&new_year_2025(), &c).is_empty());
    }

    #[test]
    fn sparse_holidays_engage_standalone() {
        let c = SearchConstraints::new(3, 0)
            .with_year(2025)
            .with_target_consecutive_days(5);
        let (plans, stats) = recommend_with_stats(&new_year_2025(), &c);
        assert!(stats.anchored_retained < 20);
        assert!(stats.standalone_engaged);
        assert!(stats.standalone_retained > 0);
        assert_eq!(stats.exhaustive_retained, 0);
        assert_eq!(stats.returned, plans.len());
    }

    #[test]
    fn low_threshold_skips_standalone() {
        let c = SearchConstraints::new(3, 0)
            .with_year(2025)
            .with_target_consecutive_days(5)
            .with_generator(crate::GeneratorConfig::default().with_min_anchored_yield(0));
        let (plans, stats) = recommend_with_stats(&new_year_2025(), &c);
        assert!(!stats.standalone_engaged);
        assert_eq!(stats.standalone_retained, 0);
        assert_eq!(stats.returned, plans.len());
        assert_eq!(plans[0].holiday_days, 1);
    }

    #[test]
    fn recommend_for_applies_defaults() {
        let plans = recommend_for(&new_year_2025(), 3, 0, Some(2025), Some(5));
        assert_eq!(plans[0].start_date, Date::from_ymd(2025, 1, 1).unwrap());
        assert_eq!(plans[0].end_date, Date::from_ymd(2025, 1, 5).unwrap());

        // Default 7-day target: every plan returned is at least a week long.
        let plans = recommend_for(&[], 10, 0, Some(2025), None);
        assert!(!plans.is_empty());
        assert!(plans.iter().all(|p| p.total_days_off >= 7));
    }
}
