//! Standalone sampling, independent of where holidays fall.
//!
//! A cursor steps through the year one week at a time. From each configured
//! start offset after the cursor, and for each vacation-day count `v` the
//! budget allows, the window spends exactly `v` working days and then grows
//! over any free days (weekends, holidays) touching either end.

use vp_time::{Date, DateRange};

use super::{CandidateSource, Candidates, SearchContext};

/// Year-wide sampling used when anchored windows are scarce.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandaloneSampler;

impl StandaloneSampler {
    /// The window starting at `start` that spends `days` working days,
    /// widened over adjacent free days. `None` if the year runs out first.
    pub fn spend_from(ctx: &SearchContext<'_>, start: Date, days: u32) -> Option<DateRange> {
        let year = ctx.year();
        if days == 0 || !year.contains(start) {
            return None;
        }

        let mut spent = 0;
        let mut end = start;
        loop {
            if ctx.is_working_day(end) {
                spent += 1;
                if spent == days {
                    break;
                }
            }
            end = end.add_days(1).ok().filter(|d| year.contains(*d))?;
        }

        let first = widen(ctx, start, -1);
        let last = widen(ctx, end, 1);
        DateRange::new(first, last).ok()
    }
}

/// Walk from `from` in direction `step` while the next day is free and in
/// the year.
fn widen(ctx: &SearchContext<'_>, from: Date, step: i32) -> Date {
    let year = ctx.year();
    let mut edge = from;
    while let Some(next) = edge.add_days(step).ok().filter(|d| year.contains(*d)) {
        if ctx.is_working_day(next) {
            break;
        }
        edge = next;
    }
    edge
}

impl CandidateSource for StandaloneSampler {
    fn name(&self) -> &'static str {
        "standalone"
    }

    fn candidates<'a>(&self, ctx: &'a SearchContext<'a>) -> Candidates<'a> {
        let year = ctx.year();
        let budget = ctx.remaining().min(year.count_weekdays());

        Box::new(
            (0..year.len_days())
                .step_by(7)
                .flat_map(move |week| {
                    ctx.config()
                        .standalone_offsets
                        .iter()
                        .map(move |offset| week + offset)
                })
                .filter_map(move |offset| year.start().add_days(offset as i32).ok())
                .filter(move |start| year.contains(*start))
                .flat_map(move |start| {
                    // Once a count runs past December 31, every larger one does too.
                    (1..=budget)
                        .map_while(move |days| StandaloneSampler::spend_from(ctx, start, days))
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::candidates::retained_plans;
    use crate::constraints::{GeneratorConfig, SearchConstraints};
    use vp_time::Holiday;

    fn range(a: Date, b: Date) -> DateRange {
        DateRange::new(a, b).unwrap()
    }

    #[test]
    fn spend_widens_over_weekends() {
        let c = SearchConstraints::new(10, 0).with_year(2025);
        let ctx = SearchContext::new(&[], &c).unwrap();
        // Friday 2025-01-10, one day: Fri..Sun
        assert_eq!(
            StandaloneSampler::spend_from(&ctx, date(2025, 1, 10), 1),
            Some(range(date(2025, 1, 10), date(2025, 1, 12)))
        );
        // Monday 2025-01-13, five days: Sat 11 .. Sun 19
        assert_eq!(
            StandaloneSampler::spend_from(&ctx, date(2025, 1, 13), 5),
            Some(range(date(2025, 1, 11), date(2025, 1, 19)))
        );
        // Starting on Saturday walks through the weekend before spending.
        assert_eq!(
            StandaloneSampler::spend_from(&ctx, date(2025, 1, 11), 1),
            Some(range(date(2025, 1, 11), date(2025, 1, 13)))
        );
    }

    #[test]
    fn spend_skips_holidays() {
        let holidays = vec![Holiday::public(date(2025, 1, 1), "New Year's Day")];
        let c = SearchConstraints::new(10, 0).with_year(2025);
        let ctx = SearchContext::new(&holidays, &c).unwrap();
        // Start on the holiday: Thu 2 and Fri 3 are spent, weekend absorbed.
        assert_eq!(
            StandaloneSampler::spend_from(&ctx, date(2025, 1, 1), 2),
            Some(range(date(2025, 1, 1), date(2025, 1, 5)))
        );
    }

    #[test]
    fn spend_stops_at_year_end() {
        let c = SearchConstraints::new(10, 0).with_year(2025);
        let ctx = SearchContext::new(&[], &c).unwrap();
        // Wed 2025-12-31 is the last working day of the year.
        assert!(StandaloneSampler::spend_from(&ctx, date(2025, 12, 31), 2).is_none());
        assert_eq!(
            StandaloneSampler::spend_from(&ctx, date(2025, 12, 31), 1),
            Some(range(date(2025, 12, 31), date(2025, 12, 31)))
        );
        assert!(StandaloneSampler::spend_from(&ctx, date(2026, 1, 2), 1).is_none());
    }

    #[test]
    fn samples_whole_year_without_holidays() {
        let c = SearchConstraints::new(5, 0).with_year(2025).with_target_consecutive_days(7);
        let ctx = SearchContext::new(&[], &c).unwrap();
        let windows: Vec<DateRange> = StandaloneSampler.candidates(&ctx).collect();
        assert!(windows.iter().all(|w| ctx.year().encloses(w)));
        assert!(windows.iter().any(|w| w.start().month() == 12));

        let plans: Vec<_> = retained_plans(&StandaloneSampler, &ctx).collect();
        assert!(!plans.is_empty());
        // Best a 5-day budget can do without holidays: Sat..Sun over a full week.
        let best = plans
            .iter()
            .map(|p| p.efficiency_ratio)
            .fold(0.0_f64, f64::max);
        approx::assert_abs_diff_eq!(best, 9.0 / 5.0, epsilon = 1e-12);
    }

    #[test]
    fn budget_beyond_the_year_stops_at_december() {
        let c = SearchConstraints::new(u32::MAX, 0)
            .with_year(2025)
            .with_target_consecutive_days(1)
            .with_generator(GeneratorConfig::default().with_standalone_offsets([0]));
        let ctx = SearchContext::new(&[], &c).unwrap();
        // One window per affordable count: cursor Jan 1 has all 261 working
        // days ahead, the last cursor (Dec 31) only one.
        let windows: Vec<DateRange> = StandaloneSampler.candidates(&ctx).collect();
        let first: Vec<_> = windows
            .iter()
            .filter(|w| w.start() == date(2025, 1, 1))
            .collect();
        assert_eq!(first.len(), 261);
        assert_eq!(first.last().unwrap().end(), date(2025, 12, 31));
        assert!(windows.len() <= 53 * 261);
    }

    #[test]
    fn offsets_limit_start_days() {
        let c = SearchConstraints::new(1, 0)
            .with_year(2025)
            .with_target_consecutive_days(1)
            .with_generator(GeneratorConfig::default().with_standalone_offsets([2]));
        let ctx = SearchContext::new(&[], &c).unwrap();
        // Cursor starts on Wednesday Jan 1, so offset 2 is always a Friday.
        let windows: Vec<DateRange> = StandaloneSampler.candidates(&ctx).collect();
        assert!(!windows.is_empty());
        assert_eq!(windows.len(), 52);
        assert!(windows.iter().all(|w| w.len_days() == 3));
    }
}
