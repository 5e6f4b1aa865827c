//! Holiday-anchored windows.
//!
//! For each holiday in the search year and each window length, three
//! families of windows are proposed:
//!
//! ```text
//!                    h
//!   before   [------]|              end = h - d,   d in 0..=lead_offset
//!   after            [------]       start = h + d, d in 0..=trail_offset
//!   straddle      [---h---]         h at the midpoint
//! ```
//!
//! Window lengths run from the target up to roughly what the remaining
//! budget can buy: `remaining` weekdays plus the weekends around them and a
//! little slack for holidays, capped at `max_window_len`.

use super::{CandidateSource, Candidates, SearchContext};

/// Windows built around each holiday.
#[derive(Debug, Clone, Copy, Default)]
pub struct HolidayAnchored;

/// Free days a window may pick up beyond its weekends (holidays).
const HOLIDAY_SLACK: u32 = 2;

impl HolidayAnchored {
    /// Inclusive `(min, max)` window lengths tried for this context.
    pub fn window_lengths(ctx: &SearchContext<'_>) -> (u32, u32) {
        let min_len = ctx.target().max(1);
        let remaining = ctx.remaining();
        let affordable = remaining
            .saturating_add(2 * (remaining / 5 + 1))
            .saturating_add(HOLIDAY_SLACK);
        let max_len = affordable.min(ctx.config().max_window_len).max(min_len);
        (min_len, max_len)
    }
}

/// Start offsets, relative to the holiday, for windows of length `len`.
fn start_offsets(len: u32, lead: u32, trail: u32) -> impl Iterator<Item = i32> {
    let span = len as i32 - 1;
    let before = (0..=lead as i32).map(move |d| -d - span);
    let after = 0..=trail as i32;
    let straddle = std::iter::once(-span / 2);
    before.chain(after).chain(straddle)
}

impl CandidateSource for HolidayAnchored {
    fn name(&self) -> &'static str {
        "holiday-anchored"
    }

    fn candidates<'a>(&self, ctx: &'a SearchContext<'a>) -> Candidates<'a> {
        let (min_len, max_len) = Self::window_lengths(ctx);
        let (lead, trail) = (ctx.config().lead_offset, ctx.config().trail_offset);
        let year = ctx.year();

        Box::new(
            ctx.holidays()
                .iter()
                .map(|h| h.date)
                .filter(move |d| year.contains(*d))
                .flat_map(move |anchor| {
                    (min_len..=max_len).flat_map(move |len| {
                        start_offsets(len, lead, trail)
                            .filter_map(move |offset| ctx.window(anchor, offset, len))
                    })
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
    use vp_time::{DateRange, Holiday};

    #[test]
    fn offsets_cover_three_families() {
        let offsets: Vec<i32> = start_offsets(5, 2, 1).collect();
        // before: end on h, h-1, h-2; after: start on h, h+1; straddle: h-2
        assert_eq!(offsets, vec![-4, -5, -6, 0, 1, -2]);
    }

    #[test]
    fn window_lengths_follow_target_and_budget() {
        let holidays: Vec<Holiday> = Vec::new();
        let c = SearchConstraints::new(3, 0).with_year(2025).with_target_consecutive_days(5);
        let ctx = SearchContext::new(&holidays, &c).unwrap();
        assert_eq!(HolidayAnchored::window_lengths(&ctx), (5, 7));

        let c = SearchConstraints::new(40, 0).with_year(2025).with_target_consecutive_days(5);
        let ctx = SearchContext::new(&holidays, &c).unwrap();
        assert_eq!(HolidayAnchored::window_lengths(&ctx), (5, 31));

        // Target longer than the cap still gets tried.
        let c = SearchConstraints::new(40, 0).with_year(2025).with_target_consecutive_days(45);
        let ctx = SearchContext::new(&holidays, &c).unwrap();
        assert_eq!(HolidayAnchored::window_lengths(&ctx), (45, 45));
    }

    #[test]
    fn finds_new_year_bridge() {
        let holidays = vec![Holiday::public(date(2025, 1, 1), "New Year's Day")];
        let c = SearchConstraints::new(3, 0).with_year(2025).with_target_consecutive_days(5);
        let ctx = SearchContext::new(&holidays, &c).unwrap();
        let windows: Vec<DateRange> = HolidayAnchored.candidates(&ctx).collect();
        let bridge = DateRange::new(date(2025, 1, 1), date(2025, 1, 5)).unwrap();
        assert!(windows.contains(&bridge));
        // Nothing leaks into 2024.
        assert!(windows.iter().all(|w| w.start() >= date(2025, 1, 1)));
    }

    #[test]
    fn only_in_year_holidays_anchor() {
        let holidays = vec![Holiday::public(date(2024, 12, 25), "Christmas Day")];
        let c = SearchConstraints::new(10, 0).with_year(2025);
        let ctx = SearchContext::new(&holidays, &c).unwrap();
        assert_eq!(HolidayAnchored.candidates(&ctx).count(), 0);
    }

    #[test]
    fn retained_windows_respect_budget_and_target() {
        let holidays = us_holidays_2025();
        let c = SearchConstraints::new(4, 0)
            .with_year(2025)
            .with_target_consecutive_days(4)
            .with_generator(GeneratorConfig::default().with_max_window_len(10));
        let ctx = SearchContext::new(&holidays, &c).unwrap();
        let plans: Vec<_> = retained_plans(&HolidayAnchored, &ctx).collect();
        assert!(!plans.is_empty());
        for p in &plans {
            assert!(p.vacation_days_spent <= 4, "{p}");
            assert!(p.total_days_off >= 4, "{p}");
            assert!(p.total_days_off <= 10, "{p}");
        }
    }
}
