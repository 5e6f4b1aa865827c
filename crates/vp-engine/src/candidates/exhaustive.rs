//! Exhaustive scan over every window in the year.
//!
//! With n ≈ 365 the full O(n²) pair space is small. For each start the scan
//! stops extending the end once the window holds more weekdays than
//! `remaining + holidays_in_year`: every holiday record could at most cancel
//! one weekday, so no longer window from that start is affordable.

use super::{CandidateSource, Candidates, SearchContext};
use vp_time::DateRange;

/// Every affordable `(start, end)` pair in the search year.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveScan;

impl CandidateSource for ExhaustiveScan {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn candidates<'a>(&self, ctx: &'a SearchContext<'a>) -> Candidates<'a> {
        let year = ctx.year();
        let max_weekdays = ctx.remaining().saturating_add(ctx.holidays_in_year());

        Box::new(year.iter().enumerate().flat_map(move |(skip, start)| {
            year.iter()
                .skip(skip)
                .scan(0u32, |weekdays, end| {
                    if !end.is_weekend() {
                        *weekdays += 1;
                    }
                    Some((*weekdays, end))
                })
                .take_while(move |&(weekdays, _)| weekdays <= max_weekdays)
                .filter_map(move |(_, end)| DateRange::new(start, end).ok())
        }))
    }
}
