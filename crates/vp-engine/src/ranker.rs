//! Deduplication, ordering, and truncation of scored plans.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::constraints::DEFAULT_RESULT_LIMIT;
use crate::plan::VacationPlan;

/// Orders plans by goal-match, then efficiency, and keeps the best `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanRanker {
    target: u32,
    limit: usize,
}

impl PlanRanker {
    /// Ranker for a goal of `target` consecutive days off, returning at most
    /// [`DEFAULT_RESULT_LIMIT`] plans.
    pub fn new(target: u32) -> Self {
        Self {
            target,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Set the maximum number of plans returned.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Goal length used for the primary sort key.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Maximum number of plans returned.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Drop plans whose `(start, end)` was already seen. The first
    /// occurrence wins and input order is kept.
    pub fn dedup<I>(plans: I) -> Vec<VacationPlan>
    where
        I: IntoIterator<Item = VacationPlan>,
    {
        let mut seen = HashSet::new();
        plans.into_iter().filter(|p| seen.insert(p.key())).collect()
    }

    /// Goal-meeting plans first, then higher ratio first. Equal keys compare
    /// equal, so a stable sort keeps generation order among ties.
    pub fn compare(&self, a: &VacationPlan, b: &VacationPlan) -> Ordering {
        b.meets_target(self.target)
            .cmp(&a.meets_target(self.target))
            .then_with(|| b.efficiency_ratio.total_cmp(&a.efficiency_ratio))
    }

    /// Dedup, sort, and truncate.
    pub fn rank<I>(&self, plans: I) -> Vec<VacationPlan>
    where
        I: IntoIterator<Item = VacationPlan>,
    {
        let mut ranked = Self::dedup(plans);
        ranked.sort_by(|a, b| self.compare(a, b));
        ranked.truncate(self.limit);
        ranked
    }
}

impl Default for PlanRanker {
    fn default() -> Self {
        Self::new(crate::constraints::DEFAULT_TARGET_CONSECUTIVE_DAYS)
    }
}
