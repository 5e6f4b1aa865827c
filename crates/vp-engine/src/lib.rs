//! # vp-engine
//!
//! Vacation window recommendation: candidate generation, efficiency scoring,
//! and ranking.
//!
//! The engine is a pure function of its inputs. [`recommend`] takes the
//! holiday list and a [`SearchConstraints`] and returns at most
//! `result_limit` [`VacationPlan`]s, goal-meeting plans first, then by
//! descending days off per vacation day.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Candidate window sources and the per-search context.
pub mod candidates;

/// `SearchConstraints`, `GeneratorConfig`, and `SearchStrategy`.
pub mod constraints;

/// `VacationPlan` and `EfficiencyRating`.
pub mod plan;

/// `PlanRanker` — dedup, order, truncate.
pub mod ranker;

/// The `recommend` entry points.
pub mod recommend;

/// Scoring of a single window.
pub mod scorer;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use candidates::{
    retained_plans, CandidateSource, Candidates, ExhaustiveScan, HolidayAnchored, SearchContext,
    StandaloneSampler,
};
pub use constraints::{
    current_year, GeneratorConfig, SearchConstraints, SearchStrategy, DEFAULT_RESULT_LIMIT,
    DEFAULT_TARGET_CONSECUTIVE_DAYS,
};
pub use plan::{EfficiencyRating, VacationPlan};
pub use ranker::PlanRanker;
pub use recommend::{recommend, recommend_for, recommend_with_stats, RecommendStats};
pub use scorer::{distinct_free_days, efficiency_ratio, score, vacation_dates};
