//! # vacation-planner
//!
//! Recommends time-off windows that get the most days off for the fewest
//! vacation days, by bridging weekends and public or company holidays.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `vp-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! vacation-planner = "0.1"
//! ```
//!
//! ```rust
//! use vacation_planner::engine::{recommend, SearchConstraints};
//! use vacation_planner::time::{Date, Holiday};
//!
//! let holidays = vec![Holiday::public(
//!     Date::from_ymd(2025, 1, 1).unwrap(),
//!     "New Year's Day",
//! )];
//! let constraints = SearchConstraints::new(3, 0)
//!     .with_year(2025)
//!     .with_target_consecutive_days(5);
//!
//! let best = &recommend(&holidays, &constraints)[0];
//! assert_eq!(
//!     best.to_string(),
//!     "2025-01-01 to 2025-01-05: 5 days off for 2 vacation days (2.5x)"
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and parsing helpers.
pub use vp_core as core;

/// Dates, date ranges, weekdays, and holidays.
pub use vp_time as time;

/// Candidate generation, scoring, ranking, and `recommend`.
pub use vp_engine as engine;

pub use vp_engine::{recommend, recommend_for, SearchConstraints, VacationPlan};
pub use vp_time::{Date, Holiday, HolidayCategory};
