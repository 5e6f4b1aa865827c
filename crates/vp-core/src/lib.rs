//! # vp-core
//!
//! Error definitions and small shared helpers for vacation-planner.
//!
//! Every other crate in the workspace reports failures through the
//! [`Error`] enum defined here and checks preconditions with the
//! [`ensure!`] macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// String parsing helpers (ISO dates).
pub mod parsers;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
