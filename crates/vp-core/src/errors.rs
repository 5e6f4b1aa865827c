//! Error types for vacation-planner.
//!
//! The recommendation pipeline itself never fails; errors only arise when
//! callers build values (dates, ranges, holidays, constraints) from invalid
//! raw input.

use thiserror::Error;

/// The top-level error type used throughout vacation-planner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error: out-of-range component or arithmetic overflow.
    #[error("date error: {0}")]
    Date(String),

    /// A string could not be parsed into the requested value.
    #[error("cannot parse {input:?} as {expected}")]
    Parse {
        /// The raw input that failed to parse.
        input: String,
        /// What the input was expected to be.
        expected: &'static str,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout vacation-planner.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use vp_core::{ensure, errors::Error};
/// fn positive(x: i32) -> vp_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::Precondition("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
