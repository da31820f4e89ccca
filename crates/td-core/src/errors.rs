//! Error types for tridiag-rs.
//!
//! All fallible operations in the workspace return [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  The
//! `ensure!` and `fail!` macros cover the common "check and bail" cases.

use thiserror::Error;

/// The top-level error type used throughout tridiag-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Problem size is zero or negative.
    #[error("invalid problem size {0}: the number of mesh points must be at least 1")]
    InvalidSize(i64),

    /// A zero (or near-zero) pivot turned up during forward elimination.
    #[error("singular pivot at row {index}: b = {value:e}")]
    SingularPivot {
        /// Row whose diagonal entry would have been used as a divisor.
        index: usize,
        /// The offending diagonal value.
        value: f64,
    },

    /// Algorithm selector is neither `general` nor `special`.
    #[error("unknown algorithm '{0}' (expected 'general' or 'special')")]
    UnknownAlgorithm(String),

    /// Two sequences that must have the same length do not.
    #[error("dimension mismatch: expected length {expected}, found {found}")]
    DimensionMismatch {
        /// Required length.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },

    /// Failure while writing results.
    #[error("i/o error: {0}")]
    Io(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Shorthand `Result` type used throughout tridiag-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use td_core::{ensure, errors::Error};
/// fn positive(x: f64) -> td_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
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

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use td_core::{fail, errors::Error};
/// fn always_err() -> td_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
