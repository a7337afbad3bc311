//! Error types for the pricer.
//!
//! Every fallible operation in the workspace returns [`Result`].  Failures
//! are plain values, never panics; only the outermost adapter (the CLI)
//! turns them into process exit codes.
//!
//! The two kinds callers care about are [`Error::InvalidArgument`] (bad
//! input detected before any computation starts) and [`Error::Domain`] (a
//! query outside the region where a quantity is defined, such as a
//! discount factor before the reference date or gamma at zero variance).

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid input: non-positive strike, negative volatility, non-finite
    /// numbers, negative time to maturity.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A quantity was requested outside its domain of definition.
    #[error("domain error: {0}")]
    Domain(String),

    /// Internal precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction or arithmetic out of range.
    #[error("date error: {0}")]
    Date(String),

    /// An operation was requested on a null / unset value.
    #[error("null value: {0}")]
    NullValue(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

impl Error {
    /// `true` for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// `true` for [`Error::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain(_))
    }
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ql_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ql_core::errors::Result<f64> {
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

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ql_core::ensure_arg;
/// fn strike(k: f64) -> ql_core::errors::Result<f64> {
///     ensure_arg!(k > 0.0, "strike must be positive, got {k}");
///     Ok(k)
/// }
/// assert!(strike(0.0).unwrap_err().is_invalid_argument());
/// ```
#[macro_export]
macro_rules! ensure_arg {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Domain(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ql_core::ensure_domain;
/// fn inverse(x: f64) -> ql_core::errors::Result<f64> {
///     ensure_domain!(x != 0.0, "cannot invert zero");
///     Ok(1.0 / x)
/// }
/// assert!(inverse(0.0).unwrap_err().is_domain());
/// ```
#[macro_export]
macro_rules! ensure_domain {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Domain(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ql_core::{fail, errors::Error};
/// fn always_err() -> ql_core::errors::Result<()> {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn check_strike(k: f64) -> Result<f64> {
        ensure_arg!(k.is_finite() && k > 0.0, "strike must be positive, got {k}");
        Ok(k)
    }

    #[test]
    fn invalid_argument_message() {
        let err = check_strike(-1.0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(!err.is_domain());
        assert_eq!(
            err.to_string(),
            "invalid argument: strike must be positive, got -1"
        );
    }

    #[test]
    fn domain_error_display() {
        let err = Error::Domain("gamma undefined".into());
        assert!(err.is_domain());
        assert_eq!(err.to_string(), "domain error: gamma undefined");
    }
}
