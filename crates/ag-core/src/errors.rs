//! Error types for the agenda workspace.
//!
//! Calendar arithmetic itself is total; errors only arise at the edges:
//! building a date from raw parts, parsing user/persistence input and
//! loading configuration. The `ensure!` and `fail!` macros defined here build
//! the matching variants.

use thiserror::Error;

/// The error type used throughout the agenda crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A date could not be built or moved (out of range, bad day of month…).
    #[error("date error: {0}")]
    Date(String),

    /// Input text could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be read or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O failure while reading a configuration file.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Parse(err.to_string())
    }
}

/// Shorthand `Result` type used throughout the agenda crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ag_core::{ensure, errors::Error};
/// fn positive(minutes: i64) -> ag_core::errors::Result<i64> {
///     ensure!(minutes > 0, "minutes must be positive, got {minutes}");
///     Ok(minutes)
/// }
/// assert!(positive(30).is_ok());
/// assert!(matches!(positive(0), Err(Error::Precondition(_))));
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

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ag_core::{fail, errors::Error};
/// fn always_err() -> ag_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert_eq!(always_err(), Err(Error::Runtime("something went wrong".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
