//! # ag-core
//!
//! Foundational pieces shared by every crate in the agenda workspace: the
//! error type, the injectable [`Clock`], the TOML-backed [`Settings`] and
//! tracing initialisation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Injectable source of "now".
pub mod clock;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// `tracing` subscriber setup.
pub mod logging;

/// User-tunable settings loaded from TOML.
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{Error, Result};
pub use settings::{HolidaySettings, LoggingSettings, ScheduleSettings, Settings};
