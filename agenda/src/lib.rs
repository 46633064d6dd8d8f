//! # agenda
//!
//! Calendar math behind a personal agenda: US and Colombian holidays, the
//! 42-cell month view, postpone options for tasks, and date formatting.
//!
//! This crate is a façade that re-exports the workspace crates. Application
//! code should depend on it rather than on the individual `ag-*` crates.
//!
//! ```rust
//! use agenda::time::{is_holiday, Country, Date};
//!
//! let july_4 = Date::from_ymd(2024, 7, 4).unwrap();
//! let check = is_holiday(july_4, Some(Country::UnitedStates));
//! assert_eq!(check.holiday_name, Some("Independence Day"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Clock, errors, settings and logging setup.
pub use ag_core as core;

/// Dates, holiday calendars, month grids and formatting.
pub use ag_time as time;

/// Tasks, postpone options and scheduling helpers.
pub use ag_tasks as tasks;
