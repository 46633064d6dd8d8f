//! # ag-tasks
//!
//! Scheduling helpers over read-only tasks: postpone options and tips, free
//! slots and conflicts, recurrence end dates, weekly stats.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Reschedule options and tips.
pub mod postpone;

/// Recurrence end-date suggestions.
pub mod recurrence;

/// Free slots and conflict checks.
pub mod slots;

/// Weekly dashboard stats.
pub mod stats;

/// The `Task` model.
pub mod task;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use postpone::{
    generate_postpone_date_options, generate_postpone_suggestion, postpone_anchor,
    postpone_options_for, random_postpone_suggestion, PostponeOption, POSTPONE_TIPS,
};
pub use recurrence::suggest_recurrence_end;
pub use slots::{
    check_conflicts, find_available_slots, tasks_on_day, ConflictReport, ConflictingTask,
    WorkHours,
};
pub use stats::{WeeklyCounts, WeeklyStats};
pub use task::{parse_task_datetime, Priority, RecurrenceType, Task};
