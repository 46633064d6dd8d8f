//! Free-slot search and conflict detection within a working day.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::task::Task;
use ag_core::ensure;
use ag_core::errors::Result;
use ag_core::settings::ScheduleSettings;
use ag_time::format::format_time;
use ag_time::Date;

/// Offsets from the work-day start of the next-day fallback slots.
const FALLBACK_OFFSETS_MINUTES: [i64; 3] = [0, 120, 300];

/// Working-day window and slot sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkHours {
    /// First bookable time.
    pub start: NaiveTime,
    /// End of the working day; slots start strictly before it.
    pub end: NaiveTime,
    /// Distance between candidate slots.
    pub step: Duration,
    /// Length assumed for tasks without an end.
    pub default_duration: Duration,
    /// How many slots to propose.
    pub slots: usize,
}

impl Default for WorkHours {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or(NaiveTime::MIN),
            step: Duration::minutes(30),
            default_duration: Duration::minutes(60),
            slots: 3,
        }
    }
}

impl WorkHours {
    /// Build from the `[schedule]` settings table.
    pub fn from_settings(settings: &ScheduleSettings) -> Result<Self> {
        let start = settings.start_time()?;
        let end = settings.end_time()?;
        ensure!(start < end, "work day must start before it ends");
        ensure!(settings.slot_minutes > 0, "slot step must be positive");
        ensure!(settings.default_duration_minutes > 0, "default duration must be positive");
        Ok(Self {
            start,
            end,
            step: Duration::minutes(i64::from(settings.slot_minutes)),
            default_duration: Duration::minutes(i64::from(settings.default_duration_minutes)),
            slots: settings.suggested_slots,
        })
    }
}

/// A half-open busy interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Busy {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

fn busy_ranges(tasks: &[&Task], hours: &WorkHours) -> Vec<Busy> {
    let mut ranges: Vec<Busy> = tasks
        .iter()
        .filter(|t| !t.is_all_day)
        .map(|t| Busy {
            start: t.date,
            end: t.end_or(hours.default_duration),
        })
        .collect();
    ranges.sort_by_key(|r| r.start);
    ranges
}

/// Tasks whose start falls on `day`.
pub fn tasks_on_day(tasks: &[Task], day: Date) -> Vec<&Task> {
    tasks.iter().filter(|t| t.day() == day).collect()
}

/// Up to `hours.slots` free start times on `preferred`'s day.
///
/// The search starts at `preferred` (or the work-day start when earlier) and
/// walks forward in `hours.step` increments, jumping to the end of any busy
/// task it lands in. A `preferred` time after working hours finds nothing on
/// that day. Missing slots are topped up with next-day fallbacks.
pub fn find_available_slots(
    tasks_on_day: &[&Task],
    preferred: NaiveDateTime,
    hours: &WorkHours,
) -> Vec<NaiveDateTime> {
    let day = Date::from(preferred.date());
    let work_start = day.and_time(hours.start);
    let work_end = day.and_time(hours.end);
    let busy = busy_ranges(tasks_on_day, hours);

    let mut slots = Vec::with_capacity(hours.slots);
    let mut current = preferred.max(work_start);
    while slots.len() < hours.slots && current < work_end {
        match busy.iter().find(|r| current >= r.start && current < r.end) {
            Some(range) => current = range.end,
            None => {
                slots.push(current);
                current += hours.step;
            }
        }
    }

    let next_day = day.add_days(1).ok().filter(|_| slots.len() < hours.slots);
    if let Some(next_day) = next_day {
        let next_start = next_day.and_time(hours.start);
        let next_end = next_day.and_time(hours.end);
        let missing = hours.slots - slots.len();
        slots.extend(
            FALLBACK_OFFSETS_MINUTES
                .iter()
                .map(|&m| next_start + Duration::minutes(m))
                .filter(|&t| t < next_end)
                .take(missing),
        );
    }
    tracing::trace!(%preferred, found = slots.len(), "searched free slots");
    slots
}

/// A task that overlaps a proposed time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictingTask {
    /// Storage identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Start of the conflicting task.
    pub start: NaiveDateTime,
}

/// What clashes with a proposed task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ConflictReport {
    /// Other all-day tasks already sit on the day.
    AllDay {
        /// How many.
        existing: usize,
    },
    /// Timed tasks overlap the proposed range.
    Overlap {
        /// The overlapping tasks.
        tasks: Vec<ConflictingTask>,
        /// Free times on the same day.
        suggestions: Vec<NaiveDateTime>,
    },
}

impl ConflictReport {
    /// Message for the confirmation prompt.
    pub fn message(&self) -> String {
        match self {
            Self::AllDay { existing } => format!(
                "You already have {existing} all-day event{} scheduled on this date. \
                 Would you like to merge them?",
                if *existing == 1 { "" } else { "s" }
            ),
            Self::Overlap { tasks, suggestions } => {
                let clashes: Vec<String> = tasks
                    .iter()
                    .map(|t| format!("\"{}\" at {}", t.title, format_time(t.start)))
                    .collect();
                let mut msg = format!("Time conflict with: {}.", clashes.join(", "));
                if !suggestions.is_empty() {
                    let times: Vec<String> = suggestions.iter().map(|s| format_time(*s)).collect();
                    msg.push_str(&format!(
                        " Would you like to reschedule to one of these times instead: {}?",
                        times.join(", ")
                    ));
                }
                msg
            }
        }
    }
}

/// Check a proposed task against the tasks already on its day.
///
/// All-day proposals only clash with other all-day tasks. Timed proposals
/// clash with timed tasks when either start lies inside the other task or
/// the proposal covers it entirely; `end` defaults to
/// `start + hours.default_duration`.
pub fn check_conflicts(
    tasks_on_day: &[&Task],
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
    is_all_day: bool,
    hours: &WorkHours,
) -> Result<Option<ConflictReport>> {
    if is_all_day {
        let existing = tasks_on_day.iter().filter(|t| t.is_all_day).count();
        return Ok((existing > 0).then_some(ConflictReport::AllDay { existing }));
    }

    let end = end.unwrap_or(start + hours.default_duration);
    ensure!(
        end >= start,
        "proposed task ends ({end}) before it starts ({start})"
    );

    let clashes: Vec<ConflictingTask> = tasks_on_day
        .iter()
        .filter(|t| !t.is_all_day)
        .filter(|t| {
            let (t_start, t_end) = (t.date, t.end_or(hours.default_duration));
            (start >= t_start && start < t_end)
                || (end > t_start && end <= t_end)
                || (start <= t_start && end >= t_end)
        })
        .map(|t| ConflictingTask {
            id: t.id,
            title: t.title.clone(),
            start: t.date,
        })
        .collect();

    if clashes.is_empty() {
        return Ok(None);
    }
    tracing::debug!(%start, clashes = clashes.len(), "proposed time conflicts");
    Ok(Some(ConflictReport::Overlap {
        tasks: clashes,
        suggestions: find_available_slots(tasks_on_day, start, hours),
    }))
}
