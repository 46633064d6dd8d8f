//! Reschedule proposals for a task.
//!
//! Options are offsets from an *anchor* date: the task's own day, or today if
//! that day has already passed. Timed tasks keep their time of day on every
//! option; all-day tasks get none.

use chrono::{NaiveDateTime, NaiveTime};
use rand::Rng;
use serde::Serialize;

use crate::task::Task;
use ag_core::clock::Clock;
use ag_time::{calendar_for, Country, Date, HolidayCalendar, Weekday};

/// Tips shown next to the postpone dialog.
pub const POSTPONE_TIPS: [&str; 15] = [
    "Consider moving this task to tomorrow morning when your energy levels are typically higher.",
    "You seem to have a lot on your plate today. How about moving this to later in the week?",
    "Based on your past productivity patterns, tomorrow afternoon might be a better time for this task.",
    "Would you like to reschedule this for the same time tomorrow? You might be more focused then.",
    "This task might fit well with your Friday schedule when you typically have fewer meetings.",
    "Your calendar shows you're quite busy today. Consider moving this task to a less crowded day.",
    "How about postponing this to early next week when you'll have a fresh start?",
    "You tend to complete similar tasks more effectively in the morning. Consider rescheduling to tomorrow morning.",
    "Looking at your schedule, you might have more mental energy for this on Thursday.",
    "This task seems important but not urgent. How about scheduling it for later this week?",
    "Your productivity tends to peak midweek. Would Wednesday be a better fit for this task?",
    "I notice you often complete similar tasks more efficiently in the afternoons. Would tomorrow afternoon work better?",
    "Your calendar shows some free time tomorrow that might be perfect for this task.",
    "Would you prefer to tackle this task on a day when you have fewer other commitments?",
    "Based on your task completion patterns, you might find this easier to accomplish later in the week.",
];

/// One proposed new date for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostponeOption {
    /// Human-readable label ("Tomorrow", "Next Monday"…).
    pub label: &'static str,
    /// Proposed day.
    pub date: Date,
    /// Time of day, kept from the task; `None` for all-day tasks.
    pub time: Option<NaiveTime>,
    /// Holiday on the proposed day (or skipped to reach it).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<&'static str>,
}

impl PostponeOption {
    /// Full timestamp, for timed options.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        self.time.map(|t| self.date.and_time(t))
    }
}

/// Day the offsets are measured from: the task's day, or today if later.
pub fn postpone_anchor(task: &Task, today: Date) -> Date {
    task.day().max(today)
}

/// Candidate `(label, days after anchor)` pairs, before holiday handling.
fn candidate_offsets(anchor: Date) -> Vec<(&'static str, i64)> {
    let mut out = vec![("Tomorrow", 1), ("Day after tomorrow", 2), ("Next week", 7)];

    let from_sunday = i64::from(anchor.weekday().days_from_sunday());
    if anchor.weekday() != Weekday::Monday {
        let until_monday = if from_sunday == 0 { 1 } else { 8 - from_sunday };
        out.push(("Next Monday", until_monday));
    }

    if anchor.is_weekend() {
        let until_workday = if from_sunday == 0 { 1 } else { 2 };
        out.push(("Next work day", until_workday));
    } else {
        out.push(("Weekend", 6 - from_sunday));
    }
    out
}

/// Ordered reschedule options for `task`.
///
/// When the task asks to skip holidays, dates landing on one of `calendar`'s
/// holidays move forward to the next non-holiday and record the holiday they
/// stepped over. Otherwise a holiday on the proposed date is only reported.
/// Options that would fall past the last representable date are left out.
pub fn generate_postpone_date_options<C: Clock + ?Sized>(
    task: &Task,
    clock: &C,
    calendar: &dyn HolidayCalendar,
) -> Vec<PostponeOption> {
    let anchor = postpone_anchor(task, Date::today(clock));
    let time = task.time_of_day();

    let options: Vec<PostponeOption> = candidate_offsets(anchor)
        .into_iter()
        .filter_map(|(label, days)| anchor.add_days(days).ok().map(|d| (label, d)))
        .map(|(label, proposed)| {
            let holiday = calendar.holiday_name(proposed);
            let date = if task.skip_holidays && holiday.is_some() {
                calendar.roll_past_holidays(proposed)
            } else {
                proposed
            };
            PostponeOption {
                label,
                date,
                time,
                holiday,
            }
        })
        .collect();

    tracing::debug!(
        task_id = task.id,
        %anchor,
        calendar = calendar.name(),
        options = options.len(),
        "generated postpone options"
    );
    options
}

/// [`generate_postpone_date_options`] over the task's own holiday locale.
///
/// Tasks that name no (or an unknown) locale use `default_country`, usually
/// [`Country::from_settings`]; both locales apply when that is `None` too.
pub fn postpone_options_for<C: Clock + ?Sized>(
    task: &Task,
    clock: &C,
    default_country: Option<Country>,
) -> Vec<PostponeOption> {
    let calendar = calendar_for(task.holiday_country().or(default_country));
    generate_postpone_date_options(task, clock, calendar.as_ref())
}

/// Pick one of [`POSTPONE_TIPS`].
pub fn generate_postpone_suggestion<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    POSTPONE_TIPS[rng.gen_range(0..POSTPONE_TIPS.len())]
}

/// [`generate_postpone_suggestion`] with the thread-local RNG.
pub fn random_postpone_suggestion() -> &'static str {
    generate_postpone_suggestion(&mut rand::thread_rng())
}
