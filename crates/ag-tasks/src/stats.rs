//! Weekly dashboard percentages.

use serde::Serialize;

use crate::task::Task;
use ag_time::grid::week_range;
use ag_time::Date;

/// Highest check-in rating.
pub const MAX_RATING: f64 = 5.0;

/// Raw counts for one week.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeeklyCounts {
    /// Completed tasks.
    pub tasks_completed: usize,
    /// All tasks.
    pub tasks_total: usize,
    /// Mean productivity rating, `0..=5`.
    pub average_rating: f64,
    /// AI suggestions the user accepted.
    pub suggestions_accepted: usize,
    /// AI suggestions offered.
    pub suggestions_total: usize,
}

/// Rounded percentages shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    /// Share of tasks completed.
    pub tasks_completion_rate: u32,
    /// Average rating as a share of the maximum.
    pub productivity_score: u32,
    /// Share of AI suggestions accepted.
    pub ai_suggestions_rate: u32,
}

fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

impl WeeklyStats {
    /// Percentages from raw counts. Empty totals give 0.
    pub fn from_counts(counts: &WeeklyCounts) -> Self {
        let rating = counts.average_rating.clamp(0.0, MAX_RATING);
        Self {
            tasks_completion_rate: percent(counts.tasks_completed, counts.tasks_total),
            productivity_score: (rating / MAX_RATING * 100.0).round() as u32,
            ai_suggestions_rate: percent(counts.suggestions_accepted, counts.suggestions_total),
        }
    }

    /// Stats over the Sunday-to-Saturday week containing `today`.
    pub fn for_week(
        tasks: &[Task],
        today: Date,
        average_rating: f64,
        suggestions_accepted: usize,
        suggestions_total: usize,
    ) -> Self {
        let (first, last) = week_range(today);
        let in_week = tasks.iter().filter(|t| (first..=last).contains(&t.day()));
        let (total, completed) = in_week.fold((0, 0), |(n, done), t| {
            (n + 1, done + usize::from(t.completed))
        });
        Self::from_counts(&WeeklyCounts {
            tasks_completed: completed,
            tasks_total: total,
            average_rating,
            suggestions_accepted,
            suggestions_total,
        })
    }
}
