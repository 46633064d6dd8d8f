//! Month view grid.
//!
//! A month view is always six Sunday-first weeks: the tail of the previous
//! month, every day of the displayed month, then the head of the next month
//! until 42 cells are filled. Even a 31-day month starting on Saturday needs
//! only 37 cells, so the displayed month is never cut.

use serde::Serialize;

use crate::date::Date;
use crate::month::Month;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use ag_core::clock::Clock;
use ag_core::errors::Result;

/// Days in one grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Cells in a month grid (6 rows × 7 days).
pub const GRID_CELLS: usize = 6 * DAYS_PER_WEEK;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// The cell's date.
    pub date: Date,
    /// Whether the date belongs to the displayed month.
    pub is_current_month: bool,
    /// Whether the date is today.
    pub is_today: bool,
}

/// The 42-cell grid of a displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    days: Vec<CalendarDay>,
    month_start: Date,
    days_in_month: u32,
}

impl MonthGrid {
    /// Lay out the month containing `reference`, marking `today`.
    pub fn build(reference: Date, today: Date) -> Self {
        let month_start = reference.start_of_month();
        let days_in_month = month_start.month().days_in(month_start.year());
        let leading = i64::from(month_start.weekday().days_from_sunday());

        // Cells outside chrono's date range are left out, so a grid at the
        // very edge of the calendar is shorter than 42.
        let days: Vec<CalendarDay> = (-leading..GRID_CELLS as i64 - leading)
            .filter_map(|offset| month_start.add_days(offset).ok())
            .map(|date| {
                let is_current_month = date.start_of_month() == month_start;
                CalendarDay {
                    date,
                    is_current_month,
                    is_today: is_current_month && date == today,
                }
            })
            .collect();

        tracing::trace!(
            month = %month_start,
            leading,
            days_in_month,
            "built month grid"
        );
        Self {
            days,
            month_start,
            days_in_month,
        }
    }

    /// Lay out the month containing `reference`, with "today" from `clock`.
    pub fn build_with_clock<C: Clock + ?Sized>(reference: Date, clock: &C) -> Self {
        Self::build(reference, Date::today(clock))
    }

    /// All 42 cells, oldest first.
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Consume the grid, returning its cells.
    pub fn into_days(self) -> Vec<CalendarDay> {
        self.days
    }

    /// The six rows of the grid.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> + '_ {
        self.days.chunks(DAYS_PER_WEEK)
    }

    /// Cells belonging to the displayed month.
    pub fn current_month_days(&self) -> impl Iterator<Item = &CalendarDay> + '_ {
        self.days.iter().filter(|d| d.is_current_month)
    }

    /// The cell marked as today, if today is in the displayed month.
    pub fn today(&self) -> Option<&CalendarDay> {
        self.days.iter().find(|d| d.is_today)
    }

    /// First day of the displayed month.
    pub fn month_start(&self) -> Date {
        self.month_start
    }

    /// The displayed month.
    pub fn month(&self) -> Month {
        self.month_start.month()
    }

    /// The displayed year.
    pub fn year(&self) -> i32 {
        self.month_start.year()
    }

    /// Length of the displayed month.
    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// Heading such as `"March 2024"`.
    pub fn title(&self) -> String {
        month_title(self.month_start)
    }
}

/// The 42 cells of the month containing `reference`.
pub fn build_month_grid<C: Clock + ?Sized>(reference: Date, clock: &C) -> Vec<CalendarDay> {
    MonthGrid::build_with_clock(reference, clock).into_days()
}

/// Heading for the month containing `date`, e.g. `"March 2024"`.
pub fn month_title(date: Date) -> String {
    format!("{} {}", date.month().long_name(), date.year())
}

/// Same day next month, clamped to the month's end.
pub fn next_month(date: Date) -> Result<Date> {
    date.advance(1, TimeUnit::Months)
}

/// Same day last month, clamped to the month's end.
pub fn previous_month(date: Date) -> Result<Date> {
    date.advance(-1, TimeUnit::Months)
}

/// Column headings of the grid, Sunday first.
pub fn week_day_names() -> [&'static str; DAYS_PER_WEEK] {
    Weekday::SUNDAY_FIRST.map(|w| w.short_name())
}

/// Sunday and Saturday of the week containing `date`.
pub fn week_range(date: Date) -> (Date, Date) {
    let start = date.saturating_add_days(-i64::from(date.weekday().days_from_sunday()));
    (start, start.saturating_add_days(6))
}

/// First and last day of the month containing `date`.
pub fn month_range(date: Date) -> (Date, Date) {
    (date.start_of_month(), date.end_of_month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn march_2024_layout() {
        // March 1, 2024 is a Friday: five leading February days.
        let grid = MonthGrid::build(date(2024, 3, 15), date(2024, 3, 10));
        let days = grid.days();
        assert_eq!(days.len(), GRID_CELLS);
        assert_eq!(days[0].date, date(2024, 2, 25));
        assert_eq!(days[4].date, date(2024, 2, 29));
        assert!(!days[4].is_current_month);
        assert_eq!(days[5].date, date(2024, 3, 1));
        assert!(days[5].is_current_month);
        assert_eq!(days[35].date, date(2024, 3, 31));
        assert_eq!(days[36].date, date(2024, 4, 1));
        assert_eq!(days[41].date, date(2024, 4, 6));
        assert_eq!(grid.today().map(|d| d.date), Some(date(2024, 3, 10)));
        assert_eq!(grid.days_in_month(), 31);
        assert_eq!(grid.title(), "March 2024");
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_days() {
        // September 1, 2024 is a Sunday.
        let grid = MonthGrid::build(date(2024, 9, 1), date(2024, 1, 1));
        assert_eq!(grid.days()[0].date, date(2024, 9, 1));
        assert!(grid.days()[0].is_current_month);
        assert!(grid.today().is_none());
        assert_eq!(grid.days()[41].date, date(2024, 10, 12));
    }

    #[test]
    fn february_non_leap_starting_sunday_gets_two_trailing_weeks() {
        // February 2015: 28 days starting on a Sunday.
        let grid = MonthGrid::build(date(2015, 2, 14), date(2015, 2, 28));
        assert_eq!(grid.current_month_days().count(), 28);
        let trailing = grid.days().iter().skip(28).filter(|d| !d.is_current_month).count();
        assert_eq!(trailing, 14);
        assert!(grid.days()[27].is_today);
    }

    #[test]
    fn weeks_are_sunday_first_rows() {
        let grid = MonthGrid::build(date(2024, 6, 1), date(2024, 6, 1));
        let weeks: Vec<&[CalendarDay]> = grid.weeks().collect();
        assert_eq!(weeks.len(), 6);
        for week in weeks {
            assert_eq!(week.len(), DAYS_PER_WEEK);
            assert_eq!(week[0].date.weekday(), Weekday::Sunday);
        }
    }

    #[test]
    fn navigation_clamps() {
        assert_eq!(next_month(date(2024, 1, 31)).unwrap(), date(2024, 2, 29));
        assert_eq!(previous_month(date(2024, 3, 31)).unwrap(), date(2024, 2, 29));
        assert_eq!(next_month(date(2024, 12, 5)).unwrap(), date(2025, 1, 5));
    }

    #[test]
    fn ranges() {
        assert_eq!(week_range(date(2024, 3, 13)), (date(2024, 3, 10), date(2024, 3, 16)));
        assert_eq!(week_range(date(2024, 3, 10)), (date(2024, 3, 10), date(2024, 3, 16)));
        assert_eq!(month_range(date(2023, 2, 10)), (date(2023, 2, 1), date(2023, 2, 28)));
    }

    #[test]
    fn grids_at_the_calendar_edges_do_not_overflow() {
        let last = Date::from(chrono::NaiveDate::MAX);
        let grid = MonthGrid::build(last, last);
        assert_eq!(grid.current_month_days().count() as u32, grid.days_in_month());
        assert!(grid.days().len() <= GRID_CELLS);
        assert_eq!(grid.days().last().map(|d| d.date), Some(last));
        assert_eq!(grid.today().map(|d| d.date), Some(last));

        let first = Date::from(chrono::NaiveDate::MIN);
        let grid = MonthGrid::build(first, first);
        assert_eq!(grid.days()[0].date, first);
        assert_eq!(grid.current_month_days().count() as u32, grid.days_in_month());
        assert_eq!(week_range(last).1, last);
    }

    #[test]
    fn heading_names() {
        assert_eq!(
            week_day_names(),
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
    }
}
