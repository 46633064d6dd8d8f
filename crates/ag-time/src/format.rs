//! Date formatting and relative-date helpers for views.
//!
//! Patterns are `chrono` strftime patterns. The named constants reproduce the
//! English formats the views display.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;

use crate::date::{Date, ISO_DATE_FORMAT};
use ag_core::clock::Clock;
use ag_core::errors::{Error, Result};

/// Medium date, e.g. `"Mar 5, 2024"`.
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

/// Long date, e.g. `"March 5, 2024"`.
pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Twelve-hour clock time, e.g. `"3:05 PM"`.
pub const TIME_FORMAT: &str = "%-I:%M %p";

/// Format `date` with a strftime `pattern`.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if the pattern is malformed or asks for
/// fields a date does not have (hours, time zone…).
pub fn format_date(date: Date, pattern: &str) -> Result<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(Error::InvalidArgument(format!(
            "malformed date pattern {pattern:?}"
        )));
    }
    let mut out = String::new();
    write!(out, "{}", date.naive().format_with_items(items.into_iter())).map_err(|_| {
        Error::InvalidArgument(format!("pattern {pattern:?} needs more than a date"))
    })?;
    Ok(out)
}

/// Zero-padded `YYYY-MM-DD`, the storage form of a date.
pub fn format_iso_date(date: Date) -> String {
    date.naive().format(ISO_DATE_FORMAT).to_string()
}

/// Format `datetime` as a twelve-hour clock time (`"9:00 AM"`).
pub fn format_time(datetime: NaiveDateTime) -> String {
    datetime.format(TIME_FORMAT).to_string()
}

/// English ordinal suffix of `n` (`"st"`, `"nd"`, `"rd"`, `"th"`).
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Abbreviated month and ordinal day, e.g. `"Jan 5th"`.
pub fn month_and_ordinal_day(date: Date) -> String {
    let day = date.day_of_month();
    format!("{} {day}{}", date.month().short_name(), ordinal_suffix(day))
}

/// Describe `date` relative to `today`.
///
/// Yesterday through a week ahead get words ("Yesterday", "Today",
/// "Tomorrow", "In 2 days" … "In 6 days", "In a week"); anything further away
/// falls back to [`month_and_ordinal_day`].
pub fn relative_date(date: Date, today: Date) -> String {
    match today.days_between(date) {
        -1 => "Yesterday".to_string(),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        n @ 2..=6 => format!("In {n} days"),
        7 => "In a week".to_string(),
        _ => month_and_ordinal_day(date),
    }
}

/// [`relative_date`] against the clock's today.
pub fn relative_date_now<C: Clock + ?Sized>(date: Date, clock: &C) -> String {
    relative_date(date, Date::today(clock))
}

/// Whether `date` is the clock's today.
pub fn is_today<C: Clock + ?Sized>(date: Date, clock: &C) -> bool {
    date == Date::today(clock)
}

/// Whether `date` is the day after the clock's today.
pub fn is_tomorrow<C: Clock + ?Sized>(date: Date, clock: &C) -> bool {
    Date::today(clock).days_between(date) == 1
}

/// Human-readable span between two dates, collapsing shared parts:
///
/// * same day: `"March 5, 2024"`
/// * same month: `"March 5-9, 2024"`
/// * same year: `"March 30 - April 2, 2024"`
/// * otherwise: `"December 30, 2023 - January 2, 2024"`
pub fn format_date_range(start: Date, end: Date) -> String {
    let long = |d: Date| format!("{} {}, {}", d.month().long_name(), d.day_of_month(), d.year());
    let month_day = |d: Date| format!("{} {}", d.month().long_name(), d.day_of_month());

    if start == end {
        long(start)
    } else if start.year() == end.year() && start.month() == end.month() {
        format!("{}-{}, {}", month_day(start), end.day_of_month(), end.year())
    } else if start.year() == end.year() {
        format!("{} - {}", month_day(start), long(end))
    } else {
        format!("{} - {}", long(start), long(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::clock::FixedClock;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn patterns() {
        let d = date(2024, 3, 5);
        assert_eq!(format_date(d, DEFAULT_DATE_FORMAT).unwrap(), "Mar 5, 2024");
        assert_eq!(format_date(d, LONG_DATE_FORMAT).unwrap(), "March 5, 2024");
        assert_eq!(format_date(d, "%Y-%m-%d").unwrap(), "2024-03-05");
        assert_eq!(format_date(d, "%A").unwrap(), "Tuesday");
        assert_eq!(format_iso_date(date(987, 1, 2)), "0987-01-02");
    }

    #[test]
    fn bad_patterns_are_errors() {
        assert!(matches!(
            format_date(date(2024, 3, 5), "%Q"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            format_date(date(2024, 3, 5), "%H:%M"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn twelve_hour_time() {
        let dt = |h, m| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(h, m, 0).unwrap();
        assert_eq!(format_time(dt(15, 5)), "3:05 PM");
        assert_eq!(format_time(dt(0, 0)), "12:00 AM");
        assert_eq!(format_time(dt(9, 30)), "9:30 AM");
    }

    #[test]
    fn ordinals() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (n, suffix) in cases {
            assert_eq!(ordinal_suffix(n), suffix, "{n}");
        }
        assert_eq!(month_and_ordinal_day(date(2024, 1, 5)), "Jan 5th");
    }

    #[test]
    fn relative_words() {
        let today = date(2024, 3, 28);
        assert_eq!(relative_date(today, today), "Today");
        assert_eq!(relative_date(date(2024, 3, 29), today), "Tomorrow");
        assert_eq!(relative_date(date(2024, 3, 30), today), "In 2 days");
        assert_eq!(relative_date(date(2024, 4, 3), today), "In 6 days");
        assert_eq!(relative_date(date(2024, 4, 4), today), "In a week");
        assert_eq!(relative_date(date(2024, 3, 27), today), "Yesterday");
        assert_eq!(relative_date(date(2024, 4, 5), today), "Apr 5th");
        assert_eq!(relative_date(date(2024, 3, 26), today), "Mar 26th");
    }

    #[test]
    fn relative_date_is_stable_under_a_fixed_clock() {
        let clock = FixedClock::new(
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap().and_hms_opt(23, 59, 0).unwrap(),
        );
        let target = date(2025, 1, 1);
        let first = relative_date_now(target, &clock);
        assert_eq!(first, "Tomorrow");
        assert_eq!(relative_date_now(target, &clock), first);
        assert!(is_tomorrow(target, &clock));
        assert!(is_today(date(2024, 12, 31), &clock));
        assert!(!is_today(target, &clock));
    }

    #[test]
    fn ranges() {
        assert_eq!(format_date_range(date(2024, 3, 5), date(2024, 3, 5)), "March 5, 2024");
        assert_eq!(format_date_range(date(2024, 3, 5), date(2024, 3, 9)), "March 5-9, 2024");
        assert_eq!(
            format_date_range(date(2024, 3, 30), date(2024, 4, 2)),
            "March 30 - April 2, 2024"
        );
        assert_eq!(
            format_date_range(date(2023, 12, 30), date(2024, 1, 2)),
            "December 30, 2023 - January 2, 2024"
        );
    }
}
