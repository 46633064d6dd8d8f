//! # ag-time
//!
//! Dates, holiday calendars, month grids and formatting helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// `HolidayCalendar` trait.
pub mod calendar;

/// Concrete calendars (US, Colombia, joint).
pub mod calendars;

/// `Date` type.
pub mod date;

/// Easter Sunday computation.
pub mod easter;

/// Date formatting and relative-date helpers.
pub mod format;

/// 42-cell month view grid.
pub mod grid;

/// Holiday rules, tables and lookups.
pub mod holidays;

/// Month of the year.
pub mod month;

/// Days, weeks, months and years.
pub mod time_unit;

/// Day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{calendar_for, HolidayCalendar};
pub use calendars::{Colombia, JointCalendar, UnitedStates};
pub use date::Date;
pub use easter::easter_sunday;
pub use format::{
    format_date, format_date_range, format_iso_date, format_time, is_today, is_tomorrow, relative_date,
    relative_date_now,
};
pub use grid::{build_month_grid, CalendarDay, MonthGrid};
pub use holidays::{
    colombian_holidays, holidays, holidays_for_code, is_holiday, is_holiday_for_code,
    us_holidays, Country, Holiday, HolidayCheck, HolidayDef, HolidayRule,
};
pub use month::Month;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
