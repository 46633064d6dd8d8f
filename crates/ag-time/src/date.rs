//! `Date` type.
//!
//! A proleptic-Gregorian calendar date without time of day. It wraps
//! [`chrono::NaiveDate`] and adds the vocabulary the holiday tables and month
//! grid are written in: [`Month`] / [`Weekday`] enums, *n*-th and last weekday
//! of a month, and day arithmetic.
//!
//! `Display` and serde both use the zero-padded `YYYY-MM-DD` form.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::month::Month;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use ag_core::clock::Clock;
use ag_core::errors::{Error, Result};

/// `strftime` pattern of the ISO `YYYY-MM-DD` form.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| Error::Date(format!("year {year} out of supported range")))
    }

    /// Parse a zero-padded `YYYY-MM-DD` string.
    pub fn parse_iso(text: &str) -> Result<Self> {
        NaiveDate::parse_from_str(text.trim(), ISO_DATE_FORMAT)
            .map(Date)
            .map_err(|e| Error::Parse(format!("{text:?} is not a YYYY-MM-DD date: {e}")))
    }

    /// Today's date according to `clock`.
    pub fn today<C: Clock + ?Sized>(clock: &C) -> Self {
        Date(clock.today())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        Month::from_index0(self.0.month0())
    }

    /// Return the month number (1–12).
    pub fn month_number(&self) -> u32 {
        self.0.month()
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday().into()
    }

    /// Return `true` on Saturdays and Sundays.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    /// Combine with a time of day.
    pub fn and_time(&self, time: NaiveTime) -> NaiveDateTime {
        self.0.and_time(time)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative moves backwards).
    pub fn add_days(self, n: i64) -> Result<Self> {
        let days = Days::new(n.unsigned_abs());
        let moved = if n >= 0 {
            self.0.checked_add_days(days)
        } else {
            self.0.checked_sub_days(days)
        };
        moved
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{self} + {n} days is out of range")))
    }

    /// Advance by `n` days, stopping at the first or last representable date.
    pub fn saturating_add_days(self, n: i64) -> Self {
        self.add_days(n).unwrap_or(if n >= 0 {
            Date(NaiveDate::MAX)
        } else {
            Date(NaiveDate::MIN)
        })
    }

    /// Advance by `n` units. Month and year steps clamp the day to the end of
    /// the target month (Jan 31 + 1 month = Feb 28/29).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(i64::from(n)),
            TimeUnit::Weeks => self.add_days(i64::from(n) * 7),
            TimeUnit::Months => {
                let months = Months::new(n.unsigned_abs());
                let moved = if n >= 0 {
                    self.0.checked_add_months(months)
                } else {
                    self.0.checked_sub_months(months)
                };
                moved
                    .map(Date)
                    .ok_or_else(|| Error::Date(format!("{self} + {n} months is out of range")))
            }
            TimeUnit::Years => self.advance(
                n.checked_mul(12)
                    .ok_or_else(|| Error::Date(format!("{n} years overflows")))?,
                TimeUnit::Months,
            ),
        }
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        Date(self.0 - Days::new(u64::from(self.0.day0())))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let last = days_in_month(self.year(), self.month_number());
        Date(self.0 + Days::new(u64::from(last - self.0.day())))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Return the *n*-th occurrence of `weekday` in `month` of `year`.
    ///
    /// For example, the third Monday of January 2024 is 2024-01-15.
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: Month) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month.number(), 1)?;
        let skip = (i32::from(weekday.days_from_sunday())
            - i32::from(first.weekday().days_from_sunday()))
        .rem_euclid(7) as u32;
        let day = 1 + skip + 7 * (u32::from(n) - 1);
        if day > month.days_in(year) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{:02}",
                month.number()
            )));
        }
        Date::from_ymd(year, month.number(), day)
    }

    /// Return the last occurrence of `weekday` in `month` of `year`.
    pub fn last_weekday(weekday: Weekday, year: i32, month: Month) -> Result<Self> {
        let last_day = month.days_in(year);
        let last = Date::from_ymd(year, month.number(), last_day)?;
        let back = (i32::from(last.weekday().days_from_sunday())
            - i32::from(weekday.days_from_sunday()))
        .rem_euclid(7) as u32;
        Date::from_ymd(year, month.number(), last_day - back)
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl From<Date> for NaiveDate {
    fn from(d: Date) -> Self {
        d.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i64> for Date {
    type Output = Self;
    fn add(self, rhs: i64) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i64> for Date {
    type Output = Self;
    fn sub(self, rhs: i64) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> i64 {
        rhs.days_between(self)
    }
}

impl std::ops::AddAssign<i64> for Date {
    fn add_assign(&mut self, rhs: i64) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i64> for Date {
    fn sub_assign(&mut self, rhs: i64) {
        *self = *self - rhs;
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.0.format(ISO_DATE_FORMAT))
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
