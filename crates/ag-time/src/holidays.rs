//! Public holidays for the supported locales.
//!
//! Holidays are generated on demand from static rule tables (see
//! [`calendars`](crate::calendars)); nothing is cached. Each table lists its
//! fixed-date rows first and its moveable rows after, and generated lists keep
//! that order. When both locales are requested the US list comes first.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::{calendar_for, HolidayCalendar};
use crate::date::Date;
use crate::easter::easter_offset;
use crate::month::Month;
use crate::weekday::Weekday;
use ag_core::errors::{Error, Result};
use ag_core::settings::{HolidaySettings, HOLIDAY_COUNTRY_CODES};

/// A locale with a holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    /// United States (`"US"`).
    #[serde(rename = "US")]
    UnitedStates,
    /// Colombia (`"CO"`).
    #[serde(rename = "CO")]
    Colombia,
}

impl Country {
    /// Every supported locale, in lookup order.
    pub const ALL: [Country; 2] = [Country::UnitedStates, Country::Colombia];

    /// Two-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Country::UnitedStates => "US",
            Country::Colombia => "CO",
        }
    }

    /// Parse a two-letter code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Country::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// The `[holidays] default_country` locale; `None` when unset.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] for a code no table exists for.
    pub fn from_settings(settings: &HolidaySettings) -> Result<Option<Self>> {
        settings
            .default_country
            .as_deref()
            .map(str::parse::<Country>)
            .transpose()
    }
}

impl FromStr for Country {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Country::from_code(s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown country code {s:?}")))
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How a holiday's date is derived from the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// Same month and day every year.
    Fixed {
        /// Month.
        month: Month,
        /// Day of month.
        day: u32,
    },
    /// The `n`-th `weekday` of `month` (e.g. 3rd Monday of January).
    NthWeekday {
        /// Occurrence, 1-based.
        n: u8,
        /// Weekday.
        weekday: Weekday,
        /// Month.
        month: Month,
    },
    /// The last `weekday` of `month` (e.g. last Monday of May).
    LastWeekday {
        /// Weekday.
        weekday: Weekday,
        /// Month.
        month: Month,
    },
    /// A signed number of days from Easter Sunday.
    EasterOffset(i64),
}

impl HolidayRule {
    /// The date this rule yields in `year`.
    pub fn resolve(&self, year: i32) -> Result<Date> {
        match *self {
            HolidayRule::Fixed { month, day } => Date::from_ymd(year, month.number(), day),
            HolidayRule::NthWeekday { n, weekday, month } => {
                Date::nth_weekday(n, weekday, year, month)
            }
            HolidayRule::LastWeekday { weekday, month } => {
                Date::last_weekday(weekday, year, month)
            }
            HolidayRule::EasterOffset(days) => easter_offset(year, days),
        }
    }
}

/// One row of a holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayDef {
    /// Display name.
    pub name: &'static str,
    /// Date rule.
    pub rule: HolidayRule,
}

/// A holiday occurrence in a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Holiday {
    /// Date, serialised as `YYYY-MM-DD`.
    pub date: Date,
    /// Display name.
    pub name: &'static str,
    /// Locale the holiday belongs to.
    pub country: Country,
}

/// Answer of a single-date holiday lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayCheck {
    /// Whether the date is a holiday.
    pub is_holiday: bool,
    /// Name of the holiday, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<&'static str>,
}

impl HolidayCheck {
    fn from_name(name: Option<&'static str>) -> Self {
        Self {
            is_holiday: name.is_some(),
            holiday_name: name,
        }
    }
}

/// Expand a rule table for `year`. Rows whose date cannot be represented
/// (years outside chrono's range) are dropped.
pub(crate) fn expand(table: &[HolidayDef], year: i32, country: Country) -> Vec<Holiday> {
    table
        .iter()
        .filter_map(|def| match def.rule.resolve(year) {
            Ok(date) => Some(Holiday {
                date,
                name: def.name,
                country,
            }),
            Err(err) => {
                tracing::warn!(year, holiday = def.name, error = %err, "cannot place holiday");
                None
            }
        })
        .collect()
}

/// US holidays of `year`.
pub fn us_holidays(year: i32) -> Vec<Holiday> {
    holidays(year, Some(Country::UnitedStates))
}

/// Colombian holidays of `year`.
pub fn colombian_holidays(year: i32) -> Vec<Holiday> {
    holidays(year, Some(Country::Colombia))
}

/// Holidays of `year` for `country`, or for every locale when `None`.
pub fn holidays(year: i32, country: Option<Country>) -> Vec<Holiday> {
    let list = calendar_for(country).holidays(year);
    tracing::trace!(year, ?country, count = list.len(), "generated holidays");
    list
}

/// Like [`holidays`] but takes a raw country code. Unknown codes mean "every
/// locale".
pub fn holidays_for_code(year: i32, code: Option<&str>) -> Vec<Holiday> {
    holidays(year, code.and_then(Country::from_code))
}

/// Look `date` up in the holiday table of its year.
pub fn is_holiday(date: Date, country: Option<Country>) -> HolidayCheck {
    HolidayCheck::from_name(calendar_for(country).holiday_name(date))
}

/// Like [`is_holiday`] but takes a raw country code. Unknown codes mean
/// "every locale".
pub fn is_holiday_for_code(date: Date, code: Option<&str>) -> HolidayCheck {
    is_holiday(date, code.and_then(Country::from_code))
}
