//! `HolidayCalendar` trait.
//!
//! A holiday calendar knows the holidays of a locale for any year and can
//! move dates off closed days according to a [`BusinessDayConvention`].

use crate::business_day_convention::BusinessDayConvention;
use crate::calendars::{Colombia, JointCalendar, UnitedStates};
use crate::date::Date;
use crate::holidays::{Country, Holiday};

/// A locale's holiday calendar.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"United States"`).
    fn name(&self) -> &str;

    /// Holidays of `year`, in table order.
    fn holidays(&self, year: i32) -> Vec<Holiday>;

    /// Name of the holiday on `date`, if any. The first matching row wins.
    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        self.holidays(date.year())
            .into_iter()
            .find(|h| h.date == date)
            .map(|h| h.name)
    }

    /// Return `true` if `date` is a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Return `true` if `date` falls on a weekend.
    fn is_weekend(&self, date: Date) -> bool {
        date.is_weekend()
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Move `date` onto a business day according to `convention`.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        adjust_by(date, convention, |d| !self.is_business_day(d))
    }

    /// Move `date` forward past holidays only; weekends are left alone.
    fn roll_past_holidays(&self, date: Date) -> Date {
        adjust_by(date, BusinessDayConvention::Following, |d| self.is_holiday(d))
    }

    /// Holidays between `from` and `to`, both inclusive, in date order.
    fn holidays_between(&self, from: Date, to: Date) -> Vec<Holiday> {
        if to < from {
            return Vec::new();
        }
        let mut found: Vec<Holiday> = (from.year()..=to.year())
            .flat_map(|year| self.holidays(year))
            .filter(|h| h.date >= from && h.date <= to)
            .collect();
        found.sort_by_key(|h| h.date);
        found
    }
}

fn adjust_by(
    date: Date,
    convention: BusinessDayConvention,
    closed: impl Fn(Date) -> bool,
) -> Date {
    let step_while_closed = |mut d: Date, step: i64| {
        while closed(d) {
            match d.add_days(step) {
                Ok(next) => d = next,
                Err(_) => break,
            }
        }
        d
    };
    match convention {
        BusinessDayConvention::Unadjusted => date,
        BusinessDayConvention::Following => step_while_closed(date, 1),
        BusinessDayConvention::Preceding => step_while_closed(date, -1),
        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = step_while_closed(date, 1);
            if adjusted.month() != date.month() {
                step_while_closed(date, -1)
            } else {
                adjusted
            }
        }
    }
}

/// The calendar for `country`, or the union of every locale when `None`.
pub fn calendar_for(country: Option<Country>) -> Box<dyn HolidayCalendar> {
    match country {
        Some(Country::UnitedStates) => Box::new(UnitedStates),
        Some(Country::Colombia) => Box::new(Colombia),
        None => Box::new(JointCalendar::new(vec![
            Box::new(UnitedStates),
            Box::new(Colombia),
        ])),
    }
}
