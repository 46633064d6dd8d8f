//! United States calendar.

use crate::calendar::HolidayCalendar;
use crate::holidays::{expand, Country, Holiday, HolidayDef, HolidayRule};
use crate::month::Month;
use crate::weekday::Weekday;

/// US holiday table: fixed dates first, then weekday rules.
///
/// Fixed dates are not shifted to an observed weekday.
pub const US_HOLIDAYS: &[HolidayDef] = &[
    HolidayDef {
        name: "New Year's Day",
        rule: HolidayRule::Fixed { month: Month::January, day: 1 },
    },
    HolidayDef {
        name: "Independence Day",
        rule: HolidayRule::Fixed { month: Month::July, day: 4 },
    },
    HolidayDef {
        name: "Veterans Day",
        rule: HolidayRule::Fixed { month: Month::November, day: 11 },
    },
    HolidayDef {
        name: "Christmas Day",
        rule: HolidayRule::Fixed { month: Month::December, day: 25 },
    },
    HolidayDef {
        name: "Martin Luther King Jr. Day",
        rule: HolidayRule::NthWeekday { n: 3, weekday: Weekday::Monday, month: Month::January },
    },
    HolidayDef {
        name: "Presidents Day",
        rule: HolidayRule::NthWeekday { n: 3, weekday: Weekday::Monday, month: Month::February },
    },
    HolidayDef {
        name: "Memorial Day",
        rule: HolidayRule::LastWeekday { weekday: Weekday::Monday, month: Month::May },
    },
    HolidayDef {
        name: "Labor Day",
        rule: HolidayRule::NthWeekday { n: 1, weekday: Weekday::Monday, month: Month::September },
    },
    HolidayDef {
        name: "Columbus Day/Indigenous Peoples' Day",
        rule: HolidayRule::NthWeekday { n: 2, weekday: Weekday::Monday, month: Month::October },
    },
    HolidayDef {
        name: "Thanksgiving Day",
        rule: HolidayRule::NthWeekday { n: 4, weekday: Weekday::Thursday, month: Month::November },
    },
];

/// United States federal holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStates;

impl HolidayCalendar for UnitedStates {
    fn name(&self) -> &str {
        "United States"
    }

    fn holidays(&self, year: i32) -> Vec<Holiday> {
        expand(US_HOLIDAYS, year, Country::UnitedStates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn holidays_2024() {
        let list = UnitedStates.holidays(2024);
        let got: Vec<(String, &str)> = list.iter().map(|h| (h.date.to_string(), h.name)).collect();
        let expected = vec![
            ("2024-01-01", "New Year's Day"),
            ("2024-07-04", "Independence Day"),
            ("2024-11-11", "Veterans Day"),
            ("2024-12-25", "Christmas Day"),
            ("2024-01-15", "Martin Luther King Jr. Day"),
            ("2024-02-19", "Presidents Day"),
            ("2024-05-27", "Memorial Day"),
            ("2024-09-02", "Labor Day"),
            ("2024-10-14", "Columbus Day/Indigenous Peoples' Day"),
            ("2024-11-28", "Thanksgiving Day"),
        ];
        let expected: Vec<(String, &str)> =
            expected.into_iter().map(|(d, n)| (d.to_string(), n)).collect();
        assert_eq!(got, expected);
        assert!(list.iter().all(|h| h.country == Country::UnitedStates));
    }

    #[test]
    fn weekday_rules_land_on_the_right_weekday() {
        for year in 1950..=2150 {
            let list = UnitedStates.holidays(year);
            assert_eq!(list.len(), US_HOLIDAYS.len());
            for h in &list[4..9] {
                assert_eq!(h.date.weekday(), Weekday::Monday, "{} {}", h.name, h.date);
            }
            assert_eq!(list[9].date.weekday(), Weekday::Thursday);
        }
    }

    #[test]
    fn fixed_holiday_on_saturday_is_not_moved() {
        // July 4, 2026 is a Saturday.
        assert!(UnitedStates.is_holiday(date(2026, 7, 4)));
        assert!(!UnitedStates.is_holiday(date(2026, 7, 3)));
    }
}
