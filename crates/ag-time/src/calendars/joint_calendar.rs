//! Joint calendar: the union of several calendars' holidays.

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use crate::holidays::Holiday;

/// A calendar whose holidays are those of all its members.
///
/// Holiday lists are concatenated in member order, so when two members share
/// a date the first member's name is the one reported by
/// [`holiday_name`](HolidayCalendar::holiday_name).
pub struct JointCalendar {
    calendars: Vec<Box<dyn HolidayCalendar>>,
    name: String,
}

impl std::fmt::Debug for JointCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JointCalendar")
            .field("name", &self.name)
            .finish()
    }
}

impl JointCalendar {
    /// Create a joint calendar from its members.
    pub fn new(calendars: Vec<Box<dyn HolidayCalendar>>) -> Self {
        let name = calendars
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ");
        Self { calendars, name }
    }
}

impl HolidayCalendar for JointCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays(&self, year: i32) -> Vec<Holiday> {
        self.calendars
            .iter()
            .flat_map(|c| c.holidays(year))
            .collect()
    }

    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        self.calendars.iter().find_map(|c| c.holiday_name(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{Colombia, UnitedStates};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn union_of_holidays() {
        let joint = JointCalendar::new(vec![Box::new(UnitedStates), Box::new(Colombia)]);
        assert!(joint.is_holiday(date(2024, 7, 4)));
        assert!(joint.is_holiday(date(2024, 7, 20)));
        assert!(!joint.is_holiday(date(2024, 7, 5)));
        assert_eq!(joint.holiday_name(date(2024, 12, 25)), Some("Christmas Day"));
    }

    #[test]
    fn member_order_decides_shared_names() {
        let joint = JointCalendar::new(vec![Box::new(Colombia), Box::new(UnitedStates)]);
        assert_eq!(joint.holiday_name(date(2024, 12, 25)), Some("Navidad"));
        assert_eq!(joint.name(), "Colombia, United States");
    }

    #[test]
    fn empty_joint_has_no_holidays() {
        let joint = JointCalendar::new(Vec::new());
        assert!(joint.holidays(2024).is_empty());
        assert!(!joint.is_holiday(date(2024, 1, 1)));
    }
}
