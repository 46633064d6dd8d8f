//! Injectable wall clock.
//!
//! Everything that depends on "today" or "now" takes a [`Clock`] so callers
//! can pin time in tests or evaluate views for another moment.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A source of the current local date and time.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// The current local date-time (no time zone attached).
    fn now(&self) -> NaiveDateTime;

    /// The current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The system clock, in the local time zone of the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    /// Freeze the clock at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Freeze the clock at midnight of `date`.
    pub fn at_midnight(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_stable() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let clock = FixedClock::new(now);
        assert_eq!(clock.now(), now);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn midnight_clock() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let clock = FixedClock::at_midnight(day);
        assert_eq!(clock.now().time(), NaiveTime::MIN);
        assert_eq!(clock.today(), day);
    }

    #[test]
    fn clocks_are_object_safe() {
        let clocks: Vec<Box<dyn Clock>> = vec![
            Box::new(SystemClock),
            Box::new(FixedClock::at_midnight(
                NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            )),
        ];
        assert_eq!(clocks.len(), 2);
    }
}
