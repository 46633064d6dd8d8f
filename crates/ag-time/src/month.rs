//! Month-of-year enum.

use crate::date::days_in_month;

/// Month of the year, numbered 1–12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

const ALL: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Construct from a number (1 = January … 12 = December).
    pub fn from_number(n: u32) -> Option<Self> {
        (1..=12).contains(&n).then(|| ALL[n as usize - 1])
    }

    /// Construct from a zero-based index (0 = January); wraps past December.
    pub(crate) fn from_index0(i: u32) -> Self {
        ALL[(i % 12) as usize]
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u32 {
        *self as u32
    }

    /// The following month, wrapping December to January.
    pub fn succ(&self) -> Month {
        ALL[(self.number() % 12) as usize]
    }

    /// The preceding month, wrapping January to December.
    pub fn pred(&self) -> Month {
        ALL[((self.number() + 10) % 12) as usize]
    }

    /// Number of days this month has in `year`.
    pub fn days_in(&self, year: i32) -> u32 {
        days_in_month(year, self.number())
    }

    /// Three-letter abbreviation (`"Jan"`, `"Feb"`, …).
    pub fn short_name(&self) -> &'static str {
        &self.long_name()[..3]
    }

    /// Full English name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for n in 1..=12u32 {
            assert_eq!(Month::from_number(n).unwrap().number(), n);
        }
        assert!(Month::from_number(0).is_none());
        assert!(Month::from_number(13).is_none());
    }

    #[test]
    fn wraps_around_the_year() {
        assert_eq!(Month::December.succ(), Month::January);
        assert_eq!(Month::January.pred(), Month::December);
        assert_eq!(Month::June.succ(), Month::July);
        assert_eq!(Month::June.pred(), Month::May);
    }

    #[test]
    fn names() {
        assert_eq!(Month::September.short_name(), "Sep");
        assert_eq!(Month::May.short_name(), "May");
        assert_eq!(Month::February.to_string(), "February");
    }

    #[test]
    fn february_length() {
        assert_eq!(Month::February.days_in(2024), 29);
        assert_eq!(Month::February.days_in(2023), 28);
        assert_eq!(Month::February.days_in(2100), 28);
        assert_eq!(Month::February.days_in(2000), 29);
    }
}
