//! Easter Sunday for the Gregorian calendar.
//!
//! Butcher's algorithm (the "anonymous Gregorian" computus). The sequence of
//! floor divisions and truncating remainders below is load-bearing: changing
//! the order or the rounding moves the result by days for some years.

use crate::date::Date;
use crate::time_unit::TimeUnit;
use ag_core::errors::Result;

/// Easter Sunday of `year`.
///
/// Month and day are computed as plain integers and then laid onto the
/// calendar starting from January 1, so an out-of-range intermediate simply
/// rolls into the neighbouring month instead of failing.
///
/// # Errors
/// Only for years outside the range `chrono` can represent.
pub fn easter_sunday(year: i32) -> Result<Date> {
    let a = year % 19;
    let b = year.div_euclid(100);
    let c = year % 100;
    let d = b.div_euclid(4);
    let e = b % 4;
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c.div_euclid(4);
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let n = h + l - 7 * m + 114;
    let month0 = n.div_euclid(31) - 1;
    let day = n % 31 + 1;

    Date::from_ymd(year, 1, 1)?
        .advance(month0, TimeUnit::Months)?
        .add_days(i64::from(day - 1))
}

/// The date `offset` days from Easter Sunday of `year`.
pub fn easter_offset(year: i32, offset: i64) -> Result<Date> {
    easter_sunday(year)?.add_days(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_sundays() {
        let known = [
            (1818, 3, 22),
            (1943, 4, 25),
            (2000, 4, 23),
            (2008, 3, 23),
            (2011, 4, 24),
            (2019, 4, 21),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2038, 4, 25),
        ];
        for (y, m, d) in known {
            assert_eq!(easter_sunday(y).unwrap(), date(y, m, d), "Easter {y}");
        }
    }

    #[test]
    fn always_a_sunday_between_march_22_and_april_25() {
        for year in 1583..=2500 {
            let easter = easter_sunday(year).unwrap();
            assert_eq!(easter.weekday(), Weekday::Sunday, "Easter {year}");
            assert!(easter >= date(year, 3, 22) && easter <= date(year, 4, 25), "{easter}");
        }
    }

    #[test]
    fn offsets_cross_month_boundaries() {
        // Easter 2024 is March 31; Good Friday is two days before.
        assert_eq!(easter_offset(2024, -2).unwrap(), date(2024, 3, 29));
        assert_eq!(easter_offset(2024, 1).unwrap(), date(2024, 4, 1));
    }
}
