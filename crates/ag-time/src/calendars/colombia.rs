//! Colombia calendar.

use crate::calendar::HolidayCalendar;
use crate::holidays::{expand, Country, Holiday, HolidayDef, HolidayRule};
use crate::month::Month;

/// Colombian holiday table: fixed dates first, then Easter-relative days.
pub const COLOMBIAN_HOLIDAYS: &[HolidayDef] = &[
    HolidayDef {
        name: "Año Nuevo",
        rule: HolidayRule::Fixed { month: Month::January, day: 1 },
    },
    HolidayDef {
        name: "Día del Trabajo",
        rule: HolidayRule::Fixed { month: Month::May, day: 1 },
    },
    HolidayDef {
        name: "Día de la Independencia",
        rule: HolidayRule::Fixed { month: Month::July, day: 20 },
    },
    HolidayDef {
        name: "Batalla de Boyacá",
        rule: HolidayRule::Fixed { month: Month::August, day: 7 },
    },
    HolidayDef {
        name: "Día de la Inmaculada Concepción",
        rule: HolidayRule::Fixed { month: Month::December, day: 8 },
    },
    HolidayDef {
        name: "Navidad",
        rule: HolidayRule::Fixed { month: Month::December, day: 25 },
    },
    HolidayDef {
        name: "Jueves Santo",
        rule: HolidayRule::EasterOffset(-3),
    },
    HolidayDef {
        name: "Viernes Santo",
        rule: HolidayRule::EasterOffset(-2),
    },
    HolidayDef {
        name: "Ascensión del Señor",
        rule: HolidayRule::EasterOffset(39),
    },
    HolidayDef {
        name: "Corpus Christi",
        rule: HolidayRule::EasterOffset(60),
    },
    HolidayDef {
        name: "Sagrado Corazón",
        rule: HolidayRule::EasterOffset(68),
    },
];

/// Colombian public holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct Colombia;

impl HolidayCalendar for Colombia {
    fn name(&self) -> &str {
        "Colombia"
    }

    fn holidays(&self, year: i32) -> Vec<Holiday> {
        expand(COLOMBIAN_HOLIDAYS, year, Country::Colombia)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holidays_2024() {
        let got: Vec<String> = Colombia
            .holidays(2024)
            .iter()
            .map(|h| format!("{} {}", h.date, h.name))
            .collect();
        assert_eq!(
            got,
            vec![
                "2024-01-01 Año Nuevo",
                "2024-05-01 Día del Trabajo",
                "2024-07-20 Día de la Independencia",
                "2024-08-07 Batalla de Boyacá",
                "2024-12-08 Día de la Inmaculada Concepción",
                "2024-12-25 Navidad",
                "2024-03-28 Jueves Santo",
                "2024-03-29 Viernes Santo",
                "2024-05-09 Ascensión del Señor",
                "2024-05-30 Corpus Christi",
                "2024-06-07 Sagrado Corazón",
            ]
        );
    }

    #[test]
    fn easter_rows_for_2025() {
        // Easter 2025 is April 20.
        let list = Colombia.holidays(2025);
        let by_name = |name: &str| list.iter().find(|h| h.name == name).unwrap().date.to_string();
        assert_eq!(by_name("Jueves Santo"), "2025-04-17");
        assert_eq!(by_name("Viernes Santo"), "2025-04-18");
        assert_eq!(by_name("Ascensión del Señor"), "2025-05-29");
        assert_eq!(by_name("Corpus Christi"), "2025-06-19");
        assert_eq!(by_name("Sagrado Corazón"), "2025-06-27");
    }
}
