//! Year pillar: calendar year shifted back before Start-of-Spring.

use crate::calendar::{CivilDate, EPOCH_YEAR};
use crate::sexagenary::{Pillar, SexagenaryIndex};
use crate::solar_term::START_OF_SPRING;

/// Cycle position of the epoch year 1900 (庚子).
pub const EPOCH_YEAR_INDEX: i64 = 36;

/// Sexagenary year a date belongs to: the calendar year, or the previous one
/// when the date falls before 立春.
pub const fn sexagenary_year(date: &CivilDate) -> i32 {
    let (month, day) = START_OF_SPRING;
    if date.is_before(month, day) {
        date.year() - 1
    } else {
        date.year()
    }
}

/// Pillar of a plain calendar year, with no Start-of-Spring adjustment.
pub const fn calendar_year_pillar(year: i32) -> Pillar {
    SexagenaryIndex::wrapping(year as i64 - EPOCH_YEAR as i64 + EPOCH_YEAR_INDEX).pillar()
}

/// Year pillar of a birth date.
pub const fn year_pillar(date: &CivilDate) -> Pillar {
    calendar_year_pillar(sexagenary_year(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CivilDate {
        CivilDate::new(y, m, day).unwrap()
    }

    #[test]
    fn epoch_year_is_gengzi() {
        assert_eq!(calendar_year_pillar(1900).to_string(), "庚子");
    }

    #[test]
    fn known_years() {
        assert_eq!(calendar_year_pillar(1984).to_string(), "甲子");
        assert_eq!(calendar_year_pillar(1996).to_string(), "丙子");
        assert_eq!(calendar_year_pillar(1997).to_string(), "丁丑");
        assert_eq!(calendar_year_pillar(2024).to_string(), "甲辰");
        assert_eq!(calendar_year_pillar(1899).to_string(), "己亥");
    }

    #[test]
    fn start_of_spring_shift() {
        assert_eq!(sexagenary_year(&d(2000, 2, 3)), 1999);
        assert_eq!(sexagenary_year(&d(2000, 2, 4)), 2000);
        assert_eq!(sexagenary_year(&d(2000, 1, 31)), 1999);
        assert_eq!(sexagenary_year(&d(2000, 12, 31)), 2000);
        assert_eq!(year_pillar(&d(2000, 2, 29)).to_string(), "庚辰");
        assert_eq!(year_pillar(&d(1996, 1, 24)).to_string(), "乙亥");
    }

    #[test]
    fn epoch_january_uses_1899() {
        assert_eq!(year_pillar(&d(1900, 1, 1)).to_string(), "己亥");
    }
}
