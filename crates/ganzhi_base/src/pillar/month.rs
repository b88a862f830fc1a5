//! Month pillar: solar-term slot for the branch, five-tiger rule for the stem.

use crate::calendar::CivilDate;
use crate::sexagenary::Pillar;
use crate::solar_term::{DatedTerm, SolarTerm, boundary_window};
use crate::stem::Stem;

use super::stem_data::five_tiger;

/// The jie boundary that opened the month a date falls in: the latest
/// boundary at or before the date.
pub fn opening_term(date: &CivilDate) -> DatedTerm {
    let day = date.days_since_epoch();
    let window = boundary_window(date.year());
    // The window starts with the previous year's 大雪, which always precedes
    // a date of `date.year()`.
    let mut opening = window[0];
    for term in window {
        if term.day_number() <= day {
            opening = term;
        } else {
            break;
        }
    }
    tracing::trace!(%date, term = %opening, "month opening term");
    opening
}

/// Month slot of a date (0 = 寅 month after 立春 .. 11 = 丑 month after 小寒).
pub fn month_slot(date: &CivilDate) -> u8 {
    opening_term(date).term.month_slot()
}

/// Month pillar of a date given the (Start-of-Spring adjusted) year stem.
pub fn month_pillar(date: &CivilDate, year_stem: Stem) -> Pillar {
    let term: SolarTerm = opening_term(date).term;
    let slot = term.month_slot();
    Pillar::from_parts(five_tiger(year_stem, slot), term.month_branch())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;

    fn d(y: i32, m: u32, day: u32) -> CivilDate {
        CivilDate::new(y, m, day).unwrap()
    }

    #[test]
    fn slot_after_start_of_spring() {
        assert_eq!(month_slot(&d(2000, 2, 4)), 0);
        assert_eq!(month_slot(&d(2000, 2, 29)), 0);
        assert_eq!(month_slot(&d(2000, 3, 6)), 1);
    }

    #[test]
    fn slot_before_start_of_spring() {
        assert_eq!(month_slot(&d(2000, 2, 3)), 11);
        assert_eq!(month_slot(&d(2000, 1, 6)), 11);
        assert_eq!(month_slot(&d(2000, 1, 5)), 10);
    }

    #[test]
    fn slot_in_december() {
        assert_eq!(month_slot(&d(1995, 12, 6)), 9);
        assert_eq!(month_slot(&d(1995, 12, 7)), 10);
        assert_eq!(month_slot(&d(1995, 12, 31)), 10);
    }

    #[test]
    fn epoch_january_uses_1899_daxue() {
        let t = opening_term(&d(1900, 1, 1));
        assert_eq!(t.term, SolarTerm::Daxue);
        assert_eq!(t.year, 1899);
    }

    #[test]
    fn known_month_pillars() {
        assert_eq!(month_pillar(&d(2000, 2, 29), Stem::Geng).to_string(), "戊寅");
        assert_eq!(month_pillar(&d(2024, 2, 10), Stem::Jia).to_string(), "丙寅");
        assert_eq!(month_pillar(&d(1995, 12, 5), Stem::Yi).to_string(), "丁亥");
        assert_eq!(month_pillar(&d(1996, 1, 24), Stem::Yi).to_string(), "己丑");
        assert_eq!(month_pillar(&d(1988, 5, 15), Stem::Wu).to_string(), "丁巳");
    }

    #[test]
    fn branch_ignores_year() {
        for year in [1901, 1950, 2000, 2023, 2100] {
            let p = month_pillar(&d(year, 7, 20), Stem::Jia);
            assert_eq!(p.branch(), Branch::Wei);
        }
    }
}
