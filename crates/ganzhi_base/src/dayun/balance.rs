//! Start age from the distance to the nearest jie boundary.
//!
//! Every 3 days between birth and the nearest boundary count as one year of
//! age, floored. Comparisons are date-only.

use crate::calendar::CivilDate;
use crate::solar_term::boundary_window;

use super::types::{DAYS_PER_YEAR_OF_AGE, StartAge};

/// Start age of the luck cycle for a birth date.
///
/// The nearer of the last boundary strictly before the birth date and the
/// first boundary on or after it is used; equal distances pick the later
/// boundary. The scan window reaches back to the previous year's 大雪 and
/// forward to the next year's 立春, so both neighbours always exist.
pub fn start_age(date: &CivilDate) -> StartAge {
    let day = date.days_since_epoch();
    let window = boundary_window(date.year());
    let split = window.partition_point(|t| t.day_number() < day);
    let prev = window[split - 1];
    let next = window[split];

    let to_prev = day - prev.day_number();
    let to_next = next.day_number() - day;
    let (boundary, days) = if to_next <= to_prev {
        (next, to_next)
    } else {
        (prev, to_prev)
    };
    let days = days as u32;
    tracing::trace!(%date, %boundary, days, "nearest jie boundary");

    StartAge {
        age: days / DAYS_PER_YEAR_OF_AGE,
        days,
        boundary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar_term::SolarTerm;

    fn d(y: i32, m: u32, day: u32) -> CivilDate {
        CivilDate::new(y, m, day).unwrap()
    }

    #[test]
    fn leap_day_nearest_jingzhe() {
        let s = start_age(&d(2000, 2, 29));
        assert_eq!(s.boundary.term, SolarTerm::Jingzhe);
        assert_eq!(s.days, 6);
        assert_eq!(s.age, 2);
    }

    #[test]
    fn on_boundary_is_zero() {
        let s = start_age(&d(2024, 2, 4));
        assert_eq!(s.boundary.term, SolarTerm::Lichun);
        assert_eq!(s.days, 0);
        assert_eq!(s.age, 0);
    }

    #[test]
    fn previous_boundary_when_nearer() {
        let s = start_age(&d(1988, 5, 15));
        assert_eq!(s.boundary.term, SolarTerm::Lixia);
        assert_eq!(s.days, 9);
        assert_eq!(s.age, 3);
    }

    #[test]
    fn tie_picks_later_boundary() {
        // 惊蛰 3-06 and 清明 4-05 are 30 days apart; 3-21 is 15 from each.
        let s = start_age(&d(2001, 3, 21));
        assert_eq!(s.days, 15);
        assert_eq!(s.boundary.term, SolarTerm::Qingming);
    }

    #[test]
    fn early_january_reaches_xiaohan() {
        let s = start_age(&d(1900, 1, 1));
        assert_eq!(s.boundary.term, SolarTerm::Xiaohan);
        assert_eq!(s.boundary.year, 1900);
        assert_eq!(s.days, 5);
        assert_eq!(s.age, 1);
    }

    #[test]
    fn late_december_reaches_next_year() {
        let s = start_age(&d(2023, 12, 31));
        assert_eq!(s.boundary.term, SolarTerm::Xiaohan);
        assert_eq!(s.boundary.year, 2024);
        assert_eq!(s.days, 6);
    }

    #[test]
    fn early_february_reaches_lichun() {
        let s = start_age(&d(1996, 1, 24));
        assert_eq!(s.boundary.term, SolarTerm::Lichun);
        assert_eq!(s.days, 11);
        assert_eq!(s.age, 3);
    }
}
