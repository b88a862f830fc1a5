//! Luck-cycle (大运) calculations.
//!
//! A luck cycle is fully determined by the year stem, the month pillar, the
//! subject's gender and the birth date:
//! - direction from year-stem polarity and gender,
//! - start age from the distance to the nearest jie boundary,
//! - ten decade-long pillars walking the 60-cycle from the month pillar.

pub mod balance;
pub mod sequence;
pub mod types;

pub use balance::start_age;
pub use sequence::{first_luck_index, luck_direction, luck_sequence};
pub use types::{
    DAYS_PER_YEAR_OF_AGE, LUCK_STEPS, LuckCycle, LuckDirection, LuckPeriod, LuckStep,
    PRE_CYCLE_LABEL, StartAge, YEARS_PER_STEP,
};

use crate::calendar::CivilDate;
use crate::gender::Gender;
use crate::sexagenary::SexagenaryIndex;
use crate::stem::Stem;

/// Compute the full luck cycle.
pub fn luck_cycle(
    year_stem: Stem,
    month_index: SexagenaryIndex,
    gender: Gender,
    date: &CivilDate,
) -> LuckCycle {
    let direction = luck_direction(year_stem, gender);
    let start = start_age(date);
    let first = first_luck_index(month_index, direction);
    LuckCycle {
        start,
        direction,
        steps: luck_sequence(first, direction, start.age),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_day_male_cycle() {
        let date = CivilDate::new(2000, 2, 29).unwrap();
        let month = "戊寅".parse::<crate::Pillar>().unwrap().index();
        let cycle = luck_cycle(Stem::Geng, month, Gender::Male, &date);
        assert_eq!(cycle.direction, LuckDirection::Forward);
        assert_eq!(cycle.start_age(), 2);
        assert_eq!(cycle.first_pillar().to_string(), "己卯");
        assert_eq!(cycle.steps[9].pillar.to_string(), "戊子");
    }

    #[test]
    fn period_lookup() {
        let date = CivilDate::new(2000, 2, 29).unwrap();
        let month = SexagenaryIndex::new(14).unwrap();
        let cycle = luck_cycle(Stem::Geng, month, Gender::Male, &date);
        assert_eq!(cycle.period_at_age(1), LuckPeriod::PreCycle);
        assert_eq!(cycle.period_at_age(2).pillar(), Some(cycle.steps[0].pillar));
        assert_eq!(cycle.period_at_age(11).pillar(), Some(cycle.steps[0].pillar));
        assert_eq!(cycle.period_at_age(12).pillar(), Some(cycle.steps[1].pillar));
        assert_eq!(cycle.period_at_age(101).pillar(), Some(cycle.steps[9].pillar));
        assert_eq!(cycle.period_at_age(102), LuckPeriod::AfterCycle);
    }
}
