//! Luck direction and the ten-step luck pillar sequence.

use crate::gender::Gender;
use crate::sexagenary::SexagenaryIndex;
use crate::stem::{Polarity, Stem};

use super::types::{LUCK_STEPS, LuckDirection, LuckStep, YEARS_PER_STEP};

/// Forward for Yang-year males and Yin-year females, Backward otherwise.
pub const fn luck_direction(year_stem: Stem, gender: Gender) -> LuckDirection {
    match (gender, year_stem.polarity()) {
        (Gender::Male, Polarity::Yang) | (Gender::Female, Polarity::Yin) => LuckDirection::Forward,
        _ => LuckDirection::Backward,
    }
}

/// First luck pillar: the month pillar's neighbour in the walking direction.
pub const fn first_luck_index(
    month_index: SexagenaryIndex,
    direction: LuckDirection,
) -> SexagenaryIndex {
    month_index.shift(direction.step())
}

/// Expand the first luck pillar into ten consecutive decades.
///
/// Step `k` (1-based) sits at `first + d·(k-1)` in the 60-cycle and covers
/// ages `start_age + 10(k-1) ..= start_age + 10(k-1) + 9`.
pub fn luck_sequence(
    first: SexagenaryIndex,
    direction: LuckDirection,
    start_age: u32,
) -> [LuckStep; LUCK_STEPS] {
    std::array::from_fn(|i| {
        let age_start = start_age + YEARS_PER_STEP * i as u32;
        LuckStep {
            step: i as u8 + 1,
            age_start,
            age_end: age_start + YEARS_PER_STEP - 1,
            pillar: first.shift(direction.step() * i as i64).pillar(),
        }
    })
}
