//! Day pillar from the epoch day count.

use crate::calendar::CivilDate;
use crate::sexagenary::{Pillar, SexagenaryIndex};

/// Cycle position of the epoch day 1900-01-01 (甲戌).
pub const EPOCH_DAY_INDEX: i64 = 10;

/// Day pillar of a date.
pub fn day_pillar(date: &CivilDate) -> Pillar {
    SexagenaryIndex::wrapping(date.days_since_epoch() + EPOCH_DAY_INDEX).pillar()
}
