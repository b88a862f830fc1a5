//! Hour pillar: two-hour branch window, five-rat rule for the stem.

use crate::branch::Branch;
use crate::calendar::BirthTime;
use crate::sexagenary::Pillar;
use crate::stem::Stem;

use super::stem_data::five_rat;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Hour branch for a clock time.
///
/// 23:00-23:59 wraps to -1:00 and belongs to the following 子 hour.
pub const fn hour_branch(time: &BirthTime) -> Branch {
    let mut minutes = time.minute_of_day() as i64;
    if minutes >= 23 * 60 {
        minutes -= MINUTES_PER_DAY;
    }
    // floor((hours + 1) / 2), in minutes
    Branch::from_index(((minutes + 60).div_euclid(120) % 12) as u8)
}

/// Hour pillar from the day stem and birth time.
pub const fn hour_pillar(day_stem: Stem, time: &BirthTime) -> Pillar {
    let branch = hour_branch(time);
    Pillar::from_parts(five_rat(day_stem, branch.index()), branch)
}
