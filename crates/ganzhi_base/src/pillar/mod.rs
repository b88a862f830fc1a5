//! Pillar calculators for the four pillars of a birth instant.
//!
//! - Year: calendar year, shifted back before 立春.
//! - Month: solar-term slot for the branch, five-tiger rule for the stem.
//! - Day: epoch day count into the 60-cycle.
//! - Hour: two-hour branch window, five-rat rule for the stem.
//!
//! Year and day pillars walk the 60-cycle linearly and are built from a
//! `SexagenaryIndex`; month and hour pillars are assembled from stem and
//! branch directly.

pub mod day;
pub mod hour;
pub mod month;
pub mod stem_data;
pub mod year;

pub use day::{EPOCH_DAY_INDEX, day_pillar};
pub use hour::{hour_branch, hour_pillar};
pub use month::{month_pillar, month_slot, opening_term};
pub use stem_data::{FIVE_RAT, FIVE_TIGER, five_rat, five_tiger};
pub use year::{EPOCH_YEAR_INDEX, calendar_year_pillar, sexagenary_year, year_pillar};
