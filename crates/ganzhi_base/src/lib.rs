//! Four Pillars (八字) calendar engine on the sexagenary cycle.
//!
//! This crate provides:
//! - The 60-term stem/branch cycle with index and string lookup
//! - Fixed jie solar-term boundaries for year and month attribution
//! - Year, month, day and hour pillar calculators
//! - Luck-cycle (大运) start age, direction and ten-step sequence
//! - A lunar calendar adapter with a built-in 1900-2100 table
//! - A year-by-year life timeline driven by the luck cycle
//!
//! Every calculation is a pure function of its inputs. Solar terms use fixed
//! approximate dates, not an ephemeris.

pub mod branch;
pub mod calendar;
pub mod chart;
pub mod dayun;
pub mod error;
pub mod gender;
pub mod lunar;
pub mod pillar;
pub mod sexagenary;
pub mod solar_term;
pub mod stem;
pub mod timeline;

pub use branch::{ALL_BRANCHES, Branch};
pub use calendar::{
    BirthTime, CivilDate, EPOCH_YEAR, MAX_YEAR, days_in_month, days_since_epoch, is_leap_year,
};
pub use chart::{
    BaziChart, BirthInput, ChartReport, compute_bazi_chart, compute_chart, four_pillars,
};
pub use dayun::{
    LUCK_STEPS, LuckCycle, LuckDirection, LuckPeriod, LuckStep, PRE_CYCLE_LABEL, StartAge,
    first_luck_index, luck_cycle, luck_direction, luck_sequence, start_age,
};
pub use error::{GanzhiError, Result};
pub use gender::Gender;
pub use lunar::{LunarCalendar, LunarDate, LunarError, TableLunarCalendar, lunar_date};
pub use pillar::{
    calendar_year_pillar, day_pillar, hour_branch, hour_pillar, month_pillar, month_slot,
    sexagenary_year, year_pillar,
};
pub use sexagenary::{
    CYCLE_LEN, Pillar, SIXTY_PILLARS, SexagenaryIndex, index_of, index_of_str, pillar_at,
};
pub use solar_term::{ALL_JIE, DatedTerm, SolarTerm, jie_boundaries};
pub use stem::{ALL_STEMS, Polarity, Stem};
pub use timeline::{TimelineConfig, TimelineEntry, life_timeline, luck_at_virtual_age};
