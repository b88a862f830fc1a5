//! Year-by-year life timeline driven by the luck cycle.
//!
//! Ages are virtual ages (虚岁): age 1 is the birth year. Each entry pairs
//! the annual pillar (流年) of that calendar year with the luck period in
//! force at that age.
//!
//! Virtual ages start at 1, so a start age of 0 is read as 1: the first luck
//! pillar then covers ages 1..=10 and every later decade moves up by one.

use serde::Serialize;

use crate::chart::ChartReport;
use crate::dayun::{LuckCycle, LuckPeriod};
use crate::pillar::calendar_year_pillar;
use crate::sexagenary::Pillar;

/// Range of ages covered by a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineConfig {
    /// First virtual age listed.
    pub first_age: u16,
    /// Number of consecutive ages listed.
    pub span_years: u16,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            first_age: 1,
            span_years: 100,
        }
    }
}

/// One year of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    /// Virtual age.
    pub age: u32,
    /// Gregorian year in which this age is reached.
    pub year: i32,
    /// Pillar of that calendar year (流年).
    pub annual_pillar: Pillar,
    /// Luck period in force.
    pub luck: LuckPeriod,
}

/// Luck period at a virtual age, with a start age of 0 counted as 1.
pub fn luck_at_virtual_age(cycle: &LuckCycle, age: u32) -> LuckPeriod {
    let shift = 1u32.saturating_sub(cycle.start_age());
    match age.checked_sub(shift) {
        Some(a) => cycle.period_at_age(a),
        None => LuckPeriod::PreCycle,
    }
}

/// Build the timeline for a computed chart.
pub fn life_timeline(report: &ChartReport, config: &TimelineConfig) -> Vec<TimelineEntry> {
    let birth_year = report.birth.date.year();
    let first = u32::from(config.first_age);
    (first..first + u32::from(config.span_years))
        .map(|age| {
            let year = birth_year + age as i32 - 1;
            TimelineEntry {
                age,
                year,
                annual_pillar: calendar_year_pillar(year),
                luck: luck_at_virtual_age(&report.luck, age),
            }
        })
        .collect()
}
