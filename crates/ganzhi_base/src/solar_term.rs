//! The 12 "jie" (节) solar terms used as month and year boundaries.
//!
//! Boundaries are fixed approximate (month, day) pairs, not ephemeris
//! results, so attribution can be off by a day near a term.
//!
//! Month slots count from 立春: slot 0 = 寅 month, ..., slot 11 = 丑 month.

use serde::Serialize;

use crate::branch::Branch;
use crate::calendar::days_since_epoch;

/// The 12 jie terms in month-slot order, starting from Lichun (立春).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarTerm {
    Lichun,
    Jingzhe,
    Qingming,
    Lixia,
    Mangzhong,
    Xiaoshu,
    Liqiu,
    Bailu,
    Hanlu,
    Lidong,
    Daxue,
    Xiaohan,
}

/// All 12 jie terms in month-slot order (0 = 立春, 11 = 小寒).
pub const ALL_JIE: [SolarTerm; 12] = [
    SolarTerm::Lichun,
    SolarTerm::Jingzhe,
    SolarTerm::Qingming,
    SolarTerm::Lixia,
    SolarTerm::Mangzhong,
    SolarTerm::Xiaoshu,
    SolarTerm::Liqiu,
    SolarTerm::Bailu,
    SolarTerm::Hanlu,
    SolarTerm::Lidong,
    SolarTerm::Daxue,
    SolarTerm::Xiaohan,
];

impl SolarTerm {
    /// Chinese name of the term.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Lichun => "立春",
            Self::Jingzhe => "惊蛰",
            Self::Qingming => "清明",
            Self::Lixia => "立夏",
            Self::Mangzhong => "芒种",
            Self::Xiaoshu => "小暑",
            Self::Liqiu => "立秋",
            Self::Bailu => "白露",
            Self::Hanlu => "寒露",
            Self::Lidong => "立冬",
            Self::Daxue => "大雪",
            Self::Xiaohan => "小寒",
        }
    }

    /// Pinyin name of the term.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lichun => "Lichun",
            Self::Jingzhe => "Jingzhe",
            Self::Qingming => "Qingming",
            Self::Lixia => "Lixia",
            Self::Mangzhong => "Mangzhong",
            Self::Xiaoshu => "Xiaoshu",
            Self::Liqiu => "Liqiu",
            Self::Bailu => "Bailu",
            Self::Hanlu => "Hanlu",
            Self::Lidong => "Lidong",
            Self::Daxue => "Daxue",
            Self::Xiaohan => "Xiaohan",
        }
    }

    /// Fixed Gregorian (month, day) on which the term starts.
    pub const fn boundary(self) -> (u32, u32) {
        match self {
            Self::Lichun => (2, 4),
            Self::Jingzhe => (3, 6),
            Self::Qingming => (4, 5),
            Self::Lixia => (5, 6),
            Self::Mangzhong => (6, 6),
            Self::Xiaoshu => (7, 7),
            Self::Liqiu => (8, 7),
            Self::Bailu => (9, 8),
            Self::Hanlu => (10, 8),
            Self::Lidong => (11, 7),
            Self::Daxue => (12, 7),
            Self::Xiaohan => (1, 6),
        }
    }

    /// Month slot opened by this term (立春 = 0 .. 小寒 = 11).
    pub const fn month_slot(self) -> u8 {
        self as u8
    }

    /// Branch of the month opened by this term (立春 opens 寅).
    pub const fn month_branch(self) -> Branch {
        Branch::from_index(self.month_slot() + 2)
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Start-of-Spring boundary that decides the sexagenary year.
pub const START_OF_SPRING: (u32, u32) = SolarTerm::Lichun.boundary();

/// A solar-term boundary placed on a specific Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DatedTerm {
    /// Which jie term.
    pub term: SolarTerm,
    /// Gregorian year of the boundary.
    pub year: i32,
    /// Gregorian month of the boundary.
    pub month: u32,
    /// Gregorian day of the boundary.
    pub day: u32,
}

impl DatedTerm {
    /// Place `term` on its fixed (month, day) in `year`.
    pub const fn new(term: SolarTerm, year: i32) -> Self {
        let (month, day) = term.boundary();
        Self {
            term,
            year,
            month,
            day,
        }
    }

    /// Days since 1900-01-01 (may be negative for 1899 boundaries).
    pub fn day_number(&self) -> i64 {
        days_since_epoch(self.year, self.month, self.day)
    }
}

impl std::fmt::Display for DatedTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:04}-{:02}-{:02}",
            self.term.symbol(),
            self.year,
            self.month,
            self.day
        )
    }
}

/// The 12 jie boundaries falling in Gregorian `year`, in date order
/// (小寒 in January first, 大雪 in December last).
pub fn jie_boundaries(year: i32) -> [DatedTerm; 12] {
    let mut out = [DatedTerm::new(SolarTerm::Xiaohan, year); 12];
    for (slot, term) in ALL_JIE.iter().take(11).enumerate() {
        out[slot + 1] = DatedTerm::new(*term, year);
    }
    out
}

/// Chronological boundary window around Gregorian `year`.
///
/// Runs from the previous year's 大雪 to the next year's 立春, so any date in
/// `year` has a boundary at-or-before and one after it. This window carries
/// the year rollover for the terms that straddle January.
pub fn boundary_window(year: i32) -> Vec<DatedTerm> {
    let mut window = Vec::with_capacity(15);
    window.push(DatedTerm::new(SolarTerm::Daxue, year - 1));
    window.extend(jie_boundaries(year));
    window.push(DatedTerm::new(SolarTerm::Xiaohan, year + 1));
    window.push(DatedTerm::new(SolarTerm::Lichun, year + 1));
    window
}
