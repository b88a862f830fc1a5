//! Gregorian calendar arithmetic and validated birth date/time inputs.
//!
//! Day numbers count from the epoch 1900-01-01 (day 0). They are defined for
//! any proleptic Gregorian date so that solar-term boundaries of 1899 can be
//! compared against births in early 1900.

use serde::Serialize;

use crate::error::{GanzhiError, Result};

/// First supported Gregorian year; 1900-01-01 is day 0.
pub const EPOCH_YEAR: i32 = 1900;

/// Last supported Gregorian year.
pub const MAX_YEAR: i32 = 9999;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1..=12) of `year`.
///
/// Months outside 1..=12 are not meaningful; callers validate first.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Number of days in `year`.
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days from 1900-01-01 to the given date (negative before the epoch).
pub fn days_since_epoch(year: i32, month: u32, day: u32) -> i64 {
    let whole_years: i64 = if year >= EPOCH_YEAR {
        (EPOCH_YEAR..year).map(|y| days_in_year(y) as i64).sum()
    } else {
        -(year..EPOCH_YEAR)
            .map(|y| days_in_year(y) as i64)
            .sum::<i64>()
    };
    let whole_months: i64 = (1..month).map(|m| days_in_month(year, m) as i64).sum();
    whole_years + whole_months + day as i64 - 1
}

/// A validated Gregorian date in `EPOCH_YEAR..=MAX_YEAR`.
///
/// Field order gives chronological ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Validate and build a date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(EPOCH_YEAR..=MAX_YEAR).contains(&year) {
            return Err(GanzhiError::InvalidDate(format!(
                "year {year} outside {EPOCH_YEAR}..={MAX_YEAR}"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(GanzhiError::InvalidDate(format!(
                "month {month} outside 1..=12"
            )));
        }
        let max_day = days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(GanzhiError::InvalidDate(format!(
                "day {day} outside 1..={max_day} for {year:04}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Gregorian year.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month 1..=12.
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of month.
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Days since 1900-01-01.
    pub fn days_since_epoch(&self) -> i64 {
        days_since_epoch(self.year, self.month, self.day)
    }

    /// Whether this date falls before the given (month, day) of its own year.
    pub const fn is_before(&self, month: u32, day: u32) -> bool {
        self.month < month || (self.month == month && self.day < day)
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A validated local clock time (hour 0..=23, minute 0..=59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BirthTime {
    hour: u32,
    minute: u32,
}

impl BirthTime {
    /// Validate and build a clock time.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 {
            return Err(GanzhiError::InvalidDate(format!(
                "hour {hour} outside 0..=23"
            )));
        }
        if minute > 59 {
            return Err(GanzhiError::InvalidDate(format!(
                "minute {minute} outside 0..=59"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Hour 0..=23.
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute 0..=59.
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes since local midnight.
    pub const fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl std::fmt::Display for BirthTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
