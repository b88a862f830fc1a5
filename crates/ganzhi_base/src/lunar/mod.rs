//! Lunar calendar adapter.
//!
//! Lunar conversion is a collaborator behind the [`LunarCalendar`] trait.
//! The engine only repackages its result; failures surface as
//! [`GanzhiError::ExternalConversion`].

pub mod lunar_data;
pub mod table;

use serde::Serialize;
use thiserror::Error;

use crate::calendar::CivilDate;
use crate::error::{GanzhiError, Result};

pub use table::TableLunarCalendar;

/// Errors reported by a lunar calendar implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LunarError {
    /// The date lies outside the range the implementation covers.
    #[error("date {year:04}-{month:02}-{day:02} outside lunar table range")]
    OutOfRange { year: i32, month: u32, day: u32 },
    /// The implementation could not produce a result.
    #[error("lunar calendar unavailable: {0}")]
    Unavailable(String),
}

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LunarDate {
    /// Lunar year (related Gregorian year of its first month).
    pub year: i32,
    /// Lunar month 1..=12.
    pub month: u32,
    /// Lunar day 1..=30.
    pub day: u32,
    /// Whether `month` is the intercalary (闰) month.
    pub is_leap: bool,
    /// Human-readable rendering, e.g. `甲辰年正月初一`.
    pub display: String,
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

/// Gregorian to lunar conversion.
pub trait LunarCalendar {
    /// Convert a Gregorian date to its lunar date.
    fn solar_to_lunar(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> std::result::Result<LunarDate, LunarError>;
}

/// Lunar date of a birth date, via the given calendar.
pub fn lunar_date<C: LunarCalendar + ?Sized>(calendar: &C, date: &CivilDate) -> Result<LunarDate> {
    calendar
        .solar_to_lunar(date.year(), date.month(), date.day())
        .map_err(GanzhiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl LunarCalendar for Failing {
        fn solar_to_lunar(
            &self,
            _year: i32,
            _month: u32,
            _day: u32,
        ) -> std::result::Result<LunarDate, LunarError> {
            Err(LunarError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn failure_propagates_unchanged() {
        let date = CivilDate::new(2000, 1, 1).unwrap();
        let err = lunar_date(&Failing, &date).unwrap_err();
        assert_eq!(
            err,
            GanzhiError::ExternalConversion(LunarError::Unavailable("offline".into()))
        );
    }

    #[test]
    fn table_result_passes_through() {
        let date = CivilDate::new(2024, 2, 10).unwrap();
        let lunar = lunar_date(&TableLunarCalendar, &date).unwrap();
        assert_eq!((lunar.year, lunar.month, lunar.day), (2024, 1, 1));
        assert!(!lunar.is_leap);
        assert_eq!(lunar.to_string(), "甲辰年正月初一");
    }
}
