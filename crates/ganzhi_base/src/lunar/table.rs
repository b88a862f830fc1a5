//! Table-driven lunar calendar for Gregorian 1900-01-31 .. 2101-01-28.

use crate::calendar::{days_in_month, days_since_epoch};
use crate::pillar::calendar_year_pillar;

use super::lunar_data::{
    FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR, LUNAR_EPOCH_OFFSET, LUNAR_YEAR_INFO,
};
use super::{LunarCalendar, LunarDate, LunarError};

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

const DIGITS: [&str; 10] = ["", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Lunar calendar backed by the packed 1900-2100 year table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableLunarCalendar;

fn year_info(year: i32) -> u32 {
    LUNAR_YEAR_INFO[(year - FIRST_LUNAR_YEAR) as usize]
}

/// Leap month of a lunar year, 0 if none.
pub(crate) fn leap_month(year: i32) -> u32 {
    year_info(year) & 0xf
}

/// Length of the leap month, 0 if none.
pub(crate) fn leap_month_days(year: i32) -> i64 {
    if leap_month(year) == 0 {
        0
    } else if year_info(year) & 0x10000 != 0 {
        30
    } else {
        29
    }
}

/// Length of ordinary month `month` (1..=12).
pub(crate) fn month_days(year: i32, month: u32) -> i64 {
    if year_info(year) & (0x10000 >> month) != 0 { 30 } else { 29 }
}

/// Total days in a lunar year, leap month included.
pub(crate) fn lunar_year_days(year: i32) -> i64 {
    (1..=12).map(|m| month_days(year, m)).sum::<i64>() + leap_month_days(year)
}

fn day_name(day: u32) -> String {
    match day {
        1..=10 => format!("初{}", if day == 10 { "十" } else { DIGITS[day as usize] }),
        11..=19 => format!("十{}", DIGITS[(day - 10) as usize]),
        20 => "二十".to_string(),
        21..=29 => format!("廿{}", DIGITS[(day - 20) as usize]),
        _ => "三十".to_string(),
    }
}

/// Render a lunar date as cyclic year, month and day names.
pub(crate) fn display_lunar(year: i32, month: u32, day: u32, is_leap: bool) -> String {
    format!(
        "{}年{}{}月{}",
        calendar_year_pillar(year),
        if is_leap { "闰" } else { "" },
        MONTH_NAMES[(month - 1) as usize],
        day_name(day)
    )
}

impl LunarCalendar for TableLunarCalendar {
    fn solar_to_lunar(&self, year: i32, month: u32, day: u32) -> Result<LunarDate, LunarError> {
        let out_of_range = LunarError::OutOfRange { year, month, day };
        if !(FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR + 1).contains(&year)
            || !(1..=12).contains(&month)
            || !(1..=days_in_month(year, month)).contains(&day)
        {
            return Err(out_of_range);
        }
        let mut offset = days_since_epoch(year, month, day) - LUNAR_EPOCH_OFFSET;
        if offset < 0 {
            return Err(out_of_range);
        }

        let mut lunar_year = FIRST_LUNAR_YEAR;
        loop {
            if lunar_year > LAST_LUNAR_YEAR {
                return Err(out_of_range);
            }
            let len = lunar_year_days(lunar_year);
            if offset < len {
                break;
            }
            offset -= len;
            lunar_year += 1;
        }

        let leap = leap_month(lunar_year);
        let mut lunar_month = 1;
        let mut is_leap = false;
        loop {
            let len = if is_leap {
                leap_month_days(lunar_year)
            } else {
                month_days(lunar_year, lunar_month)
            };
            if offset < len {
                break;
            }
            offset -= len;
            if !is_leap && leap == lunar_month {
                is_leap = true;
            } else {
                is_leap = false;
                lunar_month += 1;
            }
        }

        let lunar_day = offset as u32 + 1;
        Ok(LunarDate {
            year: lunar_year,
            month: lunar_month,
            day: lunar_day,
            is_leap,
            display: display_lunar(lunar_year, lunar_month, lunar_day, is_leap),
        })
    }
}
