//! Packed lunar year data for lunar years 1900-2100.
//!
//! Each entry packs one lunar year:
//! - bits 0-3: leap month number (0 = no leap month)
//! - bits 4-15: month lengths for months 12..1 (bit 15 = month 1); 1 = 30 days
//! - bit 16: leap month length (1 = 30 days, 0 = 29 days)

/// First tabulated lunar year.
pub const FIRST_LUNAR_YEAR: i32 = 1900;

/// Last tabulated lunar year.
pub const LAST_LUNAR_YEAR: i32 = 2100;

/// Days from Gregorian 1900-01-01 to lunar 1900-01-01 (Gregorian 1900-01-31).
pub const LUNAR_EPOCH_OFFSET: i64 = 30;

#[rustfmt::skip]
pub const LUNAR_YEAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, // 1900
    0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1905
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, // 1910
    0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1915
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, // 1920
    0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1925
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, // 1930
    0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1935
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, // 1940
    0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1945
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, // 1950
    0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1955
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, // 1960
    0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1965
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, // 1970
    0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1975
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, // 1980
    0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1985
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, // 1990
    0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1995
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, // 2000
    0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2005
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, // 2010
    0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2015
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, // 2020
    0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2025
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, // 2030
    0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2035
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, // 2040
    0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2045
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, // 2050
    0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2055
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, // 2060
    0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2065
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, // 2070
    0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2075
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, // 2080
    0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2085
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, // 2090
    0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2095
    0x0d520, // 2100
];
