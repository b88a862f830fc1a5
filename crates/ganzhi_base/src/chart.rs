//! Full chart computation for one birth instant.
//!
//! Year, month and day pillars come straight from the date; the hour pillar
//! needs the day stem; the luck cycle needs the year stem and month pillar.

use serde::Serialize;

use crate::calendar::{BirthTime, CivilDate};
use crate::dayun::{LuckCycle, LuckDirection, LuckStep, luck_cycle};
use crate::error::Result;
use crate::gender::Gender;
use crate::lunar::{LunarCalendar, LunarDate, TableLunarCalendar, lunar_date};
use crate::pillar::{day_pillar, hour_pillar, month_pillar, year_pillar};
use crate::sexagenary::Pillar;

/// Validated birth instant and gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthInput {
    /// Gregorian birth date.
    pub date: CivilDate,
    /// Local clock time of birth.
    pub time: BirthTime,
    /// Gender of the subject.
    pub gender: Gender,
}

impl BirthInput {
    /// Validate raw fields into a birth input.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        gender: Gender,
    ) -> Result<Self> {
        Ok(Self {
            date: CivilDate::new(year, month, day)?,
            time: BirthTime::new(hour, minute)?,
            gender,
        })
    }
}

/// The four pillars (八字) of a birth instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BaziChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl BaziChart {
    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl std::fmt::Display for BaziChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Compute the four pillars of a birth date and time.
pub fn four_pillars(date: &CivilDate, time: &BirthTime) -> BaziChart {
    let year = year_pillar(date);
    let month = month_pillar(date, year.stem());
    let day = day_pillar(date);
    let hour = hour_pillar(day.stem(), time);
    BaziChart {
        year,
        month,
        day,
        hour,
    }
}

/// Complete chart: four pillars, luck cycle and lunar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartReport {
    /// The input the chart was computed from.
    pub birth: BirthInput,
    /// Year, month, day and hour pillars.
    pub pillars: BaziChart,
    /// Start age, direction and ten luck pillars.
    pub luck: LuckCycle,
    /// First luck pillar, the month pillar's neighbour in the walking direction.
    pub first_luck_pillar: Pillar,
    /// Lunar date of the birth date.
    pub lunar_date: LunarDate,
}

impl ChartReport {
    /// Year pillar (立春-adjusted).
    pub const fn year_pillar(&self) -> Pillar {
        self.pillars.year
    }

    /// Month pillar.
    pub const fn month_pillar(&self) -> Pillar {
        self.pillars.month
    }

    /// Day pillar.
    pub const fn day_pillar(&self) -> Pillar {
        self.pillars.day
    }

    /// Hour pillar.
    pub const fn hour_pillar(&self) -> Pillar {
        self.pillars.hour
    }

    /// Virtual age at which the first luck pillar begins.
    pub const fn start_age(&self) -> u32 {
        self.luck.start_age()
    }

    /// Direction of the luck cycle.
    pub const fn luck_direction(&self) -> LuckDirection {
        self.luck.direction
    }

    /// First luck pillar.
    pub const fn first_luck_pillar(&self) -> Pillar {
        self.first_luck_pillar
    }

    /// The ten luck pillars in order.
    pub const fn luck_sequence(&self) -> &[LuckStep; 10] {
        &self.luck.steps
    }
}

/// Compute a full chart using the given lunar calendar.
pub fn compute_chart<C: LunarCalendar + ?Sized>(
    input: &BirthInput,
    calendar: &C,
) -> Result<ChartReport> {
    let pillars = four_pillars(&input.date, &input.time);
    let luck = luck_cycle(
        pillars.year.stem(),
        pillars.month.index(),
        input.gender,
        &input.date,
    );
    let lunar_date = lunar_date(calendar, &input.date)?;

    tracing::debug!(
        date = %input.date,
        time = %input.time,
        gender = %input.gender,
        pillars = %pillars,
        start_age = luck.start_age(),
        direction = %luck.direction,
        "computed chart"
    );

    Ok(ChartReport {
        birth: *input,
        pillars,
        first_luck_pillar: luck.first_pillar(),
        luck,
        lunar_date,
    })
}

/// Compute a full chart from raw fields with the built-in lunar table.
///
/// Fails with `InvalidDate` for out-of-range fields and with
/// `ExternalConversion` when the date is outside the lunar table.
pub fn compute_bazi_chart(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    gender: Gender,
) -> Result<ChartReport> {
    let input = BirthInput::new(year, month, day, hour, minute, gender)?;
    compute_chart(&input, &TableLunarCalendar)
}
