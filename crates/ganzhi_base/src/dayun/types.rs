//! Core types for luck-cycle (大运) calculations.

use serde::Serialize;

use crate::sexagenary::Pillar;
use crate::solar_term::DatedTerm;

/// Number of luck pillars in a cycle.
pub const LUCK_STEPS: usize = 10;

/// Years of age covered by one luck pillar.
pub const YEARS_PER_STEP: u32 = 10;

/// Days of distance to the nearest solar term that count as one year of age.
pub const DAYS_PER_YEAR_OF_AGE: u32 = 3;

/// Label for ages before the first luck pillar (童限).
pub const PRE_CYCLE_LABEL: &str = "童限";

/// Direction the luck cycle walks the 60-cycle from the month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LuckDirection {
    /// +1 per step (顺行).
    Forward,
    /// -1 per step (逆行).
    Backward,
}

impl LuckDirection {
    /// Signed step through the 60-cycle.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// Chinese name (顺行/逆行).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Forward => "顺行",
            Self::Backward => "逆行",
        }
    }
}

impl std::fmt::Display for LuckDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => f.write_str("Forward"),
            Self::Backward => f.write_str("Backward"),
        }
    }
}

/// Start age of the luck cycle and the solar term it was measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StartAge {
    /// Virtual age at which the first luck pillar begins.
    pub age: u32,
    /// Whole days between the birth date and `boundary`.
    pub days: u32,
    /// Nearest jie boundary to the birth date.
    pub boundary: DatedTerm,
}

/// One decade-long luck pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckStep {
    /// 1-based position in the cycle (1..=10).
    pub step: u8,
    /// First age covered, inclusive.
    pub age_start: u32,
    /// Last age covered, inclusive.
    pub age_end: u32,
    /// Pillar ruling this decade.
    pub pillar: Pillar,
}

impl LuckStep {
    /// Whether `age` falls inside this decade.
    pub const fn contains(&self, age: u32) -> bool {
        age >= self.age_start && age <= self.age_end
    }
}

/// Luck period in force at a given age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LuckPeriod {
    /// Before the start age; no pillar is assigned.
    PreCycle,
    /// Inside one of the ten luck pillars.
    Step(LuckStep),
    /// Past the last luck pillar.
    AfterCycle,
}

impl LuckPeriod {
    /// Pillar of this period, if any.
    pub const fn pillar(&self) -> Option<Pillar> {
        match self {
            Self::Step(s) => Some(s.pillar),
            _ => None,
        }
    }
}

impl std::fmt::Display for LuckPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PreCycle => f.write_str(PRE_CYCLE_LABEL),
            Self::Step(s) => write!(f, "{}", s.pillar),
            Self::AfterCycle => f.write_str("-"),
        }
    }
}

/// A complete luck cycle: start age, direction and ten luck pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckCycle {
    /// Start age and the boundary it came from.
    pub start: StartAge,
    /// Walking direction.
    pub direction: LuckDirection,
    /// The ten luck pillars in order.
    pub steps: [LuckStep; LUCK_STEPS],
}

impl LuckCycle {
    /// Virtual age at which the first luck pillar begins.
    pub const fn start_age(&self) -> u32 {
        self.start.age
    }

    /// First luck pillar.
    pub const fn first_pillar(&self) -> Pillar {
        self.steps[0].pillar
    }

    /// Luck period in force at `age`.
    pub fn period_at_age(&self, age: u32) -> LuckPeriod {
        if age < self.start.age {
            return LuckPeriod::PreCycle;
        }
        self.steps
            .iter()
            .find(|s| s.contains(age))
            .map_or(LuckPeriod::AfterCycle, |s| LuckPeriod::Step(*s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_steps() {
        assert_eq!(LuckDirection::Forward.step(), 1);
        assert_eq!(LuckDirection::Backward.step(), -1);
    }

    #[test]
    fn pre_cycle_label() {
        assert_eq!(LuckPeriod::PreCycle.to_string(), "童限");
        assert_eq!(LuckPeriod::PreCycle.pillar(), None);
    }
}
