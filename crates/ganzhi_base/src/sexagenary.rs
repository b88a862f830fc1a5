//! The sexagenary cycle (六十甲子): 60 stem/branch pairs in fixed order.
//!
//! Position `i` pairs stem `i mod 10` with branch `i mod 12`, starting from
//! 甲子 at index 0. Only pairs whose stem and branch ordinals share parity
//! occur in the cycle.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::error::GanzhiError;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// Position in the 60-cycle, always in `0..60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SexagenaryIndex(u8);

impl SexagenaryIndex {
    /// Index from a raw value, `None` unless `value < 60`.
    pub const fn new(value: u8) -> Option<Self> {
        if value < CYCLE_LEN {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Index from any integer, reduced modulo 60 (negative values wrap).
    pub const fn wrapping(value: i64) -> Self {
        Self(value.rem_euclid(CYCLE_LEN as i64) as u8)
    }

    /// Raw value in `0..60`.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index `steps` positions away, wrapping in both directions.
    pub const fn shift(self, steps: i64) -> Self {
        Self::wrapping(self.0 as i64 + steps)
    }

    /// Stem at this position (`index mod 10`).
    pub const fn stem(self) -> Stem {
        Stem::from_index(self.0 % 10)
    }

    /// Branch at this position (`index mod 12`).
    pub const fn branch(self) -> Branch {
        Branch::from_index(self.0 % 12)
    }

    /// Pillar at this position.
    pub const fn pillar(self) -> Pillar {
        pillar_at(self)
    }
}

impl std::fmt::Display for SexagenaryIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stem/branch pair (柱) of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Build a pillar from a stem and branch whose ordinals share parity.
    ///
    /// Callers must only pass pairs that occur in the cycle; the month and
    /// hour rules guarantee this by construction.
    pub(crate) const fn from_parts(stem: Stem, branch: Branch) -> Self {
        debug_assert!(stem.index() % 2 == branch.index() % 2);
        Self { stem, branch }
    }

    /// Pillar from a stem and branch, `None` if the pair is not in the cycle.
    pub const fn try_new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// The heavenly stem.
    pub const fn stem(self) -> Stem {
        self.stem
    }

    /// The earthly branch.
    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Position of this pillar in the 60-cycle.
    pub const fn index(self) -> SexagenaryIndex {
        index_of(self)
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

impl FromStr for Pillar {
    type Err = GanzhiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GanzhiError::InvalidPillar(s.to_string()));
        };
        let stem = Stem::from_symbol(sc).ok_or_else(|| GanzhiError::InvalidPillar(s.to_string()))?;
        let branch =
            Branch::from_symbol(bc).ok_or_else(|| GanzhiError::InvalidPillar(s.to_string()))?;
        Self::try_new(stem, branch).ok_or_else(|| GanzhiError::InvalidPillar(s.to_string()))
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

const fn build_cycle() -> [Pillar; 60] {
    let mut out = [Pillar {
        stem: Stem::Jia,
        branch: Branch::Zi,
    }; 60];
    let mut i = 0;
    while i < 60 {
        out[i] = Pillar {
            stem: Stem::from_index((i % 10) as u8),
            branch: Branch::from_index((i % 12) as u8),
        };
        i += 1;
    }
    out
}

/// All 60 pillars in cycle order (index 0 = 甲子, 59 = 癸亥).
pub const SIXTY_PILLARS: [Pillar; 60] = build_cycle();

/// Pillar at a cycle position.
pub const fn pillar_at(index: SexagenaryIndex) -> Pillar {
    SIXTY_PILLARS[index.0 as usize]
}

/// Cycle position of a pillar.
///
/// Solves `i ≡ stem (mod 10)`, `i ≡ branch (mod 12)`; the solution is
/// `6·stem − 5·branch (mod 60)` for same-parity pairs.
pub const fn index_of(pillar: Pillar) -> SexagenaryIndex {
    let s = pillar.stem.index() as i64;
    let b = pillar.branch.index() as i64;
    SexagenaryIndex::wrapping(6 * s - 5 * b)
}

/// Cycle position of a pillar given as a two-symbol string such as `"庚子"`.
pub fn index_of_str(s: &str) -> Result<SexagenaryIndex, GanzhiError> {
    Ok(index_of(s.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_endpoints() {
        assert_eq!(SIXTY_PILLARS[0].to_string(), "甲子");
        assert_eq!(SIXTY_PILLARS[59].to_string(), "癸亥");
        assert_eq!(SIXTY_PILLARS[36].to_string(), "庚子");
        assert_eq!(SIXTY_PILLARS[10].to_string(), "甲戌");
    }

    #[test]
    fn index_roundtrip_all() {
        for i in 0..60u8 {
            let idx = SexagenaryIndex::new(i).unwrap();
            assert_eq!(index_of(pillar_at(idx)), idx);
        }
    }

    #[test]
    fn new_rejects_60() {
        assert!(SexagenaryIndex::new(59).is_some());
        assert!(SexagenaryIndex::new(60).is_none());
    }

    #[test]
    fn wrapping_negative() {
        assert_eq!(SexagenaryIndex::wrapping(-1).get(), 59);
        assert_eq!(SexagenaryIndex::wrapping(121).get(), 1);
    }

    #[test]
    fn shift_both_ways() {
        let i = SexagenaryIndex::new(0).unwrap();
        assert_eq!(i.shift(-1).get(), 59);
        assert_eq!(i.shift(61).get(), 1);
    }

    #[test]
    fn parse_valid() {
        let p: Pillar = "庚辰".parse().unwrap();
        assert_eq!(p.stem(), Stem::Geng);
        assert_eq!(p.branch(), Branch::Chen);
        assert_eq!(p.index().get(), 16);
        assert_eq!(index_of_str("癸亥").unwrap().get(), 59);
    }

    #[test]
    fn parse_rejects_mismatched_parity() {
        assert!(matches!(
            "甲丑".parse::<Pillar>(),
            Err(GanzhiError::InvalidPillar(_))
        ));
    }

    #[test]
    fn parse_rejects_bad_length() {
        assert!("甲".parse::<Pillar>().is_err());
        assert!("甲子丑".parse::<Pillar>().is_err());
        assert!("".parse::<Pillar>().is_err());
        assert!("ab".parse::<Pillar>().is_err());
    }

    #[test]
    fn try_new_checks_parity() {
        assert!(Pillar::try_new(Stem::Yi, Branch::Chou).is_some());
        assert!(Pillar::try_new(Stem::Yi, Branch::Zi).is_none());
    }

    #[test]
    fn serializes_as_symbols() {
        let p = pillar_at(SexagenaryIndex::new(36).unwrap());
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"庚子\"");
    }
}
