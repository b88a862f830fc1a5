//! Heavenly stems (天干) and their Yang/Yin polarity.
//!
//! The 10 stems cycle in fixed order starting from 甲. Even ordinals are
//! Yang, odd ordinals are Yin.

use serde::Serialize;

/// Yang/Yin polarity of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Chinese symbol (阳/阴).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }
}

/// The 10 heavenly stems starting from Jia (甲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cyclic order (0 = 甲, 9 = 癸).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Chinese character of the stem.
    pub const fn symbol(self) -> char {
        match self {
            Self::Jia => '甲',
            Self::Yi => '乙',
            Self::Bing => '丙',
            Self::Ding => '丁',
            Self::Wu => '戊',
            Self::Ji => '己',
            Self::Geng => '庚',
            Self::Xin => '辛',
            Self::Ren => '壬',
            Self::Gui => '癸',
        }
    }

    /// Pinyin name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// 0-based ordinal (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem for an ordinal, wrapping modulo 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Stem for its Chinese character.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        ALL_STEMS.iter().copied().find(|s| s.symbol() == symbol)
    }

    /// Yang for 甲丙戊庚壬, Yin for 乙丁己辛癸.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// The stem `steps` positions later in the cycle.
    pub const fn offset(self, steps: u8) -> Self {
        Self::from_index(self.index() + steps % 10)
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), *s);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Stem::from_index(10), Stem::Jia);
        assert_eq!(Stem::from_index(17), Stem::Xin);
    }

    #[test]
    fn yang_stems() {
        let yang: Vec<char> = ALL_STEMS
            .iter()
            .filter(|s| s.polarity() == Polarity::Yang)
            .map(|s| s.symbol())
            .collect();
        assert_eq!(yang, vec!['甲', '丙', '戊', '庚', '壬']);
    }

    #[test]
    fn symbol_roundtrip() {
        for s in ALL_STEMS {
            assert_eq!(Stem::from_symbol(s.symbol()), Some(s));
        }
        assert_eq!(Stem::from_symbol('子'), None);
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Stem::Ren.offset(3), Stem::Yi);
        assert_eq!(Stem::Bing.offset(0), Stem::Bing);
    }
}
