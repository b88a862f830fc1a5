//! Earthly branches (地支) and their two-hour windows.
//!
//! Branch k covers local clock time [2k-1, 2k+1) hours; 子 wraps across
//! midnight (23:00-00:59).

use serde::Serialize;

/// The 12 earthly branches starting from Zi (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cyclic order (0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Chinese character of the branch.
    pub const fn symbol(self) -> char {
        match self {
            Self::Zi => '子',
            Self::Chou => '丑',
            Self::Yin => '寅',
            Self::Mao => '卯',
            Self::Chen => '辰',
            Self::Si => '巳',
            Self::Wu => '午',
            Self::Wei => '未',
            Self::Shen => '申',
            Self::You => '酉',
            Self::Xu => '戌',
            Self::Hai => '亥',
        }
    }

    /// Pinyin name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// 0-based ordinal (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch for an ordinal, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Branch for its Chinese character.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        ALL_BRANCHES.iter().copied().find(|b| b.symbol() == symbol)
    }

    /// Clock window `(start_hour, end_hour)` covered by this branch.
    ///
    /// The end is exclusive. For 子 the window is `(23, 1)`.
    pub const fn hour_window(self) -> (u8, u8) {
        let k = self.index();
        let start = (2 * k + 23) % 24;
        (start, 2 * k + 1)
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
