//! Static stem-derivation tables for the month and hour pillars.
//!
//! Rows are indexed by `Stem::index()`; columns by month slot (寅 first) or
//! hour branch (子 first). Rows for stems five apart are identical.

use crate::stem::Stem::{self, Bing, Ding, Geng, Gui, Ji, Jia, Ren, Wu, Xin, Yi};

/// Five-tiger rule (五虎遁): year stem x month slot -> month stem.
///
/// 甲己之年丙作首，乙庚之岁戊为头，丙辛必定寻庚起，丁壬壬位顺行流，
/// 戊癸何方发，甲寅之上好追求。
pub const FIVE_TIGER: [[Stem; 12]; 10] = [
    [Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding], // 甲
    [Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji],     // 乙
    [Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin],  // 丙
    [Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui],   // 丁
    [Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi],    // 戊
    [Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding], // 己
    [Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji],     // 庚
    [Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin],  // 辛
    [Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui],   // 壬
    [Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi],    // 癸
];

/// Five-rat rule (五鼠遁): day stem x hour branch -> hour stem.
///
/// 甲己还加甲，乙庚丙作初，丙辛从戊起，丁壬庚子居，戊癸何方发，壬子是真途。
pub const FIVE_RAT: [[Stem; 12]; 10] = [
    [Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi],    // 甲
    [Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding], // 乙
    [Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji],     // 丙
    [Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin],  // 丁
    [Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui],   // 戊
    [Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi],    // 己
    [Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding], // 庚
    [Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji],     // 辛
    [Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin],  // 壬
    [Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui],   // 癸
];

/// Month stem for a year stem and month slot (0 = 寅 .. 11 = 丑).
pub const fn five_tiger(year_stem: Stem, slot: u8) -> Stem {
    FIVE_TIGER[year_stem.index() as usize][(slot % 12) as usize]
}

/// Hour stem for a day stem and hour branch ordinal (0 = 子 .. 11 = 亥).
pub const fn five_rat(day_stem: Stem, branch_index: u8) -> Stem {
    FIVE_RAT[day_stem.index() as usize][(branch_index % 12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn tiger_rows_are_walks() {
        for s in ALL_STEMS {
            let head = FIVE_TIGER[s.index() as usize][0];
            // 寅 month stem = (2 * (year stem mod 5) + 2) mod 10
            assert_eq!(head.index(), (2 * (s.index() % 5) + 2) % 10);
            for slot in 0..12u8 {
                assert_eq!(five_tiger(s, slot), head.offset(slot));
            }
        }
    }

    #[test]
    fn rat_rows_are_walks() {
        for s in ALL_STEMS {
            let head = FIVE_RAT[s.index() as usize][0];
            // 子 hour stem = (2 * (day stem mod 5)) mod 10
            assert_eq!(head.index(), (2 * (s.index() % 5)) % 10);
            for b in 0..12u8 {
                assert_eq!(five_rat(s, b), head.offset(b));
            }
        }
    }

    #[test]
    fn rhyme_heads() {
        assert_eq!(five_tiger(Jia, 0), Bing);
        assert_eq!(five_tiger(Yi, 0), Wu);
        assert_eq!(five_tiger(Gui, 0), Jia);
        assert_eq!(five_rat(Jia, 0), Jia);
        assert_eq!(five_rat(Ding, 0), Geng);
        assert_eq!(five_rat(Wu, 0), Ren);
    }

    #[test]
    fn rows_repeat_every_five_stems() {
        for i in 0..5 {
            assert_eq!(FIVE_TIGER[i], FIVE_TIGER[i + 5]);
            assert_eq!(FIVE_RAT[i], FIVE_RAT[i + 5]);
        }
    }
}
