//! Property tests over the whole supported date range.

use ganzhi_base::{
    BirthTime, CivilDate, Gender, LuckDirection, LuckPeriod, SexagenaryIndex, calendar_year_pillar,
    compute_bazi_chart, day_pillar, days_in_month, four_pillars, hour_branch, index_of,
    luck_sequence, month_slot, pillar_at, year_pillar,
};
use proptest::prelude::*;

fn civil_date() -> impl Strategy<Value = CivilDate> {
    (1900i32..=2100, 1u32..=12, 1u32..=31).prop_map(|(y, m, d)| {
        CivilDate::new(y, m, d.min(days_in_month(y, m))).unwrap()
    })
}

fn birth_time() -> impl Strategy<Value = BirthTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| BirthTime::new(h, m).unwrap())
}

fn direction() -> impl Strategy<Value = LuckDirection> {
    prop_oneof![Just(LuckDirection::Forward), Just(LuckDirection::Backward)]
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

proptest! {
    #[test]
    fn index_roundtrip(i in 0u8..60) {
        let idx = SexagenaryIndex::new(i).unwrap();
        prop_assert_eq!(index_of(pillar_at(idx)), idx);
    }

    #[test]
    fn all_pillars_share_parity(date in civil_date(), time in birth_time()) {
        for p in four_pillars(&date, &time).pillars() {
            prop_assert_eq!(p.stem().index() % 2, p.branch().index() % 2);
        }
    }

    #[test]
    fn consecutive_days_step_the_cycle(date in civil_date()) {
        let today = day_pillar(&date).index();
        let back = CivilDate::new(date.year(), date.month(), 1).unwrap();
        let offset = i64::from(date.day()) - 1;
        prop_assert_eq!(day_pillar(&back).index().shift(offset), today);
    }

    #[test]
    fn month_slot_ignores_year(
        y1 in 1901i32..=2099,
        y2 in 1901i32..=2099,
        m in 1u32..=12,
        d in 1u32..=28
    ) {
        let a = CivilDate::new(y1, m, d).unwrap();
        let b = CivilDate::new(y2, m, d).unwrap();
        prop_assert_eq!(month_slot(&a), month_slot(&b));
    }

    #[test]
    fn year_pillar_changes_only_at_lichun(date in civil_date()) {
        let expected_year = if date.is_before(2, 4) { date.year() - 1 } else { date.year() };
        prop_assert_eq!(year_pillar(&date), calendar_year_pillar(expected_year));
    }

    #[test]
    fn hour_branch_matches_two_hour_window(time in birth_time()) {
        let (open, close) = hour_branch(&time).hour_window();
        let h = time.hour();
        let inside = if open > close { h >= u32::from(open) || h < u32::from(close) }
            else { h >= u32::from(open) && h < u32::from(close) };
        prop_assert!(inside, "{time} outside {open}..{close}");
    }

    #[test]
    fn luck_steps_walk_the_cycle(i in 0u8..60, dir in direction(), start in 0u32..=10) {
        let first = SexagenaryIndex::new(i).unwrap();
        let seq = luck_sequence(first, dir, start);
        for (k, step) in seq.iter().enumerate() {
            let want = (i64::from(i) + dir.step() * k as i64).rem_euclid(60) as u8;
            prop_assert_eq!(step.pillar.index().get(), want);
        }
    }

    #[test]
    fn pre_cycle_ages_get_no_pillar(date in civil_date(), time in birth_time(), g in gender()) {
        prop_assume!(date >= CivilDate::new(1900, 1, 31).unwrap());
        let r = compute_bazi_chart(
            date.year(),
            date.month(),
            date.day(),
            time.hour(),
            time.minute(),
            g,
        )
        .unwrap();
        for age in 0..r.start_age() {
            prop_assert_eq!(r.luck.period_at_age(age), LuckPeriod::PreCycle);
        }
        prop_assert!(r.luck.period_at_age(r.start_age()).pillar().is_some());
    }
}
