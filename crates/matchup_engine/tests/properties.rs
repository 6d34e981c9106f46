//! Property tests for the invariants every verdict must respect.

use matchup_engine::analysis::{analyze, rank};
use matchup_engine::{
    estimate, project_stat, stage_multiplier, Combatant, CombatantConfig, MoveCategory, MoveData,
    SafetyRating, ScoringConfig, Stats, Type, TypeChart, Weather,
};
use proptest::prelude::*;

fn any_type() -> impl Strategy<Value = Type> {
    prop::sample::select(Type::ALL.to_vec())
}

fn any_weather() -> impl Strategy<Value = Weather> {
    prop::sample::select(vec![Weather::None, Weather::Sun, Weather::Rain, Weather::Sand, Weather::Hail])
}

fn any_move() -> impl Strategy<Value = MoveData> {
    (any_type(), 10u16..=150, prop::bool::ANY).prop_map(|(type_, power, physical)| {
        let category = if physical { MoveCategory::Physical } else { MoveCategory::Special };
        MoveData::new(format!("{}-attack", type_), type_, Some(power), category)
    })
}

fn any_combatant() -> impl Strategy<Value = Combatant> {
    (
        prop::collection::vec(any_type(), 1..=2),
        prop::array::uniform6(1u16..=255),
        1u8..=100,
        prop::collection::vec(any_move(), 0..=4),
        10.0f64..=100.0,
    )
        .prop_map(|(types, [hp, atk, def, spa, spd, spe], level, moves, hp_percent)| {
            CombatantConfig::new("prop", &types, Stats::new(hp, atk, def, spa, spd, spe))
                .level(level)
                .moves(moves.into_iter().map(Some).collect())
                .hp_percent(hp_percent)
                .build()
                .unwrap()
        })
}

proptest! {
    #[test]
    fn projected_stats_grow_with_base_and_level(base in 1u16..=254, level in 1u8..=99, is_hp in prop::bool::ANY) {
        prop_assert!(project_stat(base + 1, level, is_hp) >= project_stat(base, level, is_hp));
        prop_assert!(project_stat(base, level + 1, is_hp) >= project_stat(base, level, is_hp));
    }

    #[test]
    fn projection_is_deterministic_and_hp_leads(base in 1u16..=255, level in 1u8..=100) {
        prop_assert_eq!(project_stat(base, level, false), project_stat(base, level, false));
        prop_assert!(project_stat(base, level, true) > project_stat(base, level, false));
    }

    #[test]
    fn stage_multiplier_is_monotonic(low in -6i8..=5, step in 1i8..=6) {
        let high = (low + step).min(6);
        prop_assume!(high > low);
        prop_assert!(stage_multiplier(low) < stage_multiplier(high));
    }

    #[test]
    fn stages_saturate(stage in 7i8..=100) {
        prop_assert_eq!(stage_multiplier(stage), stage_multiplier(6));
        prop_assert_eq!(stage_multiplier(-stage), stage_multiplier(-6));
    }

    #[test]
    fn damage_range_is_ordered(
        attacker in any_combatant(),
        defender in any_combatant(),
        move_ in any_move(),
        weather in any_weather(),
    ) {
        let chart = TypeChart::gen5();
        let result = estimate(&chart, &attacker, &defender, &move_, weather).unwrap();
        prop_assert!(result.min <= result.max);
        if result.effectiveness == 0.0 {
            prop_assert_eq!(result.max, 0);
        }
    }

    #[test]
    fn dual_types_compose(attacking in any_type(), first in any_type(), second in any_type()) {
        let chart = TypeChart::gen5();
        let combined = chart.multiplier(attacking, &[first, second]);
        let product = chart.multiplier(attacking, &[first]) * chart.multiplier(attacking, &[second]);
        prop_assert_eq!(combined, product);
    }

    #[test]
    fn status_moves_deal_nothing(
        attacker in any_combatant(),
        defender in any_combatant(),
        type_ in any_type(),
        weather in any_weather(),
    ) {
        let chart = TypeChart::gen5();
        let growl = MoveData::status("status-move", type_, None);
        let result = estimate(&chart, &attacker, &defender, &growl, weather).unwrap();
        prop_assert_eq!((result.min, result.max), (0, 0));
    }

    #[test]
    fn verdict_stays_in_bounds(
        mine in any_combatant(),
        theirs in any_combatant(),
        weather in any_weather(),
    ) {
        let chart = TypeChart::gen5();
        let config = ScoringConfig::default();
        let result = analyze(&chart, &config, &mine, &theirs, weather);

        prop_assert!((0.0..=1.0).contains(&result.damage_fraction));
        prop_assert!(result.turns_to_win >= 1);
        prop_assert!(result.turns_to_die >= 1);
        if result.control_risk {
            prop_assert_eq!(result.rating, SafetyRating::Dead);
        }
        let ceiling = config.safe_base + config.quad_effective_bonus + config.speed_bonus;
        let floor = config.dead_base - config.damage_penalty - config.turn_penalty * config.turn_penalty_cap as f64;
        prop_assert!(result.score <= ceiling && result.score >= floor, "score {}", result.score);
    }

    #[test]
    fn ranking_is_sorted_and_skips_fainted(
        roster in prop::collection::vec(any_combatant(), 0..6),
        opponent in any_combatant(),
    ) {
        let chart = TypeChart::gen5();
        let config = ScoringConfig::default();
        let ranked = rank(&chart, &config, &roster, &opponent, Weather::None);

        prop_assert_eq!(ranked.len(), roster.iter().filter(|c| !c.is_fainted()).count());
        let again = rank(&chart, &config, &roster, &opponent, Weather::None);
        prop_assert_eq!(
            ranked.iter().map(|r| r.index).collect::<Vec<_>>(),
            again.iter().map(|r| r.index).collect::<Vec<_>>()
        );
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].result.score >= pair[1].result.score);
            if pair[0].result.score == pair[1].result.score {
                prop_assert!(pair[0].index < pair[1].index);
            }
        }
    }
}
