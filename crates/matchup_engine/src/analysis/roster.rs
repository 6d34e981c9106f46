//! Ranking a roster against one opponent.

use tracing::debug;

use crate::damage::best_multiplier;
use crate::entities::Combatant;
use crate::state::Weather;
use crate::types::{Type, TypeChart};

use super::config::ScoringConfig;
use super::matchup::{analyze, AnalysisResult};

/// A roster member with its verdict.
#[derive(Clone, Debug)]
pub struct RankedMatchup<'a> {
    /// Position in the roster as given
    pub index: usize,
    pub combatant: &'a Combatant,
    pub result: AnalysisResult,
}

/// Analyze every conscious member and sort best first.
///
/// The sort is stable: equal scores keep roster order.
pub fn rank<'a>(
    chart: &TypeChart,
    config: &ScoringConfig,
    roster: &'a [Combatant],
    opponent: &Combatant,
    weather: Weather,
) -> Vec<RankedMatchup<'a>> {
    let mut ranked: Vec<RankedMatchup<'a>> = roster
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_fainted())
        .map(|(index, combatant)| RankedMatchup {
            index,
            combatant,
            result: analyze(chart, config, combatant, opponent, weather),
        })
        .collect();

    ranked.sort_by(|a, b| b.result.score.total_cmp(&a.result.score));

    debug!(
        opponent = opponent.display_name(),
        considered = ranked.len(),
        skipped = roster.len() - ranked.len(),
        top = ranked.first().map(|r| r.result.name.as_str()).unwrap_or("none"),
        "roster ranked"
    );
    ranked
}

/// A roster member picked by type matchups alone.
#[derive(Clone, Debug)]
pub struct TypeStandout<'a> {
    pub index: usize,
    pub combatant: &'a Combatant,
    /// Worst multiplier taken (tank) or best multiplier dealt (threat)
    pub multiplier: f64,
}

/// Attacking types the opponent is assumed to use: its known damaging
/// move types, or its own types when it has none.
fn opponent_attack_types(opponent: &Combatant) -> Vec<Type> {
    let attacking: Vec<Type> = opponent
        .known_moves()
        .filter(|m| !m.is_status())
        .map(|m| m.type_)
        .collect();
    if attacking.is_empty() {
        opponent.types().to_vec()
    } else {
        attacking
    }
}

/// Member taking the smallest worst-case multiplier. First wins ties.
pub fn best_tank<'a>(
    chart: &TypeChart,
    roster: &'a [Combatant],
    opponent: &Combatant,
) -> Option<TypeStandout<'a>> {
    let attacking = opponent_attack_types(opponent);
    let mut best: Option<TypeStandout<'a>> = None;
    for (index, combatant) in roster.iter().enumerate().filter(|(_, c)| !c.is_fainted()) {
        let taken = best_multiplier(chart, &attacking, combatant.types());
        if best.as_ref().map_or(true, |b| taken < b.multiplier) {
            best = Some(TypeStandout {
                index,
                combatant,
                multiplier: taken,
            });
        }
    }
    best
}

/// Member dealing the largest multiplier with its own types.
///
/// A roster whose best is 0x has no threat.
pub fn best_threat<'a>(
    chart: &TypeChart,
    roster: &'a [Combatant],
    opponent: &Combatant,
) -> Option<TypeStandout<'a>> {
    let mut best: Option<TypeStandout<'a>> = None;
    let mut best_given = 0.0;
    for (index, combatant) in roster.iter().enumerate().filter(|(_, c)| !c.is_fainted()) {
        let given = best_multiplier(chart, combatant.types(), opponent.types());
        if given > best_given {
            best_given = given;
            best = Some(TypeStandout {
                index,
                combatant,
                multiplier: given,
            });
        }
    }
    best
}

/// Attacking types that hit at least one member super effectively, with
/// the number of members weak to each. Most shared weakness first, then
/// type order.
pub fn team_weaknesses(chart: &TypeChart, roster: &[Combatant]) -> Vec<(Type, usize)> {
    let mut weaknesses: Vec<(Type, usize)> = Type::ALL
        .iter()
        .map(|&attacking| {
            let count = roster
                .iter()
                .filter(|c| !c.types().is_empty())
                .filter(|c| chart.multiplier(attacking, c.types()) > 1.0)
                .count();
            (attacking, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();
    weaknesses.sort_by(|a, b| b.1.cmp(&a.1));
    weaknesses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveData;
    use crate::stats::Stats;
    use crate::entities::CombatantConfig;

    fn mon(name: &str, types: &[Type]) -> Combatant {
        CombatantConfig::new(name, types, Stats::new(80, 80, 80, 80, 80, 80))
            .build()
            .unwrap()
    }

    #[test]
    fn test_rank_skips_fainted_and_is_stable() {
        let chart = TypeChart::gen5();
        let config = ScoringConfig::default();
        let mut fainted = mon("fainted", &[Type::Water]);
        fainted.set_hp(0);
        let roster = vec![mon("first", &[Type::Normal]), fainted, mon("second", &[Type::Normal])];
        let opponent = mon("opp", &[Type::Normal]);

        let ranked = rank(&chart, &config, &roster, &opponent, Weather::None);
        assert_eq!(ranked.len(), 2);
        // Identical members keep roster order
        assert_eq!(ranked[0].index, 0);
        assert_eq!(ranked[1].index, 2);
        assert_eq!(ranked[0].result.score, ranked[1].result.score);
    }

    #[test]
    fn test_best_tank_uses_known_moves() {
        let chart = TypeChart::gen5();
        let roster = vec![
            mon("grass", &[Type::Grass]),
            mon("ground", &[Type::Ground]),
            mon("water", &[Type::Water]),
        ];
        let opponent = CombatantConfig::new("pika", &[Type::Electric], Stats::default())
            .with_move(MoveData::special("thunderbolt", Type::Electric, 90))
            .build()
            .unwrap();

        let tank = best_tank(&chart, &roster, &opponent).unwrap();
        assert_eq!(tank.index, 1);
        assert_eq!(tank.multiplier, 0.0);
    }

    #[test]
    fn test_best_tank_falls_back_to_types() {
        let chart = TypeChart::gen5();
        let roster = vec![mon("fire", &[Type::Fire]), mon("dragon", &[Type::Dragon])];
        let opponent = mon("opp", &[Type::Water]);

        let tank = best_tank(&chart, &roster, &opponent).unwrap();
        assert_eq!(tank.combatant.species(), "dragon");
        assert_eq!(tank.multiplier, 0.5);
    }

    #[test]
    fn test_best_threat() {
        let chart = TypeChart::gen5();
        let roster = vec![
            mon("normal", &[Type::Normal]),
            mon("ice", &[Type::Ice, Type::Water]),
            mon("rock", &[Type::Rock]),
        ];
        let opponent = mon("opp", &[Type::Grass, Type::Flying]);

        let threat = best_threat(&chart, &roster, &opponent).unwrap();
        assert_eq!(threat.index, 1);
        assert_eq!(threat.multiplier, 4.0);

        let ghost = mon("gengar", &[Type::Ghost]);
        assert!(best_threat(&chart, &[mon("normal", &[Type::Normal])], &ghost).is_none());
    }

    #[test]
    fn test_team_weaknesses() {
        let chart = TypeChart::gen5();
        let roster = vec![
            mon("a", &[Type::Fire]),
            mon("b", &[Type::Fire, Type::Flying]),
            mon("c", &[Type::Grass]),
        ];
        let weaknesses = team_weaknesses(&chart, &roster);

        // Rock hits both fire members (4x on fire/flying)
        assert_eq!(weaknesses[0], (Type::Rock, 2));
        assert!(weaknesses.contains(&(Type::Water, 2)));
        assert!(weaknesses.contains(&(Type::Ice, 1)));
        assert!(weaknesses.contains(&(Type::Ground, 1)));
        let counts: Vec<usize> = weaknesses.iter().map(|w| w.1).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }
}
