//! One combatant against one opponent.
//!
//! Both sides are assumed to repeat their single best move every turn.
//! The analyzer prices the opponent's worst move by its max roll and the
//! combatant's best move by its min roll, so the verdict leans
//! pessimistic on both ends.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::damage::{estimate, DamageResult};
use crate::entities::Combatant;
use crate::moves::{MoveCategory, MoveData};
use crate::state::{Status, Weather};
use crate::stats::{BattleStat, BoostStat};
use crate::types::{Type, TypeChart};

use super::config::ScoringConfig;
use super::NEVER;

/// Turn order between the analyzed combatant and the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedResult {
    Faster,
    Slower,
    Tie,
}

impl fmt::Display for SpeedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SpeedResult::Faster => "faster",
            SpeedResult::Slower => "slower",
            SpeedResult::Tie => "tie",
        })
    }
}

/// Coarse verdict of the forward simulation, best first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafetyRating {
    Safe,
    Trade,
    Risky,
    Dead,
}

impl SafetyRating {
    pub const ALL: [SafetyRating; 4] = [
        SafetyRating::Safe,
        SafetyRating::Trade,
        SafetyRating::Risky,
        SafetyRating::Dead,
    ];
}

impl fmt::Display for SafetyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SafetyRating::Safe => "Safe",
            SafetyRating::Trade => "Trade",
            SafetyRating::Risky => "Risky",
            SafetyRating::Dead => "Dead",
        })
    }
}

bitflags! {
    /// Notable facts about a matchup.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MatchupFlags: u16 {
        const OUTSPEEDS             = 1 << 0;
        const CONTROL_RISK          = 1 << 1;
        const IMMUNE_TO_WORST       = 1 << 2;
        const SUPER_EFFECTIVE       = 1 << 3;
        const QUAD_EFFECTIVE        = 1 << 4;
        /// Opponent threat came from its own types, not its moves
        const STAB_FALLBACK_DEFENSE = 1 << 5;
        /// Outgoing damage came from the stand-in move
        const SYNTHETIC_OFFENSE     = 1 << 6;
        const CANNOT_DAMAGE         = 1 << 7;
    }
}

/// How much the worst incoming move hurts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefenseTier {
    /// 4x or worse
    Critical,
    /// 2x
    Danger,
    Neutral,
    Resists,
    Immune,
}

impl DefenseTier {
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier >= 4.0 {
            DefenseTier::Critical
        } else if multiplier >= 2.0 {
            DefenseTier::Danger
        } else if multiplier == 0.0 {
            DefenseTier::Immune
        } else if multiplier < 1.0 {
            DefenseTier::Resists
        } else {
            DefenseTier::Neutral
        }
    }
}

/// How well the best outgoing move lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OffenseTier {
    Devastating,
    Effective,
    Neutral,
}

impl OffenseTier {
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier >= 4.0 {
            OffenseTier::Devastating
        } else if multiplier >= 2.0 {
            OffenseTier::Effective
        } else {
            OffenseTier::Neutral
        }
    }
}

/// A priced move: label, damage range and percentage of the target's max HP.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveEstimate {
    pub label: String,
    pub damage: DamageResult,
    pub percent: f64,
}

/// Verdict for one combatant against one opponent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub name: String,
    pub score: f64,
    pub speed: SpeedResult,
    pub my_speed: u32,
    pub their_speed: u32,
    /// Opponent's hardest-hitting move, by max roll
    pub worst_incoming: Option<MoveEstimate>,
    /// Combatant's best move, by min roll
    pub best_outgoing: Option<MoveEstimate>,
    pub turns_to_win: u32,
    pub turns_to_die: u32,
    pub hits_taken: u32,
    /// Cumulative damage taken before winning, over current HP (capped at 1)
    pub damage_fraction: f64,
    pub rating: SafetyRating,
    pub control_risk: bool,
    pub flags: MatchupFlags,
}

impl AnalysisResult {
    pub fn worst_incoming_pct(&self) -> f64 {
        self.worst_incoming.as_ref().map_or(0.0, |m| m.percent)
    }

    fn worst_incoming_max(&self) -> u32 {
        self.worst_incoming.as_ref().map_or(0, |m| m.damage.max)
    }

    pub fn best_outgoing_pct(&self) -> f64 {
        self.best_outgoing.as_ref().map_or(0.0, |m| m.percent)
    }

    pub fn outspeeds(&self) -> bool {
        self.speed == SpeedResult::Faster
    }

    /// Tier of the worst incoming move (neutral when nothing is known).
    pub fn defense_tier(&self) -> DefenseTier {
        self.worst_incoming
            .as_ref()
            .map_or(DefenseTier::Neutral, |m| DefenseTier::from_multiplier(m.damage.effectiveness))
    }

    pub fn offense_tier(&self) -> OffenseTier {
        self.best_outgoing
            .as_ref()
            .map_or(OffenseTier::Neutral, |m| OffenseTier::from_multiplier(m.damage.effectiveness))
    }
}

fn turns(n: u32, never: bool) -> String {
    if never {
        "never".to_string()
    } else {
        n.to_string()
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (score {:.0}, {}, wins in {}, falls in {})",
            self.name,
            self.rating,
            self.score,
            self.speed,
            turns(self.turns_to_win, self.flags.contains(MatchupFlags::CANNOT_DAMAGE)),
            turns(self.turns_to_die, !self.control_risk && self.worst_incoming_max() == 0),
        )?;
        if self.control_risk {
            f.write_str(" [control risk]")?;
        }
        Ok(())
    }
}

/// Speed after stage, halved when paralyzed, floored.
pub fn effective_speed(combatant: &Combatant) -> u32 {
    let mut speed = combatant.stat(BattleStat::Spe) as f64 * combatant.stages().multiplier(BoostStat::Spe);
    if combatant.status() == Status::Paralysis {
        speed *= 0.5;
    }
    speed.floor() as u32
}

fn compare_speed(mine: u32, theirs: u32) -> SpeedResult {
    match mine.cmp(&theirs) {
        std::cmp::Ordering::Greater => SpeedResult::Faster,
        std::cmp::Ordering::Less => SpeedResult::Slower,
        std::cmp::Ordering::Equal => SpeedResult::Tie,
    }
}

/// Stand-in damaging move of `type_` in the user's stronger attacking category.
fn stand_in_move(label: String, type_: Type, user: &Combatant, power: u16) -> MoveData {
    let category = if user.stat(BattleStat::Atk) >= user.stat(BattleStat::SpA) {
        MoveCategory::Physical
    } else {
        MoveCategory::Special
    };
    MoveData::new(label, type_, Some(power), category)
}

/// Price every damaging move and keep the strongest by `key`.
fn strongest<'m, I, K>(
    chart: &TypeChart,
    attacker: &Combatant,
    defender: &Combatant,
    moves: I,
    weather: Weather,
    key: K,
) -> Option<MoveEstimate>
where
    I: IntoIterator<Item = &'m MoveData>,
    K: Fn(&DamageResult) -> u32,
{
    let mut best: Option<MoveEstimate> = None;
    for data in moves.into_iter().filter(|m| !m.is_status()) {
        let Some(damage) = estimate(chart, attacker, defender, data, weather) else {
            continue;
        };
        if best.as_ref().map_or(true, |b| key(&damage) > key(&b.damage)) {
            best = Some(MoveEstimate {
                label: data.name.clone(),
                damage,
                percent: DamageResult::percent_of(key(&damage), defender.max_hp()),
            });
        }
    }
    best
}

/// First sleep/freeze move accurate enough to count, if the opponent acts first.
fn control_move<'a>(
    opponent: &'a Combatant,
    speed: SpeedResult,
    config: &ScoringConfig,
) -> Option<&'a MoveData> {
    opponent.known_moves().find(|m| {
        let incapacitates = m.is_status() && m.ailment().is_some_and(|a| a.is_incapacitating());
        let acts_first = speed != SpeedResult::Faster || m.priority > 0;
        incapacitates && acts_first && m.accuracy_exceeds(config.control_accuracy_threshold)
    })
}

/// Hits needed to take `hp` off; `NEVER` only when nothing gets through.
fn ceil_turns(hp: u16, damage: u32) -> u32 {
    if damage == 0 {
        NEVER
    } else {
        (hp as u32).div_ceil(damage)
    }
}

/// Analyze `mine` against `theirs` under `weather`.
pub fn analyze(
    chart: &TypeChart,
    config: &ScoringConfig,
    mine: &Combatant,
    theirs: &Combatant,
    weather: Weather,
) -> AnalysisResult {
    let mut flags = MatchupFlags::empty();

    // 1. Speed; ties are not faster
    let my_speed = effective_speed(mine);
    let their_speed = effective_speed(theirs);
    let speed = compare_speed(my_speed, their_speed);
    if speed == SpeedResult::Faster {
        flags |= MatchupFlags::OUTSPEEDS;
    }

    // 2. Incoming; types stand in only for an unknown moveset
    let mut worst_incoming = strongest(chart, theirs, mine, theirs.known_moves(), weather, |d| d.max);
    if !theirs.has_known_moves() {
        let stab_moves: Vec<MoveData> = theirs
            .types()
            .iter()
            .map(|&t| stand_in_move(format!("{} (STAB)", t), t, theirs, config.unknown_move_power))
            .collect();
        worst_incoming = strongest(chart, theirs, mine, &stab_moves, weather, |d| d.max);
        if worst_incoming.is_some() {
            flags |= MatchupFlags::STAB_FALLBACK_DEFENSE;
        }
    }
    let control = control_move(theirs, speed, config);
    if let Some(m) = control {
        trace!(opponent = theirs.display_name(), move_name = %m.name, "control risk");
        flags |= MatchupFlags::CONTROL_RISK;
    }
    if worst_incoming.as_ref().is_some_and(|m| m.damage.effectiveness == 0.0) {
        flags |= MatchupFlags::IMMUNE_TO_WORST;
    }

    // 3. Outgoing
    let mut best_outgoing = strongest(chart, mine, theirs, mine.known_moves(), weather, |d| d.min);
    if !mine.has_known_moves() {
        let type_ = mine.primary_type().unwrap_or(Type::Normal);
        let synthetic = stand_in_move(format!("{} move", type_), type_, mine, config.unknown_move_power);
        best_outgoing = strongest(chart, mine, theirs, [&synthetic], weather, |d| d.min);
        flags |= MatchupFlags::SYNTHETIC_OFFENSE;
    }
    if let Some(best) = &best_outgoing {
        if best.damage.effectiveness >= 4.0 {
            flags |= MatchupFlags::QUAD_EFFECTIVE | MatchupFlags::SUPER_EFFECTIVE;
        } else if best.damage.effectiveness >= 2.0 {
            flags |= MatchupFlags::SUPER_EFFECTIVE;
        }
    }

    // 4. Turn counts
    let incoming = worst_incoming.as_ref().map_or(0, |m| m.damage.max);
    let outgoing = best_outgoing.as_ref().map_or(0, |m| m.damage.min);
    if outgoing == 0 {
        flags |= MatchupFlags::CANNOT_DAMAGE;
    }
    let control_risk = control.is_some();
    let turns_to_die = if control_risk {
        1
    } else {
        ceil_turns(mine.current_hp(), incoming)
    };
    let turns_to_win = ceil_turns(theirs.current_hp(), outgoing);

    // 5. Forward simulation
    let hits_taken = if speed == SpeedResult::Faster {
        turns_to_win.saturating_sub(1)
    } else {
        turns_to_win
    };
    let (rating, damage_fraction) = classify(
        config,
        control_risk,
        outgoing,
        turns_to_die,
        hits_taken,
        incoming,
        mine.current_hp(),
    );

    let best_multiplier = best_outgoing.as_ref().map_or(1.0, |m| m.damage.effectiveness);
    let score = score(config, rating, damage_fraction, best_multiplier, speed, turns_to_win);

    let result = AnalysisResult {
        name: mine.display_name().to_string(),
        score,
        speed,
        my_speed,
        their_speed,
        worst_incoming,
        best_outgoing,
        turns_to_win,
        turns_to_die,
        hits_taken,
        damage_fraction,
        rating,
        control_risk,
        flags,
    };
    debug!(
        combatant = %result.name,
        opponent = theirs.display_name(),
        rating = %result.rating,
        score = result.score,
        turns_to_win = result.turns_to_win,
        turns_to_die = result.turns_to_die,
        "matchup analyzed"
    );
    result
}

/// Safety rating and capped damage fraction.
fn classify(
    config: &ScoringConfig,
    control_risk: bool,
    outgoing: u32,
    turns_to_die: u32,
    hits_taken: u32,
    incoming: u32,
    current_hp: u16,
) -> (SafetyRating, f64) {
    if control_risk {
        return (SafetyRating::Dead, 1.0);
    }
    if outgoing == 0 {
        // Stalemate is only survivable when nothing gets through either way
        return if incoming > 0 {
            (SafetyRating::Dead, 1.0)
        } else {
            (SafetyRating::Risky, 0.0)
        };
    }
    if (incoming > 0 && hits_taken >= turns_to_die) || current_hp == 0 {
        return (SafetyRating::Dead, 1.0);
    }

    let fraction = hits_taken as f64 * incoming as f64 / current_hp as f64;
    let rating = if fraction < config.safe_threshold {
        SafetyRating::Safe
    } else if fraction < config.trade_threshold {
        SafetyRating::Trade
    } else {
        SafetyRating::Risky
    };
    (rating, fraction.min(1.0))
}

fn score(
    config: &ScoringConfig,
    rating: SafetyRating,
    damage_fraction: f64,
    best_multiplier: f64,
    speed: SpeedResult,
    turns_to_win: u32,
) -> f64 {
    let mut score = config.base_score(rating);
    score -= config.damage_penalty * damage_fraction.clamp(0.0, 1.0);
    if best_multiplier >= 4.0 {
        score += config.quad_effective_bonus;
    } else if best_multiplier >= 2.0 {
        score += config.super_effective_bonus;
    }
    if speed == SpeedResult::Faster {
        score += config.speed_bonus;
    }
    score -= config.turn_penalty * turns_to_win.min(config.turn_penalty_cap) as f64;
    score
}
