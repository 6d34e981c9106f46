//! Damage estimation.
//!
//! One move, one attacker, one defender, one weather:
//! 1. **Stats**: attack/special attack vs defense/special defense by
//!    category, each scaled by its stage. Sand boosts a Rock-type
//!    defender's special defense by 1.5x before the stage applies.
//! 2. **Base**: `floor(floor(2 * L / 5 + 2) * P * Atk / Def / 50) + 2`
//! 3. **Modifiers**: weather, burn (physical only), STAB, type.
//! 4. **Rolls**: floor at 85% and 100%; the values between are not kept.
//!
//! ```ignore
//! use matchup_engine::damage::estimate;
//!
//! let result = estimate(&chart, &attacker, &defender, &surf, Weather::Rain);
//! ```

mod effectiveness;
mod formula;

pub use effectiveness::{best_multiplier, effectiveness, stab};
pub use formula::{
    apply_roll, base_damage, burn_modifier, level_factor, weather_modifier, MAX_ROLL, MIN_ROLL,
    SAND_SPD_BOOST, STAB_MODIFIER,
};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::entities::Combatant;
use crate::moves::MoveData;
use crate::state::{Status, Weather};
use crate::stats::{BattleStat, BoostStat};
use crate::types::{Type, TypeChart};

/// Damage range of one move.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Floor of the 85% roll
    pub min: u32,
    /// Floor of the 100% roll
    pub max: u32,
    /// Type multiplier against the defender (1.0 = neutral)
    pub effectiveness: f64,
}

impl DamageResult {
    /// Result for status moves
    pub const fn none() -> Self {
        Self {
            min: 0,
            max: 0,
            effectiveness: 1.0,
        }
    }

    /// `damage` as a percentage of `hp`. Zero HP reads as 0%.
    pub fn percent_of(damage: u32, hp: u16) -> f64 {
        if hp == 0 {
            0.0
        } else {
            damage as f64 * 100.0 / hp as f64
        }
    }
}

/// Stage-adjusted attacking and defending stats for a category.
fn effective_stats(attacker: &Combatant, defender: &Combatant, physical: bool, weather: Weather) -> (f64, f64) {
    if physical {
        let attack = attacker.stat(BattleStat::Atk) as f64 * attacker.stages().multiplier(BoostStat::Atk);
        let defense = defender.stat(BattleStat::Def) as f64 * defender.stages().multiplier(BoostStat::Def);
        (attack, defense)
    } else {
        let attack = attacker.stat(BattleStat::SpA) as f64 * attacker.stages().multiplier(BoostStat::SpA);
        let mut special_defense = defender.stat(BattleStat::SpD) as f64;
        if weather == Weather::Sand && defender.has_type(Type::Rock) {
            special_defense *= SAND_SPD_BOOST;
        }
        (attack, special_defense * defender.stages().multiplier(BoostStat::SpD))
    }
}

/// Estimate the damage range of `move_` from `attacker` into `defender`.
///
/// Status moves return zero damage at neutral effectiveness. A damaging
/// move with no known power returns `None` and must be left out of any
/// comparison rather than counted as zero.
pub fn estimate(
    chart: &TypeChart,
    attacker: &Combatant,
    defender: &Combatant,
    move_: &MoveData,
    weather: Weather,
) -> Option<DamageResult> {
    if move_.is_status() {
        return Some(DamageResult::none());
    }
    let Some(power) = move_.power else {
        trace!(move_name = %move_.name, "no power data, move excluded");
        return None;
    };

    let physical = move_.category.is_physical();
    let (attack, defense) = effective_stats(attacker, defender, physical, weather);

    let mut base = base_damage(attacker.level(), power, attack, defense);
    base *= weather_modifier(weather, move_.type_);
    base *= burn_modifier(attacker.status() == Status::Burn, physical);

    let stab = stab(attacker, move_.type_);
    let type_eff = effectiveness(chart, move_.type_, defender);

    let result = DamageResult {
        min: apply_roll(base, stab, type_eff, MIN_ROLL),
        max: apply_roll(base, stab, type_eff, MAX_ROLL),
        effectiveness: type_eff,
    };

    trace!(
        attacker = attacker.display_name(),
        defender = defender.display_name(),
        move_name = %move_.name,
        min = result.min,
        max = result.max,
        effectiveness = result.effectiveness,
        "damage estimate"
    );
    Some(result)
}
