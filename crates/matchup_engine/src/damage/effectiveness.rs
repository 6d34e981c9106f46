//! Combatant-level type effectiveness and STAB.
//!
//! A combatant with no type data gets neutral treatment on both sides:
//! every attack against it is 1x and none of its moves get STAB.

use crate::entities::Combatant;
use crate::types::{Type, TypeChart};

use super::formula::STAB_MODIFIER;

/// Multiplier of `move_type` against the defender's types.
#[inline]
pub fn effectiveness(chart: &TypeChart, move_type: Type, defender: &Combatant) -> f64 {
    chart.multiplier(move_type, defender.types())
}

/// 1.5 when `move_type` is one of the attacker's types, else 1.
#[inline]
pub fn stab(attacker: &Combatant, move_type: Type) -> f64 {
    if attacker.has_type(move_type) {
        STAB_MODIFIER
    } else {
        1.0
    }
}

/// Highest multiplier any of `attacking` deals to `defending`.
///
/// Empty `attacking` yields 0, so a side with nothing to attack with
/// compares below every real threat.
pub fn best_multiplier(chart: &TypeChart, attacking: &[Type], defending: &[Type]) -> f64 {
    attacking
        .iter()
        .map(|&t| chart.multiplier(t, defending))
        .fold(0.0, f64::max)
}
