//! Gen 5 style damage formula pieces.
//!
//! Stats reach this module already stage-adjusted, as floats. Only the
//! base term and the final roll bounds are floored; weather, burn, STAB
//! and type multipliers chain on the unfloored base in that order.

use crate::state::Weather;
use crate::types::Type;

/// Low end of the damage roll.
pub const MIN_ROLL: f64 = 0.85;

/// High end of the damage roll.
pub const MAX_ROLL: f64 = 1.0;

pub const STAB_MODIFIER: f64 = 1.5;

/// Sand boost to a Rock-type defender's special defense.
pub const SAND_SPD_BOOST: f64 = 1.5;

/// Level factor: `floor(2 * level / 5 + 2)`
#[inline]
pub fn level_factor(level: u8) -> f64 {
    (2 * level as u32 / 5 + 2) as f64
}

/// Base damage term.
///
/// `floor(level_factor * power * attack / defense / 50) + 2`
pub fn base_damage(level: u8, power: u16, attack: f64, defense: f64) -> f64 {
    // Avoid division by zero
    if defense <= 0.0 {
        return 0.0;
    }

    let scaled = level_factor(level) * power as f64 * attack / defense / 50.0;
    scaled.floor() + 2.0
}

/// Weather multiplier for a move type.
pub fn weather_modifier(weather: Weather, move_type: Type) -> f64 {
    match (weather, move_type) {
        (Weather::Sun, Type::Fire) | (Weather::Rain, Type::Water) => 1.5,
        (Weather::Sun, Type::Water) | (Weather::Rain, Type::Fire) => 0.5,
        _ => 1.0,
    }
}

/// Burn halves physical damage.
#[inline]
pub fn burn_modifier(burned: bool, physical: bool) -> f64 {
    if burned && physical {
        0.5
    } else {
        1.0
    }
}

/// Floor of `base * stab * effectiveness * roll`, never negative.
pub fn apply_roll(base: f64, stab: f64, effectiveness: f64, roll: f64) -> u32 {
    let damage = (base * stab * effectiveness * roll).floor();
    if damage.is_finite() && damage > 0.0 {
        damage.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_factor() {
        assert_eq!(level_factor(50), 22.0);
        assert_eq!(level_factor(100), 42.0);
        assert_eq!(level_factor(1), 2.0);
    }

    #[test]
    fn test_base_damage() {
        // floor(22 * 90 * 100 / 100 / 50) + 2 = floor(39.6) + 2 = 41
        assert_eq!(base_damage(50, 90, 100.0, 100.0), 41.0);
        // Guard
        assert_eq!(base_damage(50, 90, 100.0, 0.0), 0.0);
    }

    #[test]
    fn test_weather() {
        assert_eq!(weather_modifier(Weather::Sun, Type::Fire), 1.5);
        assert_eq!(weather_modifier(Weather::Sun, Type::Water), 0.5);
        assert_eq!(weather_modifier(Weather::Rain, Type::Water), 1.5);
        assert_eq!(weather_modifier(Weather::Rain, Type::Fire), 0.5);
        assert_eq!(weather_modifier(Weather::Sand, Type::Rock), 1.0);
        assert_eq!(weather_modifier(Weather::Hail, Type::Ice), 1.0);
    }

    #[test]
    fn test_rolls() {
        // 41 * 1.5 = 61.5 -> min floor(52.275) = 52, max 61
        assert_eq!(apply_roll(41.0, 1.5, 1.0, MIN_ROLL), 52);
        assert_eq!(apply_roll(41.0, 1.5, 1.0, MAX_ROLL), 61);
        assert_eq!(apply_roll(41.0, 1.0, 0.0, MAX_ROLL), 0);
        assert_eq!(burn_modifier(true, true), 0.5);
        assert_eq!(burn_modifier(true, false), 1.0);
    }
}
