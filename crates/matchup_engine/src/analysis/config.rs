//! Scoring weights and thresholds.
//!
//! Scores are a ranking heuristic. The only promise is ordering:
//! within one roster, every Safe result outranks every Trade result,
//! which outranks every Risky result, which outranks every Dead one.
//! `validate()` refuses weights that would let two tiers overlap.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::SafetyRating;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub safe_base: f64,
    pub trade_base: f64,
    pub risky_base: f64,
    pub dead_base: f64,
    /// Subtracted per unit of damage fraction taken (fraction capped at 1)
    pub damage_penalty: f64,
    /// Best outgoing move is at least 2x
    pub super_effective_bonus: f64,
    /// Best outgoing move is at least 4x (replaces the 2x bonus)
    pub quad_effective_bonus: f64,
    pub speed_bonus: f64,
    /// Subtracted per turn needed to win
    pub turn_penalty: f64,
    pub turn_penalty_cap: u32,
    /// Damage fraction below which a survivable matchup is Safe
    pub safe_threshold: f64,
    /// Damage fraction below which a survivable matchup is a Trade
    pub trade_threshold: f64,
    /// Sleep/freeze moves must hit more often than this (percent)
    pub control_accuracy_threshold: u8,
    /// Minimum outgoing damage percent for a useful sacrifice
    pub sacrifice_min_percent: f64,
    pub cleaner_max_turns: u32,
    /// Power of the stand-in move used when nothing damaging is known
    pub unknown_move_power: u16,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            safe_base: 1000.0,
            trade_base: 600.0,
            risky_base: 300.0,
            dead_base: -1000.0,
            damage_penalty: 200.0,
            super_effective_bonus: 50.0,
            quad_effective_bonus: 100.0,
            speed_bonus: 25.0,
            turn_penalty: 10.0,
            turn_penalty_cap: 10,
            safe_threshold: 0.5,
            trade_threshold: 0.8,
            control_accuracy_threshold: 60,
            sacrifice_min_percent: 10.0,
            cleaner_max_turns: 2,
            unknown_move_power: 60,
        }
    }
}

impl ScoringConfig {
    pub fn base_score(&self, rating: SafetyRating) -> f64 {
        match rating {
            SafetyRating::Safe => self.safe_base,
            SafetyRating::Trade => self.trade_base,
            SafetyRating::Risky => self.risky_base,
            SafetyRating::Dead => self.dead_base,
        }
    }

    /// Damage-fraction band a tier covers, as (low, high).
    fn fraction_band(&self, rating: SafetyRating) -> (f64, f64) {
        match rating {
            SafetyRating::Safe => (0.0, self.safe_threshold),
            SafetyRating::Trade => (self.safe_threshold, self.trade_threshold),
            SafetyRating::Risky => (self.trade_threshold, 1.0),
            SafetyRating::Dead => (0.0, 1.0),
        }
    }

    /// Lowest score a tier can produce.
    fn tier_floor(&self, rating: SafetyRating) -> f64 {
        let (_, high) = self.fraction_band(rating);
        self.base_score(rating)
            - self.damage_penalty * high
            - self.turn_penalty * self.turn_penalty_cap as f64
    }

    /// Highest score a tier can produce.
    fn tier_ceiling(&self, rating: SafetyRating) -> f64 {
        let (low, _) = self.fraction_band(rating);
        let offense = self.super_effective_bonus.max(self.quad_effective_bonus);
        self.base_score(rating) - self.damage_penalty * low + offense + self.speed_bonus
    }

    /// Check thresholds, weights and tier separation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_unit = |v: f64| v > 0.0 && v <= 1.0;
        if !in_unit(self.safe_threshold) {
            return Err(ConfigError::Threshold {
                name: "safe_threshold",
                value: self.safe_threshold,
            });
        }
        if !in_unit(self.trade_threshold) || self.trade_threshold <= self.safe_threshold {
            return Err(ConfigError::Threshold {
                name: "trade_threshold",
                value: self.trade_threshold,
            });
        }
        if self.control_accuracy_threshold > 100 {
            return Err(ConfigError::Threshold {
                name: "control_accuracy_threshold",
                value: self.control_accuracy_threshold as f64,
            });
        }
        if !(0.0..=100.0).contains(&self.sacrifice_min_percent) {
            return Err(ConfigError::Threshold {
                name: "sacrifice_min_percent",
                value: self.sacrifice_min_percent,
            });
        }
        for (name, value) in [
            ("damage_penalty", self.damage_penalty),
            ("super_effective_bonus", self.super_effective_bonus),
            ("quad_effective_bonus", self.quad_effective_bonus),
            ("speed_bonus", self.speed_bonus),
            ("turn_penalty", self.turn_penalty),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::Threshold { name, value });
            }
        }

        if !(self.safe_base > self.trade_base
            && self.trade_base > self.risky_base
            && self.risky_base > self.dead_base)
        {
            return Err(ConfigError::TierOrder {
                safe: self.safe_base,
                trade: self.trade_base,
                risky: self.risky_base,
                dead: self.dead_base,
            });
        }

        for pair in SafetyRating::ALL.windows(2) {
            let (upper, lower) = (pair[0], pair[1]);
            let gap = self.base_score(upper) - self.base_score(lower);
            let span = (self.base_score(upper) - self.tier_floor(upper))
                + (self.tier_ceiling(lower) - self.base_score(lower));
            if gap <= span {
                return Err(ConfigError::TierOverlap { gap, span });
            }
        }
        Ok(())
    }
}
