//! Stat projection and stat stages.
//!
//! Real stats are projected from base stats under a fixed "in-progress
//! playthrough" assumption: neutral nature, IV 15 and no EVs. Stages scale
//! a real stat by the Gen 5 table `2/(2+|s|)` below zero and `(2+s)/2`
//! above it.

use serde::{Deserialize, Serialize};

/// Assumed IV for every stat.
pub const ASSUMED_IV: u32 = 15;

/// Default level when none is set.
pub const DEFAULT_LEVEL: u8 = 50;

/// Stage bounds.
pub const MIN_STAGE: i8 = -6;
pub const MAX_STAGE: i8 = 6;

/// Six named stats, used for both base and real values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl Stats {
    pub const fn new(hp: u16, atk: u16, def: u16, spa: u16, spd: u16, spe: u16) -> Self {
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    pub fn get(&self, stat: BattleStat) -> u16 {
        match stat {
            BattleStat::Hp => self.hp,
            BattleStat::Atk => self.atk,
            BattleStat::Def => self.def,
            BattleStat::SpA => self.spa,
            BattleStat::SpD => self.spd,
            BattleStat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: BattleStat, value: u16) {
        match stat {
            BattleStat::Hp => self.hp = value,
            BattleStat::Atk => self.atk = value,
            BattleStat::Def => self.def = value,
            BattleStat::SpA => self.spa = value,
            BattleStat::SpD => self.spd = value,
            BattleStat::Spe => self.spe = value,
        }
    }
}

/// One of the six permanent stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleStat {
    Hp,
    Atk,
    Def,
    SpA,
    SpD,
    Spe,
}

impl BattleStat {
    pub const ALL: [BattleStat; 6] = [
        BattleStat::Hp,
        BattleStat::Atk,
        BattleStat::Def,
        BattleStat::SpA,
        BattleStat::SpD,
        BattleStat::Spe,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Project one base stat to its real value at `level`.
///
/// - HP: `floor((2*base + 15) * level / 100) + level + 10`
/// - Other: `floor((2*base + 15) * level / 100) + 5`
pub fn project_stat(base: u16, level: u8, is_hp: bool) -> u16 {
    let level = level as u32;
    let scaled = (2 * base as u32 + ASSUMED_IV) * level / 100;
    let value = if is_hp { scaled + level + 10 } else { scaled + 5 };
    value.min(u16::MAX as u32) as u16
}

/// Project all six base stats.
pub fn project_stats(base: &Stats, level: u8) -> Stats {
    let mut real = Stats::default();
    for stat in BattleStat::ALL {
        real.set(stat, project_stat(base.get(stat), level, stat == BattleStat::Hp));
    }
    real
}

/// Multiplier for a stat stage, clamped to [-6, 6].
pub fn stage_multiplier(stage: i8) -> f64 {
    let stage = stage.clamp(MIN_STAGE, MAX_STAGE);
    if stage < 0 {
        2.0 / (2.0 + (-stage) as f64)
    } else {
        (2.0 + stage as f64) / 2.0
    }
}

/// A stat that can carry a stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoostStat {
    Atk,
    Def,
    SpA,
    SpD,
    Spe,
    Acc,
    Eva,
}

/// Temporary battle stages.
///
/// Accuracy and evasion are tracked but no damage or speed math reads them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatStages {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
    pub acc: i8,
    pub eva: i8,
}

impl StatStages {
    pub fn get(&self, stat: BoostStat) -> i8 {
        match stat {
            BoostStat::Atk => self.atk,
            BoostStat::Def => self.def,
            BoostStat::SpA => self.spa,
            BoostStat::SpD => self.spd,
            BoostStat::Spe => self.spe,
            BoostStat::Acc => self.acc,
            BoostStat::Eva => self.eva,
        }
    }

    /// Set a stage, clamping to [-6, 6].
    pub fn set(&mut self, stat: BoostStat, stage: i8) {
        let stage = stage.clamp(MIN_STAGE, MAX_STAGE);
        match stat {
            BoostStat::Atk => self.atk = stage,
            BoostStat::Def => self.def = stage,
            BoostStat::SpA => self.spa = stage,
            BoostStat::SpD => self.spd = stage,
            BoostStat::Spe => self.spe = stage,
            BoostStat::Acc => self.acc = stage,
            BoostStat::Eva => self.eva = stage,
        }
    }

    /// Clamp every stage into range (for values deserialized as-is).
    pub fn clamped(mut self) -> Self {
        for stat in [
            BoostStat::Atk,
            BoostStat::Def,
            BoostStat::SpA,
            BoostStat::SpD,
            BoostStat::Spe,
            BoostStat::Acc,
            BoostStat::Eva,
        ] {
            let stage = self.get(stat);
            self.set(stat, stage);
        }
        self
    }

    #[inline]
    pub fn multiplier(&self, stat: BoostStat) -> f64 {
        stage_multiplier(self.get(stat))
    }
}

/// Where a real stat comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatValue {
    /// Computed from the projection formula
    Derived { base: u16, level: u8 },
    /// Pinned by the user
    Overridden(u16),
}

impl StatValue {
    pub fn resolve(self, is_hp: bool) -> u16 {
        match self {
            StatValue::Derived { base, level } => project_stat(base, level, is_hp),
            StatValue::Overridden(value) => value,
        }
    }

    pub fn is_overridden(self) -> bool {
        matches!(self, StatValue::Overridden(_))
    }
}

/// The six real stats of a combatant as tagged values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    values: [StatValue; 6],
}

impl StatBlock {
    /// All six stats derived from `base` at `level`.
    pub fn derived(base: &Stats, level: u8) -> Self {
        let mut values = [StatValue::Overridden(0); 6];
        for stat in BattleStat::ALL {
            values[stat.index()] = StatValue::Derived {
                base: base.get(stat),
                level,
            };
        }
        Self { values }
    }

    pub fn value(&self, stat: BattleStat) -> StatValue {
        self.values[stat.index()]
    }

    pub fn get(&self, stat: BattleStat) -> u16 {
        self.values[stat.index()].resolve(stat == BattleStat::Hp)
    }

    pub fn pin(&mut self, stat: BattleStat, value: u16) {
        self.values[stat.index()] = StatValue::Overridden(value);
    }

    pub fn has_overrides(&self) -> bool {
        self.values.iter().any(|v| v.is_overridden())
    }

    pub fn resolve(&self) -> Stats {
        let mut stats = Stats::default();
        for stat in BattleStat::ALL {
            stats.set(stat, self.get(stat));
        }
        stats
    }
}
