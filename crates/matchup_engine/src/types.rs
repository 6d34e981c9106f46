//! Types and the type chart.
//!
//! The chart is a dense `[attacking][defending]` grid of multipliers in
//! {0, 0.5, 1, 2}. Cells that the source data leaves out are neutral (1.0).
//! A built-in Generation 5 chart ships as a static `phf` map; other charts
//! can be loaded from JSON in the same `{ attacking: { defending: mult } }`
//! shape the tracker stores.

use std::collections::HashMap;
use std::fmt;

use phf::phf_map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DataError;

/// Pokemon type.
///
/// Fairy parses so that modern data does not fail to load, but the
/// built-in Gen 5 chart has no entries for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fighting = 1,
    Flying = 2,
    Poison = 3,
    Ground = 4,
    Rock = 5,
    Bug = 6,
    Ghost = 7,
    Steel = 8,
    Fire = 9,
    Water = 10,
    Grass = 11,
    Electric = 12,
    Psychic = 13,
    Ice = 14,
    Dragon = 15,
    Dark = 16,
    Fairy = 17,
}

impl Type {
    /// Total number of types
    pub const COUNT: usize = 18;

    /// All types in discriminant order
    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];

    /// Parse type from string (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Type::ALL.iter().copied().find(|t| t.as_str() == lower)
    }

    /// Lowercase name, matching the data provider's spelling
    pub const fn as_str(self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fighting => "fighting",
            Type::Flying => "flying",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Rock => "rock",
            Type::Bug => "bug",
            Type::Ghost => "ghost",
            Type::Steel => "steel",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Grass => "grass",
            Type::Electric => "electric",
            Type::Psychic => "psychic",
            Type::Ice => "ice",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Fairy => "fairy",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Type {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Type::from_str(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown type: {}", name)))
    }
}

/// Gen 5 chart, attacking type -> non-neutral defending cells.
static GEN5_CHART: phf::Map<&'static str, &'static [(Type, f64)]> = phf_map! {
    "normal" => &[(Type::Rock, 0.5), (Type::Ghost, 0.0), (Type::Steel, 0.5)],
    "fire" => &[
        (Type::Fire, 0.5), (Type::Water, 0.5), (Type::Grass, 2.0), (Type::Ice, 2.0),
        (Type::Bug, 2.0), (Type::Rock, 0.5), (Type::Dragon, 0.5), (Type::Steel, 2.0),
    ],
    "water" => &[
        (Type::Fire, 2.0), (Type::Water, 0.5), (Type::Grass, 0.5), (Type::Ground, 2.0),
        (Type::Rock, 2.0), (Type::Dragon, 0.5),
    ],
    "grass" => &[
        (Type::Fire, 0.5), (Type::Water, 2.0), (Type::Grass, 0.5), (Type::Poison, 0.5),
        (Type::Ground, 2.0), (Type::Flying, 0.5), (Type::Bug, 0.5), (Type::Rock, 2.0),
        (Type::Dragon, 0.5), (Type::Steel, 0.5),
    ],
    "electric" => &[
        (Type::Water, 2.0), (Type::Grass, 0.5), (Type::Electric, 0.5), (Type::Ground, 0.0),
        (Type::Flying, 2.0), (Type::Dragon, 0.5),
    ],
    "ice" => &[
        (Type::Fire, 0.5), (Type::Water, 0.5), (Type::Grass, 2.0), (Type::Ice, 0.5),
        (Type::Ground, 2.0), (Type::Flying, 2.0), (Type::Dragon, 2.0), (Type::Steel, 0.5),
    ],
    "fighting" => &[
        (Type::Normal, 2.0), (Type::Ice, 2.0), (Type::Poison, 0.5), (Type::Flying, 0.5),
        (Type::Psychic, 0.5), (Type::Bug, 0.5), (Type::Rock, 2.0), (Type::Ghost, 0.0),
        (Type::Dark, 2.0), (Type::Steel, 2.0),
    ],
    "poison" => &[
        (Type::Grass, 2.0), (Type::Poison, 0.5), (Type::Ground, 0.5), (Type::Rock, 0.5),
        (Type::Ghost, 0.5), (Type::Steel, 0.0),
    ],
    "ground" => &[
        (Type::Fire, 2.0), (Type::Grass, 0.5), (Type::Electric, 2.0), (Type::Poison, 2.0),
        (Type::Flying, 0.0), (Type::Bug, 0.5), (Type::Rock, 2.0), (Type::Steel, 2.0),
    ],
    "flying" => &[
        (Type::Grass, 2.0), (Type::Electric, 0.5), (Type::Fighting, 2.0), (Type::Bug, 2.0),
        (Type::Rock, 0.5), (Type::Steel, 0.5),
    ],
    "psychic" => &[
        (Type::Fighting, 2.0), (Type::Poison, 2.0), (Type::Psychic, 0.5), (Type::Dark, 0.0),
        (Type::Steel, 0.5),
    ],
    "bug" => &[
        (Type::Fire, 0.5), (Type::Grass, 2.0), (Type::Fighting, 0.5), (Type::Poison, 0.5),
        (Type::Flying, 0.5), (Type::Psychic, 2.0), (Type::Ghost, 0.5), (Type::Dark, 2.0),
        (Type::Steel, 0.5),
    ],
    "rock" => &[
        (Type::Fire, 2.0), (Type::Ice, 2.0), (Type::Fighting, 0.5), (Type::Ground, 0.5),
        (Type::Flying, 2.0), (Type::Bug, 2.0), (Type::Steel, 0.5),
    ],
    "ghost" => &[
        (Type::Normal, 0.0), (Type::Psychic, 2.0), (Type::Ghost, 2.0), (Type::Dark, 0.5),
        (Type::Steel, 0.5),
    ],
    "dragon" => &[(Type::Dragon, 2.0), (Type::Steel, 0.5)],
    "dark" => &[
        (Type::Fighting, 0.5), (Type::Psychic, 2.0), (Type::Ghost, 2.0), (Type::Dark, 0.5),
        (Type::Steel, 0.5),
    ],
    "steel" => &[
        (Type::Fire, 0.5), (Type::Water, 0.5), (Type::Electric, 0.5), (Type::Ice, 2.0),
        (Type::Rock, 2.0), (Type::Steel, 0.5),
    ],
};

const VALID_MULTIPLIERS: [f64; 4] = [0.0, 0.5, 1.0, 2.0];

/// Attacking-vs-defending multiplier grid, read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeChart {
    /// cells[attacking][defending]
    cells: [[f64; Type::COUNT]; Type::COUNT],
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::gen5()
    }
}

impl TypeChart {
    /// A chart where every pairing is neutral.
    pub fn neutral() -> Self {
        Self {
            cells: [[1.0; Type::COUNT]; Type::COUNT],
        }
    }

    /// The Black/White chart (17 types, no Fairy).
    pub fn gen5() -> Self {
        let mut chart = Self::neutral();
        for attacking in Type::ALL {
            if let Some(row) = GEN5_CHART.get(attacking.as_str()) {
                for &(defending, multiplier) in row.iter() {
                    chart.cells[attacking as usize][defending as usize] = multiplier;
                }
            }
        }
        chart
    }

    /// Load a chart from `{ "fire": { "grass": 2, ... }, ... }`.
    ///
    /// Missing rows and cells stay neutral.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let rows: HashMap<String, HashMap<String, f64>> = serde_json::from_str(json)?;
        Self::from_rows(&rows)
    }

    /// Build a chart from name-keyed rows.
    pub fn from_rows(rows: &HashMap<String, HashMap<String, f64>>) -> Result<Self, DataError> {
        let mut chart = Self::neutral();
        for (attacking_name, row) in rows {
            let attacking = Type::from_str(attacking_name)
                .ok_or_else(|| DataError::UnknownType(attacking_name.clone()))?;
            for (defending_name, &multiplier) in row {
                let defending = Type::from_str(defending_name)
                    .ok_or_else(|| DataError::UnknownType(defending_name.clone()))?;
                if !VALID_MULTIPLIERS.contains(&multiplier) {
                    return Err(DataError::InvalidMultiplier {
                        attacking: attacking_name.clone(),
                        defending: defending_name.clone(),
                        multiplier,
                    });
                }
                chart.cells[attacking as usize][defending as usize] = multiplier;
            }
        }
        Ok(chart)
    }

    /// Multiplier for one attacking type against one defending type.
    #[inline]
    pub fn single(&self, attacking: Type, defending: Type) -> f64 {
        self.cells[attacking as usize][defending as usize]
    }

    /// Product of the per-type multipliers against every defending type.
    ///
    /// An empty defender is neutral.
    pub fn multiplier(&self, attacking: Type, defending: &[Type]) -> f64 {
        defending
            .iter()
            .map(|&d| self.single(attacking, d))
            .product()
    }

    /// Multiplier taken from every attacking type, in `Type::ALL` order.
    pub fn defensive_profile(&self, defending: &[Type]) -> Vec<(Type, f64)> {
        Type::ALL
            .iter()
            .map(|&attacking| (attacking, self.multiplier(attacking, defending)))
            .collect()
    }
}
