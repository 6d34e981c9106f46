//! Move metadata as resolved from the data provider.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::Type;

/// Maximum known-move slots per combatant
pub const MAX_MOVES: usize = 4;

/// Damage class of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    #[inline]
    pub fn is_physical(self) -> bool {
        self == MoveCategory::Physical
    }
}

/// Ailment a move's secondary effect can inflict.
///
/// Provider names this engine does not model (leech-seed, trap, ...)
/// load as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ailment {
    Paralysis,
    Burn,
    Poison,
    Sleep,
    Freeze,
    Confusion,
    Other,
}

impl Ailment {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "paralysis" => Ailment::Paralysis,
            "burn" => Ailment::Burn,
            "poison" => Ailment::Poison,
            "sleep" => Ailment::Sleep,
            "freeze" => Ailment::Freeze,
            "confusion" => Ailment::Confusion,
            _ => Ailment::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Ailment::Paralysis => "paralysis",
            Ailment::Burn => "burn",
            Ailment::Poison => "poison",
            Ailment::Sleep => "sleep",
            Ailment::Freeze => "freeze",
            Ailment::Confusion => "confusion",
            Ailment::Other => "other",
        }
    }

    /// Ailments that stop the target from acting at all.
    #[inline]
    pub fn is_incapacitating(self) -> bool {
        matches!(self, Ailment::Sleep | Ailment::Freeze)
    }
}

impl Serialize for Ailment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Ailment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Ailment::from_name(&name))
    }
}

/// Optional secondary-effect metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryEffect {
    pub ailment: Option<Ailment>,
    /// Percent chance, 0 meaning "always" for pure status moves
    pub ailment_chance: u8,
    pub flinch_chance: u8,
}

/// A fully resolved move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: Type,
    /// `None` for status moves and for moves the provider has no power for
    #[serde(default)]
    pub power: Option<u16>,
    #[serde(alias = "damage_class")]
    pub category: MoveCategory,
    /// `None` means the move never misses
    #[serde(default)]
    pub accuracy: Option<u8>,
    #[serde(default)]
    pub priority: i8,
    #[serde(default)]
    pub secondary: Option<SecondaryEffect>,
}

impl MoveData {
    pub fn new(name: impl Into<String>, type_: Type, power: Option<u16>, category: MoveCategory) -> Self {
        Self {
            name: name.into(),
            type_,
            power,
            category,
            accuracy: Some(100),
            priority: 0,
            secondary: None,
        }
    }

    pub fn physical(name: impl Into<String>, type_: Type, power: u16) -> Self {
        Self::new(name, type_, Some(power), MoveCategory::Physical)
    }

    pub fn special(name: impl Into<String>, type_: Type, power: u16) -> Self {
        Self::new(name, type_, Some(power), MoveCategory::Special)
    }

    /// A status move that inflicts `ailment`.
    pub fn status(name: impl Into<String>, type_: Type, ailment: Option<Ailment>) -> Self {
        let mut data = Self::new(name, type_, None, MoveCategory::Status);
        data.secondary = ailment.map(|ailment| SecondaryEffect {
            ailment: Some(ailment),
            ..Default::default()
        });
        data
    }

    pub fn with_accuracy(mut self, accuracy: Option<u8>) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_priority(mut self, priority: i8) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_secondary(mut self, secondary: SecondaryEffect) -> Self {
        self.secondary = Some(secondary);
        self
    }

    #[inline]
    pub fn is_status(&self) -> bool {
        self.category == MoveCategory::Status
    }

    pub fn ailment(&self) -> Option<Ailment> {
        self.secondary.and_then(|s| s.ailment)
    }

    /// True when the move hits more often than `threshold` percent.
    /// Moves that never miss always qualify.
    pub fn accuracy_exceeds(&self, threshold: u8) -> bool {
        self.accuracy.map_or(true, |acc| acc > threshold)
    }
}
