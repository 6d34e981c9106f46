//! Species and move data provider.
//!
//! The engine never fetches anything. Callers resolve names up front
//! through a [`DataProvider`]; `JsonDataProvider` is a keyed in-memory
//! cache loaded once from a JSON document of the form
//! `{ "species": [...], "moves": [...] }`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DataError;
use crate::moves::MoveData;
use crate::stats::Stats;
use crate::types::Type;

/// Species-intrinsic data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub name: String,
    pub types: Vec<Type>,
    #[serde(alias = "stats")]
    pub base_stats: Stats,
}

/// Name-to-data lookup, resolved before any analysis runs.
pub trait DataProvider {
    fn species(&self, name: &str) -> Option<&SpeciesData>;

    fn move_data(&self, name: &str) -> Option<&MoveData>;
}

/// Canonical lookup key: trimmed, lowercase, spaces and underscores as `-`.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

#[derive(Deserialize)]
struct DataDocument {
    #[serde(default)]
    species: Vec<SpeciesData>,
    #[serde(default)]
    moves: Vec<MoveData>,
}

/// In-memory provider backed by JSON.
#[derive(Clone, Debug, Default)]
pub struct JsonDataProvider {
    species: HashMap<String, SpeciesData>,
    moves: HashMap<String, MoveData>,
}

impl JsonDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let doc: DataDocument = serde_json::from_str(json)?;
        let mut provider = Self::new();
        for species in doc.species {
            provider.insert_species(species);
        }
        for data in doc.moves {
            provider.insert_move(data);
        }
        debug!(
            species = provider.species.len(),
            moves = provider.moves.len(),
            "loaded data provider"
        );
        Ok(provider)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Later entries replace earlier ones with the same normalized name.
    pub fn insert_species(&mut self, data: SpeciesData) {
        self.species.insert(normalize_name(&data.name), data);
    }

    pub fn insert_move(&mut self, data: MoveData) {
        self.moves.insert(normalize_name(&data.name), data);
    }

    /// Merge another provider's entries into this one.
    pub fn extend(&mut self, other: JsonDataProvider) {
        self.species.extend(other.species);
        self.moves.extend(other.moves);
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

impl DataProvider for JsonDataProvider {
    fn species(&self, name: &str) -> Option<&SpeciesData> {
        self.species.get(&normalize_name(name))
    }

    fn move_data(&self, name: &str) -> Option<&MoveData> {
        self.moves.get(&normalize_name(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::CombatantConfig;
    use crate::moves::MoveCategory;

    const DOC: &str = r#"{
        "species": [
            { "name": "Bulbasaur", "types": ["grass", "poison"],
              "stats": { "hp": 45, "atk": 49, "def": 49, "spa": 65, "spd": 65, "spe": 45 } }
        ],
        "moves": [
            { "name": "vine-whip", "type": "grass", "power": 45, "category": "physical", "accuracy": 100 },
            { "name": "sleep-powder", "type": "grass", "category": "status", "accuracy": 75,
              "secondary": { "ailment": "sleep" } }
        ]
    }"#;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name(" Vine Whip "), "vine-whip");
        assert_eq!(normalize_name("vine_whip"), "vine-whip");
        assert_eq!(normalize_name("VINE-WHIP"), "vine-whip");
    }

    #[test]
    fn test_lookup_is_normalized() {
        let provider = JsonDataProvider::from_json(DOC).unwrap();
        assert_eq!(provider.species_count(), 1);
        assert_eq!(provider.move_count(), 2);

        assert!(provider.species("bulbasaur").is_some());
        let whip = provider.move_data("Vine Whip").unwrap();
        assert_eq!(whip.category, MoveCategory::Physical);
        assert!(provider.move_data("vine_whip").is_some());
        assert!(provider.move_data("razor-leaf").is_none());
    }

    #[test]
    fn test_config_from_provider() {
        let provider = JsonDataProvider::from_json(DOC).unwrap();
        let mon = CombatantConfig::from_provider(
            &provider,
            "bulbasaur",
            20,
            &["vine whip", "razor-leaf", "sleep powder"],
        )
        .unwrap()
        .build()
        .unwrap();

        assert_eq!(mon.level(), 20);
        assert_eq!(mon.types(), &[Type::Grass, Type::Poison]);
        // Unknown move leaves its slot empty
        assert!(mon.move_slots()[1].is_none());
        assert_eq!(mon.known_moves().count(), 2);
        assert!(mon.knows_status_move());
    }

    #[test]
    fn test_unknown_species() {
        let provider = JsonDataProvider::from_json(DOC).unwrap();
        let err = CombatantConfig::from_provider(&provider, "mew", 50, &[]).unwrap_err();
        assert!(matches!(err, DataError::UnknownSpecies(name) if name == "mew"));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            JsonDataProvider::from_json("{ not json"),
            Err(DataError::Json(_))
        ));
    }
}
