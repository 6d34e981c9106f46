use std::fs;
use std::path::{Path, PathBuf};

use matchup_engine::{
    Combatant, CombatantConfig, DataProvider, JsonDataProvider, MatchupEngine, TypeChart, Weather,
};
use tracing::{debug, info};

use crate::error::RunnerError;
use crate::models::{CombatantSpec, Scenario};

/// Scenario with every name resolved.
pub struct LoadedScenario {
    pub weather: Weather,
    pub engine: MatchupEngine,
    pub provider: JsonDataProvider,
    pub roster: Vec<Combatant>,
    pub opponent: Combatant,
}

impl LoadedScenario {
    pub fn member(&self, index: usize) -> Result<&Combatant, RunnerError> {
        self.roster.get(index).ok_or(RunnerError::MemberOutOfRange {
            index,
            len: self.roster.len(),
        })
    }
}

fn read(path: &Path) -> Result<String, RunnerError> {
    fs::read_to_string(path).map_err(|source| RunnerError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn relative_to(scenario: &Path, file: &str) -> PathBuf {
    scenario
        .parent()
        .map(|dir| dir.join(file))
        .unwrap_or_else(|| PathBuf::from(file))
}

/// Load a scenario file. `data_override` wins over the scenario's own path.
pub fn load(path: &Path, data_override: Option<&Path>) -> Result<LoadedScenario, RunnerError> {
    let json = read(path)?;
    let scenario: Scenario = serde_json::from_str(&json).map_err(|source| RunnerError::Scenario {
        path: path.to_path_buf(),
        source,
    })?;

    let data_path = match (data_override, &scenario.data) {
        (Some(p), _) => p.to_path_buf(),
        (None, Some(p)) => relative_to(path, p),
        (None, None) => return Err(RunnerError::MissingData),
    };
    let provider = JsonDataProvider::from_json(&read(&data_path)?)?;

    let chart = match &scenario.chart {
        Some(p) => TypeChart::from_json(&read(&relative_to(path, p))?)?,
        None => TypeChart::gen5(),
    };
    let engine = MatchupEngine::new(chart, scenario.config.clone())?;

    let roster = scenario
        .roster
        .iter()
        .map(|spec| build(&provider, spec))
        .collect::<Result<Vec<_>, _>>()?;
    let opponent = build(&provider, &scenario.opponent)?;

    info!(
        scenario = %path.display(),
        roster = roster.len(),
        opponent = opponent.display_name(),
        weather = %scenario.weather,
        "scenario loaded"
    );

    Ok(LoadedScenario {
        weather: scenario.weather,
        engine,
        provider,
        roster,
        opponent,
    })
}

fn build<P: DataProvider>(provider: &P, spec: &CombatantSpec) -> Result<Combatant, RunnerError> {
    let move_names: Vec<&str> = spec.moves.iter().map(String::as_str).collect();
    let level = spec.level.unwrap_or(matchup_engine::stats::DEFAULT_LEVEL);

    let mut config = CombatantConfig::from_provider(provider, &spec.species, level, &move_names)?
        .status(spec.status)
        .stages(spec.stages);
    if let Some(nickname) = &spec.nickname {
        config = config.nickname(nickname.clone());
    }
    if let Some(percent) = spec.hp_percent {
        config = config.hp_percent(percent);
    }

    let combatant = config.build()?;
    debug!(
        name = combatant.display_name(),
        level = combatant.level(),
        hp = combatant.current_hp(),
        max_hp = combatant.max_hp(),
        "combatant built"
    );
    Ok(combatant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenarios_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../scenarios")
    }

    #[test]
    fn test_load_resolves_data_next_to_scenario() {
        let loaded = load(&scenarios_dir().join("brock.json"), None).unwrap();
        assert_eq!(loaded.roster.len(), 4);
        assert_eq!(loaded.opponent.species(), "onix");
        assert_eq!(loaded.weather, Weather::None);
        assert!(loaded.member(3).is_ok());
        assert!(matches!(
            loaded.member(4),
            Err(RunnerError::MemberOutOfRange { index: 4, len: 4 })
        ));
    }

    #[test]
    fn test_spec_fields_reach_the_combatant() {
        let loaded = load(&scenarios_dir().join("lavender.json"), None).unwrap();
        let sparky = loaded.member(1).unwrap();
        assert_eq!(sparky.display_name(), "Sparky");
        assert_eq!(sparky.stages().spe, 1);

        let snorlax = loaded.member(3).unwrap();
        assert!(snorlax.current_hp() < snorlax.max_hp());
    }

    #[test]
    fn test_missing_data_is_an_error() {
        let dir = std::env::temp_dir().join("matchup_runner_missing_data");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scenario.json");
        fs::write(
            &path,
            r#"{"roster": [], "opponent": {"species": "onix"}}"#,
        )
        .unwrap();

        assert!(matches!(load(&path, None), Err(RunnerError::MissingData)));
    }

    #[test]
    fn test_data_override_wins() {
        let dir = scenarios_dir();
        let loaded = load(&dir.join("brock.json"), Some(&dir.join("data.json"))).unwrap();
        assert_eq!(loaded.provider.species_count(), 16);
    }
}
