//! Test helper functions for scenario tests.
//!
//! These helpers turn fixture data into combatants and compare the
//! engine's verdicts against the expected outcome.

use std::path::PathBuf;

use matchup_engine::stats::DEFAULT_LEVEL;
use matchup_engine::{Combatant, CombatantConfig, JsonDataProvider, MatchupEngine};

use super::fixtures::{CombatantData, ScenarioCase};

const SCORE_TOLERANCE: f64 = 1e-6;

/// Path of a file under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The species/move data every fixture refers to.
pub fn provider() -> JsonDataProvider {
    JsonDataProvider::from_path(fixture_path("data.json")).expect("Failed to load data.json")
}

/// Build a combatant from fixture data.
pub fn build(provider: &JsonDataProvider, data: &CombatantData) -> Result<Combatant, String> {
    let moves: Vec<&str> = data.moves.iter().map(String::as_str).collect();
    let mut config = CombatantConfig::from_provider(
        provider,
        &data.species,
        data.level.unwrap_or(DEFAULT_LEVEL),
        &moves,
    )
    .map_err(|e| e.to_string())?
    .status(data.status)
    .stages(data.stages);

    if let Some(ref nickname) = data.nickname {
        config = config.nickname(nickname.clone());
    }
    if let Some(percent) = data.hp_percent {
        config = config.hp_percent(percent);
    }

    config.build().map_err(|e| e.to_string())
}

/// Shorthand for fixture-free tests: species, level and move names.
pub fn combatant(provider: &JsonDataProvider, species: &str, level: u8, moves: &[&str]) -> Combatant {
    CombatantConfig::from_provider(provider, species, level, moves)
        .unwrap_or_else(|e| panic!("unknown species {}: {}", species, e))
        .build()
        .unwrap_or_else(|e| panic!("cannot build {}: {}", species, e))
}

/// Run a scenario case and compare every expectation.
pub fn run_scenario(case: &ScenarioCase, provider: &JsonDataProvider) -> Result<(), String> {
    let engine = MatchupEngine::default();
    let roster = case
        .roster
        .iter()
        .map(|data| build(provider, data))
        .collect::<Result<Vec<_>, _>>()?;
    let opponent = build(provider, &case.opponent)?;

    let ranked = engine.rank(&roster, &opponent, case.weather);
    let expected = &case.expected;

    let order: Vec<&str> = ranked.iter().map(|r| r.result.name.as_str()).collect();
    if order != expected.order {
        return Err(format!(
            "Order mismatch\n  Expected: {:?}\n  Actual:   {:?}",
            expected.order, order
        ));
    }

    for (i, entry) in ranked.iter().enumerate() {
        let result = &entry.result;
        if result.rating != expected.ratings[i] {
            return Err(format!(
                "{}: expected {}, got {}",
                result.name, expected.ratings[i], result.rating
            ));
        }
        if (result.score - expected.scores[i]).abs() > SCORE_TOLERANCE {
            return Err(format!(
                "{}: expected score {}, got {}",
                result.name, expected.scores[i], result.score
            ));
        }
        if result.turns_to_win != expected.turns_to_win[i] {
            return Err(format!(
                "{}: expected to win in {}, got {}",
                result.name, expected.turns_to_win[i], result.turns_to_win
            ));
        }
    }

    if let Some(ref names) = expected.control_risk {
        let flagged: Vec<&str> = ranked
            .iter()
            .filter(|r| r.result.control_risk)
            .map(|r| r.result.name.as_str())
            .collect();
        if flagged != *names {
            return Err(format!(
                "Control risk mismatch\n  Expected: {:?}\n  Actual:   {:?}",
                names, flagged
            ));
        }
    }

    let plan = engine.suggest(&ranked, &opponent);
    match (&expected.plan, &plan) {
        (None, None) => {}
        (Some(want), Some(got)) => {
            if want.sacrifice != got.sacrifice || want.cleaner != got.cleaner {
                return Err(format!(
                    "Plan mismatch\n  Expected: {:?} / {:?}\n  Actual:   {}",
                    want.sacrifice, want.cleaner, got
                ));
            }
        }
        (want, got) => {
            return Err(format!("Plan mismatch\n  Expected: {:?}\n  Actual:   {:?}", want, got));
        }
    }

    Ok(())
}

/// Sanitize a case name for use as a test identifier.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
