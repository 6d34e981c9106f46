//! Fixture data structures for scenario tests.
//!
//! These types are deserialized from `tests/fixtures/scenarios.json`.

use matchup_engine::analysis::PlanStep;
use matchup_engine::{SafetyRating, StatStages, Status, Weather};
use serde::Deserialize;

/// Root structure for the scenario file.
#[derive(Deserialize)]
pub struct ScenarioFixture {
    #[allow(dead_code)]
    pub meta: Option<serde_json::Value>,
    pub cases: Vec<ScenarioCase>,
}

/// One roster against one opponent, with the expected verdicts.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioCase {
    pub name: String,
    #[serde(default)]
    pub weather: Weather,
    pub roster: Vec<CombatantData>,
    pub opponent: CombatantData,
    pub expected: ExpectedOutcome,
}

/// Combatant description, resolved through the fixture data provider.
#[derive(Deserialize, Debug, Clone)]
pub struct CombatantData {
    pub species: String,
    pub nickname: Option<String>,
    pub level: Option<u8>,
    #[serde(default)]
    pub moves: Vec<String>,
    pub hp_percent: Option<f64>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub stages: StatStages,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ExpectedOutcome {
    /// Display names, best first
    pub order: Vec<String>,
    pub ratings: Vec<SafetyRating>,
    pub scores: Vec<f64>,
    pub turns_to_win: Vec<u32>,
    /// Names flagged with control risk; unchecked when absent
    pub control_risk: Option<Vec<String>>,
    pub plan: Option<ExpectedPlan>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ExpectedPlan {
    pub sacrifice: PlanStep,
    pub cleaner: PlanStep,
}
