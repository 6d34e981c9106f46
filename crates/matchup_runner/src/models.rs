use matchup_engine::analysis::{DefenseTier, OffenseTier, TypeStandout};
use matchup_engine::{
    AnalysisResult, BattlePlan, ScoringConfig, StatStages, Status, Type, Weather,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Input
// ============================================================================

#[derive(Deserialize, Debug, Clone)]
pub struct Scenario {
    #[serde(default)]
    pub weather: Weather,
    #[serde(default)]
    pub config: ScoringConfig,
    /// Path to the species/move data, relative to the scenario file
    #[serde(default)]
    pub data: Option<String>,
    /// Optional type chart path, relative to the scenario file
    #[serde(default)]
    pub chart: Option<String>,
    pub roster: Vec<CombatantSpec>,
    pub opponent: CombatantSpec,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CombatantSpec {
    pub species: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub hp_percent: Option<f64>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub stages: StatStages,
}

// ============================================================================
// Output
// ============================================================================

#[derive(Serialize, Debug)]
pub struct RankReport {
    pub opponent: String,
    pub weather: Weather,
    pub ranking: Vec<RankEntry>,
    pub best_tank: Option<StandoutReport>,
    pub best_threat: Option<StandoutReport>,
    pub weaknesses: Vec<WeaknessReport>,
    pub plan: Option<BattlePlan>,
}

#[derive(Serialize, Debug)]
pub struct RankEntry {
    pub index: usize,
    pub summary: String,
    pub result: AnalysisResult,
}

#[derive(Serialize, Debug)]
pub struct StandoutReport {
    pub index: usize,
    pub name: String,
    pub multiplier: f64,
}

impl From<TypeStandout<'_>> for StandoutReport {
    fn from(standout: TypeStandout<'_>) -> Self {
        Self {
            index: standout.index,
            name: standout.combatant.display_name().to_string(),
            multiplier: standout.multiplier,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct WeaknessReport {
    #[serde(rename = "type")]
    pub type_: Type,
    pub members: usize,
}

#[derive(Serialize, Debug)]
pub struct AnalyzeReport {
    pub opponent: String,
    pub weather: Weather,
    pub summary: String,
    pub defense_tier: DefenseTier,
    pub offense_tier: OffenseTier,
    pub result: AnalysisResult,
}

#[derive(Serialize, Debug)]
pub struct DamageReport {
    pub attacker: String,
    pub defender: String,
    #[serde(rename = "move")]
    pub move_name: String,
    pub weather: Weather,
    pub min: u32,
    pub max: u32,
    pub effectiveness: f64,
    pub min_percent: f64,
    pub max_percent: f64,
}
