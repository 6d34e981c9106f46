//! Matchup analysis, roster ranking and strategy advice.
//!
//! Every function here is a pure computation over already-resolved
//! combatants. [`MatchupEngine`] bundles a type chart with a scoring
//! configuration so callers do not have to thread both through each call.

pub mod config;
pub mod matchup;
pub mod roster;
pub mod strategy;

pub use config::ScoringConfig;
pub use matchup::{
    analyze, effective_speed, AnalysisResult, DefenseTier, MatchupFlags, MoveEstimate,
    OffenseTier, SafetyRating, SpeedResult,
};
pub use roster::{best_tank, best_threat, rank, team_weaknesses, RankedMatchup, TypeStandout};
pub use strategy::{suggest, BattlePlan, PlanStep};

use crate::damage::{self, DamageResult};
use crate::entities::Combatant;
use crate::error::ConfigError;
use crate::moves::MoveData;
use crate::state::Weather;
use crate::types::{Type, TypeChart};

/// Turn count standing in for "never" when no damage gets through.
pub const NEVER: u32 = 999;

/// Type chart plus scoring weights.
#[derive(Clone, Debug, Default)]
pub struct MatchupEngine {
    chart: TypeChart,
    config: ScoringConfig,
}

impl MatchupEngine {
    /// Build an engine, rejecting configs whose tiers would overlap.
    pub fn new(chart: TypeChart, config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { chart, config })
    }

    pub fn chart(&self) -> &TypeChart {
        &self.chart
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn estimate(
        &self,
        attacker: &Combatant,
        defender: &Combatant,
        move_: &MoveData,
        weather: Weather,
    ) -> Option<DamageResult> {
        damage::estimate(&self.chart, attacker, defender, move_, weather)
    }

    pub fn analyze(&self, mine: &Combatant, theirs: &Combatant, weather: Weather) -> AnalysisResult {
        analyze(&self.chart, &self.config, mine, theirs, weather)
    }

    pub fn rank<'a>(
        &self,
        roster: &'a [Combatant],
        opponent: &Combatant,
        weather: Weather,
    ) -> Vec<RankedMatchup<'a>> {
        rank(&self.chart, &self.config, roster, opponent, weather)
    }

    pub fn best_tank<'a>(&self, roster: &'a [Combatant], opponent: &Combatant) -> Option<TypeStandout<'a>> {
        best_tank(&self.chart, roster, opponent)
    }

    pub fn best_threat<'a>(&self, roster: &'a [Combatant], opponent: &Combatant) -> Option<TypeStandout<'a>> {
        best_threat(&self.chart, roster, opponent)
    }

    pub fn team_weaknesses(&self, roster: &[Combatant]) -> Vec<(Type, usize)> {
        team_weaknesses(&self.chart, roster)
    }

    pub fn suggest(&self, ranked: &[RankedMatchup<'_>], opponent: &Combatant) -> Option<BattlePlan> {
        suggest(ranked, opponent, &self.config)
    }
}
