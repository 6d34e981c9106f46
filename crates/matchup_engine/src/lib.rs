//! matchup_engine - Battle matchup analysis for Soul Link runs
//!
//! Projects real stats from base stats, estimates Gen 5 style damage
//! ranges, classifies one-on-one matchups with a forward turn simulation,
//! ranks a roster against an opponent and proposes a sacrifice/cleaner
//! plan when no safe answer exists.
//!
//! Data flows one way: provider data and the type chart feed damage
//! estimation, which feeds matchup analysis, ranking and strategy.

/// Types and the type chart
pub mod types;

/// Stat projection and stages
pub mod stats;

/// Move metadata
pub mod moves;

/// Weather and major status
pub mod state;

/// Combatants and their builder
pub mod entities;

/// Species/move data provider
pub mod data;

pub mod damage;
pub mod analysis;
pub mod error;

// Re-export commonly used types
pub use analysis::{
    AnalysisResult, BattlePlan, MatchupEngine, MatchupFlags, RankedMatchup, SafetyRating,
    ScoringConfig, SpeedResult, NEVER,
};
pub use damage::{estimate, DamageResult};
pub use data::{DataProvider, JsonDataProvider, SpeciesData};
pub use entities::{Combatant, CombatantConfig};
pub use error::{BuildError, ConfigError, DataError, MatchupError, Result};
pub use moves::{Ailment, MoveCategory, MoveData, SecondaryEffect};
pub use state::{Status, Weather};
pub use stats::{project_stat, stage_multiplier, BattleStat, BoostStat, StatStages, StatValue, Stats};
pub use types::{Type, TypeChart};
