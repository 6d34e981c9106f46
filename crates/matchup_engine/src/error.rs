//! Error taxonomy for loading data and constructing combatants.
//!
//! The computation path (projection, estimation, analysis, ranking and
//! strategy) never fails: degraded inputs come back as neutral multipliers
//! or the [`NEVER`](crate::analysis::NEVER) sentinel. Only the edges that
//! parse external data or build a [`Combatant`](crate::entities::Combatant)
//! return these errors.

use thiserror::Error;

/// Failures while loading species, move or type chart data.
#[derive(Debug, Error)]
pub enum DataError {
    /// A type name that is not one of the 18 known types
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// A chart cell outside {0, 0.5, 1, 2}
    #[error("invalid multiplier {multiplier} for {attacking} -> {defending}")]
    InvalidMultiplier {
        attacking: String,
        defending: String,
        multiplier: f64,
    },

    /// Species name not present in the data provider
    #[error("unknown species: {0}")]
    UnknownSpecies(String),

    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Combatant shapes the engine refuses to analyze.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("combatant {0} has no types")]
    NoTypes(String),

    #[error("combatant {name} has {count} types (max 2)")]
    TooManyTypes { name: String, count: usize },

    #[error("combatant {name} has {count} move slots (max 4)")]
    TooManyMoves { name: String, count: usize },

    #[error("level {0} is outside 1..=100")]
    InvalidLevel(u8),
}

/// Scoring weights that would break the Safe > Trade > Risky > Dead ordering.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("tier bases must strictly descend (safe {safe}, trade {trade}, risky {risky}, dead {dead})")]
    TierOrder {
        safe: f64,
        trade: f64,
        risky: f64,
        dead: f64,
    },

    #[error("tier gap {gap} is smaller than the adjustment span {span}")]
    TierOverlap { gap: f64, span: f64 },

    #[error("threshold {name} = {value} is out of range")]
    Threshold { name: &'static str, value: f64 },
}

/// Umbrella error for callers that drive the whole pipeline.
#[derive(Debug, Error)]
pub enum MatchupError {
    #[error("data error: {0}")]
    Data(#[from] DataError),

    #[error("build error: {0}")]
    Build(#[from] BuildError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl From<serde_json::Error> for MatchupError {
    fn from(err: serde_json::Error) -> Self {
        MatchupError::Data(DataError::Json(err))
    }
}

impl From<std::io::Error> for MatchupError {
    fn from(err: std::io::Error) -> Self {
        MatchupError::Data(DataError::Io(err))
    }
}

pub type Result<T> = std::result::Result<T, MatchupError>;
