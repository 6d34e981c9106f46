use std::path::PathBuf;

use matchup_engine::{BuildError, ConfigError, DataError, MatchupError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid scenario {path}: {source}")]
    Scenario {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("scenario has no species/move data (pass --data or set \"data\")")]
    MissingData,

    #[error("roster member {index} out of range (roster has {len})")]
    MemberOutOfRange { index: usize, len: usize },

    #[error("unknown move: {0}")]
    UnknownMove(String),

    #[error(transparent)]
    Engine(#[from] MatchupError),

    #[error("failed to encode report: {0}")]
    Encode(serde_json::Error),
}

impl From<DataError> for RunnerError {
    fn from(err: DataError) -> Self {
        RunnerError::Engine(err.into())
    }
}

impl From<BuildError> for RunnerError {
    fn from(err: BuildError) -> Self {
        RunnerError::Engine(err.into())
    }
}

impl From<ConfigError> for RunnerError {
    fn from(err: ConfigError) -> Self {
        RunnerError::Engine(err.into())
    }
}
