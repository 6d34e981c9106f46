pub mod analyze;
pub mod damage;
pub mod rank;

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::RunnerError;
use crate::scenario::{self, LoadedScenario};

/// Arguments shared by every subcommand.
#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Scenario JSON file
    pub scenario: PathBuf,

    /// Species/move data JSON (overrides the scenario's "data" path)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Pretty-print the report
    #[arg(long)]
    pub pretty: bool,
}

impl ScenarioArgs {
    pub fn load(&self) -> Result<LoadedScenario, RunnerError> {
        scenario::load(&self.scenario, self.data.as_deref())
    }

    pub fn render<T: Serialize>(&self, report: &T) -> Result<String, RunnerError> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        encoded.map_err(RunnerError::Encode)
    }
}
