use clap::Args;

use crate::cmd::ScenarioArgs;
use crate::error::RunnerError;
use crate::models::{RankEntry, RankReport, StandoutReport, WeaknessReport};

#[derive(Args, Debug)]
pub struct RankArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,
}

pub fn execute(args: RankArgs) -> Result<String, RunnerError> {
    let loaded = args.scenario.load()?;
    let engine = &loaded.engine;

    let ranked = engine.rank(&loaded.roster, &loaded.opponent, loaded.weather);
    let plan = engine.suggest(&ranked, &loaded.opponent);

    let report = RankReport {
        opponent: loaded.opponent.display_name().to_string(),
        weather: loaded.weather,
        ranking: ranked
            .iter()
            .map(|entry| RankEntry {
                index: entry.index,
                summary: entry.result.to_string(),
                result: entry.result.clone(),
            })
            .collect(),
        best_tank: engine
            .best_tank(&loaded.roster, &loaded.opponent)
            .map(StandoutReport::from),
        best_threat: engine
            .best_threat(&loaded.roster, &loaded.opponent)
            .map(StandoutReport::from),
        weaknesses: engine
            .team_weaknesses(&loaded.roster)
            .into_iter()
            .map(|(type_, members)| WeaknessReport { type_, members })
            .collect(),
        plan,
    };

    args.scenario.render(&report)
}
