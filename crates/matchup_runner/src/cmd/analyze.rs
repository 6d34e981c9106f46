use clap::Args;

use crate::cmd::ScenarioArgs;
use crate::error::RunnerError;
use crate::models::AnalyzeReport;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Roster index to analyze
    #[arg(short, long, default_value_t = 0)]
    pub member: usize,
}

pub fn execute(args: AnalyzeArgs) -> Result<String, RunnerError> {
    let loaded = args.scenario.load()?;
    let member = loaded.member(args.member)?;

    let result = loaded.engine.analyze(member, &loaded.opponent, loaded.weather);
    let report = AnalyzeReport {
        opponent: loaded.opponent.display_name().to_string(),
        weather: loaded.weather,
        summary: result.to_string(),
        defense_tier: result.defense_tier(),
        offense_tier: result.offense_tier(),
        result,
    };

    args.scenario.render(&report)
}
