use clap::Args;
use matchup_engine::{DamageResult, DataProvider};

use crate::cmd::ScenarioArgs;
use crate::error::RunnerError;
use crate::models::DamageReport;

#[derive(Args, Debug)]
pub struct DamageArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Roster index of the combatant
    #[arg(short, long, default_value_t = 0)]
    pub member: usize,

    /// Move name, looked up in the data file
    #[arg(long = "move")]
    pub move_name: String,

    /// Opponent attacks the member instead
    #[arg(long)]
    pub incoming: bool,
}

pub fn execute(args: DamageArgs) -> Result<String, RunnerError> {
    let loaded = args.scenario.load()?;
    let member = loaded.member(args.member)?;
    let data = loaded
        .provider
        .move_data(&args.move_name)
        .ok_or_else(|| RunnerError::UnknownMove(args.move_name.clone()))?;

    let (attacker, defender) = if args.incoming {
        (&loaded.opponent, member)
    } else {
        (member, &loaded.opponent)
    };

    // Moves without power data cannot be priced
    let damage = loaded
        .engine
        .estimate(attacker, defender, data, loaded.weather)
        .ok_or_else(|| RunnerError::UnknownMove(format!("{} (no power data)", data.name)))?;

    let report = DamageReport {
        attacker: attacker.display_name().to_string(),
        defender: defender.display_name().to_string(),
        move_name: data.name.clone(),
        weather: loaded.weather,
        min: damage.min,
        max: damage.max,
        effectiveness: damage.effectiveness,
        min_percent: DamageResult::percent_of(damage.min, defender.max_hp()),
        max_percent: DamageResult::percent_of(damage.max, defender.max_hp()),
    };

    args.scenario.render(&report)
}
