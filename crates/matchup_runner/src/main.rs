//! Matchup runner.
//!
//! Loads a JSON scenario (roster, opponent, weather) plus species/move
//! data, runs the engine and prints a JSON report on stdout. Logs go to
//! stderr; set `RUST_LOG=matchup_engine=debug` to see each verdict.
//!
//! Usage:
//!   cargo run -p matchup_runner -- rank scenarios/brock.json
//!   cargo run -p matchup_runner -- analyze scenarios/brock.json --member 0
//!   cargo run -p matchup_runner -- damage scenarios/brock.json --member 0 --move water-gun

mod cmd;
mod error;
mod models;
mod scenario;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cmd::{analyze, damage, rank};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "matchup_runner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the whole roster against the opponent
    Rank(rank::RankArgs),

    /// Analyze one roster member against the opponent
    Analyze(analyze::AnalyzeArgs),

    /// Estimate one move's damage range
    Damage(damage::DamageArgs),
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn write_usage(out: &mut impl std::io::Write) -> std::io::Result<()> {
    use clap::CommandFactory;
    Cli::command().write_help(out)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let outcome = match cli.command {
        Some(Commands::Rank(args)) => rank::execute(args),
        Some(Commands::Analyze(args)) => analyze::execute(args),
        Some(Commands::Damage(args)) => damage::execute(args),
        None => {
            // Require an explicit subcommand
            return match write_usage(&mut std::io::stdout()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("error: {}", err);
                    ExitCode::FAILURE
                }
            };
        }
    };

    match outcome {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Closed;

    impl std::io::Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_usage_lists_subcommands() {
        let mut out = Vec::new();
        write_usage(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("rank"));
        assert!(text.contains("damage"));
    }

    #[test]
    fn test_usage_write_failure_is_reported() {
        assert!(write_usage(&mut Closed).is_err());
    }
}
