//! Data-driven roster scenarios.
//!
//! Uses `libtest-mimic` to generate one test per case in
//! `tests/fixtures/scenarios.json`, so `cargo test sandstorm` filters.

mod common;

use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use common::fixtures::ScenarioFixture;
use common::helpers::{fixture_path, provider, run_scenario, sanitize_name};
use libtest_mimic::{Arguments, Failed, Trial};

fn main() {
    let args = Arguments::from_args();

    let path = fixture_path("scenarios.json");
    let file = File::open(&path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {}", path.display(), e));
    let fixture: ScenarioFixture =
        serde_json::from_reader(BufReader::new(file)).expect("Failed to parse scenarios.json");

    let provider = Arc::new(provider());

    let tests: Vec<Trial> = fixture
        .cases
        .into_iter()
        .map(|case| {
            let provider = Arc::clone(&provider);
            Trial::test(format!("scenario::{}", sanitize_name(&case.name)), move || {
                run_scenario(&case, &provider).map_err(Failed::from)
            })
        })
        .collect();

    libtest_mimic::run(&args, tests).exit();
}
