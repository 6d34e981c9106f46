//! Shared test utilities for the matchup tests.
//!
//! Loads the species/move data under `tests/fixtures/` and builds
//! combatants from the same JSON shape the scenario files use.

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
