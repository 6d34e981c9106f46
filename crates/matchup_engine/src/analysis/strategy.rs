//! Sacrifice-then-clean plans for matchups with no safe answer.
//!
//! A cleaner finishes the opponent within `cleaner_max_turns`. A
//! sacrifice gets a useful action off before going down: it either moves
//! first or is not rated Dead, and it either chips at least
//! `sacrifice_min_percent` or has a status move to throw.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entities::Combatant;

use super::config::ScoringConfig;
use super::matchup::SafetyRating;
use super::roster::RankedMatchup;

/// One step of a plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStep {
    /// Roster index
    pub index: usize,
    pub name: String,
    pub move_label: Option<String>,
}

/// Lead with the sacrifice, bring in the cleaner when it faints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattlePlan {
    pub sacrifice: PlanStep,
    pub cleaner: PlanStep,
}

impl fmt::Display for BattlePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let with = |step: &PlanStep| {
            step.move_label
                .as_ref()
                .map(|m| format!(" ({})", m))
                .unwrap_or_default()
        };
        write!(
            f,
            "lead {}{}, then clean with {}{}",
            self.sacrifice.name,
            with(&self.sacrifice),
            self.cleaner.name,
            with(&self.cleaner)
        )
    }
}

fn is_cleaner(entry: &RankedMatchup<'_>, config: &ScoringConfig) -> bool {
    entry.result.turns_to_win <= config.cleaner_max_turns
}

fn is_sacrifice(entry: &RankedMatchup<'_>, config: &ScoringConfig) -> bool {
    let result = &entry.result;
    let acts = result.outspeeds() || result.rating != SafetyRating::Dead;
    let useful = result.best_outgoing_pct() >= config.sacrifice_min_percent
        || entry.combatant.knows_status_move();
    acts && useful
}

fn sacrifice_move(entry: &RankedMatchup<'_>, config: &ScoringConfig) -> Option<String> {
    let result = &entry.result;
    if result.best_outgoing_pct() >= config.sacrifice_min_percent {
        result.best_outgoing.as_ref().map(|m| m.label.clone())
    } else {
        first_status_move(entry.combatant)
    }
}

fn first_status_move(combatant: &Combatant) -> Option<String> {
    combatant
        .known_moves()
        .find(|m| m.is_status())
        .map(|m| m.name.clone())
}

fn step(entry: &RankedMatchup<'_>, move_label: Option<String>) -> PlanStep {
    PlanStep {
        index: entry.index,
        name: entry.result.name.clone(),
        move_label,
    }
}

/// Propose a plan when the best ranked matchup is Risky or Dead.
///
/// Returns `None` when the top result is good enough on its own, or when
/// no sacrifice/cleaner pair of distinct members exists.
pub fn suggest(
    ranked: &[RankedMatchup<'_>],
    opponent: &Combatant,
    config: &ScoringConfig,
) -> Option<BattlePlan> {
    let top = ranked.first()?;
    if !matches!(top.result.rating, SafetyRating::Risky | SafetyRating::Dead) {
        return None;
    }

    let sacrifices: Vec<&RankedMatchup<'_>> =
        ranked.iter().filter(|e| is_sacrifice(e, config)).collect();
    let sacrifice = sacrifices
        .iter()
        .find(|e| !is_cleaner(e, config))
        .or_else(|| sacrifices.first())
        .copied();

    let Some(sacrifice) = sacrifice else {
        debug!(opponent = opponent.display_name(), "no sacrifice candidate");
        return None;
    };
    let Some(cleaner) = ranked
        .iter()
        .find(|e| e.index != sacrifice.index && is_cleaner(e, config))
    else {
        debug!(opponent = opponent.display_name(), "no cleaner candidate");
        return None;
    };

    let plan = BattlePlan {
        sacrifice: step(sacrifice, sacrifice_move(sacrifice, config)),
        cleaner: step(cleaner, cleaner.result.best_outgoing.as_ref().map(|m| m.label.clone())),
    };
    debug!(opponent = opponent.display_name(), plan = %plan, "strategy suggested");
    Some(plan)
}
