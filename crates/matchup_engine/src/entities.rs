//! Combatants and the blueprint used to build them.
//!
//! `CombatantConfig` is a builder: set species data, level, moves and
//! battle state, then call `build()`. Shapes the engine cannot analyze
//! (no types, three types, five moves, level 0) are rejected there and
//! nowhere else.

use tracing::trace;

use crate::data::DataProvider;
use crate::error::{BuildError, DataError};
use crate::moves::{MoveData, MAX_MOVES};
use crate::state::Status;
use crate::stats::{BattleStat, BoostStat, StatBlock, StatStages, Stats, DEFAULT_LEVEL};
use crate::types::Type;

/// Maximum types per combatant
pub const MAX_TYPES: usize = 2;

/// Blueprint for a roster member or an opponent.
#[derive(Clone, Debug)]
pub struct CombatantConfig {
    pub species: String,
    pub nickname: Option<String>,
    /// Level (1-100)
    pub level: u8,
    pub types: Vec<Type>,
    pub base_stats: Stats,
    /// Move slots; `None` is a slot whose data is unknown
    pub moves: Vec<Option<MoveData>>,
    pub stages: StatStages,
    pub status: Status,
    /// Current HP as a percentage of max HP (defaults to full)
    pub hp_percent: Option<f64>,
    /// Pinned real stats, applied after projection
    pub stat_overrides: Vec<(BattleStat, u16)>,
}

impl CombatantConfig {
    pub fn new(species: impl Into<String>, types: &[Type], base_stats: Stats) -> Self {
        Self {
            species: species.into(),
            nickname: None,
            level: DEFAULT_LEVEL,
            types: types.to_vec(),
            base_stats,
            moves: Vec::new(),
            stages: StatStages::default(),
            status: Status::None,
            hp_percent: None,
            stat_overrides: Vec::new(),
        }
    }

    /// Resolve species and move names through a data provider.
    ///
    /// A move name the provider does not know becomes an empty slot.
    pub fn from_provider<P: DataProvider + ?Sized>(
        provider: &P,
        species: &str,
        level: u8,
        move_names: &[&str],
    ) -> Result<Self, DataError> {
        let data = provider
            .species(species)
            .ok_or_else(|| DataError::UnknownSpecies(species.to_string()))?;

        let moves = move_names
            .iter()
            .map(|name| {
                let resolved = provider.move_data(name).cloned();
                if resolved.is_none() {
                    trace!(species, move_name = *name, "move not found in provider, slot left empty");
                }
                resolved
            })
            .collect();

        Ok(Self::new(data.name.clone(), &data.types, data.base_stats)
            .level(level)
            .moves(moves))
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn moves(mut self, moves: Vec<Option<MoveData>>) -> Self {
        self.moves = moves;
        self
    }

    /// Append a known move
    pub fn with_move(mut self, data: MoveData) -> Self {
        self.moves.push(Some(data));
        self
    }

    pub fn stages(mut self, stages: StatStages) -> Self {
        self.stages = stages.clamped();
        self
    }

    pub fn stage(mut self, stat: BoostStat, stage: i8) -> Self {
        self.stages.set(stat, stage);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn hp_percent(mut self, percent: f64) -> Self {
        self.hp_percent = Some(percent);
        self
    }

    pub fn override_stat(mut self, stat: BattleStat, value: u16) -> Self {
        self.stat_overrides.push((stat, value));
        self
    }

    /// Validate the shape and build the combatant.
    pub fn build(self) -> Result<Combatant, BuildError> {
        if self.types.is_empty() {
            return Err(BuildError::NoTypes(self.species));
        }
        if self.types.len() > MAX_TYPES {
            return Err(BuildError::TooManyTypes {
                name: self.species,
                count: self.types.len(),
            });
        }
        if self.moves.len() > MAX_MOVES {
            return Err(BuildError::TooManyMoves {
                name: self.species,
                count: self.moves.len(),
            });
        }
        if self.level == 0 || self.level > 100 {
            return Err(BuildError::InvalidLevel(self.level));
        }

        let mut moves: [Option<MoveData>; MAX_MOVES] = Default::default();
        for (slot, data) in moves.iter_mut().zip(self.moves) {
            *slot = data;
        }

        let mut stats = StatBlock::derived(&self.base_stats, self.level);
        for (stat, value) in &self.stat_overrides {
            stats.pin(*stat, *value);
        }

        let mut combatant = Combatant {
            species: self.species,
            nickname: self.nickname,
            level: self.level,
            types: self.types,
            base_stats: self.base_stats,
            stats,
            max_hp_override: None,
            current_hp: 0,
            stages: self.stages,
            status: self.status,
            moves,
        };
        combatant.current_hp = combatant.max_hp();
        if let Some(percent) = self.hp_percent {
            combatant.set_hp_percent(percent);
        }
        Ok(combatant)
    }
}

/// A combatant snapshot the analyzer reads.
#[derive(Clone, Debug, PartialEq)]
pub struct Combatant {
    species: String,
    nickname: Option<String>,
    level: u8,
    types: Vec<Type>,
    base_stats: Stats,
    stats: StatBlock,
    max_hp_override: Option<u16>,
    current_hp: u16,
    stages: StatStages,
    status: Status,
    moves: [Option<MoveData>; MAX_MOVES],
}

impl Combatant {
    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// Nickname if set, otherwise species
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.species)
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn primary_type(&self) -> Option<Type> {
        self.types.first().copied()
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    pub fn base_stats(&self) -> &Stats {
        &self.base_stats
    }

    pub fn stat_block(&self) -> &StatBlock {
        &self.stats
    }

    /// Real stats, pinned values included.
    pub fn real_stats(&self) -> Stats {
        self.stats.resolve()
    }

    #[inline]
    pub fn stat(&self, stat: BattleStat) -> u16 {
        self.stats.get(stat)
    }

    pub fn max_hp(&self) -> u16 {
        self.max_hp_override
            .unwrap_or_else(|| self.stats.get(BattleStat::Hp))
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    pub fn stages(&self) -> &StatStages {
        &self.stages
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// All four slots, empty ones included.
    pub fn move_slots(&self) -> &[Option<MoveData>; MAX_MOVES] {
        &self.moves
    }

    /// Moves whose data is known.
    pub fn known_moves(&self) -> impl Iterator<Item = &MoveData> {
        self.moves.iter().flatten()
    }

    pub fn has_known_moves(&self) -> bool {
        self.moves.iter().any(Option::is_some)
    }

    pub fn knows_status_move(&self) -> bool {
        self.known_moves().any(MoveData::is_status)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Change level: every stat is re-derived and pins are dropped.
    ///
    /// A combatant at full HP stays at full HP; otherwise current HP is
    /// clamped to the new maximum.
    pub fn set_level(&mut self, level: u8) {
        let was_full = self.current_hp >= self.max_hp();
        self.level = level.clamp(1, 100);
        self.stats = StatBlock::derived(&self.base_stats, self.level);
        self.max_hp_override = None;
        self.reconcile_hp(was_full);
    }

    /// Pin a real stat. Pinning HP also moves max HP.
    pub fn override_stat(&mut self, stat: BattleStat, value: u16) {
        let was_full = self.current_hp >= self.max_hp();
        self.stats.pin(stat, value);
        self.reconcile_hp(was_full);
    }

    pub fn override_max_hp(&mut self, value: u16) {
        let was_full = self.current_hp >= self.max_hp();
        self.max_hp_override = Some(value);
        self.reconcile_hp(was_full);
    }

    pub fn set_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.max_hp());
    }

    /// Set current HP to `percent` of max, rounded to the nearest point.
    pub fn set_hp_percent(&mut self, percent: f64) {
        let percent = if percent.is_nan() { 100.0 } else { percent.clamp(0.0, 100.0) };
        let hp = (self.max_hp() as f64 * percent / 100.0).round() as u16;
        self.set_hp(hp);
    }

    pub fn set_stage(&mut self, stat: BoostStat, stage: i8) {
        self.stages.set(stat, stage);
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn reconcile_hp(&mut self, was_full: bool) {
        let max = self.max_hp();
        self.current_hp = if was_full { max } else { self.current_hp.min(max) };
    }
}
