use crate::core::constants::{BASE_LIVES, RUN_SPEED_BASE, STARTING_LANES, TARGET_LETTER_COUNT};
use crate::effects::ActiveEffects;
use crate::inventory::Inventory;
use crate::redemption::BonusState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Top-level screen / run status. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Menu,
    Playing,
    Paused,
    Shop,
    Recharge,
    GameOver,
    Victory,
}

impl GameStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Menu => "Menu",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
            Self::Shop => "Shop",
            Self::Recharge => "Recharge",
            Self::GameOver => "Game Over",
            Self::Victory => "Victory",
        }
    }

    /// True once the run has ended (lost or won).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }

    /// True while a run is in progress, including when suspended by the
    /// pause screen or the shop.
    pub fn is_mid_run(&self) -> bool {
        matches!(self, Self::Playing | Self::Paused | Self::Shop)
    }
}

/// Everything that belongs to a single run. Reset on every start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub status: GameStatus,
    pub score: u64,
    pub lives: u32,
    pub max_lives: u32,
    pub level: u32,
    pub lane_count: u32,
    /// Indices into the target letter sequence collected on this level.
    pub collected_letters: BTreeSet<usize>,
    pub speed: f64,
    pub inventory: Inventory,
    pub active_effects: ActiveEffects,
    pub distance: f64,
    pub gems_collected: u32,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            status: GameStatus::Menu,
            score: 0,
            lives: BASE_LIVES,
            max_lives: BASE_LIVES,
            level: 1,
            lane_count: STARTING_LANES,
            collected_letters: BTreeSet::new(),
            speed: 0.0,
            inventory: Inventory::default(),
            active_effects: ActiveEffects::default(),
            distance: 0.0,
            gems_collected: 0,
        }
    }
}

impl RunState {
    /// The idle state shown on the main menu before any run.
    pub fn new() -> Self {
        Self::default()
    }

    /// A brand new run in progress, seeded from the permanent bonuses.
    /// The bonus inventory replaces the run inventory rather than adding to it.
    pub fn fresh_run(bonus: &BonusState) -> Self {
        let lives = BASE_LIVES.saturating_add(bonus.bonus_lives);
        Self {
            status: GameStatus::Playing,
            lives,
            max_lives: lives,
            speed: RUN_SPEED_BASE,
            inventory: bonus.bonus_inventory,
            ..Self::default()
        }
    }

    /// Letters still missing on this level.
    pub fn letters_remaining(&self) -> usize {
        TARGET_LETTER_COUNT - self.collected_letters.len()
    }

    /// Current speed relative to the base run speed.
    pub fn speed_multiplier(&self) -> f64 {
        self.speed / RUN_SPEED_BASE
    }
}
