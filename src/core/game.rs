//! The run state machine: the single owned container that every input
//! adapter mutates and every presentation layer reads.

use crate::core::constants::ROCKET_SPEED_BOOST;
use crate::core::game_state::{GameStatus, RunState};
use crate::effects::{EffectKind, EffectTimers};
use crate::inventory::{gem_points, try_buy_item, ShopItem};
use crate::progression::{self, LetterOutcome};
use crate::redemption::{self, BonusState, RedeemResult};
use serde::Serialize;

/// Result of a collision with a hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Not playing; nothing happened.
    Ignored,
    /// Shield or rocket absorbed the hit.
    Blocked,
    /// One life lost, `remaining` left.
    LifeLost { remaining: u32 },
    /// Last life lost; the run is over.
    GameOver,
}

/// An effect that ran out during [`RunnerGame::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectExpired {
    pub kind: EffectKind,
    /// Clock time the effect was scheduled to end.
    pub at_ms: u64,
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSnapshot {
    pub run: RunState,
    pub bonus: BonusState,
    pub clock_ms: u64,
    /// Remaining time for each running effect, in [`EffectKind::ALL`] order.
    pub effect_remaining_ms: Vec<(EffectKind, u64)>,
}

/// Owns the current run, the permanent bonuses and the effect timers.
#[derive(Debug, Clone, Default)]
pub struct RunnerGame {
    run: RunState,
    bonus: BonusState,
    timers: EffectTimers,
    clock_ms: u64,
    /// True while the rocket's speed boost is folded into `run.speed`.
    rocket_boost_applied: bool,
}

impl RunnerGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at the menu with previously earned bonuses.
    pub fn with_bonus(bonus: BonusState) -> Self {
        Self {
            bonus,
            ..Self::default()
        }
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    pub fn bonus(&self) -> &BonusState {
        &self.bonus
    }

    pub fn status(&self) -> GameStatus {
        self.run.status
    }

    pub fn timers(&self) -> &EffectTimers {
        &self.timers
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn snapshot(&self) -> RunSnapshot {
        let effect_remaining_ms = EffectKind::ALL
            .iter()
            .filter_map(|kind| {
                self.timers
                    .remaining_ms(*kind, self.clock_ms)
                    .map(|ms| (*kind, ms))
            })
            .collect();
        RunSnapshot {
            run: self.run.clone(),
            bonus: self.bonus,
            clock_ms: self.clock_ms,
            effect_remaining_ms,
        }
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Begin a new run from any status, keeping the bonus state.
    pub fn start_game(&mut self) {
        self.timers.cancel_all();
        self.rocket_boost_applied = false;
        self.run = RunState::fresh_run(&self.bonus);
        log::info!(
            "Run started: {} lives, {} bonus items",
            self.run.lives,
            self.run.inventory.total()
        );
    }

    pub fn restart_game(&mut self) {
        log::debug!("Restarting from {}", self.run.status.name());
        self.start_game();
    }

    pub fn pause_game(&mut self) -> bool {
        self.transition(&[GameStatus::Playing], GameStatus::Paused)
    }

    pub fn resume_game(&mut self) -> bool {
        self.transition(&[GameStatus::Paused, GameStatus::Shop], GameStatus::Playing)
    }

    /// Abandon the run and return to the menu. In-run progress is discarded
    /// and running effects are cut short so nothing fires into a later run.
    pub fn quit_to_menu(&mut self) {
        self.timers.cancel_all();
        self.rocket_boost_applied = false;
        self.run = RunState::new();
    }

    pub fn open_shop(&mut self) -> bool {
        self.transition(&[GameStatus::Playing], GameStatus::Shop)
    }

    pub fn close_shop(&mut self) -> bool {
        self.transition(&[GameStatus::Shop], GameStatus::Playing)
    }

    pub fn open_recharge(&mut self) -> bool {
        self.transition(&[GameStatus::Menu], GameStatus::Recharge)
    }

    pub fn close_recharge(&mut self) -> bool {
        self.transition(&[GameStatus::Recharge], GameStatus::Menu)
    }

    /// Cancel every pending timer. Call before discarding the game so no
    /// expiry is left targeting it.
    pub fn shutdown(&mut self) {
        self.timers.cancel_all();
        self.run.active_effects.clear();
        self.remove_rocket_boost();
    }

    fn transition(&mut self, from: &[GameStatus], to: GameStatus) -> bool {
        if !from.contains(&self.run.status) {
            log::debug!(
                "Ignored transition {} -> {}",
                self.run.status.name(),
                to.name()
            );
            return false;
        }
        self.run.status = to;
        true
    }

    // ── Collisions and pickups ──────────────────────────────────

    pub fn take_damage(&mut self) -> DamageOutcome {
        if self.run.status != GameStatus::Playing {
            return DamageOutcome::Ignored;
        }
        if self.run.active_effects.is_immune() {
            return DamageOutcome::Blocked;
        }

        if self.run.lives > 1 {
            self.run.lives -= 1;
            DamageOutcome::LifeLost {
                remaining: self.run.lives,
            }
        } else {
            self.run.lives = 0;
            self.run.status = GameStatus::GameOver;
            self.run.speed = 0.0;
            log::info!(
                "Game over: score {}, level {}, distance {:.0}",
                self.run.score,
                self.run.level,
                self.run.distance
            );
            DamageOutcome::GameOver
        }
    }

    /// Score a gem. Returns the points awarded (0 outside of play).
    pub fn collect_gem(&mut self, value: u64) -> u64 {
        if self.run.status != GameStatus::Playing {
            return 0;
        }
        let points = gem_points(value, &self.run.active_effects);
        self.run.score = self.run.score.saturating_add(points);
        self.run.gems_collected = self.run.gems_collected.saturating_add(1);
        points
    }

    pub fn collect_letter(&mut self, index: usize) -> LetterOutcome {
        let outcome = progression::collect_letter(&mut self.run, index);
        match outcome {
            LetterOutcome::LevelAdvanced { level } => {
                log::info!(
                    "Reached level {} with {} lanes",
                    level,
                    self.run.lane_count
                );
            }
            LetterOutcome::Victory => {
                log::info!("Victory! Final score {}", self.run.score);
            }
            _ => {}
        }
        outcome
    }

    pub fn advance_level(&mut self) -> bool {
        progression::advance_level(&mut self.run)
    }

    /// Record distance travelled. Only moves forward, and only in play.
    pub fn set_distance(&mut self, distance: f64) {
        if self.run.status != GameStatus::Playing || !distance.is_finite() {
            return;
        }
        if distance > self.run.distance {
            self.run.distance = distance;
        }
    }

    // ── Shop and items ──────────────────────────────────────────

    /// Purchases are open during play and on the shop screen only.
    pub fn buy_item(&mut self, kind: EffectKind, cost: u64) -> bool {
        if !matches!(self.run.status, GameStatus::Playing | GameStatus::Shop) {
            return false;
        }
        try_buy_item(kind, cost, &mut self.run.score, &mut self.run.inventory)
    }

    /// Buy at the listed shop price.
    pub fn buy_shop_item(&mut self, kind: EffectKind) -> bool {
        self.buy_item(kind, ShopItem::for_kind(kind).cost)
    }

    /// Held and not already running. Informational: [`use_item`] still
    /// accepts a running effect and restarts its timer.
    ///
    /// [`use_item`]: RunnerGame::use_item
    pub fn is_item_ready(&self, kind: EffectKind) -> bool {
        self.run.inventory.count(kind) > 0 && !self.run.active_effects.is_active(kind)
    }

    /// Spend one unit of `kind` and start (or restart) its effect.
    /// Returns false without side effects if none are held or the run is
    /// not in play.
    pub fn use_item(&mut self, kind: EffectKind) -> bool {
        if self.run.status != GameStatus::Playing || !self.run.inventory.take_one(kind) {
            return false;
        }

        self.run.active_effects.set(kind, true);
        if self.timers.arm(kind, self.clock_ms).is_some() {
            log::debug!("{} timer restarted", kind.name());
        } else {
            log::debug!("{} activated", kind.name());
        }

        if kind == EffectKind::Rocket && !self.rocket_boost_applied {
            self.run.speed += ROCKET_SPEED_BOOST;
            self.rocket_boost_applied = true;
        }
        true
    }

    // ── Bonuses ─────────────────────────────────────────────────

    /// Redeem a code into the permanent bonus state. The live run is not
    /// touched; bonuses apply from the next start.
    pub fn redeem_key(&mut self, code: &str) -> RedeemResult {
        redemption::redeem_key(code, &mut self.bonus)
    }

    // ── Time ────────────────────────────────────────────────────

    /// Advance the clock by `dt_ms` and apply every expiry that came due,
    /// earliest first.
    pub fn tick(&mut self, dt_ms: u64) -> Vec<EffectExpired> {
        self.clock_ms = self.clock_ms.saturating_add(dt_ms);
        self.timers
            .take_due(self.clock_ms)
            .into_iter()
            .map(|(kind, expiry)| {
                self.expire(kind);
                EffectExpired {
                    kind,
                    at_ms: expiry.deadline_ms,
                }
            })
            .collect()
    }

    fn expire(&mut self, kind: EffectKind) {
        self.run.active_effects.set(kind, false);
        if kind == EffectKind::Rocket {
            self.remove_rocket_boost();
        }
        log::debug!("{} expired", kind.name());
    }

    fn remove_rocket_boost(&mut self) {
        if self.rocket_boost_applied {
            self.run.speed = (self.run.speed - ROCKET_SPEED_BOOST).max(0.0);
            self.rocket_boost_applied = false;
        }
    }
}
