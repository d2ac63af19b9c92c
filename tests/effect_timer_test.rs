//! Integration test: power-up effects and their expiry timers
//!
//! Time is simulated by ticking the game clock, the same way the host loop
//! does at ~60 FPS.

use letter_runner::core::constants::{RUN_SPEED_BASE, TICK_INTERVAL_MS};
use letter_runner::{BonusState, DamageOutcome, EffectKind, Inventory, RunnerGame};

fn stocked(count: u32) -> RunnerGame {
    let mut game = RunnerGame::with_bonus(BonusState {
        bonus_lives: 0,
        bonus_inventory: Inventory::uniform(count),
    });
    game.start_game();
    game
}

/// Tick in frame-sized steps until `total_ms` has elapsed.
fn run_frames(game: &mut RunnerGame, total_ms: u64) -> Vec<EffectKind> {
    let mut expired = Vec::new();
    let mut elapsed = 0;
    while elapsed < total_ms {
        let step = TICK_INTERVAL_MS.min(total_ms - elapsed);
        expired.extend(game.tick(step).into_iter().map(|e| e.kind));
        elapsed += step;
    }
    expired
}

#[test]
fn test_magnet_expires_after_four_seconds() {
    let mut game = RunnerGame::with_bonus(BonusState {
        bonus_lives: 0,
        bonus_inventory: Inventory {
            magnet: 1,
            ..Inventory::default()
        },
    });
    game.start_game();

    assert!(game.use_item(EffectKind::Magnet));
    assert_eq!(game.run().inventory.magnet, 0);
    assert!(game.run().active_effects.magnet);

    run_frames(&mut game, 3_999);
    assert!(game.run().active_effects.magnet);

    let expired = run_frames(&mut game, 1);
    assert_eq!(expired, vec![EffectKind::Magnet]);
    assert!(!game.run().active_effects.magnet);
    assert_eq!(game.run().inventory.magnet, 0);
}

#[test]
fn test_single_large_tick_fires_expiry() {
    let mut game = stocked(1);
    game.use_item(EffectKind::Magnet);
    let expired = game.tick(10_000);
    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].kind, EffectKind::Magnet);
    assert_eq!(expired[0].at_ms, 4_000);
}

#[test]
fn test_durations_per_kind() {
    let mut game = stocked(1);
    for kind in EffectKind::ALL {
        game.use_item(kind);
    }

    let at_four = game.tick(4_000);
    let kinds: Vec<EffectKind> = at_four.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EffectKind::Rocket, EffectKind::Magnet]);
    assert!(game.run().active_effects.shield);
    assert!(game.run().active_effects.potion);

    let at_five = game.tick(1_000);
    let kinds: Vec<EffectKind> = at_five.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EffectKind::Shield, EffectKind::Potion]);
    assert!(!game.run().active_effects.any_active());
}

#[test]
fn test_reactivation_extends_instead_of_stacking() {
    let mut game = stocked(2);
    game.use_item(EffectKind::Shield);
    run_frames(&mut game, 3_000);

    // Second activation consumes another unit and restarts the clock
    assert!(game.use_item(EffectKind::Shield));
    assert_eq!(game.run().inventory.shield, 0);

    // The first activation's deadline (5s) passes without ending the effect
    run_frames(&mut game, 2_500);
    assert!(game.run().active_effects.shield);
    assert_eq!(game.take_damage(), DamageOutcome::Blocked);

    run_frames(&mut game, 2_500);
    assert!(!game.run().active_effects.shield);
}

#[test]
fn test_immunity_ends_with_effect() {
    let mut game = stocked(1);
    game.use_item(EffectKind::Shield);
    assert_eq!(game.take_damage(), DamageOutcome::Blocked);
    game.tick(5_000);
    assert_eq!(game.take_damage(), DamageOutcome::LifeLost { remaining: 2 });
}

#[test]
fn test_rocket_speed_boost_and_restore() {
    let mut game = stocked(1);
    game.use_item(EffectKind::Rocket);
    assert!((game.run().speed - (RUN_SPEED_BASE + 30.0)).abs() < 1e-9);

    game.tick(4_000);
    assert!((game.run().speed - RUN_SPEED_BASE).abs() < 1e-9);
}

#[test]
fn test_rocket_restore_keeps_letter_gains() {
    let mut game = stocked(1);
    game.use_item(EffectKind::Rocket);
    game.collect_letter(0);
    game.collect_letter(1);
    game.tick(4_000);

    let expected = RUN_SPEED_BASE + 2.0 * RUN_SPEED_BASE * 0.1;
    assert!((game.run().speed - expected).abs() < 1e-9);
}

#[test]
fn test_restart_cancels_pending_expiries() {
    let mut game = stocked(1);
    game.use_item(EffectKind::Rocket);
    game.use_item(EffectKind::Shield);
    game.restart_game();

    assert_eq!(game.timers().pending_count(), 0);
    assert!(game.tick(10_000).is_empty());
    // The old rocket must not claw speed back from the new run
    assert!((game.run().speed - RUN_SPEED_BASE).abs() < 1e-9);
}

#[test]
fn test_timers_run_while_paused() {
    let mut game = stocked(1);
    game.use_item(EffectKind::Potion);
    game.pause_game();
    game.tick(5_000);
    game.resume_game();
    assert!(!game.run().active_effects.potion);
}

#[test]
fn test_shutdown_cancels_everything() {
    let mut game = stocked(1);
    for kind in EffectKind::ALL {
        game.use_item(kind);
    }
    game.shutdown();
    assert_eq!(game.timers().pending_count(), 0);
    assert!(!game.run().active_effects.any_active());
    assert!(game.tick(60_000).is_empty());
}

#[test]
fn test_active_flag_matches_pending_timer() {
    let mut game = stocked(3);
    let script = [
        (EffectKind::Shield, 700),
        (EffectKind::Magnet, 2_100),
        (EffectKind::Shield, 4_900),
        (EffectKind::Rocket, 300),
        (EffectKind::Potion, 6_000),
        (EffectKind::Magnet, 4_000),
    ];
    for (kind, wait) in script {
        game.use_item(kind);
        run_frames(&mut game, wait);
        for k in EffectKind::ALL {
            assert_eq!(
                game.run().active_effects.is_active(k),
                game.timers().is_pending(k),
                "{} flag out of sync with its timer",
                k.name()
            );
        }
    }
}
