//! Simulation runner. Drives a real `RunnerGame` with a random input policy;
//! statistics are read back from the operation outcomes.

use super::config::SimConfig;
use super::report::{RunEnd, RunStats, SimReport};
use crate::core::constants::{POTION_COST, SHIELD_COST, TARGET_LETTER_COUNT, TICK_INTERVAL_MS};
use crate::core::game::{DamageOutcome, RunnerGame};
use crate::core::game_state::GameStatus;
use crate::effects::EffectKind;
use crate::progression::LetterOutcome;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const GEM_VALUES: [u64; 4] = [10, 25, 50, 100];

/// Play every configured run and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {:?}, score {}, level {}, distance {:.0}",
                run_idx + 1,
                config.num_runs,
                stats.end,
                stats.final_score,
                stats.final_level,
                stats.distance
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Play one run from the start until it ends or times out.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut game = RunnerGame::with_bonus(config.bonus);
    game.start_game();

    let mut stats = RunStats {
        end: RunEnd::TimedOut,
        final_score: 0,
        final_level: 1,
        distance: 0.0,
        ticks: 0,
        gems_collected: 0,
        items_bought: 0,
        items_used: 0,
        hits_blocked: 0,
    };
    let mut distance = 0.0;

    while stats.ticks < config.max_ticks_per_run && game.status() == GameStatus::Playing {
        stats.ticks += 1;
        game.tick(TICK_INTERVAL_MS);

        distance += game.run().speed * TICK_INTERVAL_MS as f64 / 1000.0;
        game.set_distance(distance);

        if rng.gen_bool(config.gem_chance) {
            let value = GEM_VALUES[rng.gen_range(0..GEM_VALUES.len())];
            game.collect_gem(value);
        }

        if rng.gen_bool(config.letter_chance) {
            let index = rng.gen_range(0..TARGET_LETTER_COUNT);
            if game.collect_letter(index) == LetterOutcome::Victory {
                break;
            }
        }

        if rng.gen_bool(config.hazard_chance) {
            let immune = game.run().active_effects.is_immune();
            if !immune
                && game.is_item_ready(EffectKind::Shield)
                && rng.gen_bool(config.reaction_chance)
                && game.use_item(EffectKind::Shield)
            {
                stats.items_used += 1;
            }
            match game.take_damage() {
                DamageOutcome::Blocked => stats.hits_blocked += 1,
                DamageOutcome::GameOver => break,
                _ => {}
            }
        }

        visit_shop(&mut game, &mut stats);
    }

    game.shutdown();

    let run = game.run();
    stats.end = match run.status {
        GameStatus::Victory => RunEnd::Victory,
        GameStatus::GameOver => RunEnd::GameOver,
        _ => RunEnd::TimedOut,
    };
    stats.final_score = run.score;
    stats.final_level = run.level;
    stats.distance = run.distance;
    stats.gems_collected = run.gems_collected;
    stats
}

/// Keep one shield in reserve, and drink a potion whenever the leftover
/// score still covers a shield.
fn visit_shop(game: &mut RunnerGame, stats: &mut RunStats) {
    let score = game.run().score;
    let wants_shield = game.run().inventory.shield == 0 && score >= SHIELD_COST;
    let wants_potion = !game.run().active_effects.potion && score >= POTION_COST + SHIELD_COST;
    if !wants_shield && !wants_potion {
        return;
    }

    game.open_shop();
    if wants_shield && game.buy_shop_item(EffectKind::Shield) {
        stats.items_bought += 1;
    }
    let potion_bought = wants_potion && game.buy_shop_item(EffectKind::Potion);
    if potion_bought {
        stats.items_bought += 1;
    }
    game.close_shop();

    if potion_bought && game.use_item(EffectKind::Potion) {
        stats.items_used += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_run_terminates() {
        let config = SimConfig::quick(7);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let stats = simulate_single_run(&config, &mut rng);
        assert!(stats.ticks <= config.max_ticks_per_run);
        assert!(stats.final_level >= 1 && stats.final_level <= 3);
    }

    #[test]
    fn test_same_seed_same_result() {
        let config = SimConfig::quick(11);
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.victories, b.victories);
        assert_eq!(a.game_overs, b.game_overs);
        assert_eq!(a.avg_score, b.avg_score);
    }

    #[test]
    fn test_seed_near_max_wraps() {
        let config = SimConfig {
            num_runs: 3,
            seed: Some(u64::MAX - 1),
            max_ticks_per_run: 200,
            ..SimConfig::quick(0)
        };
        let report = run_simulation(&config);
        assert_eq!(report.num_runs, 3);
    }

    #[test]
    fn test_no_hazards_never_game_over() {
        let config = SimConfig {
            hazard_chance: 0.0,
            max_ticks_per_run: 2_000,
            ..SimConfig::quick(3)
        };
        let report = run_simulation(&config);
        assert_eq!(report.game_overs, 0);
        assert_eq!(report.num_runs, 20);
    }
}
