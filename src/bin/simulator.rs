//! Letter Runner headless balance simulator
//!
//! Plays many runs with a random input policy through the same
//! `RunnerGame` the real game uses, then prints aggregate results.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N        Number of runs (default: 1000)
//!   --seed N        RNG seed; run i uses seed + i (default: random)
//!   --ticks N       Frames per run before timing out (default: 36000)
//!   --hazard P      Per-frame hazard chance (default: 0.002)
//!   --gem P         Per-frame gem chance (default: 0.02)
//!   --letter P      Per-frame letter chance (default: 0.002)
//!   --redeem CODE   Redeem a bonus code before simulating (repeatable)
//!   --verbose       Per-run output
//!   --quiet         Only the summary

use letter_runner::redemption::redeem_key;
use letter_runner::simulator::{run_simulation, SimConfig};
use std::process;

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    match value.and_then(|v| v.parse().ok()) {
        Some(n) => n,
        None => {
            eprintln!("{flag} requires a number");
            process::exit(1);
        }
    }
}

fn parse_chance(flag: &str, value: Option<&String>) -> f64 {
    let chance: f64 = parse_number(flag, value);
    if !(0.0..=1.0).contains(&chance) {
        eprintln!("{flag} must be between 0 and 1");
        process::exit(1);
    }
    chance
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                config.num_runs = parse_number("--runs", args.get(i));
            }
            "--seed" => {
                i += 1;
                config.seed = Some(parse_number("--seed", args.get(i)));
            }
            "--ticks" => {
                i += 1;
                config.max_ticks_per_run = parse_number("--ticks", args.get(i));
            }
            "--hazard" => {
                i += 1;
                config.hazard_chance = parse_chance("--hazard", args.get(i));
            }
            "--gem" => {
                i += 1;
                config.gem_chance = parse_chance("--gem", args.get(i));
            }
            "--letter" => {
                i += 1;
                config.letter_chance = parse_chance("--letter", args.get(i));
            }
            "--redeem" => {
                i += 1;
                let Some(code) = args.get(i) else {
                    eprintln!("--redeem requires a code");
                    process::exit(1);
                };
                let result = redeem_key(code, &mut config.bonus);
                if !result.success {
                    eprintln!("{}: {}", code, result.message);
                    process::exit(1);
                }
            }
            "--verbose" => config.verbosity = 2,
            "--quiet" => config.verbosity = 0,
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn print_usage() {
    eprintln!(
        "Letter Runner Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Number of runs (default: 1000)\n\
         \x20 --seed N        RNG seed (default: random)\n\
         \x20 --ticks N       Frames per run before timing out (default: 36000)\n\
         \x20 --hazard P      Per-frame hazard chance (default: 0.002)\n\
         \x20 --gem P         Per-frame gem chance (default: 0.02)\n\
         \x20 --letter P      Per-frame letter chance (default: 0.002)\n\
         \x20 --redeem CODE   Redeem a bonus code first (repeatable)\n\
         \x20 --verbose       Per-run output\n\
         \x20 --quiet         Only the summary\n\
         \x20 --help, -h      Show this help"
    );
}

fn main() {
    env_logger::init();
    let config = parse_args();

    if config.verbosity >= 1 {
        println!("Letter Runner simulator");
        println!("  Runs:          {}", config.num_runs);
        println!("  Max frames:    {}", config.max_ticks_per_run);
        println!(
            "  Chances:       hazard {} / gem {} / letter {}",
            config.hazard_chance, config.gem_chance, config.letter_chance
        );
        println!(
            "  Bonus:         +{} lives, {} items",
            config.bonus.bonus_lives,
            config.bonus.bonus_inventory.total()
        );
        if let Some(seed) = config.seed {
            println!("  Seed:          {}", seed);
        }
        println!();
    }

    let report = run_simulation(&config);

    if config.verbosity == 0 {
        println!(
            "runs={} victories={} game_overs={} timed_out={} avg_score={:.0} avg_level={:.2}",
            report.num_runs,
            report.victories,
            report.game_overs,
            report.timed_out,
            report.avg_score,
            report.avg_level
        );
    } else {
        report.print();
    }
}
