use letter_runner::build_info;
use letter_runner::core::constants::TARGET_LETTERS;
use letter_runner::redemption::{bonus_save_path, load_bonus_or_default, redeem_key, save_bonus};
use letter_runner::{EffectKind, IntentOutcome, RunnerGame, RunnerIntent};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

fn print_help() {
    println!("Letter Runner - endless runner game engine\n");
    println!("Usage: letter-runner [command]\n");
    println!("Commands:");
    println!("  play           Drive a run from the console (default)");
    println!("  redeem CODE    Redeem a bonus code into the saved bonus state");
    println!("  bonus          Show the saved bonus state");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
}

fn print_console_help() {
    println!("Intents:");
    println!("  start | restart | pause | resume | quit | shop | close-shop");
    println!("  recharge | close-recharge | hit | gem N | letter I | distance D");
    println!("  buy KIND [COST] | use KIND | redeem CODE");
    println!("Console:");
    println!("  status | json | wait MS | help | exit");
    println!("Kinds: shield, rocket, potion, magnet");
}

fn print_status(game: &RunnerGame) {
    let run = game.run();
    let letters: String = TARGET_LETTERS
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if run.collected_letters.contains(&i) {
                *c
            } else {
                '_'
            }
        })
        .collect();
    println!(
        "[{}] score {} | lives {}/{} | level {} | lanes {} | speed {:.1} | distance {:.0} | letters {}",
        run.status.name(),
        run.score,
        run.lives,
        run.max_lives,
        run.level,
        run.lane_count,
        run.speed,
        run.distance,
        letters
    );
    let held: Vec<String> = EffectKind::ALL
        .iter()
        .map(|kind| {
            let active = if run.active_effects.is_active(*kind) {
                "*"
            } else {
                ""
            };
            format!("{}{} x{}", kind.name(), active, run.inventory.count(*kind))
        })
        .collect();
    println!("  items: {}", held.join(", "));
}

fn describe(outcome: &IntentOutcome) -> String {
    match outcome {
        IntentOutcome::Transition { changed: true } => "ok".to_string(),
        IntentOutcome::Transition { changed: false } => "not allowed right now".to_string(),
        IntentOutcome::Damage(damage) => format!("{:?}", damage),
        IntentOutcome::Gem { points } => format!("+{} points", points),
        IntentOutcome::Letter(letter) => format!("{:?}", letter),
        IntentOutcome::Purchase { success: true } => "purchased".to_string(),
        IntentOutcome::Purchase { success: false } => "not enough score".to_string(),
        IntentOutcome::ItemUsed { success: true } => "activated".to_string(),
        IntentOutcome::ItemUsed { success: false } => "none left".to_string(),
        IntentOutcome::Redeemed(result) => result.message.clone(),
        IntentOutcome::DistanceSet => "ok".to_string(),
    }
}

/// Whole milliseconds in `elapsed`, saturating for absurdly long idles.
fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn advance_clock(game: &mut RunnerGame, dt_ms: u64) {
    for expired in game.tick(dt_ms) {
        println!("  {} wore off", expired.kind.name());
    }
}

fn run_console() -> Result<(), Box<dyn Error>> {
    let save_path = bonus_save_path()?;
    let mut game = RunnerGame::with_bonus(load_bonus_or_default(&save_path));
    log::info!("Loaded bonus state from {}", save_path.display());

    println!("{}", build_info::version_string());
    print_console_help();
    print_status(&game);

    let stdin = io::stdin();
    let mut last_input = Instant::now();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        // Timers run on wall-clock time between commands
        let now = Instant::now();
        advance_clock(&mut game, duration_ms(now.duration_since(last_input)));
        last_input = now;

        let trimmed = line.trim();
        let mut words = trimmed.split_whitespace();
        match words.next() {
            None => continue,
            Some("exit") => break,
            Some("help") => print_console_help(),
            Some("status") => print_status(&game),
            Some("json") => println!("{}", serde_json::to_string_pretty(&game.snapshot())?),
            Some("wait") => match words.next().and_then(|ms| ms.parse::<u64>().ok()) {
                Some(ms) => {
                    advance_clock(&mut game, ms);
                    print_status(&game);
                }
                None => println!("wait requires milliseconds"),
            },
            Some(_) => match RunnerIntent::parse(trimmed) {
                Ok(intent) => {
                    let outcome = game.apply(intent);
                    println!("  {}", describe(&outcome));
                    if matches!(&outcome, IntentOutcome::Redeemed(result) if result.success) {
                        if let Err(e) = save_bonus(&save_path, game.bonus()) {
                            log::warn!("Failed to save bonus state: {}", e);
                        }
                    }
                    print_status(&game);
                }
                Err(e) => println!("  {}", e),
            },
        }
    }

    game.shutdown();
    Ok(())
}

fn run_redeem(code: &str) -> Result<bool, Box<dyn Error>> {
    let save_path = bonus_save_path()?;
    let mut bonus = load_bonus_or_default(&save_path);
    let result = redeem_key(code, &mut bonus);
    println!("{}", result.message);
    if result.success {
        save_bonus(&save_path, &bonus)?;
        println!(
            "Bonus now: +{} lives, {} starting items",
            bonus.bonus_lives,
            bonus.bonus_inventory.total()
        );
    }
    Ok(result.success)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("play") => run_console()?,
        Some("redeem") => {
            let code = args[2..].join(" ");
            if code.trim().is_empty() {
                eprintln!("Usage: letter-runner redeem CODE");
                std::process::exit(1);
            }
            if !run_redeem(&code)? {
                std::process::exit(1);
            }
        }
        Some("bonus") => {
            let bonus = load_bonus_or_default(&bonus_save_path()?);
            println!("{}", serde_json::to_string_pretty(&bonus)?);
        }
        Some("--version") | Some("-v") => println!("{}", build_info::version_string()),
        Some("--help") | Some("-h") => print_help(),
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Run 'letter-runner --help' for usage.");
            std::process::exit(1);
        }
    }
    Ok(())
}
