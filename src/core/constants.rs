// Run speed
pub const RUN_SPEED_BASE: f64 = 22.5;
pub const LETTER_SPEED_BONUS_RATIO: f64 = 0.10;
pub const LEVEL_SPEED_BONUS_RATIO: f64 = 0.40;
pub const ROCKET_SPEED_BOOST: f64 = 30.0;

// Lives
pub const BASE_LIVES: u32 = 3;

// Levels and lanes
pub const MAX_LEVEL: u32 = 3;
pub const STARTING_LANES: u32 = 3;
pub const LANES_PER_LEVEL: u32 = 2;
pub const MAX_LANES: u32 = 9;

// Scoring
pub const VICTORY_SCORE_BONUS: u64 = 5000;
pub const POTION_SCORE_MULTIPLIER: u64 = 2;

/// The letters the player must collect, in display order. Pickups refer to
/// them by index, so the repeated `I` counts twice.
pub const TARGET_LETTERS: [char; 6] = ['G', 'E', 'M', 'I', 'N', 'I'];
pub const TARGET_LETTER_COUNT: usize = TARGET_LETTERS.len();

// Effect durations (milliseconds)
pub const SHIELD_DURATION_MS: u64 = 5_000;
pub const POTION_DURATION_MS: u64 = 5_000;
pub const MAGNET_DURATION_MS: u64 = 4_000;
pub const ROCKET_DURATION_MS: u64 = 4_000;

// Shop prices
pub const SHIELD_COST: u64 = 150;
pub const POTION_COST: u64 = 500;
pub const MAGNET_COST: u64 = 500;
pub const ROCKET_COST: u64 = 1000;

// Host loop
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 FPS

// Persistence
pub const DATA_DIR_NAME: &str = ".letter-runner";
pub const DATA_DIR_ENV: &str = "LETTER_RUNNER_HOME";
pub const BONUS_SAVE_FILE: &str = "bonus.dat";
pub const BONUS_SAVE_MAGIC: u64 = 0x4C52_424F_4E55_5301; // "LRBONUS" v1
