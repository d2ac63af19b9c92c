//! Letter collection and level advancement.

use crate::core::constants::{
    LANES_PER_LEVEL, LETTER_SPEED_BONUS_RATIO, LEVEL_SPEED_BONUS_RATIO, MAX_LANES, MAX_LEVEL,
    RUN_SPEED_BASE, TARGET_LETTERS, TARGET_LETTER_COUNT, VICTORY_SCORE_BONUS,
};
use crate::core::game_state::{GameStatus, RunState};

/// What a letter pickup did to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterOutcome {
    /// Pickup arrived outside of play.
    Ignored,
    /// Index does not name a target letter.
    OutOfRange,
    /// This letter was already collected on the current level.
    AlreadyCollected,
    /// New letter; `collected` letters are now held.
    Collected { collected: usize },
    /// Set completed below the level cap; the run moved to `level`.
    LevelAdvanced { level: u32 },
    /// Set completed on the final level.
    Victory,
}

/// Speed gained per new letter.
pub fn letter_speed_bonus() -> f64 {
    RUN_SPEED_BASE * LETTER_SPEED_BONUS_RATIO
}

/// Speed gained per level advance.
pub fn level_speed_bonus() -> f64 {
    RUN_SPEED_BASE * LEVEL_SPEED_BONUS_RATIO
}

/// Lane count after one more level.
pub fn next_lane_count(lane_count: u32) -> u32 {
    (lane_count + LANES_PER_LEVEL).min(MAX_LANES)
}

/// Display character for a target index.
pub fn target_letter(index: usize) -> Option<char> {
    TARGET_LETTERS.get(index).copied()
}

/// Record a letter pickup. A completed set advances the level, or ends the
/// run in victory on the last level, before this returns.
pub fn collect_letter(run: &mut RunState, index: usize) -> LetterOutcome {
    if run.status != GameStatus::Playing {
        return LetterOutcome::Ignored;
    }
    if index >= TARGET_LETTER_COUNT {
        return LetterOutcome::OutOfRange;
    }
    if !run.collected_letters.insert(index) {
        return LetterOutcome::AlreadyCollected;
    }

    run.speed += letter_speed_bonus();

    let collected = run.collected_letters.len();
    if collected < TARGET_LETTER_COUNT {
        return LetterOutcome::Collected { collected };
    }

    if run.level < MAX_LEVEL {
        advance_level(run);
        LetterOutcome::LevelAdvanced { level: run.level }
    } else {
        run.status = GameStatus::Victory;
        run.score = run.score.saturating_add(VICTORY_SCORE_BONUS);
        LetterOutcome::Victory
    }
}

/// Move to the next level: more lanes, more speed, fresh letters.
/// Returns false at the level cap or outside of play.
pub fn advance_level(run: &mut RunState) -> bool {
    if run.status != GameStatus::Playing || run.level >= MAX_LEVEL {
        return false;
    }
    run.level += 1;
    run.lane_count = next_lane_count(run.lane_count);
    run.speed += level_speed_bonus();
    run.collected_letters.clear();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redemption::BonusState;

    fn playing_run() -> RunState {
        RunState::fresh_run(&BonusState::default())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_collect_new_letter_adds_speed() {
        let mut run = playing_run();
        let outcome = collect_letter(&mut run, 2);
        assert_eq!(outcome, LetterOutcome::Collected { collected: 1 });
        assert!(approx(run.speed, RUN_SPEED_BASE * 1.1));
    }

    #[test]
    fn test_collect_same_letter_twice_is_noop() {
        let mut run = playing_run();
        collect_letter(&mut run, 4);
        let speed = run.speed;
        let outcome = collect_letter(&mut run, 4);
        assert_eq!(outcome, LetterOutcome::AlreadyCollected);
        assert!(approx(run.speed, speed));
        assert_eq!(run.collected_letters.len(), 1);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut run = playing_run();
        assert_eq!(collect_letter(&mut run, 6), LetterOutcome::OutOfRange);
        assert!(run.collected_letters.is_empty());
    }

    #[test]
    fn test_ignored_outside_play() {
        let mut run = playing_run();
        run.status = GameStatus::Paused;
        assert_eq!(collect_letter(&mut run, 0), LetterOutcome::Ignored);
        assert!(run.collected_letters.is_empty());
    }

    #[test]
    fn test_full_set_advances_level() {
        let mut run = playing_run();
        for i in 0..5 {
            collect_letter(&mut run, i);
        }
        let outcome = collect_letter(&mut run, 5);
        assert_eq!(outcome, LetterOutcome::LevelAdvanced { level: 2 });
        assert_eq!(run.level, 2);
        assert_eq!(run.lane_count, 5);
        assert!(run.collected_letters.is_empty());
        assert_eq!(run.status, GameStatus::Playing);
        // 6 letters at 10% plus one level at 40%
        assert!(approx(run.speed, RUN_SPEED_BASE * 2.0));
    }

    #[test]
    fn test_full_set_on_last_level_is_victory() {
        let mut run = playing_run();
        run.level = MAX_LEVEL;
        run.score = 120;
        for i in 0..6 {
            collect_letter(&mut run, i);
        }
        assert_eq!(run.status, GameStatus::Victory);
        assert_eq!(run.score, 5120);
        assert_eq!(run.level, MAX_LEVEL);
    }

    #[test]
    fn test_advance_level_caps_lanes() {
        let mut run = playing_run();
        run.lane_count = 9;
        assert!(advance_level(&mut run));
        assert_eq!(run.lane_count, 9);
        assert_eq!(next_lane_count(7), 9);
        assert_eq!(next_lane_count(3), 5);
    }

    #[test]
    fn test_advance_level_stops_at_cap() {
        let mut run = playing_run();
        run.level = MAX_LEVEL;
        assert!(!advance_level(&mut run));
        assert_eq!(run.level, MAX_LEVEL);
    }

    #[test]
    fn test_target_letter() {
        assert_eq!(target_letter(0), Some('G'));
        assert_eq!(target_letter(5), Some('I'));
        assert_eq!(target_letter(6), None);
    }
}
