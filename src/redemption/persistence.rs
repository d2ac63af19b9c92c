//! Bonus state save file.

use super::types::BonusState;
use crate::core::constants::{BONUS_SAVE_FILE, BONUS_SAVE_MAGIC};
use crate::utils::persistence::{read_checksummed, save_path, write_checksummed, PersistenceError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedBonus {
    /// Unix timestamp of the save.
    saved_at: i64,
    bonus: BonusState,
}

/// Default location of the bonus save file.
pub fn bonus_save_path() -> Result<PathBuf, PersistenceError> {
    save_path(BONUS_SAVE_FILE)
}

pub fn save_bonus(path: &Path, bonus: &BonusState) -> Result<(), PersistenceError> {
    let saved = SavedBonus {
        saved_at: Utc::now().timestamp(),
        bonus: *bonus,
    };
    let payload = serde_json::to_vec_pretty(&saved)?;
    write_checksummed(path, BONUS_SAVE_MAGIC, &payload)?;
    log::info!("Saved bonus state to {}", path.display());
    Ok(())
}

pub fn load_bonus(path: &Path) -> Result<BonusState, PersistenceError> {
    let payload = read_checksummed(path, BONUS_SAVE_MAGIC)?;
    let saved: SavedBonus = serde_json::from_slice(&payload)?;
    Ok(saved.bonus)
}

/// Load the bonus state, falling back to no bonuses if the file is
/// missing or unreadable.
pub fn load_bonus_or_default(path: &Path) -> BonusState {
    match load_bonus(path) {
        Ok(bonus) => bonus,
        Err(PersistenceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            BonusState::default()
        }
        Err(e) => {
            log::warn!(
                "Ignoring unreadable bonus save {}: {}",
                path.display(),
                e
            );
            BonusState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Inventory;
    use std::fs;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(BONUS_SAVE_FILE);
        let bonus = BonusState {
            bonus_lives: 3,
            bonus_inventory: Inventory {
                shield: 2,
                rocket: 1,
                potion: 0,
                magnet: 4,
            },
        };

        save_bonus(&path, &bonus).unwrap();
        assert_eq!(load_bonus(&path).unwrap(), bonus);
    }

    #[test]
    fn test_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let bonus = load_bonus_or_default(&dir.path().join("missing.dat"));
        assert_eq!(bonus, BonusState::default());
    }

    #[test]
    fn test_corrupt_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(BONUS_SAVE_FILE);
        save_bonus(
            &path,
            &BonusState {
                bonus_lives: 9,
                bonus_inventory: Inventory::default(),
            },
        )
        .unwrap();

        let mut bytes = fs::read(&path).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        fs::write(&path, bytes).unwrap();

        assert!(load_bonus(&path).is_err());
        assert_eq!(load_bonus_or_default(&path), BonusState::default());
    }
}
