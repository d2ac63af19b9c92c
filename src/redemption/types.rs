//! Bonus state, grants and the code table.

use crate::inventory::Inventory;
use serde::{Deserialize, Serialize};

/// Permanent upgrades applied at the start of every run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusState {
    /// Extra lives on top of the base three.
    pub bonus_lives: u32,
    /// Starting inventory for each run.
    pub bonus_inventory: Inventory,
}

/// What a single redemption adds to the bonus state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusGrant {
    pub lives: u32,
    /// Units added to every inventory kind.
    pub items_each: u32,
}

impl BonusState {
    /// Merge a grant in. Never replaces existing bonuses.
    pub fn apply(&mut self, grant: &BonusGrant) {
        self.bonus_lives = self.bonus_lives.saturating_add(grant.lives);
        self.bonus_inventory
            .merge(&Inventory::uniform(grant.items_each));
    }
}

/// A literal code and what it unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedeemCode {
    pub code: &'static str,
    pub grant: BonusGrant,
    pub message: &'static str,
}

pub const REDEEM_CODES: [RedeemCode; 3] = [
    RedeemCode {
        code: "daoju_enter_1",
        grant: BonusGrant {
            lives: 0,
            items_each: 1,
        },
        message: "Item pack redeemed!",
    },
    RedeemCode {
        code: "life_enter_1",
        grant: BonusGrant {
            lives: 1,
            items_each: 0,
        },
        message: "Life pack redeemed!",
    },
    RedeemCode {
        code: "super_gift",
        grant: BonusGrant {
            lives: 2,
            items_each: 2,
        },
        message: "Super gift pack redeemed!",
    },
];

pub const REJECTED_CODE_MESSAGE: &str = "Invalid code. Nice try!";

/// Result of a redemption attempt, shown to the player as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemResult {
    pub success: bool,
    pub message: String,
}

impl RedeemResult {
    pub fn accepted(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            message: REJECTED_CODE_MESSAGE.to_string(),
        }
    }
}
