//! Purchases and gem scoring.

use super::types::Inventory;
use crate::core::constants::POTION_SCORE_MULTIPLIER;
use crate::effects::{ActiveEffects, EffectKind};

/// Check if the runner can pay `cost` out of `score`.
pub fn can_afford(score: u64, cost: u64) -> bool {
    score >= cost
}

/// Attempt to buy one unit of `kind`, spending score.
/// Returns false and leaves both balances untouched if unaffordable.
pub fn try_buy_item(kind: EffectKind, cost: u64, score: &mut u64, inventory: &mut Inventory) -> bool {
    if !can_afford(*score, cost) {
        return false;
    }
    *score -= cost;
    inventory.add(kind, 1);
    true
}

/// Points awarded for a gem of `value`, doubled while the potion is active.
pub fn gem_points(value: u64, effects: &ActiveEffects) -> u64 {
    let multiplier = if effects.potion {
        POTION_SCORE_MULTIPLIER
    } else {
        1
    };
    value.saturating_mul(multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_insufficient_funds() {
        let mut score = 100;
        let mut inv = Inventory::default();
        assert!(!try_buy_item(EffectKind::Shield, 150, &mut score, &mut inv));
        assert_eq!(score, 100);
        assert_eq!(inv, Inventory::default());
    }

    #[test]
    fn test_buy_success() {
        let mut score = 200;
        let mut inv = Inventory::default();
        assert!(try_buy_item(EffectKind::Shield, 150, &mut score, &mut inv));
        assert_eq!(score, 50);
        assert_eq!(inv.shield, 1);
    }

    #[test]
    fn test_buy_exact_balance() {
        let mut score = 500;
        let mut inv = Inventory::default();
        assert!(try_buy_item(EffectKind::Potion, 500, &mut score, &mut inv));
        assert_eq!(score, 0);
        assert!(!try_buy_item(EffectKind::Potion, 500, &mut score, &mut inv));
        assert_eq!(inv.potion, 1);
    }

    #[test]
    fn test_free_item_always_affordable() {
        let mut score = 0;
        let mut inv = Inventory::default();
        assert!(try_buy_item(EffectKind::Magnet, 0, &mut score, &mut inv));
        assert_eq!(inv.magnet, 1);
    }

    #[test]
    fn test_gem_points_potion_doubles() {
        let mut effects = ActiveEffects::default();
        assert_eq!(gem_points(100, &effects), 100);
        effects.potion = true;
        assert_eq!(gem_points(100, &effects), 200);
    }

    #[test]
    fn test_gem_points_ignores_other_effects() {
        let effects = ActiveEffects {
            shield: true,
            rocket: true,
            potion: false,
            magnet: true,
        };
        assert_eq!(gem_points(50, &effects), 50);
    }
}
