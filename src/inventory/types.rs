//! Inventory counts and shop items.

use crate::core::constants::{MAGNET_COST, POTION_COST, ROCKET_COST, SHIELD_COST};
use crate::effects::EffectKind;
use serde::{Deserialize, Serialize};

/// Unused power-ups held by the runner, one count per effect kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub shield: u32,
    pub rocket: u32,
    pub potion: u32,
    pub magnet: u32,
}

impl Inventory {
    /// The same count for every kind.
    pub fn uniform(count: u32) -> Self {
        Self {
            shield: count,
            rocket: count,
            potion: count,
            magnet: count,
        }
    }

    pub fn count(&self, kind: EffectKind) -> u32 {
        match kind {
            EffectKind::Shield => self.shield,
            EffectKind::Rocket => self.rocket,
            EffectKind::Potion => self.potion,
            EffectKind::Magnet => self.magnet,
        }
    }

    fn slot_mut(&mut self, kind: EffectKind) -> &mut u32 {
        match kind {
            EffectKind::Shield => &mut self.shield,
            EffectKind::Rocket => &mut self.rocket,
            EffectKind::Potion => &mut self.potion,
            EffectKind::Magnet => &mut self.magnet,
        }
    }

    pub fn add(&mut self, kind: EffectKind, amount: u32) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(amount);
    }

    /// Add `other` into this inventory, kind by kind.
    pub fn merge(&mut self, other: &Inventory) {
        for kind in EffectKind::ALL {
            self.add(kind, other.count(kind));
        }
    }

    /// Remove one unit of `kind`. Returns false (and changes nothing) if empty.
    pub fn take_one(&mut self, kind: EffectKind) -> bool {
        let slot = self.slot_mut(kind);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn total(&self) -> u32 {
        EffectKind::ALL.iter().map(|kind| self.count(*kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// A purchasable power-up as listed in the in-run shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopItem {
    pub kind: EffectKind,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u64,
}

/// Shop listing, in display order.
pub const SHOP_ITEMS: [ShopItem; 4] = [
    ShopItem {
        kind: EffectKind::Shield,
        name: "Energy Shield",
        description: "Blocks all damage for 5 seconds.",
        cost: SHIELD_COST,
    },
    ShopItem {
        kind: EffectKind::Potion,
        name: "Score Potion",
        description: "Double points for 5 seconds.",
        cost: POTION_COST,
    },
    ShopItem {
        kind: EffectKind::Magnet,
        name: "Power Magnet",
        description: "Pulls in nearby pickups for 4 seconds.",
        cost: MAGNET_COST,
    },
    ShopItem {
        kind: EffectKind::Rocket,
        name: "Super Rocket",
        description: "Fly over every obstacle for 4 seconds.",
        cost: ROCKET_COST,
    },
];

impl ShopItem {
    pub fn for_kind(kind: EffectKind) -> &'static ShopItem {
        match kind {
            EffectKind::Shield => &SHOP_ITEMS[0],
            EffectKind::Potion => &SHOP_ITEMS[1],
            EffectKind::Magnet => &SHOP_ITEMS[2],
            EffectKind::Rocket => &SHOP_ITEMS[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_one_never_underflows() {
        let mut inv = Inventory::default();
        assert!(!inv.take_one(EffectKind::Shield));
        assert_eq!(inv.shield, 0);

        inv.add(EffectKind::Shield, 2);
        assert!(inv.take_one(EffectKind::Shield));
        assert!(inv.take_one(EffectKind::Shield));
        assert!(!inv.take_one(EffectKind::Shield));
        assert_eq!(inv.count(EffectKind::Shield), 0);
    }

    #[test]
    fn test_add_touches_only_one_kind() {
        let mut inv = Inventory::default();
        inv.add(EffectKind::Magnet, 3);
        assert_eq!(inv.magnet, 3);
        assert_eq!(inv.shield + inv.rocket + inv.potion, 0);
        assert_eq!(inv.total(), 3);
    }

    #[test]
    fn test_merge_is_additive() {
        let mut inv = Inventory {
            shield: 1,
            rocket: 0,
            potion: 2,
            magnet: 0,
        };
        inv.merge(&Inventory::uniform(2));
        assert_eq!(
            inv,
            Inventory {
                shield: 3,
                rocket: 2,
                potion: 4,
                magnet: 2,
            }
        );
    }

    #[test]
    fn test_shop_prices() {
        assert_eq!(ShopItem::for_kind(EffectKind::Shield).cost, 150);
        assert_eq!(ShopItem::for_kind(EffectKind::Potion).cost, 500);
        assert_eq!(ShopItem::for_kind(EffectKind::Magnet).cost, 500);
        assert_eq!(ShopItem::for_kind(EffectKind::Rocket).cost, 1000);
    }

    #[test]
    fn test_shop_lookup_matches_kind() {
        for kind in EffectKind::ALL {
            assert_eq!(ShopItem::for_kind(kind).kind, kind);
        }
    }
}
