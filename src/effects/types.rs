//! Effect kinds and the active-effect flag set.

use crate::core::constants::{
    MAGNET_DURATION_MS, POTION_DURATION_MS, ROCKET_DURATION_MS, SHIELD_DURATION_MS,
};
use serde::{Deserialize, Serialize};

/// The four power-ups a runner can buy, hold and activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Shield,
    Rocket,
    Potion,
    Magnet,
}

impl EffectKind {
    pub const ALL: [EffectKind; 4] = [
        EffectKind::Shield,
        EffectKind::Rocket,
        EffectKind::Potion,
        EffectKind::Magnet,
    ];

    /// Stable slot index, used by per-kind tables.
    pub fn index(&self) -> usize {
        match self {
            Self::Shield => 0,
            Self::Rocket => 1,
            Self::Potion => 2,
            Self::Magnet => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Shield => "Shield",
            Self::Rocket => "Rocket",
            Self::Potion => "Potion",
            Self::Magnet => "Magnet",
        }
    }

    /// Parse a kind from user input, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// How long one activation lasts.
    pub fn duration_ms(&self) -> u64 {
        match self {
            Self::Shield => SHIELD_DURATION_MS,
            Self::Rocket => ROCKET_DURATION_MS,
            Self::Potion => POTION_DURATION_MS,
            Self::Magnet => MAGNET_DURATION_MS,
        }
    }

    /// True if this effect blocks all incoming damage while active.
    pub fn grants_immunity(&self) -> bool {
        matches!(self, Self::Shield | Self::Rocket)
    }
}

/// Which effects are currently running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub shield: bool,
    pub rocket: bool,
    pub potion: bool,
    pub magnet: bool,
}

impl ActiveEffects {
    pub fn is_active(&self, kind: EffectKind) -> bool {
        match kind {
            EffectKind::Shield => self.shield,
            EffectKind::Rocket => self.rocket,
            EffectKind::Potion => self.potion,
            EffectKind::Magnet => self.magnet,
        }
    }

    pub fn set(&mut self, kind: EffectKind, active: bool) {
        match kind {
            EffectKind::Shield => self.shield = active,
            EffectKind::Rocket => self.rocket = active,
            EffectKind::Potion => self.potion = active,
            EffectKind::Magnet => self.magnet = active,
        }
    }

    /// Shield or rocket.
    pub fn is_immune(&self) -> bool {
        EffectKind::ALL
            .iter()
            .any(|kind| kind.grants_immunity() && self.is_active(*kind))
    }

    pub fn any_active(&self) -> bool {
        EffectKind::ALL.iter().any(|kind| self.is_active(*kind))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
