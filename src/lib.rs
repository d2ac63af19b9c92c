//! Letter Runner - endless runner game engine
//!
//! The run state machine, power-up effects, inventory ledger, letter
//! progression and redemption codes. Rendering and input devices live
//! outside this crate; they read [`RunnerGame::snapshot`] and dispatch
//! [`RunnerIntent`]s.

pub mod build_info;
pub mod core;
pub mod effects;
pub mod inventory;
pub mod progression;
pub mod redemption;
pub mod simulator;
pub mod utils;

pub use crate::core::game::{DamageOutcome, EffectExpired, RunSnapshot, RunnerGame};
pub use crate::core::game_state::{GameStatus, RunState};
pub use crate::core::intent::{IntentOutcome, ParseIntentError, RunnerIntent};
pub use effects::{ActiveEffects, EffectKind};
pub use inventory::{Inventory, ShopItem, SHOP_ITEMS};
pub use progression::LetterOutcome;
pub use redemption::{BonusState, RedeemResult};
