//! Consumable power-up inventory, the shop catalog and the score ledger.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
