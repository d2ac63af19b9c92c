//! Timed power-up effects: the four effect kinds and the per-kind expiry
//! timer registry.
//!
//! Timers are deadlines on the game's logical millisecond clock. The owning
//! [`RunnerGame`](crate::core::game::RunnerGame) advances that clock and
//! applies whatever expiries come due.

pub mod timers;
pub mod types;

pub use timers::*;
pub use types::*;
