//! Run state and the state machine that drives it.

#![allow(unused_imports)]

pub mod constants;
pub mod game;
pub mod game_state;
pub mod intent;

pub use constants::*;
pub use game::*;
pub use game_state::*;
pub use intent::*;
