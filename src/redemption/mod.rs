//! Redemption codes and the permanent bonus state they feed.
//!
//! Bonus state outlives every run: it is read at run start and only ever
//! grows through redemption. It can optionally be persisted to disk.

pub mod logic;
pub mod persistence;
pub mod types;

pub use logic::*;
pub use persistence::*;
pub use types::*;
