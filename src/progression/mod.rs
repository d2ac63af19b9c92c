//! Per-run progression: target letters, levels, lanes and speed ramp.

pub mod logic;

pub use logic::*;
