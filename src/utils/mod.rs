//! Utility modules: save file framing and data directory lookup.

pub mod persistence;
