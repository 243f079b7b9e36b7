//! Utility helpers shared across client UI modules.

pub mod assets;
pub mod emit;
