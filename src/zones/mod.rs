//! Zone and difficulty tables.
//!
//! Zones gate monster strength behind a minimum player level; difficulties
//! scale enemy attack and gold rewards.

mod data;

pub use data::*;
