//! Combat system types and logic.

pub mod logic;
pub mod types;

pub use logic::{encounter, resolve_attack_turn, resolve_flee, start_encounter};
pub use types::*;
