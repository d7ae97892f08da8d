//! Player character, leveling rules, and save snapshots.

pub mod player;
pub mod progression;
pub mod save;

pub use player::*;
pub use progression::*;
pub use save::*;
