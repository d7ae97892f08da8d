//! Core game state and logic.

pub mod config;
pub mod constants;
pub mod game_logic;
pub mod game_state;

pub use config::{ConfigError, GameConfig};
pub use game_state::{GameState, LogEntry, LogKind, Phase};
