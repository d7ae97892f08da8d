//! Glimmering Depths - terminal dungeon crawler library
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod error;
pub mod input;
pub mod items;
pub mod ui;
pub mod zones;

pub use crate::character::save::{SaveError, SaveManager, SaveSnapshot};
pub use crate::core::config::{ConfigError, GameConfig};
pub use crate::core::game_state::{GameState, LogEntry, LogKind, Phase};
pub use crate::error::{GameError, RejectionKind};
