use std::collections::VecDeque;

use super::config::{ConfigError, GameConfig};
use super::constants::*;
use crate::character::player::Player;
use crate::combat::types::Enemy;
use crate::zones::{Difficulty, Zone};

/// Category of a log line, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    System,
    Combat,
    Info,
    Status,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub message: String,
    pub kind: LogKind,
}

/// Where the combat session currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Free to explore, shop, or change zone.
    Idle,
    /// An encounter is scheduled; counts down on each tick.
    Exploring { remaining_ms: u64 },
    InCombat(Enemy),
}

/// One game session: the player, world configuration, and combat session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    pub zone_index: usize,
    pub difficulty: String,
    pub upgrade_price: u32,
    pub phase: Phase,
    /// Newest entries at the back.
    pub combat_log: VecDeque<LogEntry>,
}

impl Default for GameState {
    fn default() -> Self {
        // The built-in world always passes validation.
        Self::with_valid_config(GameConfig::default())
    }
}

impl GameState {
    /// Creates a session with a fresh player in the first zone.
    ///
    /// Rejects configs that fail [`GameConfig::validate`], so the session
    /// always has a zone to stand in.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: GameConfig) -> Self {
        let difficulty = config.default_difficulty.clone();
        Self {
            config,
            player: Player::new(),
            zone_index: 0,
            difficulty,
            upgrade_price: STARTING_UPGRADE_PRICE,
            phase: Phase::Idle,
            combat_log: VecDeque::with_capacity(COMBAT_LOG_CAPACITY),
        }
    }

    pub fn is_fighting(&self) -> bool {
        matches!(self.phase, Phase::InCombat(_))
    }

    pub fn is_exploring(&self) -> bool {
        matches!(self.phase, Phase::Exploring { .. })
    }

    pub fn current_enemy(&self) -> Option<&Enemy> {
        match &self.phase {
            Phase::InCombat(enemy) => Some(enemy),
            _ => None,
        }
    }

    pub fn current_zone(&self) -> &Zone {
        // `new` only accepts configs with at least one zone
        &self.config.zones[self.zone_index.min(self.config.zones.len().saturating_sub(1))]
    }

    pub fn current_difficulty(&self) -> Difficulty {
        self.config
            .difficulty(&self.difficulty)
            .cloned()
            .unwrap_or_else(|| Difficulty::new(DEFAULT_DIFFICULTY, 1.0, 1.0))
    }

    pub fn add_log_entry(&mut self, message: impl Into<String>, kind: LogKind) {
        if self.combat_log.len() >= COMBAT_LOG_CAPACITY {
            self.combat_log.pop_front();
        }
        self.combat_log.push_back(LogEntry {
            message: message.into(),
            kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::default();
        assert_eq!(state.zone_index, 0);
        assert_eq!(state.difficulty, "Normal");
        assert_eq!(state.upgrade_price, 50);
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.is_fighting());
        assert!(state.current_enemy().is_none());
        assert_eq!(state.current_zone().name, "Forest Glade");
    }

    #[test]
    fn test_log_is_bounded() {
        let mut state = GameState::default();
        for i in 0..(COMBAT_LOG_CAPACITY + 5) {
            state.add_log_entry(format!("line {}", i), LogKind::Info);
        }
        assert_eq!(state.combat_log.len(), COMBAT_LOG_CAPACITY);
        assert_eq!(state.combat_log.front().unwrap().message, "line 5");
    }

    #[test]
    fn test_new_rejects_config_without_zones() {
        let mut config = GameConfig::default();
        config.zones.clear();
        assert!(matches!(
            GameState::new(config),
            Err(ConfigError::Invalid(_))
        ));

        let state = GameState::new(GameConfig::default()).unwrap();
        assert_eq!(state.current_zone().name, "Forest Glade");
    }

    #[test]
    fn test_unknown_difficulty_falls_back_to_neutral() {
        let mut state = GameState::default();
        state.difficulty = "Missing".to_string();
        let difficulty = state.current_difficulty();
        assert_eq!(difficulty.attack_multiplier, 1.0);
        assert_eq!(difficulty.gold_multiplier, 1.0);
    }
}
