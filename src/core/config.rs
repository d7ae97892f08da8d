//! World and tuning configuration.
//!
//! Defaults are the built-in world. A TOML file and `GLIMMERING_*`
//! environment variables can override any of it, e.g.
//! `GLIMMERING_EXPLORE_DELAY_MS=250`.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use super::constants::*;
use crate::combat::{default_monsters, MonsterTemplate};
use crate::zones::{default_difficulties, default_zones, Difficulty, Zone};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    Missing(String),

    #[error("failed to read config: {0}")]
    Figment(#[from] figment::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Delay between exploring and the encounter spawning.
    pub explore_delay_ms: u64,
    pub potion_price: u32,
    pub default_difficulty: String,
    pub zones: Vec<Zone>,
    pub monsters: Vec<MonsterTemplate>,
    pub difficulties: Vec<Difficulty>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            explore_delay_ms: DEFAULT_EXPLORE_DELAY_MS,
            potion_price: DEFAULT_POTION_PRICE,
            default_difficulty: DEFAULT_DIFFICULTY.to_string(),
            zones: default_zones(),
            monsters: default_monsters(),
            difficulties: default_difficulties(),
        }
    }
}

impl GameConfig {
    /// Layers defaults, the optional TOML file, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(GameConfig::default()));

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::Missing(path.display().to_string()));
            }
            figment = figment.merge(Toml::file(path));
        }

        let config: GameConfig = figment.merge(Env::prefixed("GLIMMERING_")).extract()?;
        config.validate()?;

        debug!(
            zones = config.zones.len(),
            monsters = config.monsters.len(),
            "config loaded"
        );
        Ok(config)
    }

    /// Parses a TOML string over the defaults. Ignores the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = Figment::from(Serialized::defaults(GameConfig::default()))
            .merge(Toml::string(toml))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let first_zone = self
            .zones
            .first()
            .ok_or_else(|| ConfigError::Invalid("at least one zone is required".into()))?;
        if first_zone.min_level > 1 {
            return Err(ConfigError::Invalid(format!(
                "first zone '{}' must be open at level 1",
                first_zone.name
            )));
        }
        for zone in &self.zones {
            if !(zone.monster_multiplier > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "zone '{}' needs a positive monster multiplier",
                    zone.name
                )));
            }
        }

        if self.monsters.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one monster is required".into(),
            ));
        }
        for monster in &self.monsters {
            if monster.base_hp <= 0 || monster.base_attack <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "monster '{}' needs positive hp and attack",
                    monster.name
                )));
            }
            if monster.gold_drop.min > monster.gold_drop.max {
                return Err(ConfigError::Invalid(format!(
                    "monster '{}' has an inverted gold range",
                    monster.name
                )));
            }
            if let Some(status) = &monster.status {
                if !(0.0..=1.0).contains(&status.chance) {
                    return Err(ConfigError::Invalid(format!(
                        "monster '{}' status chance must be within [0, 1]",
                        monster.name
                    )));
                }
            }
        }

        for difficulty in &self.difficulties {
            if !(difficulty.attack_multiplier > 0.0) || !(difficulty.gold_multiplier > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "difficulty '{}' needs positive multipliers",
                    difficulty.name
                )));
            }
        }
        if self.difficulty(&self.default_difficulty).is_none() {
            return Err(ConfigError::Invalid(format!(
                "default difficulty '{}' is not defined",
                self.default_difficulty
            )));
        }

        Ok(())
    }

    pub fn difficulty(&self, name: &str) -> Option<&Difficulty> {
        self.difficulties.iter().find(|d| d.name == name)
    }

    pub fn zone(&self, index: usize) -> Option<&Zone> {
        self.zones.get(index)
    }
}
