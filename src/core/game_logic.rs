//! The action surface the presentation layer drives.
//!
//! Every action either succeeds and narrates itself into the combat log, or
//! returns a [`GameError`] and leaves the state untouched.

use rand::Rng;
use tracing::{debug, info};

use super::config::GameConfig;
use super::constants::*;
use super::game_state::{GameState, LogKind, Phase};
use crate::character::player::Player;
use crate::character::save::SaveSnapshot;
use crate::combat::logic::{encounter, resolve_attack_turn, resolve_flee};
use crate::combat::types::{CombatEvent, TurnReport};
use crate::error::GameError;
use crate::items::shop::{self, ShopEvent};

/// Checks a snapshot against the world config.
///
/// Returns the difficulty name the session should use.
fn validate_snapshot(config: &GameConfig, snapshot: &SaveSnapshot) -> Result<String, GameError> {
    let player = &snapshot.player;
    let zone = config.zone(snapshot.zone_index).ok_or_else(|| {
        GameError::InvalidSnapshot(format!("zone {} does not exist", snapshot.zone_index))
    })?;

    if player.level == 0 {
        return Err(GameError::InvalidSnapshot("player level must be at least 1".into()));
    }
    if player.xp_to_next_level == 0 {
        return Err(GameError::InvalidSnapshot(
            "xpToNextLevel must be positive".into(),
        ));
    }
    if player.hp > player.max_hp {
        return Err(GameError::InvalidSnapshot("hp exceeds maxHp".into()));
    }
    if player.level > MAX_PLAYER_LEVEL {
        return Err(GameError::InvalidSnapshot(format!(
            "level {} is above the cap of {}",
            player.level, MAX_PLAYER_LEVEL
        )));
    }
    if !(1..=MAX_PLAYER_STAT).contains(&player.max_hp)
        || !(1..=MAX_PLAYER_STAT).contains(&player.attack)
        || player.hp < -MAX_PLAYER_STAT
    {
        return Err(GameError::InvalidSnapshot(
            "hp, maxHp or attack out of range".into(),
        ));
    }
    if player.gold > MAX_GOLD || snapshot.upgrade_price > MAX_GOLD {
        return Err(GameError::InvalidSnapshot("gold out of range".into()));
    }
    if player.xp > MAX_XP || player.xp_to_next_level > MAX_XP {
        return Err(GameError::InvalidSnapshot("xp out of range".into()));
    }
    if !zone.is_unlocked_for(player.level) {
        return Err(GameError::InvalidSnapshot(format!(
            "level {} cannot be in {}",
            player.level, zone.name
        )));
    }

    match &snapshot.difficulty {
        None => Ok(config.default_difficulty.clone()),
        Some(name) if config.difficulty(name).is_some() => Ok(name.clone()),
        Some(name) => Err(GameError::InvalidSnapshot(format!(
            "unknown difficulty '{}'",
            name
        ))),
    }
}

impl GameState {
    fn record_events(&mut self, events: &[CombatEvent]) {
        for event in events {
            self.add_log_entry(event.to_string(), event.log_kind());
        }
    }

    /// Resets the player and session to a fresh start.
    pub fn start_new_game(&mut self) {
        self.player = Player::new();
        self.upgrade_price = STARTING_UPGRADE_PRICE;
        self.zone_index = 0;
        self.difficulty = self.config.default_difficulty.clone();
        // A pending exploration belongs to the session being replaced; it
        // must not spawn an enemy into the fresh one.
        self.phase = Phase::Idle;
        self.combat_log.clear();

        info!("new game started");
        self.add_log_entry("A fresh adventure begins!", LogKind::System);
        let zone_name = self.current_zone().name.clone();
        self.add_log_entry(
            format!(
                "You are in the {}. Check out the zones and press 'Explore'!",
                zone_name
            ),
            LogKind::System,
        );
    }

    /// Captures the persistent part of the session.
    pub fn save_game(&self) -> SaveSnapshot {
        SaveSnapshot {
            player: self.player.clone(),
            upgrade_price: self.upgrade_price,
            zone_index: self.zone_index,
            difficulty: Some(self.difficulty.clone()),
        }
    }

    /// Replaces the session with a snapshot. Any fight or pending
    /// exploration is dropped.
    pub fn load_game(&mut self, snapshot: SaveSnapshot) -> Result<(), GameError> {
        let difficulty = validate_snapshot(&self.config, &snapshot)?;

        self.player = snapshot.player;
        self.upgrade_price = snapshot.upgrade_price;
        self.zone_index = snapshot.zone_index;
        self.difficulty = difficulty;
        // Same as a new game: nothing pending survives a load.
        self.phase = Phase::Idle;

        let zone_name = self.current_zone().name.clone();
        info!(level = self.player.level, zone = %zone_name, "game loaded");
        self.add_log_entry(
            format!("Game loaded. Welcome back to the {}!", zone_name),
            LogKind::System,
        );
        Ok(())
    }

    pub fn set_zone(&mut self, index: usize) -> Result<(), GameError> {
        if self.is_fighting() {
            return Err(GameError::ZoneChangeInCombat);
        }
        if self.is_exploring() {
            return Err(GameError::ExplorationPending);
        }
        let zone = self.config.zone(index).ok_or(GameError::UnknownZone(index))?;
        if !zone.is_unlocked_for(self.player.level) {
            return Err(GameError::ZoneLocked {
                required: zone.min_level,
            });
        }

        let message = format!("You are now exploring the {}.", zone.name);
        self.zone_index = index;
        debug!(zone = index, "zone changed");
        self.add_log_entry(message, LogKind::System);
        Ok(())
    }

    /// Changes difficulty for future encounters.
    pub fn set_difficulty(&mut self, name: &str) -> Result<(), GameError> {
        if self.is_fighting() {
            return Err(GameError::DifficultyChangeInCombat);
        }
        if self.is_exploring() {
            return Err(GameError::ExplorationPending);
        }
        let difficulty = self
            .config
            .difficulty(name)
            .ok_or_else(|| GameError::UnknownDifficulty(name.to_string()))?;

        self.difficulty = difficulty.name.clone();
        debug!(difficulty = name, "difficulty changed");
        self.add_log_entry(format!("Difficulty set to {}.", name), LogKind::System);
        Ok(())
    }

    /// Schedules an encounter after the configured delay.
    ///
    /// The session is marked as exploring straight away so a second explore
    /// can't queue another encounter.
    pub fn explore(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::InCombat(_) => return Err(GameError::AlreadyInCombat),
            Phase::Exploring { .. } => return Err(GameError::ExplorationPending),
            Phase::Idle => {}
        }
        if !self.player.is_alive() {
            return Err(GameError::PlayerDefeated);
        }

        self.phase = Phase::Exploring {
            remaining_ms: self.config.explore_delay_ms,
        };
        let zone_name = self.current_zone().name.clone();
        debug!(zone = %zone_name, "exploring");
        self.add_log_entry(
            format!("You wander deeper into the {}...", zone_name),
            LogKind::System,
        );
        Ok(())
    }

    /// Advances scheduled work by `delta_ms`. Returns the encounter event
    /// when one spawns this tick.
    pub fn tick(&mut self, delta_ms: u64, rng: &mut impl Rng) -> Option<CombatEvent> {
        let Phase::Exploring { remaining_ms } = self.phase else {
            return None;
        };

        if remaining_ms > delta_ms {
            self.phase = Phase::Exploring {
                remaining_ms: remaining_ms - delta_ms,
            };
            return None;
        }

        self.phase = Phase::Idle;
        match encounter(self, rng) {
            Ok(event) => {
                self.record_events(std::slice::from_ref(&event));
                Some(event)
            }
            Err(e) => {
                self.add_log_entry(e.to_string(), LogKind::Info);
                None
            }
        }
    }

    /// Resolves one combat turn.
    pub fn attack(&mut self, rng: &mut impl Rng) -> Result<TurnReport, GameError> {
        let report = resolve_attack_turn(self, rng)?;
        self.record_events(&report.events);
        Ok(report)
    }

    /// Attempts to escape the current fight.
    pub fn flee(&mut self, rng: &mut impl Rng) -> Result<TurnReport, GameError> {
        let report = resolve_flee(self, rng)?;
        self.record_events(&report.events);
        Ok(report)
    }

    pub fn use_potion(&mut self) -> Result<ShopEvent, GameError> {
        let event = shop::use_potion(self)?;
        self.add_log_entry(event.to_string(), LogKind::System);
        Ok(event)
    }

    pub fn buy_item(&mut self, item: &str, price: u32) -> Result<ShopEvent, GameError> {
        let event = shop::buy_item(self, item, price)?;
        self.add_log_entry(event.to_string(), LogKind::System);
        Ok(event)
    }
}
