use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::constants::*;

/// Remaining turns of each status effect on the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffects {
    pub poison: u32,
    pub stun: u32,
}

impl StatusEffects {
    pub fn is_clear(&self) -> bool {
        self.poison == 0 && self.stun == 0
    }
}

/// The player character.
///
/// Serialized with camelCase keys so snapshots match the browser save
/// format (`maxHp`, `xpToNextLevel`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    /// May dip to zero or below; the player is defeated at that point.
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next_level: u32,
    pub gold: u32,
    pub inventory: BTreeMap<String, u32>,
    #[serde(default)]
    pub status: StatusEffects,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Creates a fresh level 1 character.
    pub fn new() -> Self {
        let mut inventory = BTreeMap::new();
        inventory.insert(HEALING_POTION.to_string(), 0);

        Self {
            name: DEFAULT_PLAYER_NAME.to_string(),
            hp: STARTING_HP,
            max_hp: STARTING_HP,
            attack: STARTING_ATTACK,
            level: 1,
            xp: 0,
            xp_to_next_level: STARTING_XP_TO_NEXT_LEVEL,
            gold: 0,
            inventory,
            status: StatusEffects::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_full_health(&self) -> bool {
        self.hp >= self.max_hp
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Heals up to `max_hp`, returning the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp.saturating_sub(before)
    }

    pub fn item_count(&self, item: &str) -> u32 {
        self.inventory.get(item).copied().unwrap_or(0)
    }

    pub fn add_item(&mut self, item: &str, count: u32) {
        let held = self.inventory.entry(item.to_string()).or_insert(0);
        *held = held.saturating_add(count);
    }

    /// Removes one of `item`. Returns false if none were held.
    pub fn consume_item(&mut self, item: &str) -> bool {
        match self.inventory.get_mut(item) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}
