//! Zone and difficulty data definitions.

use serde::{Deserialize, Serialize};

/// A region the player can explore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    /// Player level required to enter.
    pub min_level: u32,
    /// Applied to both monster HP and attack.
    pub monster_multiplier: f64,
}

impl Zone {
    pub fn new(name: &str, min_level: u32, monster_multiplier: f64) -> Self {
        Self {
            name: name.to_string(),
            min_level,
            monster_multiplier,
        }
    }

    pub fn is_unlocked_for(&self, level: u32) -> bool {
        level >= self.min_level
    }
}

/// A named difficulty setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub name: String,
    pub attack_multiplier: f64,
    pub gold_multiplier: f64,
}

impl Difficulty {
    pub fn new(name: &str, attack_multiplier: f64, gold_multiplier: f64) -> Self {
        Self {
            name: name.to_string(),
            attack_multiplier,
            gold_multiplier,
        }
    }
}

/// Returns the built-in zones, ordered from easiest to hardest.
pub fn default_zones() -> Vec<Zone> {
    vec![
        Zone::new("Forest Glade", 1, 1.0),
        Zone::new("Murky Swamp", 5, 1.5),
        Zone::new("Volcanic Peak", 10, 2.0),
    ]
}

/// Returns the built-in difficulty settings.
pub fn default_difficulties() -> Vec<Difficulty> {
    vec![
        Difficulty::new("Easy", 0.75, 0.75),
        Difficulty::new("Normal", 1.0, 1.0),
        Difficulty::new("Hard", 1.5, 1.5),
    ]
}
