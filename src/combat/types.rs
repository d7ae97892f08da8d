use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants::*;
use crate::core::game_state::LogKind;

/// Timed status effect a monster can put on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Poison,
    Stun,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::Poison => write!(f, "poison"),
            StatusKind::Stun => write!(f, "stun"),
        }
    }
}

/// Chance-based status infliction attached to a monster's attack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusInfliction {
    pub kind: StatusKind,
    /// Probability in [0, 1] per enemy attack.
    pub chance: f64,
    /// Turns the status lasts. Overwrites any remaining counter.
    pub duration: u32,
    /// Listed per-turn damage for poison. The turn rules tick a fixed amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i32>,
}

/// Behavioural tag altering turn resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Special {
    /// Heals a fraction of max HP after each of its attacks.
    Regenerate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldRange {
    pub min: u32,
    pub max: u32,
}

/// Unscaled monster definition from the encounter pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub name: String,
    pub base_hp: i32,
    pub base_attack: i32,
    pub xp_drop: u32,
    pub gold_drop: GoldRange,
    #[serde(default)]
    pub status: Option<StatusInfliction>,
    #[serde(default)]
    pub special: Option<Special>,
}

/// Returns the built-in encounter pool.
pub fn default_monsters() -> Vec<MonsterTemplate> {
    vec![
        MonsterTemplate {
            name: "Slime".to_string(),
            base_hp: 30,
            base_attack: 5,
            xp_drop: 20,
            gold_drop: GoldRange { min: 1, max: 5 },
            status: Some(StatusInfliction {
                kind: StatusKind::Poison,
                chance: 0.1,
                duration: 2,
                damage: Some(POISON_DAMAGE_PER_TURN),
            }),
            special: None,
        },
        MonsterTemplate {
            name: "Goblin".to_string(),
            base_hp: 50,
            base_attack: 10,
            xp_drop: 40,
            gold_drop: GoldRange { min: 5, max: 12 },
            status: None,
            special: None,
        },
        MonsterTemplate {
            name: "Ogre".to_string(),
            base_hp: 80,
            base_attack: 15,
            xp_drop: 70,
            gold_drop: GoldRange { min: 10, max: 25 },
            status: Some(StatusInfliction {
                kind: StatusKind::Stun,
                chance: 0.2,
                duration: 1,
                damage: None,
            }),
            special: None,
        },
        MonsterTemplate {
            name: "Troll".to_string(),
            base_hp: 60,
            base_attack: 12,
            xp_drop: 55,
            gold_drop: GoldRange { min: 8, max: 18 },
            status: None,
            special: Some(Special::Regenerate),
        },
    ]
}

/// A live monster in the current encounter.
///
/// Owns its own copy of everything it needs from the template, so nothing
/// done to it ever reaches back into the encounter pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    /// Live HP. Goes to zero or below on the killing blow.
    pub hp: i32,
    /// Scaled HP at spawn; caps regeneration.
    pub max_hp: i32,
    pub attack: i32,
    pub xp_drop: u32,
    pub gold_drop: GoldRange,
    pub status: Option<StatusInfliction>,
    pub special: Option<Special>,
}

impl Enemy {
    /// Builds an enemy from a template scaled for the player's level, the
    /// zone's monster multiplier and the difficulty's attack multiplier.
    pub fn from_template(
        template: &MonsterTemplate,
        player_level: u32,
        zone_multiplier: f64,
        attack_multiplier: f64,
    ) -> Self {
        // Scaled in f64; the final casts saturate instead of wrapping.
        let level_factor = player_level.saturating_sub(1) as f64;
        let hp = ((template.base_hp as f64 + level_factor * MONSTER_HP_PER_LEVEL as f64)
            * zone_multiplier)
            .round() as i32;
        let attack = ((template.base_attack as f64
            + level_factor * MONSTER_ATTACK_PER_LEVEL as f64)
            * zone_multiplier
            * attack_multiplier)
            .round() as i32;

        Self {
            name: template.name.clone(),
            hp,
            max_hp: hp,
            attack,
            xp_drop: template.xp_drop,
            gold_drop: template.gold_drop,
            status: template.status.clone(),
            special: template.special,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
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
}

/// How the player died.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Poison,
    EnemyAttack,
    Fleeing,
}

/// Something that happened while resolving an action.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    EncounterStarted {
        name: String,
        hp: i32,
        zone: String,
    },
    PoisonTick {
        damage: i32,
        turns_left: u32,
    },
    Stunned {
        turns_left: u32,
    },
    PlayerAttack {
        damage: i32,
        enemy_name: String,
    },
    EnemyAttack {
        damage: i32,
        enemy_name: String,
        enemy_hp: i32,
    },
    StatusInflicted {
        kind: StatusKind,
        duration: u32,
        enemy_name: String,
    },
    EnemyRegenerated {
        amount: i32,
        enemy_name: String,
    },
    EnemyDefeated {
        name: String,
    },
    XpGained {
        amount: u32,
    },
    GoldFound {
        amount: u32,
    },
    PotionFound,
    LevelUp {
        level: u32,
    },
    FleeSucceeded,
    FleeFailed {
        damage: i32,
        hp_left: i32,
    },
    PlayerDied {
        cause: DeathCause,
    },
}

impl CombatEvent {
    pub fn log_kind(&self) -> LogKind {
        match self {
            CombatEvent::PoisonTick { .. }
            | CombatEvent::Stunned { .. }
            | CombatEvent::StatusInflicted { .. }
            | CombatEvent::EnemyRegenerated { .. } => LogKind::Status,
            CombatEvent::EncounterStarted { .. }
            | CombatEvent::EnemyAttack { .. }
            | CombatEvent::FleeFailed { .. }
            | CombatEvent::PlayerDied { .. } => LogKind::Combat,
            CombatEvent::PlayerAttack { .. } | CombatEvent::PotionFound => LogKind::Info,
            CombatEvent::EnemyDefeated { .. }
            | CombatEvent::XpGained { .. }
            | CombatEvent::GoldFound { .. }
            | CombatEvent::LevelUp { .. }
            | CombatEvent::FleeSucceeded => LogKind::System,
        }
    }
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::EncounterStarted { name, hp, zone } => {
                write!(f, "A hostile {} appears in the {}! (HP: {})", name, zone, hp)
            }
            CombatEvent::PoisonTick { damage, turns_left } => write!(
                f,
                "The poison gnaws at you, taking {} HP! ({} turns left)",
                damage, turns_left
            ),
            CombatEvent::Stunned { turns_left } => write!(
                f,
                "You are Stunned and cannot move this turn! ({} turns left)",
                turns_left
            ),
            CombatEvent::PlayerAttack { damage, enemy_name } => {
                write!(f, "You strike the {} for {} damage.", enemy_name, damage)
            }
            CombatEvent::EnemyAttack {
                damage,
                enemy_name,
                enemy_hp,
            } => write!(
                f,
                "The {} hits you for {} damage. ({} HP: {})",
                enemy_name, damage, enemy_name, enemy_hp
            ),
            CombatEvent::StatusInflicted {
                kind: StatusKind::Poison,
                enemy_name,
                ..
            } => write!(f, "{} poisoned you!", enemy_name),
            CombatEvent::StatusInflicted {
                kind: StatusKind::Stun,
                enemy_name,
                ..
            } => write!(f, "{} stunned you! You might lose a turn.", enemy_name),
            CombatEvent::EnemyRegenerated { amount, enemy_name } => {
                write!(f, "The {} regenerates {} HP.", enemy_name, amount)
            }
            CombatEvent::EnemyDefeated { name } => write!(f, "The {} is defeated!", name),
            CombatEvent::XpGained { amount } => write!(f, "You gained {} XP!", amount),
            CombatEvent::GoldFound { amount } => write!(f, "You find {} gold pieces!", amount),
            CombatEvent::PotionFound => write!(f, "You found a Healing Potion!"),
            CombatEvent::LevelUp { level } => {
                write!(f, "You reached Level {}! Your power grows!", level)
            }
            CombatEvent::FleeSucceeded => write!(f, "You successfully escape the encounter!"),
            CombatEvent::FleeFailed { damage, hp_left } => write!(
                f,
                "You failed to escape and take {} damage! (Your HP: {})",
                damage, hp_left
            ),
            CombatEvent::PlayerDied {
                cause: DeathCause::Poison,
            } => write!(f, "Poison took your life! Game Over."),
            CombatEvent::PlayerDied {
                cause: DeathCause::EnemyAttack,
            } => write!(f, "You have been defeated! Game Over."),
            CombatEvent::PlayerDied {
                cause: DeathCause::Fleeing,
            } => write!(f, "You died while fleeing! Game Over."),
        }
    }
}

/// Where a resolved action left the encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Enemy and player both still standing.
    Continue,
    Victory,
    Defeat,
    Fled,
}

/// Result of one attack or flee action.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    pub events: Vec<CombatEvent>,
}
