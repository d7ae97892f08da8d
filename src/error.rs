//! Rejections returned by game actions.
//!
//! None of these are fatal: an action that returns `Err` leaves the game
//! state exactly as it was, and the `Display` text is meant for the player.

use thiserror::Error;

/// Broad category of a rejected action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    InvalidZoneTransition,
    InvalidDifficultyChange,
    InsufficientFunds,
    NoInventory,
    AlreadyFullHealth,
    InvalidActionForState,
    InvalidSnapshot,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("You cannot switch zones during combat!")]
    ZoneChangeInCombat,

    #[error("Zone locked! Requires Level {required}.")]
    ZoneLocked { required: u32 },

    #[error("There is no zone number {0}.")]
    UnknownZone(usize),

    #[error("You cannot change difficulty during combat!")]
    DifficultyChangeInCombat,

    #[error("Unknown difficulty: {0}.")]
    UnknownDifficulty(String),

    #[error("You need {price} gold to buy that!")]
    InsufficientFunds { price: u32 },

    #[error("The shop does not sell {0}.")]
    UnknownItem(String),

    #[error("The merchant won't trade while you're fighting!")]
    ShopInCombat,

    #[error("You have no Healing Potions!")]
    NoPotions,

    #[error("You are already at full health.")]
    AlreadyFullHealth,

    #[error("You cannot focus enough to drink a potion during combat!")]
    PotionInCombat,

    #[error("There is nothing to fight.")]
    NotInCombat,

    #[error("You are already in combat!")]
    AlreadyInCombat,

    #[error("You are still searching for something to fight...")]
    ExplorationPending,

    #[error("You find nothing to fight here.")]
    NothingToFight,

    #[error("You have fallen. Start a new game or load a save.")]
    PlayerDefeated,

    #[error("Save data is invalid: {0}")]
    InvalidSnapshot(String),
}

impl GameError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            GameError::ZoneChangeInCombat | GameError::ZoneLocked { .. } | GameError::UnknownZone(_) => {
                RejectionKind::InvalidZoneTransition
            }
            GameError::DifficultyChangeInCombat | GameError::UnknownDifficulty(_) => {
                RejectionKind::InvalidDifficultyChange
            }
            GameError::InsufficientFunds { .. } => RejectionKind::InsufficientFunds,
            GameError::NoPotions => RejectionKind::NoInventory,
            GameError::AlreadyFullHealth => RejectionKind::AlreadyFullHealth,
            GameError::UnknownItem(_)
            | GameError::ShopInCombat
            | GameError::PotionInCombat
            | GameError::NotInCombat
            | GameError::AlreadyInCombat
            | GameError::ExplorationPending
            | GameError::NothingToFight
            | GameError::PlayerDefeated => RejectionKind::InvalidActionForState,
            GameError::InvalidSnapshot(_) => RejectionKind::InvalidSnapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_player_facing() {
        assert_eq!(
            GameError::ZoneLocked { required: 5 }.to_string(),
            "Zone locked! Requires Level 5."
        );
        assert_eq!(
            GameError::InsufficientFunds { price: 75 }.to_string(),
            "You need 75 gold to buy that!"
        );
    }

    #[test]
    fn test_kind_taxonomy() {
        assert_eq!(
            GameError::ZoneChangeInCombat.kind(),
            RejectionKind::InvalidZoneTransition
        );
        assert_eq!(
            GameError::DifficultyChangeInCombat.kind(),
            RejectionKind::InvalidDifficultyChange
        );
        assert_eq!(GameError::NoPotions.kind(), RejectionKind::NoInventory);
        assert_eq!(
            GameError::NotInCombat.kind(),
            RejectionKind::InvalidActionForState
        );
        assert_eq!(
            GameError::InvalidSnapshot("bad".into()).kind(),
            RejectionKind::InvalidSnapshot
        );
    }
}
