//! Experience and leveling rules.

use tracing::info;

use super::player::Player;
use crate::core::constants::*;

/// XP needed to advance past `level`.
pub fn xp_for_next_level(level: u32) -> u32 {
    level.saturating_mul(XP_PER_LEVEL).saturating_add(XP_LEVEL_OFFSET)
}

/// Applies every level-up the player's XP pays for, carrying the remainder.
///
/// Returns the levels reached, in order. Stops if the threshold is ever
/// zero so a corrupt player can't spin forever.
pub fn check_level_up(player: &mut Player) -> Vec<u32> {
    let mut reached = Vec::new();

    while player.xp_to_next_level > 0 && player.xp >= player.xp_to_next_level {
        player.xp -= player.xp_to_next_level;
        player.level = player.level.saturating_add(1);
        player.max_hp = player.max_hp.saturating_add(LEVEL_UP_MAX_HP);
        player.hp = player.max_hp;
        player.attack = player.attack.saturating_add(LEVEL_UP_ATTACK);
        player.xp_to_next_level = xp_for_next_level(player.level);

        info!(level = player.level, "player leveled up");
        reached.push(player.level);
    }

    reached
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_for_next_level() {
        assert_eq!(xp_for_next_level(2), 250);
        assert_eq!(xp_for_next_level(3), 350);
        assert_eq!(xp_for_next_level(10), 1050);
    }

    #[test]
    fn test_no_level_up_below_threshold() {
        let mut player = Player::new();
        player.xp = 99;
        assert!(check_level_up(&mut player).is_empty());
        assert_eq!(player.level, 1);
        assert_eq!(player.xp, 99);
    }

    #[test]
    fn test_exact_threshold_levels_once() {
        let mut player = Player::new();
        player.xp = 100;
        player.hp = 12;

        assert_eq!(check_level_up(&mut player), vec![2]);
        assert_eq!(player.level, 2);
        assert_eq!(player.xp, 0);
        assert_eq!(player.max_hp, 120);
        assert_eq!(player.hp, 120);
        assert_eq!(player.attack, 20);
        assert_eq!(player.xp_to_next_level, 250);
    }

    #[test]
    fn test_multi_level_up_carries_remainder() {
        let mut player = Player::new();
        // 100 for level 2, 250 for level 3, 20 left over
        player.xp = 370;

        assert_eq!(check_level_up(&mut player), vec![2, 3]);
        assert_eq!(player.level, 3);
        assert_eq!(player.xp, 20);
        assert_eq!(player.max_hp, 140);
        assert_eq!(player.attack, 25);
        assert_eq!(player.xp_to_next_level, 350);
    }

    #[test]
    fn test_zero_threshold_terminates() {
        let mut player = Player::new();
        player.xp_to_next_level = 0;
        player.xp = 500;
        assert!(check_level_up(&mut player).is_empty());
        assert_eq!(player.level, 1);
    }
}
