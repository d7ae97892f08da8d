use rand::Rng;
use std::fmt;
use tracing::info;

use crate::character::player::Player;
use crate::combat::types::{CombatEvent, Enemy};
use crate::core::constants::*;
use crate::core::game_state::GameState;
use crate::error::GameError;
use crate::zones::Difficulty;

/// Outcome of a potion or purchase.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopEvent {
    PotionUsed { healed: i32, poison_cleared: bool },
    PotionBought { price: u32 },
    SwordUpgraded { price: u32, attack: i32, next_price: u32 },
}

impl fmt::Display for ShopEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopEvent::PotionUsed {
                healed,
                poison_cleared: true,
            } => write!(
                f,
                "You drink a potion, restoring {} HP! The poison fades.",
                healed
            ),
            ShopEvent::PotionUsed { healed, .. } => {
                write!(f, "You drink a potion, restoring {} HP!", healed)
            }
            ShopEvent::PotionBought { price } => {
                write!(f, "Purchased {} for {} gold.", HEALING_POTION, price)
            }
            ShopEvent::SwordUpgraded { attack, .. } => {
                write!(f, "Purchased {}! Attack is now {}.", SWORD_UPGRADE, attack)
            }
        }
    }
}

/// Rolls gold and the bonus potion for a defeated enemy.
pub fn drop_loot(
    player: &mut Player,
    enemy: &Enemy,
    difficulty: &Difficulty,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    let mut events = Vec::new();

    let base = rng.gen_range(enemy.gold_drop.min..=enemy.gold_drop.max);
    let gold = (base as f64 * difficulty.gold_multiplier).round() as u32;
    player.gold = player.gold.saturating_add(gold);
    events.push(CombatEvent::GoldFound { amount: gold });

    if rng.gen::<f64>() < POTION_DROP_CHANCE {
        player.add_item(HEALING_POTION, 1);
        events.push(CombatEvent::PotionFound);
    }

    events
}

/// Current asking price for an item, if the shop sells it.
pub fn shop_price(state: &GameState, item: &str) -> Option<u32> {
    match item {
        HEALING_POTION => Some(state.config.potion_price),
        SWORD_UPGRADE => Some(state.upgrade_price),
        _ => None,
    }
}

fn ensure_out_of_combat(state: &GameState, in_combat: GameError) -> Result<(), GameError> {
    if state.is_fighting() {
        return Err(in_combat);
    }
    if state.is_exploring() {
        return Err(GameError::ExplorationPending);
    }
    Ok(())
}

/// Drinks a Healing Potion: heals 40% of max HP and cures poison.
///
/// Stun is left alone.
pub fn use_potion(state: &mut GameState) -> Result<ShopEvent, GameError> {
    ensure_out_of_combat(state, GameError::PotionInCombat)?;

    let player = &mut state.player;
    if !player.is_alive() {
        return Err(GameError::PlayerDefeated);
    }
    if player.item_count(HEALING_POTION) == 0 {
        return Err(GameError::NoPotions);
    }
    if player.is_full_health() {
        return Err(GameError::AlreadyFullHealth);
    }

    let heal_amount = (player.max_hp as f64 * POTION_HEAL_FRACTION).round() as i32;
    let healed = player.heal(heal_amount);
    player.consume_item(HEALING_POTION);

    let poison_cleared = player.status.poison > 0;
    player.status.poison = 0;

    info!(healed, hp = player.hp, "potion used");
    Ok(ShopEvent::PotionUsed {
        healed,
        poison_cleared,
    })
}

/// Buys `item` at `price`.
///
/// A Sword Upgrade raises attack and makes the next upgrade cost 1.5x.
pub fn buy_item(state: &mut GameState, item: &str, price: u32) -> Result<ShopEvent, GameError> {
    ensure_out_of_combat(state, GameError::ShopInCombat)?;

    if item != HEALING_POTION && item != SWORD_UPGRADE {
        return Err(GameError::UnknownItem(item.to_string()));
    }
    if state.player.gold < price {
        return Err(GameError::InsufficientFunds { price });
    }

    state.player.gold -= price;

    let event = if item == HEALING_POTION {
        state.player.add_item(HEALING_POTION, 1);
        ShopEvent::PotionBought { price }
    } else {
        state.player.attack = state.player.attack.saturating_add(SWORD_UPGRADE_ATTACK);
        state.upgrade_price = (state.upgrade_price as f64 * UPGRADE_PRICE_GROWTH).round() as u32;
        ShopEvent::SwordUpgraded {
            price,
            attack: state.player.attack,
            next_price: state.upgrade_price,
        }
    };

    info!(item, price, gold = state.player.gold, "item purchased");
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::types::{default_monsters, GoldRange};
    use crate::core::game_state::Phase;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn goblin() -> Enemy {
        Enemy::from_template(&default_monsters()[1], 1, 1.0, 1.0)
    }

    #[test]
    fn test_drop_loot_gold_within_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let enemy = goblin();
        let normal = Difficulty::new("Normal", 1.0, 1.0);

        for _ in 0..100 {
            let mut player = Player::new();
            drop_loot(&mut player, &enemy, &normal, &mut rng);
            assert!((5..=12).contains(&player.gold));
        }
    }

    #[test]
    fn test_drop_loot_applies_gold_multiplier() {
        let mut enemy = goblin();
        enemy.gold_drop = GoldRange { min: 5, max: 5 };
        let hard = Difficulty::new("Hard", 1.5, 1.5);
        let mut player = Player::new();

        drop_loot(&mut player, &enemy, &hard, &mut StepRng::new(0, 0));
        // 7.5 rounds up
        assert_eq!(player.gold, 8);
    }

    #[test]
    fn test_potion_drop_is_occasional() {
        let mut rng = ChaCha8Rng::seed_from_u64(99999);
        let enemy = goblin();
        let normal = Difficulty::new("Normal", 1.0, 1.0);
        let mut player = Player::new();

        for _ in 0..1000 {
            drop_loot(&mut player, &enemy, &normal, &mut rng);
        }
        let potions = player.item_count(HEALING_POTION);
        assert!(potions > 30 && potions < 200, "got {} potions", potions);
    }

    #[test]
    fn test_use_potion_heals_and_cures_poison() {
        let mut state = GameState::default();
        state.player.hp = 30;
        state.player.status.poison = 2;
        state.player.status.stun = 1;
        state.player.add_item(HEALING_POTION, 1);

        let event = use_potion(&mut state).unwrap();
        assert_eq!(
            event,
            ShopEvent::PotionUsed {
                healed: 40,
                poison_cleared: true
            }
        );
        assert_eq!(state.player.hp, 70);
        assert_eq!(state.player.status.poison, 0);
        assert_eq!(state.player.status.stun, 1);
        assert_eq!(state.player.item_count(HEALING_POTION), 0);
    }

    #[test]
    fn test_use_potion_caps_at_max() {
        let mut state = GameState::default();
        state.player.hp = 90;
        state.player.add_item(HEALING_POTION, 1);

        use_potion(&mut state).unwrap();
        assert_eq!(state.player.hp, 100);
    }

    #[test]
    fn test_use_potion_rejections() {
        let mut state = GameState::default();
        state.player.hp = 50;
        assert_eq!(use_potion(&mut state), Err(GameError::NoPotions));

        state.player.add_item(HEALING_POTION, 1);
        state.player.hp = 100;
        assert_eq!(use_potion(&mut state), Err(GameError::AlreadyFullHealth));
        assert_eq!(state.player.item_count(HEALING_POTION), 1);

        state.player.hp = 50;
        state.phase = Phase::InCombat(goblin());
        assert_eq!(use_potion(&mut state), Err(GameError::PotionInCombat));
        assert_eq!(state.player.hp, 50);

        state.phase = Phase::Idle;
        state.player.hp = 0;
        assert_eq!(use_potion(&mut state), Err(GameError::PlayerDefeated));
    }

    #[test]
    fn test_buy_sword_upgrade() {
        let mut state = GameState::default();
        state.player.gold = 50;

        let price = shop_price(&state, SWORD_UPGRADE).unwrap();
        let event = buy_item(&mut state, SWORD_UPGRADE, price).unwrap();
        assert_eq!(state.player.gold, 0);
        assert_eq!(state.player.attack, 20);
        assert_eq!(state.upgrade_price, 75);
        assert_eq!(
            event,
            ShopEvent::SwordUpgraded {
                price: 50,
                attack: 20,
                next_price: 75
            }
        );
    }

    #[test]
    fn test_upgrade_price_keeps_climbing() {
        let mut state = GameState::default();
        state.player.gold = 10_000;
        let mut prices = Vec::new();
        for _ in 0..4 {
            let price = state.upgrade_price;
            prices.push(price);
            buy_item(&mut state, SWORD_UPGRADE, price).unwrap();
        }
        // 112.5 and 169.5 round up to 113 and 170
        assert_eq!(prices, vec![50, 75, 113, 170]);
        assert_eq!(state.upgrade_price, 255);
    }

    #[test]
    fn test_buy_potion() {
        let mut state = GameState::default();
        state.player.gold = 25;
        buy_item(&mut state, HEALING_POTION, 20).unwrap();
        assert_eq!(state.player.gold, 5);
        assert_eq!(state.player.item_count(HEALING_POTION), 1);
        assert_eq!(state.upgrade_price, 50);
    }

    #[test]
    fn test_buy_rejections_leave_gold() {
        let mut state = GameState::default();
        state.player.gold = 10;

        assert_eq!(
            buy_item(&mut state, SWORD_UPGRADE, 50),
            Err(GameError::InsufficientFunds { price: 50 })
        );
        assert_eq!(
            buy_item(&mut state, "Dragon Egg", 1),
            Err(GameError::UnknownItem("Dragon Egg".to_string()))
        );

        state.phase = Phase::InCombat(goblin());
        assert_eq!(
            buy_item(&mut state, HEALING_POTION, 5),
            Err(GameError::ShopInCombat)
        );
        assert_eq!(state.player.gold, 10);
        assert_eq!(state.player.item_count(HEALING_POTION), 0);
    }
}
