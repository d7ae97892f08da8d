use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::types::*;
use crate::character::progression::check_level_up;
use crate::core::constants::*;
use crate::core::game_state::{GameState, Phase};
use crate::error::GameError;
use crate::items::shop::drop_loot;

/// Takes the enemy out of the session, leaving the phase Idle.
///
/// Fails without touching anything when there is no fight.
fn take_enemy(state: &mut GameState) -> Result<Enemy, GameError> {
    match state.phase {
        Phase::InCombat(_) => {}
        Phase::Exploring { .. } => return Err(GameError::ExplorationPending),
        Phase::Idle => return Err(GameError::NotInCombat),
    }
    match std::mem::replace(&mut state.phase, Phase::Idle) {
        Phase::InCombat(enemy) => Ok(enemy),
        other => {
            state.phase = other;
            Err(GameError::NotInCombat)
        }
    }
}

/// Spawns an enemy from `template`, scaled for the current player level,
/// zone and difficulty, and enters combat.
pub fn start_encounter(
    state: &mut GameState,
    template: &MonsterTemplate,
) -> Result<CombatEvent, GameError> {
    if state.is_fighting() {
        return Err(GameError::AlreadyInCombat);
    }

    let zone = state.current_zone().clone();
    let difficulty = state.current_difficulty();
    let enemy = Enemy::from_template(
        template,
        state.player.level,
        zone.monster_multiplier,
        difficulty.attack_multiplier,
    );

    info!(
        enemy = %enemy.name,
        hp = enemy.hp,
        attack = enemy.attack,
        zone = %zone.name,
        "encounter started"
    );

    let event = CombatEvent::EncounterStarted {
        name: enemy.name.clone(),
        hp: enemy.hp,
        zone: zone.name,
    };
    state.phase = Phase::InCombat(enemy);
    Ok(event)
}

/// Picks a monster uniformly from the pool and starts the encounter.
pub fn encounter(state: &mut GameState, rng: &mut impl Rng) -> Result<CombatEvent, GameError> {
    if state.is_fighting() {
        return Err(GameError::AlreadyInCombat);
    }
    let template = state
        .config
        .monsters
        .choose(rng)
        .cloned()
        .ok_or(GameError::NothingToFight)?;
    start_encounter(state, &template)
}

/// Resolves one "attack" action.
///
/// Order: poison tick, stun check or player strike, victory check, enemy
/// strike with status infliction and regeneration, defeat check.
pub fn resolve_attack_turn(
    state: &mut GameState,
    rng: &mut impl Rng,
) -> Result<TurnReport, GameError> {
    let mut enemy = take_enemy(state)?;
    let mut events = Vec::new();
    let player = &mut state.player;

    if player.status.poison > 0 {
        player.take_damage(POISON_DAMAGE_PER_TURN);
        player.status.poison -= 1;
        events.push(CombatEvent::PoisonTick {
            damage: POISON_DAMAGE_PER_TURN,
            turns_left: player.status.poison,
        });

        if !player.is_alive() {
            info!(enemy = %enemy.name, "player died to poison");
            events.push(CombatEvent::PlayerDied {
                cause: DeathCause::Poison,
            });
            return Ok(TurnReport {
                outcome: TurnOutcome::Defeat,
                events,
            });
        }
    }

    if player.status.stun > 0 {
        player.status.stun -= 1;
        events.push(CombatEvent::Stunned {
            turns_left: player.status.stun,
        });
    } else {
        let damage = player
            .attack
            .saturating_add(rng.gen_range(0..=PLAYER_DAMAGE_ROLL_MAX));
        enemy.take_damage(damage);
        events.push(CombatEvent::PlayerAttack {
            damage,
            enemy_name: enemy.name.clone(),
        });
    }

    if !enemy.is_alive() {
        events.push(CombatEvent::EnemyDefeated {
            name: enemy.name.clone(),
        });

        player.xp = player.xp.saturating_add(enemy.xp_drop);
        events.push(CombatEvent::XpGained {
            amount: enemy.xp_drop,
        });

        let difficulty = state.current_difficulty();
        events.extend(drop_loot(&mut state.player, &enemy, &difficulty, rng));

        for level in check_level_up(&mut state.player) {
            events.push(CombatEvent::LevelUp { level });
        }

        info!(enemy = %enemy.name, xp = enemy.xp_drop, "enemy defeated");
        return Ok(TurnReport {
            outcome: TurnOutcome::Victory,
            events,
        });
    }

    let damage = enemy
        .attack
        .saturating_add(rng.gen_range(0..=ENEMY_DAMAGE_ROLL_MAX));
    player.take_damage(damage);
    events.push(CombatEvent::EnemyAttack {
        damage,
        enemy_name: enemy.name.clone(),
        enemy_hp: enemy.hp,
    });

    if let Some(rule) = &enemy.status {
        if rng.gen::<f64>() < rule.chance {
            match rule.kind {
                StatusKind::Poison => player.status.poison = rule.duration,
                StatusKind::Stun => player.status.stun = rule.duration,
            }
            events.push(CombatEvent::StatusInflicted {
                kind: rule.kind,
                duration: rule.duration,
                enemy_name: enemy.name.clone(),
            });
        }
    }

    if enemy.special == Some(Special::Regenerate) {
        let amount = (enemy.max_hp as f64 * REGENERATE_FRACTION).round() as i32;
        let healed = enemy.heal(amount);
        if healed > 0 {
            events.push(CombatEvent::EnemyRegenerated {
                amount: healed,
                enemy_name: enemy.name.clone(),
            });
        }
    }

    if !player.is_alive() {
        info!(enemy = %enemy.name, "player defeated");
        events.push(CombatEvent::PlayerDied {
            cause: DeathCause::EnemyAttack,
        });
        return Ok(TurnReport {
            outcome: TurnOutcome::Defeat,
            events,
        });
    }

    debug!(
        player_hp = player.hp,
        enemy_hp = enemy.hp,
        "turn resolved"
    );
    state.phase = Phase::InCombat(enemy);
    Ok(TurnReport {
        outcome: TurnOutcome::Continue,
        events,
    })
}

/// Resolves one "flee" action: an even chance to escape, otherwise a flat
/// hit while the fight goes on.
pub fn resolve_flee(state: &mut GameState, rng: &mut impl Rng) -> Result<TurnReport, GameError> {
    let enemy = take_enemy(state)?;

    if rng.gen::<f64>() > FLEE_SUCCESS_THRESHOLD {
        info!(enemy = %enemy.name, "player fled");
        return Ok(TurnReport {
            outcome: TurnOutcome::Fled,
            events: vec![CombatEvent::FleeSucceeded],
        });
    }

    let player = &mut state.player;
    player.take_damage(FLEE_FAILURE_DAMAGE);
    let mut events = vec![CombatEvent::FleeFailed {
        damage: FLEE_FAILURE_DAMAGE,
        hp_left: player.hp,
    }];

    if !player.is_alive() {
        info!(enemy = %enemy.name, "player died while fleeing");
        events.push(CombatEvent::PlayerDied {
            cause: DeathCause::Fleeing,
        });
        return Ok(TurnReport {
            outcome: TurnOutcome::Defeat,
            events,
        });
    }

    state.phase = Phase::InCombat(enemy);
    Ok(TurnReport {
        outcome: TurnOutcome::Continue,
        events,
    })
}
