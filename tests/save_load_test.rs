//! Save/load integration tests
//!
//! Covers snapshot round-trips through the SaveManager and the browser
//! save format, and that a bad save never half-loads.

use glimmering::combat::{default_monsters, start_encounter, GoldRange, MonsterTemplate, TurnOutcome};
use glimmering::core::constants::{HEALING_POTION, MAX_GOLD, MAX_PLAYER_LEVEL};
use glimmering::input::{handle_action, Action};
use glimmering::{GameError, GameState, LogKind, Phase, SaveError, SaveManager, SaveSnapshot};
use rand::rngs::mock::StepRng;

fn temp_saves() -> (tempfile::TempDir, SaveManager) {
    let dir = tempfile::tempdir().unwrap();
    let saves = SaveManager::with_path(dir.path().join("save.json"));
    (dir, saves)
}

fn seasoned_state() -> GameState {
    let mut state = GameState::default();
    state.player.level = 6;
    state.player.xp = 42;
    state.player.xp_to_next_level = 650;
    state.player.max_hp = 200;
    state.player.hp = 130;
    state.player.attack = 40;
    state.player.gold = 321;
    state.player.add_item(HEALING_POTION, 3);
    state.player.status.poison = 1;
    state.upgrade_price = 113;
    state.set_zone(1).unwrap();
    state.set_difficulty("Hard").unwrap();
    state
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_restore_of_serialize_matches_except_combat() {
    let original = seasoned_state();
    let mut fighting = original.clone();
    start_encounter(&mut fighting, &default_monsters()[0]).unwrap();

    let snapshot = fighting.save_game();
    let mut restored = GameState::default();
    restored.load_game(snapshot).unwrap();

    assert_eq!(restored.player, original.player);
    assert_eq!(restored.upgrade_price, original.upgrade_price);
    assert_eq!(restored.zone_index, original.zone_index);
    assert_eq!(restored.difficulty, original.difficulty);
    assert_eq!(restored.phase, Phase::Idle);
    assert!(restored.current_enemy().is_none());
}

#[test]
fn test_round_trip_through_disk() {
    let (_dir, saves) = temp_saves();
    let state = seasoned_state();

    assert!(!saves.save_exists());
    saves.save(&state.save_game()).unwrap();
    assert!(saves.save_exists());

    let mut restored = GameState::default();
    restored.load_game(saves.load().unwrap()).unwrap();
    assert_eq!(restored.player, state.player);
    assert_eq!(restored.difficulty, "Hard");
    assert_eq!(restored.current_zone().name, "Murky Swamp");
}

#[test]
fn test_missing_save_is_not_found() {
    let (_dir, saves) = temp_saves();
    assert!(matches!(saves.load(), Err(SaveError::NotFound)));
}

// ============================================================================
// Browser save format
// ============================================================================

#[test]
fn test_browser_save_without_difficulty_loads_as_normal() {
    let json = r#"{
        "player": {
            "name": "Adventurer",
            "hp": 80,
            "maxHp": 120,
            "attack": 20,
            "level": 2,
            "xp": 10,
            "xpToNextLevel": 250,
            "gold": 75,
            "inventory": { "Healing Potion": 2 },
            "status": { "poison": 0, "stun": 0 }
        },
        "upgradePrice": 75,
        "zoneIndex": 0
    }"#;

    let snapshot = SaveSnapshot::from_json(json).unwrap();
    assert_eq!(snapshot.difficulty, None);

    let mut state = GameState::default();
    state.difficulty = "Hard".to_string();
    state.load_game(snapshot).unwrap();

    assert_eq!(state.difficulty, "Normal");
    assert_eq!(state.player.max_hp, 120);
    assert_eq!(state.player.item_count(HEALING_POTION), 2);
    assert_eq!(state.upgrade_price, 75);
}

#[test]
fn test_snapshot_json_uses_camel_case_keys() {
    let json = seasoned_state().save_game().to_json().unwrap();
    assert!(json.contains("\"maxHp\""));
    assert!(json.contains("\"xpToNextLevel\""));
    assert!(json.contains("\"upgradePrice\""));
    assert!(json.contains("\"zoneIndex\""));
    assert!(json.contains("\"difficulty\": \"Hard\""));
}

// ============================================================================
// Rejected loads
// ============================================================================

#[test]
fn test_corrupt_file_leaves_state_untouched() {
    let (dir, saves) = temp_saves();
    std::fs::write(dir.path().join("save.json"), "{ not json").unwrap();
    assert!(matches!(saves.load(), Err(SaveError::Json(_))));

    let mut state = seasoned_state();
    let before = state.player.clone();
    handle_action(Action::Load, &mut state, &saves, &mut StepRng::new(0, 0));

    assert_eq!(state.player, before);
    assert_eq!(state.difficulty, "Hard");
    let last = state.combat_log.back().unwrap();
    assert!(last.message.starts_with("Error during load:"));
    assert_eq!(last.kind, LogKind::Combat);
}

#[test]
fn test_out_of_range_numbers_rejected() {
    let mut state = GameState::default();
    let before = state.player.clone();

    let mut huge_level = state.save_game();
    huge_level.player.level = 300_000_000;
    assert!(matches!(
        state.load_game(huge_level),
        Err(GameError::InvalidSnapshot(_))
    ));

    let mut past_cap = state.save_game();
    past_cap.player.level = MAX_PLAYER_LEVEL + 1;
    assert!(state.load_game(past_cap).is_err());

    let mut rich = state.save_game();
    rich.player.gold = u32::MAX;
    assert!(state.load_game(rich).is_err());

    let mut wise = state.save_game();
    wise.player.xp = u32::MAX;
    assert!(state.load_game(wise).is_err());

    let mut mighty = state.save_game();
    mighty.player.attack = i32::MAX;
    assert!(state.load_game(mighty).is_err());

    let mut sturdy = state.save_game();
    sturdy.player.max_hp = i32::MAX;
    sturdy.player.hp = i32::MAX;
    assert!(state.load_game(sturdy).is_err());

    assert_eq!(state.player, before);
    assert_eq!(state.phase, Phase::Idle);
}

#[test]
fn test_largest_accepted_save_plays_on() {
    let mut state = GameState::default();
    let mut snapshot = state.save_game();
    snapshot.player.level = MAX_PLAYER_LEVEL;
    snapshot.player.gold = MAX_GOLD;
    state.load_game(snapshot).unwrap();

    state.explore().unwrap();
    assert!(state.tick(5_000, &mut StepRng::new(0, 0)).is_some());
    assert!(state.current_enemy().unwrap().hp > 0);
}

#[test]
fn test_rewards_saturate_instead_of_overflowing() {
    let mut state = GameState::default();
    state.player.gold = u32::MAX;
    state.player.xp = u32::MAX - 1;
    state.player.xp_to_next_level = u32::MAX;
    let weak = MonsterTemplate {
        name: "Rat".to_string(),
        base_hp: 1,
        base_attack: 1,
        xp_drop: 20,
        gold_drop: GoldRange { min: 5, max: 5 },
        status: None,
        special: None,
    };
    start_encounter(&mut state, &weak).unwrap();

    let report = state.attack(&mut StepRng::new(0, 0)).unwrap();
    assert_eq!(report.outcome, TurnOutcome::Victory);
    assert_eq!(state.player.gold, u32::MAX);
    // xp hits the threshold exactly once at u32::MAX
    assert_eq!(state.player.level, 2);
}

#[test]
fn test_invalid_snapshot_rejected_whole() {
    let mut state = seasoned_state();
    let before = state.player.clone();

    let mut snapshot = state.save_game();
    snapshot.player.gold = 9999;
    snapshot.player.hp = snapshot.player.max_hp + 1;

    let err = state.load_game(snapshot).unwrap_err();
    assert!(matches!(err, GameError::InvalidSnapshot(_)));
    assert_eq!(state.player, before);
}
