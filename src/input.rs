//! Input handling for the game screen.
//!
//! Maps keys onto game actions and forwards them to the core. Rejections and
//! save/load failures end up in the combat log for the player to read.

use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use tracing::{debug, warn};

use crate::character::save::{SaveError, SaveManager};
use crate::core::constants::{HEALING_POTION, SWORD_UPGRADE};
use crate::core::game_state::{GameState, LogKind};
use crate::error::GameError;
use crate::items::shop::shop_price;

/// A player intent forwarded to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NewGame,
    Save,
    Load,
    Explore,
    Attack,
    Flee,
    UsePotion,
    BuyPotion,
    BuyUpgrade,
    SelectZone(usize),
    CycleDifficulty,
    Quit,
}

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub fn map_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::NewGame),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Save),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(Action::Load),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(Action::Explore),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::Attack),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(Action::Flee),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::UsePotion),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(Action::BuyPotion),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(Action::BuyUpgrade),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::CycleDifficulty),
        KeyCode::Char(c @ '1'..='9') => Some(Action::SelectZone(c as usize - '1' as usize)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Name of the difficulty after the current one, wrapping around.
pub fn next_difficulty(state: &GameState) -> Option<String> {
    let difficulties = &state.config.difficulties;
    if difficulties.is_empty() {
        return None;
    }
    let current = difficulties
        .iter()
        .position(|d| d.name == state.difficulty)
        .unwrap_or(0);
    Some(difficulties[(current + 1) % difficulties.len()].name.clone())
}

fn report_rejection(state: &mut GameState, error: GameError) {
    debug!(kind = ?error.kind(), "action rejected: {}", error);
    state.add_log_entry(error.to_string(), LogKind::Combat);
}

fn report_save_error(state: &mut GameState, error: SaveError, action: &str) {
    if matches!(error, SaveError::NotFound) {
        state.add_log_entry(error.to_string(), LogKind::Combat);
        return;
    }
    warn!("{} failed: {}", action, error);
    state.add_log_entry(format!("Error during {}: {}", action, error), LogKind::Combat);
}

fn buy(state: &mut GameState, item: &str) -> Result<(), GameError> {
    let price = shop_price(state, item).ok_or_else(|| GameError::UnknownItem(item.to_string()))?;
    state.buy_item(item, price).map(|_| ())
}

/// Applies one action to the session.
pub fn handle_action(
    action: Action,
    state: &mut GameState,
    saves: &SaveManager,
    rng: &mut impl Rng,
) -> InputResult {
    let result = match action {
        Action::Quit => return InputResult::Quit,
        Action::NewGame => {
            state.start_new_game();
            Ok(())
        }
        Action::Save => {
            match saves.save(&state.save_game()) {
                Ok(()) => state.add_log_entry("Game saved successfully!", LogKind::System),
                Err(e) => report_save_error(state, e, "save"),
            }
            Ok(())
        }
        Action::Load => match saves.load() {
            Ok(snapshot) => state.load_game(snapshot),
            Err(e) => {
                report_save_error(state, e, "load");
                Ok(())
            }
        },
        Action::Explore => state.explore(),
        Action::Attack => state.attack(rng).map(|_| ()),
        Action::Flee => state.flee(rng).map(|_| ()),
        Action::UsePotion => state.use_potion().map(|_| ()),
        Action::BuyPotion => buy(state, HEALING_POTION),
        Action::BuyUpgrade => buy(state, SWORD_UPGRADE),
        Action::SelectZone(index) => state.set_zone(index),
        Action::CycleDifficulty => match next_difficulty(state) {
            Some(name) => state.set_difficulty(&name),
            None => Ok(()),
        },
    };

    if let Err(e) = result {
        report_rejection(state, e);
    }
    InputResult::Continue
}

/// Maps a key event and applies it.
pub fn handle_game_input(
    key: KeyEvent,
    state: &mut GameState,
    saves: &SaveManager,
    rng: &mut impl Rng,
) -> InputResult {
    match map_key(key.code) {
        Some(action) => handle_action(action, state, saves, rng),
        None => InputResult::Continue,
    }
}
