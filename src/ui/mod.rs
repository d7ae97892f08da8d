mod info_panel;
mod stats_panel;

use crate::core::game_state::GameState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, game_state: &GameState) {
    let size = frame.size();

    // Split vertically: main content, combat log, footer
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(14), // Stats + encounter
            Constraint::Min(6),     // Combat log
            Constraint::Length(3),  // Footer
        ])
        .split(size);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Stats panel
            Constraint::Percentage(50), // Zones + encounter
        ])
        .split(v_chunks[0]);

    stats_panel::draw_stats_panel(frame, chunks[0], game_state);
    info_panel::draw_encounter_panel(frame, chunks[1], game_state);
    info_panel::draw_combat_log(frame, v_chunks[1], game_state);
    stats_panel::draw_footer(frame, v_chunks[2], game_state);
}
