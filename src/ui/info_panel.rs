use crate::core::game_state::{GameState, LogKind, Phase};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the zone list (top) and the current encounter (bottom)
pub fn draw_encounter_panel(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let zone_rows = game_state.config.zones.len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(zone_rows), Constraint::Min(0)])
        .split(area);

    draw_zones(frame, chunks[0], game_state);
    draw_encounter(frame, chunks[1], game_state);
}

fn draw_zones(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let lines: Vec<Line> = game_state
        .config
        .zones
        .iter()
        .enumerate()
        .map(|(i, zone)| {
            let unlocked = zone.is_unlocked_for(game_state.player.level);
            let style = if i == game_state.zone_index {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if unlocked {
                Style::default().fg(Color::Rgb(230, 126, 34))
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let lock = if unlocked {
                String::new()
            } else {
                format!(" (Lv {})", zone.min_level)
            };
            Line::from(Span::styled(
                format!("[{}] {}{}", i + 1, zone.name, lock),
                style,
            ))
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Zones ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_encounter(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Encounter ");

    let lines = match &game_state.phase {
        Phase::InCombat(enemy) => vec![
            Line::from(Span::styled(
                enemy.name.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("HP: {}/{}", enemy.hp, enemy.max_hp)),
            Line::from(format!("Attack: {}", enemy.attack)),
        ],
        Phase::Exploring { .. } => vec![Line::from(Span::styled(
            format!("Searching the {}...", game_state.current_zone().name),
            Style::default().fg(Color::DarkGray),
        ))],
        Phase::Idle if !game_state.player.is_alive() => vec![Line::from(Span::styled(
            "Game Over. Press [N] for a new game.",
            Style::default().fg(Color::Red),
        ))],
        Phase::Idle => vec![Line::from("Nothing nearby. Press [E] to explore.")],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn log_color(kind: LogKind) -> Color {
    match kind {
        LogKind::System => Color::Cyan,
        LogKind::Combat => Color::Red,
        LogKind::Info => Color::Green,
        LogKind::Status => Color::Magenta,
    }
}

/// Draws the combat log panel (newest first)
pub fn draw_combat_log(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let block = Block::default().borders(Borders::ALL).title(" Log ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max_width = inner.width as usize;
    let lines: Vec<Line> = game_state
        .combat_log
        .iter()
        .rev()
        .take(inner.height as usize)
        .map(|entry| {
            // Truncate long messages to fit panel width
            let msg = if entry.message.chars().count() > max_width {
                let cut: String = entry
                    .message
                    .chars()
                    .take(max_width.saturating_sub(1))
                    .collect();
                format!("{}…", cut)
            } else {
                entry.message.clone()
            };
            Line::from(Span::styled(msg, Style::default().fg(log_color(entry.kind))))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
