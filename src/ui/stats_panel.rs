use crate::core::constants::{HEALING_POTION, SWORD_UPGRADE};
use crate::core::game_state::GameState;
use crate::items::shop::shop_price;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the stats panel showing the player's numbers, status and inventory
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let block = Block::default().borders(Borders::ALL).title(" Character ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name + level
            Constraint::Length(1), // HP gauge
            Constraint::Min(0),    // Details
        ])
        .split(inner);

    let player = &game_state.player;

    let header = Line::from(vec![
        Span::styled(
            player.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Level: {}", player.level),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let hp_ratio = if player.max_hp > 0 {
        (player.hp.max(0) as f64 / player.max_hp as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let hp_color = if hp_ratio > 0.5 {
        Color::Green
    } else if hp_ratio > 0.25 {
        Color::Yellow
    } else {
        Color::Red
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(hp_color))
        .ratio(hp_ratio)
        .label(format!("HP: {}/{}", player.hp, player.max_hp));
    frame.render_widget(gauge, chunks[1]);

    let mut status_spans = vec![Span::raw("Status: ")];
    if player.status.is_clear() {
        status_spans.push(Span::styled("OK", Style::default().fg(Color::Green)));
    }
    if player.status.poison > 0 {
        status_spans.push(Span::styled(
            format!("Poison ({}t) ", player.status.poison),
            Style::default().fg(Color::Magenta),
        ));
    }
    if player.status.stun > 0 {
        status_spans.push(Span::styled(
            format!("Stunned ({}t)", player.status.stun),
            Style::default().fg(Color::Yellow),
        ));
    }

    let inventory: Vec<String> = player
        .inventory
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(item, count)| format!("{} ({})", item, count))
        .collect();
    let inventory_text = if inventory.is_empty() {
        "Empty".to_string()
    } else {
        inventory.join(", ")
    };

    let potion_price = shop_price(game_state, HEALING_POTION).unwrap_or_default();
    let upgrade_price = shop_price(game_state, SWORD_UPGRADE).unwrap_or_default();

    let details = vec![
        Line::from(format!("Attack: {}", player.attack)),
        Line::from(format!("XP: {}/{}", player.xp, player.xp_to_next_level)),
        Line::from(Span::styled(
            format!("Gold: {}", player.gold),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(status_spans),
        Line::from(format!("Inventory: {}", inventory_text)),
        Line::from(format!("Zone: {}", game_state.current_zone().name)),
        Line::from(format!("Difficulty: {}", game_state.difficulty)),
        Line::from(Span::styled(
            format!(
                "Shop: Potion {}g | Sword Upgrade {}g",
                potion_price, upgrade_price
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(details), chunks[2]);
}

/// Draws the controls footer; combat keys are highlighted only while fighting
pub fn draw_footer(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let active = Style::default().fg(Color::White);
    let inactive = Style::default().fg(Color::DarkGray);
    let (combat, idle) = if game_state.is_fighting() {
        (active, inactive)
    } else if game_state.is_exploring() {
        (inactive, inactive)
    } else {
        (inactive, active)
    };

    let line = Line::from(vec![
        Span::styled("[E]xplore ", idle),
        Span::styled("[A]ttack ", combat),
        Span::styled("[F]lee ", combat),
        Span::styled("[P]otion ", idle),
        Span::styled("[B]uy potion ", idle),
        Span::styled("[U]pgrade ", idle),
        Span::styled("[1-9] Zone ", idle),
        Span::styled("[D]ifficulty ", idle),
        Span::styled("[N]ew [S]ave [L]oad ", active),
        Span::styled("[Q]uit", active),
    ]);

    let footer = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
