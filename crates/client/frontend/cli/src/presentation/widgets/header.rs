//! Header widget displaying the world clock and game mode.

use client_frontend_core::ViewModel;
use game_core::Mode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header panel with time of day and current mode.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel) {
    let mode_text = match view_model.mode {
        Mode::Exploring => "",
        Mode::Chatting => " [TALKING]",
        Mode::InventoryOpen => " [INVENTORY]",
        Mode::GameOver => " [GAME OVER]",
    };

    let text = vec![Line::from(vec![
        Span::raw("Time: "),
        Span::styled(
            view_model.clock.label(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | "),
        Span::styled(
            view_model.clock.phase.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Frame: "),
        Span::styled(
            view_model.frame.to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            mode_text,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Meadow"));

    frame.render_widget(paragraph, area);
}
