//! Side panel with the health, social and hunger bars.

use client_frontend_core::ViewModel;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Gauge},
};

use crate::presentation::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL).title("Needs");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let needs = &view_model.needs;
    let bars = [
        ("Health", needs.health, chunks[0]),
        ("Social", needs.social, chunks[2]),
        ("Hunger", needs.hunger, chunks[4]),
    ];
    for (label, value, chunk) in bars {
        let ratio = value.clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .gauge_style(theme.bar(ratio))
            .ratio(ratio)
            .label(format!("{label} {:>3.0}%", ratio * 100.0));
        frame.render_widget(gauge, chunk);
    }
}
