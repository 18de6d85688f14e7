//! UI rendering entry point composing all widgets.
use anyhow::Result;
use client_frontend_core::ViewModel;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::presentation::{RatatuiTheme, terminal::Tui, widgets};

/// Width of the needs panel right of the map.
const SIDE_PANEL_WIDTH: u16 = 24;

/// Draw one frame.
///
/// The standard layout is header, map with the needs panel, messages and
/// footer. Conversations, the inventory and the game over screen are drawn
/// as overlays on top.
pub fn render(terminal: &mut Tui, view_model: &ViewModel, message_panel_height: u16) -> Result<()> {
    terminal.draw(|frame| draw(frame, view_model, message_panel_height))?;
    Ok(())
}

pub fn draw(frame: &mut Frame, view_model: &ViewModel, message_panel_height: u16) {
    let theme = RatatuiTheme::new(view_model.clock.darkness);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Min(0),                       // Game area
            Constraint::Length(message_panel_height), // Messages
            Constraint::Length(1),                    // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], view_model);

    let game_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(chunks[1]);
    widgets::map::render(frame, game_area[0], view_model, &theme);
    widgets::needs::render(frame, game_area[1], view_model, &theme);

    widgets::messages::render(frame, chunks[2], &view_model.messages, &theme);
    widgets::footer::render(frame, chunks[3], view_model.mode);

    if let Some(dialogue) = &view_model.dialogue {
        widgets::dialogue::render(frame, bottom_rect(80, 10, chunks[1]), dialogue, &theme);
    }
    if view_model.inventory.open {
        widgets::inventory::render(frame, centered_rect(96, 70, frame.area()), &view_model.inventory);
    }
    if view_model.is_game_over() {
        widgets::game_over::render(frame, centered_rect(50, 40, frame.area()));
    }
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    horizontal_center(percent_x, popup_layout[1])
}

/// A box of `height` lines along the bottom edge of `r`.
fn bottom_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(height)])
        .split(r);

    horizontal_center(percent_x, layout[1])
}

fn horizontal_center(percent_x: u16, r: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(r)[1]
}
