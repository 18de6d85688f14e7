//! Map widget: terrain grid with actors, scrolled to keep the player centred.

use client_frontend_core::ViewModel;
use game_core::Cell;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::RatatuiTheme;

/// Terminal columns per map cell.
pub const CELL_WIDTH: u16 = 2;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL).title("Map");
    let inner = block.inner(area);

    let cols = i32::from(inner.width / CELL_WIDTH);
    let rows = i32::from(inner.height);
    let origin = Cell::new(
        viewport_start(view_model.player.cell.col, cols, view_model.map.width),
        viewport_start(view_model.player.cell.row, rows, view_model.map.height),
    );

    let lines: Vec<Line> = (0..rows)
        .map(|dy| {
            let spans: Vec<Span> = (0..cols)
                .map(|dx| cell_span(view_model, Cell::new(origin.col + dx, origin.row + dy), theme))
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn cell_span<'a>(view_model: &ViewModel, cell: Cell, theme: &RatatuiTheme) -> Span<'a> {
    if let Some(actor) = view_model.actor_at(cell) {
        let (glyph, style) = theme.actor(actor);
        return Span::styled(glyph, style);
    }
    match view_model.map.terrain(cell) {
        Some(terrain) => {
            let (glyph, style) = theme.terrain(terrain);
            Span::styled(glyph, style)
        }
        None => Span::raw("  "),
    }
}

/// First visible index along one axis.
///
/// Centres `focus` in a window of `visible` cells, clamped so the window
/// never scrolls past either map edge. Maps smaller than the window start at 0.
fn viewport_start(focus: i32, visible: i32, extent: u32) -> i32 {
    let extent = i32::try_from(extent).unwrap_or(i32::MAX);
    if visible >= extent {
        return 0;
    }
    (focus - visible / 2).clamp(0, extent - visible)
}
