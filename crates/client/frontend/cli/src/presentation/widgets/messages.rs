//! Messages widget displaying recent game events.

use client_frontend_core::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::RatatuiTheme;

/// Render the message log panel.
///
/// `messages` is newest first; the newest line ends up at the bottom.
pub fn render(frame: &mut Frame, area: Rect, messages: &[MessageEntry], theme: &RatatuiTheme) {
    let rows = area.height.saturating_sub(2) as usize;
    let mut items: Vec<ListItem> = messages
        .iter()
        .take(rows)
        .map(|entry| ListItem::new(format_message(entry)).style(theme.message(entry.level)))
        .collect();

    // Pad with empty lines to maintain consistent height
    while items.len() < rows {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

/// Format a message entry with the frame it happened in.
fn format_message(entry: &MessageEntry) -> String {
    match entry.frame {
        Some(frame) => format!("[{frame:>6}] {}", entry.text),
        None => entry.text.clone(),
    }
}
