//! Footer widget with the key bindings of the current mode.

use game_core::Mode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, area: Rect, mode: Mode) {
    let help = match mode {
        Mode::Exploring => "arrows/wasd: move | space: talk, chop, open bag | q: quit",
        Mode::Chatting => "up/down: choose | space: answer | q: quit",
        Mode::InventoryOpen => "c: cook fish | e: eat | space: close bag | q: quit",
        Mode::GameOver => "space: start over | q: quit",
    };

    let paragraph = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
