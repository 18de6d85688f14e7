//! Conversation overlay: speaker, prompt and the answer list.

use client_frontend_core::view_model::DialogueView;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, dialogue: &DialogueView, theme: &RatatuiTheme) {
    let title = match &dialogue.speaker {
        Some(name) => format!(" {name} "),
        None => " ... ".to_string(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            dialogue.prompt.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];
    lines.extend(dialogue.choices.iter().enumerate().map(|(index, choice)| {
        if index == dialogue.highlighted {
            Line::from(Span::styled(format!("> {choice}"), theme.highlight()))
        } else {
            Line::from(Span::raw(format!("  {choice}")))
        }
    }));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
