//! Ratatui styling for the terminal UI.

use client_frontend_core::{
    MessageLevel,
    view_model::{ActorView, Terrain},
};
use game_core::{Facing, MAX_DARKNESS};
use ratatui::style::{Color, Modifier, Style};

/// Consistent colors and glyphs for the CLI.
///
/// Every map cell is two characters wide so the grid looks square in most
/// terminal fonts.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme {
    /// Night overlay alpha of the current frame.
    darkness: u8,
}

impl RatatuiTheme {
    pub fn new(darkness: u8) -> Self {
        Self { darkness }
    }

    /// Past half of the full overlay the map is drawn dimmed.
    pub fn is_dark(&self) -> bool {
        self.darkness > MAX_DARKNESS / 2
    }

    pub fn terrain(&self, terrain: Terrain) -> (&'static str, Style) {
        let (glyph, color) = match terrain {
            Terrain::Void => ("  ", Color::Reset),
            Terrain::Ground => ("..", Color::Green),
            Terrain::Water => ("~~", Color::Blue),
            Terrain::Tree => ("TT", Color::LightGreen),
            Terrain::Door => ("[]", Color::Yellow),
            Terrain::Wall => ("##", Color::Gray),
        };
        (glyph, self.shade(Style::default().fg(color)))
    }

    pub fn actor(&self, actor: &ActorView) -> (String, Style) {
        let arrow = facing_arrow(actor.facing);
        if actor.is_player() {
            let style = Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
            return (format!("@{arrow}"), style);
        }

        let initial = actor
            .name
            .as_deref()
            .and_then(|name| name.chars().next())
            .unwrap_or('n');
        (
            format!("{initial}{arrow}"),
            self.shade(Style::default().fg(Color::LightMagenta)),
        )
    }

    /// Gauge color for a bar filled to `value` in `[0, 1]`.
    pub fn bar(&self, value: f64) -> Style {
        let color = match value {
            v if v >= 0.6 => Color::Green,
            v if v >= 0.3 => Color::Yellow,
            v if v > 0.0 => Color::LightRed,
            _ => Color::Red,
        };
        Style::default().fg(color)
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    fn shade(&self, style: Style) -> Style {
        if self.is_dark() {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}

fn facing_arrow(facing: Facing) -> char {
    match facing {
        Facing::Down => 'v',
        Facing::Up => '^',
        Facing::Left => '<',
        Facing::Right => '>',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Cell;

    fn actor(name: Option<&str>, facing: Facing) -> ActorView {
        ActorView {
            name: name.map(str::to_string),
            cell: Cell::new(0, 0),
            facing,
            animation_frame: 0,
        }
    }

    #[test]
    fn actors_show_their_facing() {
        let theme = RatatuiTheme::default();
        assert_eq!(theme.actor(&actor(None, Facing::Left)).0, "@<");
        assert_eq!(theme.actor(&actor(Some("Kid"), Facing::Up)).0, "K^");
    }

    #[test]
    fn night_dims_terrain() {
        let day = RatatuiTheme::new(0).terrain(Terrain::Ground).1;
        let night = RatatuiTheme::new(MAX_DARKNESS).terrain(Terrain::Ground).1;
        assert!(!day.add_modifier.contains(Modifier::DIM));
        assert!(night.add_modifier.contains(Modifier::DIM));
    }
}
