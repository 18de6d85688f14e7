//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-control mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events. The game reads controls as "held down";
//! [`HeldKeys`] turns the terminal's press/repeat/release stream into that.

mod held;

pub use held::HeldKeys;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::Controls;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// A game control went down (or auto-repeated).
    Press(Controls),
    /// A game control was let go.
    Release(Controls),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into game controls.
///
/// | Key | Control |
/// |---|---|
/// | arrows, `w` `a` `s` `d` | move, or pick a dialogue choice |
/// | `Space`, `Enter` | confirm; toggles the inventory; restarts after game over |
/// | `c` | cook (inventory open) |
/// | `e` | eat (inventory open) |
/// | `q`, `Esc`, `Ctrl-C` | quit |
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        let pressed = key.kind == KeyEventKind::Press;
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') if pressed => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        if let Some(control) = Self::control(key.code) {
            return match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => KeyAction::Press(control),
                KeyEventKind::Release => KeyAction::Release(control),
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc if pressed => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn control(code: KeyCode) -> Option<Controls> {
        let control = match code {
            KeyCode::Left => Controls::LEFT,
            KeyCode::Right => Controls::RIGHT,
            KeyCode::Up => Controls::UP,
            KeyCode::Down => Controls::DOWN,
            KeyCode::Enter => Controls::CONFIRM,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'a' => Controls::LEFT,
                'd' => Controls::RIGHT,
                'w' => Controls::UP,
                's' => Controls::DOWN,
                ' ' => Controls::CONFIRM,
                'c' => Controls::COOK,
                'e' => Controls::EAT,
                _ => return None,
            },
            _ => return None,
        };
        Some(control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_and_wasd_move() {
        let input = InputHandler::new();
        assert_eq!(input.handle_key(key(KeyCode::Left)), KeyAction::Press(Controls::LEFT));
        assert_eq!(input.handle_key(key(KeyCode::Char('W'))), KeyAction::Press(Controls::UP));
        assert_eq!(input.handle_key(key(KeyCode::Char('s'))), KeyAction::Press(Controls::DOWN));
    }

    #[test]
    fn action_keys_map_to_controls() {
        let input = InputHandler::new();
        assert_eq!(input.handle_key(key(KeyCode::Char(' '))), KeyAction::Press(Controls::CONFIRM));
        assert_eq!(input.handle_key(key(KeyCode::Enter)), KeyAction::Press(Controls::CONFIRM));
        assert_eq!(input.handle_key(key(KeyCode::Char('c'))), KeyAction::Press(Controls::COOK));
        assert_eq!(input.handle_key(key(KeyCode::Char('e'))), KeyAction::Press(Controls::EAT));
    }

    #[test]
    fn releases_are_reported() {
        let input = InputHandler::new();
        let mut release = key(KeyCode::Right);
        release.kind = KeyEventKind::Release;
        assert_eq!(input.handle_key(release), KeyAction::Release(Controls::RIGHT));
    }

    #[test]
    fn quit_keys() {
        let input = InputHandler::new();
        assert_eq!(input.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(input.handle_key(key(KeyCode::Esc)), KeyAction::Quit);

        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        assert_eq!(input.handle_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let input = InputHandler::new();
        assert_eq!(input.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(input.handle_key(key(KeyCode::Tab)), KeyAction::None);
    }
}
