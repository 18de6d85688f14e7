//! Terminal layout and key handling settings.

use std::env;
use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    pub input: InputConfig,
}

impl CliConfig {
    /// `CLI_MESSAGE_PANEL_HEIGHT` (lines, at least 3) and `CLI_KEY_HOLD_MS`
    /// override the defaults.
    pub fn from_env() -> Self {
        let Self { mut ui, mut input } = Self::default();
        if let Some(height) = parsed::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            ui.message_panel_height = height.max(3);
        }
        if let Some(ms) = parsed::<u64>("CLI_KEY_HOLD_MS") {
            input.key_hold = Duration::from_millis(ms.max(1));
        }
        Self { ui, input }
    }
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Message panel height, borders included.
    pub message_panel_height: u16,
    /// Redraw interval while nothing else wakes the loop.
    pub redraw_interval: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 7,
            redraw_interval: Duration::from_millis(16),
        }
    }
}

/// Key-hold emulation.
///
/// Most terminals only report presses (and auto-repeats). A press therefore
/// counts as held for a while and is refreshed by every repeat.
#[derive(Clone, Debug)]
pub struct InputConfig {
    /// Hold time for arrow keys. Below the game's 200ms input delay so one
    /// tap moves a dialogue highlight by exactly one entry.
    pub key_hold: Duration,
    /// Hold time for confirm, cook and eat.
    pub action_pulse: Duration,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            key_hold: Duration::from_millis(180),
            action_pulse: Duration::from_millis(100),
        }
    }
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|raw| raw.trim().parse().ok())
}
