//! Settings shared by every user interface, read from the environment.

use std::env;

#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

impl FrontendConfig {
    /// Defaults overridden by:
    ///
    /// | variable               | default |
    /// |------------------------|---------|
    /// | `CLI_MESSAGE_CAPACITY` | 64      |
    /// | `SHOW_HOUR_MESSAGES`   | false   |
    /// | `SHOW_CHOICE_MESSAGES` | false   |
    /// | `SHOW_MUSIC_MESSAGES`  | true    |
    pub fn from_env() -> Self {
        let defaults = MessageVisibility::default();
        let visibility = MessageVisibility {
            show_hours: flag("SHOW_HOUR_MESSAGES").unwrap_or(defaults.show_hours),
            show_choices: flag("SHOW_CHOICE_MESSAGES").unwrap_or(defaults.show_choices),
            show_music: flag("SHOW_MUSIC_MESSAGES").unwrap_or(defaults.show_music),
        };
        let capacity = parsed::<usize>("CLI_MESSAGE_CAPACITY")
            .map_or(MessageConfig::default().capacity, |n| n.max(1));

        Self {
            messages: MessageConfig {
                capacity,
                visibility,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    pub visibility: MessageVisibility,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            visibility: MessageVisibility::default(),
        }
    }
}

/// Controls which optional event kinds generate visible messages.
///
/// Gameplay outcomes (items, meals, starvation) are always shown.
#[derive(Clone, Debug)]
pub struct MessageVisibility {
    /// "It is now 14:00."
    pub show_hours: bool,
    /// "> Tell me a joke!"
    pub show_choices: bool,
    /// "Now playing: meadow"
    pub show_music: bool,
}

impl Default for MessageVisibility {
    fn default() -> Self {
        Self {
            show_hours: false, // The clock is always on screen
            show_choices: false,
            show_music: true,
        }
    }
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|raw| raw.trim().parse().ok())
}

fn flag(key: &str) -> Option<bool> {
    let raw = env::var(key).ok()?;
    if ["true", "1", "yes", "on"].iter().any(|v| raw.eq_ignore_ascii_case(v)) {
        Some(true)
    } else if ["false", "0", "no", "off"].iter().any(|v| raw.eq_ignore_ascii_case(v)) {
        Some(false)
    } else {
        None
    }
}
