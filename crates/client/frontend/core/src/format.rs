//! Human-readable text for runtime events.

use std::path::Path;

use game_core::{GameEvent, GameState, NpcId};
use runtime::AudioEvent;

use crate::config::MessageVisibility;
use crate::message::MessageLevel;

/// Message for a frame event, or `None` when the event is not worth a line.
pub fn game_event(
    event: &GameEvent,
    state: &GameState,
    visibility: &MessageVisibility,
) -> Option<(String, MessageLevel)> {
    use MessageLevel::{Error, Info, Warning};

    let line = match event {
        GameEvent::ConversationStarted {
            partner: Some(npc),
            ..
        } => (format!("You greet {}.", npc_name(state, *npc)), Info),
        GameEvent::ConversationEnded { partner: Some(npc) } => {
            (format!("{} waves goodbye.", npc_name(state, *npc)), Info)
        }
        GameEvent::ChoiceCommitted { choice, .. } if visibility.show_choices => {
            (format!("> {choice}"), Info)
        }
        GameEvent::HourChanged { hour } if visibility.show_hours => {
            (format!("It is now {hour:02}:00."), Info)
        }
        GameEvent::TreeFelled { .. } => ("Timber! The tree comes down.".to_owned(), Info),
        GameEvent::ItemsGained { item, count } => (format!("+{count} {item}"), Info),
        GameEvent::Cooked => ("You cook a fish over the fire.".to_owned(), Info),
        GameEvent::CookFailed => ("You need a fish and some wood to cook.".to_owned(), Warning),
        GameEvent::Ate => ("You eat a cooked fish. Delicious.".to_owned(), Info),
        GameEvent::NothingToEat => ("You have nothing cooked to eat.".to_owned(), Warning),
        GameEvent::Starving => ("You are starving!".to_owned(), Warning),
        GameEvent::GameOver => (
            "You collapse from hunger. Press Space to start over.".to_owned(),
            Error,
        ),
        GameEvent::Restarted => ("You wake up, rested and fed.".to_owned(), Info),
        _ => return None,
    };
    Some(line)
}

/// Message for a music event.
pub fn audio_event(
    event: &AudioEvent,
    visibility: &MessageVisibility,
) -> Option<(String, MessageLevel)> {
    match event {
        AudioEvent::TrackStarted { track } if visibility.show_music => Some((
            format!("Now playing: {}", track_title(track)),
            MessageLevel::Info,
        )),
        AudioEvent::TrackFailed { track, .. } => Some((
            format!("Could not play {}", track_title(track)),
            MessageLevel::Warning,
        )),
        _ => None,
    }
}

fn npc_name(state: &GameState, id: NpcId) -> &str {
    state.npc(id).map_or("Someone", |npc| npc.name.as_str())
}

/// File stem with underscores turned into spaces.
pub fn track_title(track: &Path) -> String {
    track
        .file_stem()
        .map(|stem| stem.to_string_lossy().replace('_', " "))
        .unwrap_or_else(|| track.display().to_string())
}

/// `HH:MM` for minutes since midnight.
pub fn clock_label(hour: u32, minute: u32) -> String {
    format!("{hour:02}:{minute:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameConfig, Layer, NpcSpawn, Tile, TileMap};
    use std::path::PathBuf;

    fn state() -> GameState {
        let ground = vec![Some(Tile::new(0, 0)); 100];
        let map = TileMap::new(10, 10, vec![Layer::new("Base ground", true, ground)]).unwrap();
        GameState::new(&GameConfig::default(), map, &[NpcSpawn::new("Kid", 1, 1)], 0).unwrap()
    }

    #[test]
    fn conversations_name_the_npc() {
        let state = state();
        let event = GameEvent::ConversationStarted {
            partner: Some(NpcId(0)),
            prompt: "Hi!".into(),
        };
        let (text, level) = game_event(&event, &state, &MessageVisibility::default()).unwrap();
        assert_eq!(text, "You greet Kid.");
        assert_eq!(level, MessageLevel::Info);
    }

    #[test]
    fn environment_conversations_are_silent() {
        let event = GameEvent::ConversationEnded { partner: None };
        assert!(game_event(&event, &state(), &MessageVisibility::default()).is_none());
    }

    #[test]
    fn optional_events_follow_visibility() {
        let state = state();
        let hour = GameEvent::HourChanged { hour: 9 };
        let mut visibility = MessageVisibility::default();
        assert!(game_event(&hour, &state, &visibility).is_none());

        visibility.show_hours = true;
        let (text, _) = game_event(&hour, &state, &visibility).unwrap();
        assert_eq!(text, "It is now 09:00.");
    }

    #[test]
    fn game_over_is_an_error() {
        let (_, level) =
            game_event(&GameEvent::GameOver, &state(), &MessageVisibility::default()).unwrap();
        assert_eq!(level, MessageLevel::Error);
    }

    #[test]
    fn tracks_are_titled_by_file_stem() {
        let event = AudioEvent::TrackStarted {
            track: PathBuf::from("/music/summer_breeze.mp3"),
        };
        let (text, _) = audio_event(&event, &MessageVisibility::default()).unwrap();
        assert_eq!(text, "Now playing: summer breeze");
    }

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(clock_label(8, 5), "08:05");
    }
}
