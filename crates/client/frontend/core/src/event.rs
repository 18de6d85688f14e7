//! Utilities for reacting to runtime events inside UI layers.
use game_core::GameState;
use runtime::Event;

use crate::config::MessageConfig;
use crate::format;
use crate::message::{MessageEntry, MessageLog};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }
}

pub trait EventConsumer {
    /// `state` is the latest snapshot, used to resolve names.
    fn on_event(&mut self, event: &Event, state: &GameState) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;
}

/// Turns runtime events into message log lines.
#[derive(Clone, Debug)]
pub struct MessageFeed {
    config: MessageConfig,
    log: MessageLog,
}

impl MessageFeed {
    pub fn new(config: MessageConfig) -> Self {
        Self {
            log: MessageLog::new(config.capacity),
            config,
        }
    }
}

impl EventConsumer for MessageFeed {
    fn on_event(&mut self, event: &Event, state: &GameState) -> EventImpact {
        let visibility = &self.config.visibility;
        let (line, frame) = match event {
            Event::GameState(event) => (
                format::game_event(&event.event, state, visibility),
                Some(event.frame),
            ),
            Event::Audio(event) => (format::audio_event(event, visibility), None),
        };

        match line {
            Some((text, level)) => {
                self.log.push(MessageEntry::new(text, frame, level));
                EventImpact::redraw()
            }
            None => EventImpact::none(),
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameConfig, GameEvent, Layer, Tile, TileMap};
    use runtime::GameStateEvent;

    fn state() -> GameState {
        let ground = vec![Some(Tile::new(0, 0)); 4];
        let map = TileMap::new(2, 2, vec![Layer::new("Base ground", true, ground)]).unwrap();
        GameState::new(&GameConfig::default(), map, &[], 0).unwrap()
    }

    fn frame_event(frame: u64, event: GameEvent) -> Event {
        Event::GameState(GameStateEvent { frame, event })
    }

    #[test]
    fn notable_events_become_messages() {
        let mut feed = MessageFeed::new(MessageConfig::default());
        let state = state();

        let impact = feed.on_event(
            &frame_event(
                12,
                GameEvent::ItemsGained {
                    item: "Wood".into(),
                    count: 10,
                },
            ),
            &state,
        );
        assert!(impact.requires_redraw);

        let entry = feed.message_log().iter().next().unwrap();
        assert_eq!(entry.text, "+10 Wood");
        assert_eq!(entry.frame, Some(12));
    }

    #[test]
    fn chatter_is_ignored() {
        let mut feed = MessageFeed::new(MessageConfig::default());
        let impact = feed.on_event(&frame_event(1, GameEvent::InventoryOpened), &state());
        assert_eq!(impact, EventImpact::none());
        assert!(feed.take_message_log().is_empty());
    }
}
