//! Broadcast fan-out of runtime events, one channel per topic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::broadcast;

use super::types::{AudioEvent, GameStateEvent};

/// Channel an [`Event`] is delivered on.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Frame step events
    GameState,
    /// Music playback
    Audio,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    GameState(GameStateEvent),
    Audio(AudioEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::GameState(_) => Topic::GameState,
            Event::Audio(_) => Topic::Audio,
        }
    }
}

/// Publishing never blocks. A subscriber that falls more than the channel
/// capacity behind gets `RecvError::Lagged` and skips the oldest events.
#[derive(Clone)]
pub struct EventBus {
    game_state: broadcast::Sender<Event>,
    audio: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// `capacity` applies to each topic separately.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            game_state: broadcast::channel(capacity).0,
            audio: broadcast::channel(capacity).0,
        }
    }

    fn channel(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::GameState => &self.game_state,
            Topic::Audio => &self.audio,
        }
    }

    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channel(topic).send(event).is_err() {
            tracing::trace!(?topic, "event dropped, nobody listening");
        }
    }

    /// Receives events published after this call.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channel(topic).subscribe()
    }

    /// One receiver per requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::GameEvent;

    fn game_event(frame: u64) -> Event {
        Event::GameState(GameStateEvent {
            frame,
            event: GameEvent::Ate,
        })
    }

    #[test]
    fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut game = bus.subscribe(Topic::GameState);
        let mut audio = bus.subscribe(Topic::Audio);

        bus.publish(game_event(3));

        assert_eq!(game.try_recv().unwrap(), game_event(3));
        assert!(audio.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::default();
        bus.publish(game_event(0));
    }

    #[test]
    fn subscribe_multiple_returns_one_receiver_per_topic() {
        let bus = EventBus::with_capacity(4);
        let receivers = bus.subscribe_multiple(&[Topic::GameState, Topic::Audio]);
        assert_eq!(receivers.len(), 2);
        assert!(receivers.contains_key(&Topic::Audio));
    }
}
