use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use super::{AudioBackend, Playlist};
use crate::events::{AudioEvent, Event, EventBus};

/// Plays the playlist back to back, forever.
///
/// A track starts only after the previous one reported completion, so two
/// tracks never overlap.
pub struct MusicDirector {
    playlist: Playlist,
    backend: Arc<dyn AudioBackend>,
    event_bus: EventBus,
    rng: StdRng,
}

impl MusicDirector {
    pub fn new(playlist: Playlist, backend: Arc<dyn AudioBackend>, event_bus: EventBus) -> Self {
        Self {
            playlist,
            backend,
            event_bus,
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixes the shuffle order.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Main loop.
    ///
    /// Returns when the playlist is empty or a whole round of tracks in a row
    /// failed to start.
    pub async fn run(mut self) {
        if self.playlist.is_empty() {
            info!("no music tracks found");
            return;
        }
        info!(tracks = self.playlist.len(), "music started");

        let mut failures = 0;
        while let Some(track) = self.playlist.next_track(&mut self.rng) {
            let track = track.to_path_buf();
            match self.backend.play(&track) {
                Ok(playback) => {
                    failures = 0;
                    info!(track = %track.display(), "now playing");
                    self.event_bus
                        .publish(Event::Audio(AudioEvent::TrackStarted { track }));

                    let track = playback.finished().await;
                    self.event_bus
                        .publish(Event::Audio(AudioEvent::TrackFinished { track }));
                }
                Err(err) => {
                    warn!(track = %track.display(), error = %err, "track failed to play");
                    self.event_bus.publish(Event::Audio(AudioEvent::TrackFailed {
                        track,
                        error: err.to_string(),
                    }));

                    failures += 1;
                    if failures >= self.playlist.len() {
                        warn!("no playable music tracks; music stopped");
                        return;
                    }
                }
            }
        }
    }
}
