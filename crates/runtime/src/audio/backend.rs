use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::sync::oneshot;

use crate::api::{Result, RuntimeError};

/// Something that can play one music file.
pub trait AudioBackend: Send + Sync {
    /// Starts playing `track` and returns its completion handle.
    ///
    /// Must be called from within a tokio runtime.
    fn play(&self, track: &Path) -> Result<Playback>;
}

/// A track that is playing.
///
/// Playback cannot be stopped; the handle only reports when it ends.
#[derive(Debug)]
pub struct Playback {
    track: PathBuf,
    done: oneshot::Receiver<()>,
}

impl Playback {
    /// `done` fires (or is dropped) when the track ends.
    pub fn new(track: impl Into<PathBuf>, done: oneshot::Receiver<()>) -> Self {
        Self {
            track: track.into(),
            done,
        }
    }

    pub fn track(&self) -> &Path {
        &self.track
    }

    pub fn is_playing(&mut self) -> bool {
        matches!(
            self.done.try_recv(),
            Err(oneshot::error::TryRecvError::Empty)
        )
    }

    /// Resolves once the track has ended.
    pub async fn finished(self) -> PathBuf {
        // A dropped sender also means the backend is done with the track.
        let _ = self.done.await;
        self.track
    }
}

/// Backend that plays nothing and reports each track finished after a fixed
/// duration.
#[derive(Clone, Debug)]
pub struct SilentBackend {
    track_length: Duration,
}

impl SilentBackend {
    pub fn new(track_length: Duration) -> Self {
        Self { track_length }
    }

    pub fn track_length(&self) -> Duration {
        self.track_length
    }
}

impl AudioBackend for SilentBackend {
    fn play(&self, track: &Path) -> Result<Playback> {
        if !track.is_file() {
            return Err(RuntimeError::Playback {
                track: track.to_path_buf(),
                reason: "no such file".into(),
            });
        }

        let (done_tx, done_rx) = oneshot::channel();
        let length = self.track_length;
        tokio::spawn(async move {
            tokio::time::sleep(length).await;
            let _ = done_tx.send(());
        });

        Ok(Playback::new(track, done_rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn silent_playback_ends_after_track_length() {
        let dir = tempfile::tempdir().unwrap();
        let track = dir.path().join("song.mp3");
        std::fs::write(&track, b"").unwrap();

        let backend = SilentBackend::new(Duration::from_secs(3));
        let mut playback = backend.play(&track).unwrap();
        assert!(playback.is_playing());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(playback.is_playing());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(!playback.is_playing());
        assert_eq!(playback.finished().await, track);
    }

    #[tokio::test]
    async fn missing_file_is_rejected() {
        let backend = SilentBackend::new(Duration::from_millis(1));
        let err = backend.play(Path::new("/nowhere/song.mp3")).unwrap_err();
        assert!(matches!(err, RuntimeError::Playback { .. }));
    }
}
