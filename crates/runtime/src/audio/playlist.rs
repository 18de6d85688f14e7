use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::api::{Result, RuntimeError};

/// Shuffled track order without repeats.
///
/// Every track is drawn once before any track plays again; the pool refills
/// when it runs dry.
#[derive(Clone, Debug, Default)]
pub struct Playlist {
    tracks: Vec<PathBuf>,
    /// Indices into `tracks` not yet drawn this round.
    pool: Vec<usize>,
}

impl Playlist {
    pub fn new(tracks: Vec<PathBuf>) -> Self {
        Self {
            tracks,
            pool: Vec::new(),
        }
    }

    /// Playlist of every `*.mp3` file directly inside `dir`.
    pub fn discover(dir: &Path) -> Result<Self> {
        discover_tracks(dir).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[PathBuf] {
        &self.tracks
    }

    /// Tracks left before the pool refills.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Draws the next track, or `None` for an empty playlist.
    pub fn next_track<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Path> {
        if self.tracks.is_empty() {
            return None;
        }
        if self.pool.is_empty() {
            self.pool.extend(0..self.tracks.len());
        }
        let pick = rng.gen_range(0..self.pool.len());
        let index = self.pool.swap_remove(pick);
        self.tracks.get(index).map(PathBuf::as_path)
    }
}

/// Every `*.mp3` file directly inside `dir`, sorted by path.
pub fn discover_tracks(dir: &Path) -> Result<Vec<PathBuf>> {
    let discovery = |source| RuntimeError::TrackDiscovery {
        dir: dir.to_path_buf(),
        source,
    };

    let mut tracks = Vec::new();
    for entry in fs::read_dir(dir).map_err(discovery)? {
        let path = entry.map_err(discovery)?.path();
        let is_mp3 = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"));
        if is_mp3 && path.is_file() {
            tracks.push(path);
        }
    }
    tracks.sort();
    Ok(tracks)
}
