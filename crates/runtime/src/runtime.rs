//! Process-level wiring for one game session.
//!
//! [`Runtime`] spawns the frame loop and the music task and hands out
//! [`RuntimeHandle`]s; [`RuntimeBuilder`] gathers the world and the settings
//! they start from.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use game_core::{Controls, DialogueScripts, GameConfig, GameState, NpcSpawn, TileMap};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::audio::{AudioBackend, MusicDirector, Playlist};
use crate::events::EventBus;
use crate::oracle::OracleManager;
use crate::workers::{Command, SimulationWorker};

/// Settings for the frame loop, the channels and the music task.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Time between two frame steps.
    pub frame_interval: Duration,
    /// Seed for NPC wandering and the music shuffle.
    pub seed: u64,
    /// How long the silent audio backend pretends a track lasts.
    pub track_length: Duration,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_FRAME_MS: u64 = 16;
    pub const DEFAULT_TRACK_SECS: u64 = 180;

    /// Reads process settings from the environment on top of `game_config`.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `MEADOW_FRAME_MS` | 16 |
    /// | `MEADOW_SEED` | random |
    /// | `MEADOW_TRACK_SECS` | 180 |
    pub fn from_env(game_config: GameConfig) -> Self {
        let defaults = Self {
            game_config,
            ..Self::default()
        };

        Self {
            frame_interval: read_env::<u64>("MEADOW_FRAME_MS")
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.frame_interval),
            seed: read_env("MEADOW_SEED").unwrap_or(defaults.seed),
            track_length: read_env::<u64>("MEADOW_TRACK_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.track_length),
            ..defaults
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            frame_interval: Duration::from_millis(Self::DEFAULT_FRAME_MS),
            seed: rand::random(),
            track_length: Duration::from_secs(Self::DEFAULT_TRACK_SECS),
            event_buffer_size: 256,
            command_buffer_size: 32,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// A running game session.
///
/// Owns the worker tasks. Frontends talk to it only through
/// [`RuntimeHandle`].
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
    music_handle: Option<JoinHandle<()>>,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Handles are cheap to clone and can be moved into other tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Stops the frame loop and waits for the simulation worker to finish.
    ///
    /// The music task is abandoned; the track in flight is not interrupted
    /// by the runtime, it simply is never followed by another.
    pub async fn shutdown(self) -> Result<()> {
        if let Err(err) = self.handle.shutdown().await {
            warn!(error = %err, "simulation worker already stopped");
        }
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        if let Some(music) = self.music_handle {
            music.abort();
        }

        info!("runtime shut down");
        Ok(())
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    world: Option<(TileMap, Vec<NpcSpawn>)>,
    dialogues: DialogueScripts,
    music: Option<(Playlist, Arc<dyn AudioBackend>)>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            world: None,
            dialogues: DialogueScripts::new(),
            music: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Map and NPC roster the session starts from.
    pub fn world(mut self, map: TileMap, npcs: Vec<NpcSpawn>) -> Self {
        self.world = Some((map, npcs));
        self
    }

    /// Start from an existing state instead of a fresh world.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn dialogues(mut self, dialogues: DialogueScripts) -> Self {
        self.dialogues = dialogues;
        self
    }

    /// Play `playlist` through `backend` in the background.
    pub fn music(mut self, playlist: Playlist, backend: Arc<dyn AudioBackend>) -> Self {
        self.music = Some((playlist, backend));
        self
    }

    /// Validates the world and spawns the workers.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        let config = self.config;

        let initial_state = match (self.state, self.world) {
            (Some(state), _) => state,
            (None, Some((map, npcs))) => {
                GameState::new(&config.game_config, map, &npcs, config.seed)
                    .map_err(RuntimeError::InitialState)?
            }
            (None, None) => return Err(RuntimeError::MissingWorld),
        };

        let oracles = OracleManager::new(config.game_config.clone(), self.dialogues);
        let event_bus = EventBus::with_capacity(config.event_buffer_size);

        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size);
        let (controls_tx, controls_rx) = watch::channel(Controls::empty());
        let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(initial_state.clone()));

        let handle = RuntimeHandle::new(
            command_tx,
            Arc::new(controls_tx),
            snapshot_rx,
            event_bus.clone(),
        );

        let sim_worker = SimulationWorker::new(
            initial_state,
            oracles,
            config.frame_interval,
            command_rx,
            controls_rx,
            snapshot_tx,
            event_bus.clone(),
        );
        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        let music_handle = self.music.map(|(playlist, backend)| {
            let director = MusicDirector::new(playlist, backend, event_bus).with_seed(config.seed);
            tokio::spawn(director.run())
        });

        Ok(Runtime {
            handle,
            sim_worker_handle,
            music_handle,
        })
    }
}
