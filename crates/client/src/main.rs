//! Meadow game client binary.
//!
//! This binary is the composition root that assembles:
//! 1. Content (config, map, NPCs, dialogues) via `ContentFactory`
//! 2. Runtime (frame loop and music) via `Runtime::builder()`
//! 3. Frontend (terminal UI)
//!
//! All components are built independently and injected into the Client container.

use std::sync::Arc;

use anyhow::{Context, Result};
use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
use game_content::ContentFactory;
use meadow_client::{Client, ClientConfig};
use runtime::{Playlist, Runtime, RuntimeConfig, SilentBackend};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (kept alive until exit so buffered lines are flushed)
    let _log_guard = logging::setup_logging(&client_config.log_dir)?;

    tracing::info!("Starting Meadow client");
    tracing::info!("Data directory: {}", client_config.data_dir.display());

    // 3. Load content
    let content = ContentFactory::new(&client_config.data_dir);
    let game_config = content.load_config().context("failed to load game config")?;
    let map = content
        .load_map(&client_config.map)
        .with_context(|| format!("failed to load map '{}'", client_config.map))?;
    let npcs = content.load_npcs().context("failed to load NPCs")?;
    let dialogues = content.load_dialogues().context("failed to load dialogues")?;
    tracing::info!(
        "Loaded map '{}' ({}x{}) with {} NPCs",
        client_config.map,
        map.width(),
        map.height(),
        npcs.len()
    );

    // 4. Build Runtime (independent layer)
    let runtime_config = RuntimeConfig::from_env(game_config.clone());
    tracing::info!("Seed: {}", runtime_config.seed);

    let playlist = match Playlist::discover(&client_config.assets_dir) {
        Ok(playlist) => {
            tracing::info!("Found {} music tracks", playlist.len());
            playlist
        }
        Err(e) => {
            tracing::warn!("No background music: {}", e);
            Playlist::new(Vec::new())
        }
    };
    let backend = Arc::new(SilentBackend::new(runtime_config.track_length));

    let runtime = Runtime::builder()
        .config(runtime_config)
        .world(map, npcs)
        .dialogues(dialogues)
        .music(playlist, backend)
        .build()
        .await?;
    tracing::info!("Runtime built successfully");

    // 5. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config, game_config);

    // 6. Build and run
    let client = Client::builder().runtime(runtime).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
