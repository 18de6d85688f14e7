//! The runtime steps the game on its own and reacts to held controls.

use std::time::Duration;

use game_core::{Controls, GameConfig, GameEvent, Layer, Mode, Tile, TileMap};
use runtime::{Event, Runtime, RuntimeConfig, RuntimeError, Topic};

fn meadow(width: u32, height: u32) -> TileMap {
    let ground = vec![Some(Tile::new(0, 1)); (width * height) as usize];
    TileMap::new(width, height, vec![Layer::new("Base ground", true, ground)]).unwrap()
}

fn config(game_config: GameConfig) -> RuntimeConfig {
    RuntimeConfig {
        game_config,
        seed: 42,
        ..RuntimeConfig::default()
    }
}

async fn start(game_config: GameConfig) -> Runtime {
    Runtime::builder()
        .config(config(game_config))
        .world(meadow(20, 10), Vec::new())
        .build()
        .await
        .expect("runtime builds")
}

#[tokio::test(start_paused = true)]
async fn frames_advance_without_input() {
    let runtime = start(GameConfig::default()).await;
    let handle = runtime.handle();

    let mut frames = handle.watch_state();
    frames.changed().await.unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let state = handle.query_state().await.unwrap();
    assert!(state.frame >= 10, "only {} frames stepped", state.frame);
    assert!(handle.snapshot().frame <= state.frame);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn held_controls_move_the_player() {
    let runtime = start(GameConfig::default()).await;
    let handle = runtime.handle();
    let start_x = handle.snapshot().player.position().x;

    handle.set_controls(Controls::RIGHT);
    assert_eq!(handle.controls(), Controls::RIGHT);
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.set_controls(Controls::empty());

    let moved = handle.query_state().await.unwrap().player.position().x;
    assert!(moved > start_x);

    tokio::time::sleep(Duration::from_millis(100)).await;
    let resting = handle.query_state().await.unwrap().player.position().x;
    assert_eq!(resting, moved);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn starvation_is_published_as_game_over() {
    let game_config = GameConfig {
        real_ms_per_game_hour: 600,
        drain_per_minute: 0.5,
        starvation_drain_per_minute: 0.5,
        ..GameConfig::default()
    };
    let runtime = start(game_config).await;
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::GameState);

    let game_over = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match events.recv().await {
                Ok(Event::GameState(event)) if event.event == GameEvent::GameOver => {
                    break event.frame;
                }
                Ok(_) => continue,
                Err(err) => panic!("event stream ended: {err}"),
            }
        }
    })
    .await
    .expect("game over within five seconds");

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.mode, Mode::GameOver);
    assert!(state.frame > game_over);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn handle_fails_after_shutdown() {
    let runtime = start(GameConfig::default()).await;
    let handle = runtime.handle();
    runtime.shutdown().await.unwrap();

    let err = handle.query_state().await.unwrap_err();
    assert!(matches!(err, RuntimeError::CommandChannelClosed));
}

#[tokio::test]
async fn overlapping_spawns_are_rejected() {
    let spawns = vec![
        game_core::NpcSpawn::new("Kid", 2, 2),
        game_core::NpcSpawn::new("Merchant", 2, 2),
    ];
    let err = Runtime::builder()
        .config(config(GameConfig::default()))
        .world(meadow(20, 10), spawns)
        .build()
        .await
        .err();
    assert!(matches!(err, Some(RuntimeError::InitialState(_))));
}
