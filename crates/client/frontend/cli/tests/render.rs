use client_frontend_cli::presentation::ui;
use client_frontend_core::{MessageLog, ViewModel};
use game_core::{GameConfig, GameState, Layer, Mode, NpcSpawn, Tile, TileMap};
use ratatui::{Terminal, backend::TestBackend};

fn state() -> (GameConfig, GameState) {
    let config = GameConfig::default();
    let ground = vec![Some(Tile::new(0, 0)); 100];
    let map = TileMap::new(10, 10, vec![Layer::new("Base ground", true, ground)]).unwrap();
    let state = GameState::new(&config, map, &[NpcSpawn::new("Kid", 1, 2)], 0).unwrap();
    (config, state)
}

fn screen(view_model: &ViewModel) -> String {
    let mut terminal = Terminal::new(TestBackend::new(90, 32)).unwrap();
    terminal
        .draw(|frame| ui::draw(frame, view_model, 7))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn exploring_shows_map_actors_and_needs() {
    let (config, state) = state();
    let mut messages = MessageLog::new(8);
    messages.push_text("Welcome to the meadow.");

    let text = screen(&ViewModel::from_state(&state, &config, &messages, 5));

    assert!(text.contains("08:00"));
    assert!(text.contains("@v"));
    assert!(text.contains("Kv"));
    assert!(text.contains("Health 100%"));
    assert!(text.contains("Welcome to the meadow."));
}

#[test]
fn open_inventory_lists_slots() {
    let (config, mut state) = state();
    state.inventory.add("Wood", 7);
    state.mode = Mode::InventoryOpen;

    let text = screen(&ViewModel::from_state(&state, &config, &MessageLog::new(8), 5));

    assert!(text.contains("Inventory"));
    assert!(text.contains("Wood x5"));
    assert!(text.contains("Wood x2"));
}

#[test]
fn game_over_overlay_is_drawn() {
    let (config, mut state) = state();
    state.mode = Mode::GameOver;

    let text = screen(&ViewModel::from_state(&state, &config, &MessageLog::new(8), 5));

    assert!(text.contains("Game Over"));
    assert!(text.contains("start over"));
}
