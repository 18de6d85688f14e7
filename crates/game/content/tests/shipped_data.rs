//! The files under `data/` load and form a valid world.

use std::path::PathBuf;

use game_content::ContentFactory;
use game_core::{DialogueOracle, GameState, LayerRole};

fn factory() -> ContentFactory {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data");
    ContentFactory::new(dir)
}

#[test]
fn shipped_content_builds_a_world() {
    let factory = factory();
    let config = factory.load_config().expect("config.toml");
    let map = factory.load_map("meadow").expect("maps/meadow.ron");
    let spawns = factory.load_npcs().expect("npcs.ron");

    assert!(map.layer(LayerRole::Water).is_some());
    assert!(map.layer(LayerRole::Trees).is_some());

    let state = GameState::new(&config, map, &spawns, 0).expect("valid world");
    let names: Vec<_> = state.npcs.iter().map(|npc| npc.name.as_str()).collect();
    assert_eq!(names, ["Kid", "Merchant", "Alchemist"]);

    let grid = game_core::CollisionMap::new(&state.map, config.tile_size);
    assert!(!grid.layer_blocked(state.player.position()));
}

#[test]
fn every_npc_has_a_script() {
    let factory = factory();
    let scripts = factory.load_dialogues().expect("dialogues.ron");
    for spawn in factory.load_npcs().expect("npcs.ron") {
        let graph = scripts
            .script(&spawn.name)
            .unwrap_or_else(|| panic!("no script for {}", spawn.name));
        assert_eq!(graph.node(graph.root()).unwrap().choices.len(), 4);
    }
}
