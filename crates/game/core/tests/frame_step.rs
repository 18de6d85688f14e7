use game_core::dialogue::scripts;
use game_core::{
    Cell, Controls, DialogueBuilder, DialogueGraph, DialogueScripts, Env, Facing, FrameInput,
    FrameReport, GOODBYE, GameConfig, GameEngine, GameEvent, GameState, Layer, LayerRole, Meter,
    Mode, NpcId, NpcSpawn, PcgRng, Point, Tile, TileMap, Timestamp, items,
};

const WIDTH: u32 = 20;
const HEIGHT: u32 = 10;

/// Player position that touches the NPC standing on tile (11, 4).
const NEXT_TO_KID: Point = Point::new(150, 60);

struct World {
    config: GameConfig,
    scripts: DialogueScripts,
    state: GameState,
}

impl World {
    fn new(water: &[(i32, i32)], trees: &[(i32, i32)], spawns: &[NpcSpawn]) -> Self {
        Self::with_config(quiet_config(), water, trees, spawns)
    }

    fn with_config(
        config: GameConfig,
        water: &[(i32, i32)],
        trees: &[(i32, i32)],
        spawns: &[NpcSpawn],
    ) -> Self {
        let map = TileMap::new(
            WIDTH,
            HEIGHT,
            vec![
                layer(LayerRole::BASE_GROUND, &[], true),
                layer("Water", water, false),
                layer("Trees", trees, false),
            ],
        )
        .expect("valid map");

        let mut scripts = DialogueScripts::new();
        scripts.insert("Kid", kid_script());

        let state = GameState::new(&config, map, spawns, 7).expect("valid world");
        Self {
            config,
            scripts,
            state,
        }
    }

    fn step(&mut self, now: u64, controls: Controls) -> FrameReport {
        let env = Env::new(&self.config, &self.scripts, &PcgRng);
        let env = env.as_game_env();
        GameEngine::new(&mut self.state).update(&env, &FrameInput::new(Timestamp(now), controls))
    }
}

/// NPCs never reach their wander threshold.
fn quiet_config() -> GameConfig {
    GameConfig {
        npc_wander_min: 1_000_000,
        ..GameConfig::default()
    }
}

fn layer(name: &str, cells: &[(i32, i32)], fill: bool) -> Layer {
    let mut tiles = vec![fill.then_some(Tile::new(0, 1)); (WIDTH * HEIGHT) as usize];
    for &(col, row) in cells {
        tiles[(row as u32 * WIDTH + col as u32) as usize] = Some(Tile::new(1, 1));
    }
    Layer::new(name, true, tiles)
}

fn kid_script() -> DialogueGraph {
    let mut builder = DialogueBuilder::new();
    let root = builder.node("Hi there!");
    let town = builder.node("It's quiet around here.");
    builder
        .choice(root, "Tell me about the town.", Some(town))
        .choice(root, GOODBYE, None);
    builder.build(root).expect("valid script")
}

fn kid() -> Vec<NpcSpawn> {
    vec![NpcSpawn::new("Kid", 11, 4)]
}

#[test]
fn confirm_next_to_npc_starts_conversation_at_root() {
    let mut world = World::new(&[], &[], &kid());
    world.state.player.body.position = NEXT_TO_KID;

    let report = world.step(0, Controls::CONFIRM);

    assert_eq!(world.state.mode, Mode::Chatting);
    assert_eq!(world.state.chat_partner(), Some(NpcId(0)));
    let conversation = world.state.conversation.as_ref().unwrap();
    assert_eq!(conversation.node, world.state.dialogues.get("Kid").unwrap().root());
    assert_eq!(world.state.player.body.facing, Facing::Right);
    assert_eq!(world.state.npcs[0].body.facing, Facing::Left);
    assert!(report.events.contains(&GameEvent::ConversationStarted {
        partner: Some(NpcId(0)),
        prompt: "Hi there!".into(),
    }));
}

#[test]
fn movement_is_suppressed_while_chatting() {
    let mut world = World::new(&[], &[], &kid());
    world.state.player.body.position = NEXT_TO_KID;
    world.step(0, Controls::CONFIRM);

    let report = world.step(100, Controls::LEFT);
    assert!(!report.player_moved);
    assert_eq!(world.state.player.position(), NEXT_TO_KID);
}

#[test]
fn dead_end_node_offers_goodbye_and_ending_rewards_social() {
    let mut world = World::new(&[], &[], &kid());
    world.state.player.body.position = NEXT_TO_KID;
    world.step(0, Controls::CONFIRM);

    // Inside the input delay nothing moves.
    world.step(100, Controls::DOWN);
    assert_eq!(world.state.conversation.as_ref().unwrap().highlighted, 0);

    world.step(250, Controls::DOWN);
    assert_eq!(world.state.conversation.as_ref().unwrap().highlighted, 1);
    world.step(500, Controls::UP);
    assert_eq!(world.state.conversation.as_ref().unwrap().highlighted, 0);

    world.step(800, Controls::CONFIRM);
    let town = world.state.conversation.as_ref().unwrap().node;
    assert_ne!(town, world.state.dialogues.get("Kid").unwrap().root());

    world.state.needs.social = Meter::new(0.5);
    let report = world.step(1_100, Controls::CONFIRM);

    let healed = world.state.dialogues.get("Kid").unwrap().node(town).unwrap();
    assert_eq!(healed.choices.len(), 1);
    assert_eq!(healed.choices[0].text, GOODBYE);

    assert_eq!(world.state.mode, Mode::Exploring);
    assert!(world.state.conversation.is_none());
    assert_eq!(world.state.timers.last_chat_end, Some(Timestamp(1_100)));
    let social = world.state.needs.social.value();
    assert!(social > 0.59 && social <= 0.6, "social was {social}");
    assert!(report.events.contains(&GameEvent::ConversationEnded {
        partner: Some(NpcId(0)),
    }));
}

#[test]
fn interaction_waits_for_cooldown_after_conversation() {
    let mut world = World::new(&[], &[], &kid());
    world.state.player.body.position = NEXT_TO_KID;
    world.step(0, Controls::CONFIRM);
    world.step(250, Controls::DOWN);
    world.step(500, Controls::CONFIRM);
    assert_eq!(world.state.mode, Mode::Exploring);

    world.step(1_200, Controls::CONFIRM);
    assert_eq!(world.state.mode, Mode::Exploring);

    world.step(1_500, Controls::CONFIRM);
    assert_eq!(world.state.mode, Mode::Chatting);
    let conversation = world.state.conversation.as_ref().unwrap();
    assert_eq!(conversation.node, world.state.dialogues.get("Kid").unwrap().root());
}

#[test]
fn player_at_left_edge_stays_but_turns() {
    let mut world = World::new(&[], &[], &[]);
    world.state.player.body.position = Point::new(0, 67);
    world.state.player.body.facing = Facing::Down;

    let report = world.step(0, Controls::LEFT);

    assert!(!report.player_moved);
    assert_eq!(world.state.player.position(), Point::new(0, 67));
    assert_eq!(world.state.player.body.facing, Facing::Left);
}

#[test]
fn two_in_game_minutes_drain_exactly_twice() {
    let mut world = World::new(&[], &[], &[]);
    let drain = world.config.drain_per_minute;

    assert_eq!(world.step(0, Controls::empty()).minutes_advanced, 0);
    let report = world.step(334, Controls::empty());

    assert_eq!(report.minutes_advanced, 2);
    assert_eq!(world.state.clock.minutes, 8 * 60 + 2);
    let expected = 1.0 - 2.0 * drain;
    assert!((world.state.needs.hunger.value() - expected).abs() < 1e-12);
    assert!((world.state.needs.social.value() - expected).abs() < 1e-12);
    assert_eq!(world.state.needs.health, Meter::FULL);
}

#[test]
fn felling_a_tree_clears_the_tile_and_grants_wood() {
    let mut world = World::new(&[], &[(10, 4)], &[]);
    world.state.player.body.facing = Facing::Right;

    world.step(0, Controls::CONFIRM);
    assert_eq!(world.state.mode, Mode::Chatting);
    world.step(300, Controls::CONFIRM);
    let report = world.step(600, Controls::CONFIRM);

    let trees = world.state.map.layer_index(LayerRole::Trees).unwrap();
    assert_eq!(world.state.map.tile(trees, Cell::new(10, 4)), None);
    assert_eq!(world.state.inventory.count_of(items::WOOD), 10);
    assert_eq!(world.state.inventory.slots()[0].count, 5);
    assert_eq!(world.state.inventory.slots()[1].count, 5);
    assert_eq!(world.state.mode, Mode::Exploring);
    assert!(report.events.contains(&GameEvent::TreeFelled {
        cell: Cell::new(10, 4),
    }));
}

#[test]
fn declining_leaves_the_tree_standing() {
    let mut world = World::new(&[], &[(10, 4)], &[]);
    world.state.player.body.facing = Facing::Right;

    world.step(0, Controls::CONFIRM);
    world.step(250, Controls::DOWN);
    world.step(500, Controls::CONFIRM);

    let trees = world.state.map.layer_index(LayerRole::Trees).unwrap();
    assert!(world.state.map.tile(trees, Cell::new(10, 4)).is_some());
    assert!(world.state.inventory.is_empty());
    assert_eq!(world.state.mode, Mode::Exploring);
}

#[test]
fn fishing_catches_one_fish() {
    let mut world = World::new(&[(9, 5)], &[], &[]);
    world.state.player.body.facing = Facing::Down;

    let report = world.step(0, Controls::CONFIRM);
    assert!(report.events.contains(&GameEvent::ConversationStarted {
        partner: None,
        prompt: scripts::WATER_PROMPT.into(),
    }));
    world.step(300, Controls::CONFIRM);
    world.step(600, Controls::CONFIRM);

    assert_eq!(world.state.inventory.count_of(items::FISH), 1);
    assert_eq!(world.state.mode, Mode::Exploring);
}

#[test]
fn cooking_and_eating_from_the_inventory() {
    let mut world = World::new(&[], &[], &[]);
    world.state.player.body.facing = Facing::Up;
    world.state.inventory.add(items::FISH, 1);
    world.state.inventory.add(items::WOOD, 1);
    world.state.needs.hunger = Meter::new(0.5);

    let report = world.step(0, Controls::CONFIRM);
    assert_eq!(world.state.mode, Mode::InventoryOpen);
    assert!(report.events.contains(&GameEvent::InventoryOpened));

    // Rate limited.
    world.step(100, Controls::COOK);
    assert_eq!(world.state.inventory.count_of(items::COOKED_FISH), 0);

    let report = world.step(300, Controls::COOK);
    assert!(report.events.contains(&GameEvent::Cooked));
    assert_eq!(world.state.inventory.count_of(items::FISH), 0);
    assert_eq!(world.state.inventory.count_of(items::WOOD), 0);
    assert_eq!(world.state.inventory.count_of(items::COOKED_FISH), 1);
    assert_eq!(world.state.timers.last_chat_end, Some(Timestamp(300)));

    let report = world.step(600, Controls::EAT);
    assert!(report.events.contains(&GameEvent::Ate));
    let hunger = world.state.needs.hunger.value();
    assert!(hunger > 0.59 && hunger <= 0.6, "hunger was {hunger}");
    assert_eq!(world.state.inventory.count_of(items::COOKED_FISH), 0);

    let report = world.step(900, Controls::EAT);
    assert!(report.events.contains(&GameEvent::NothingToEat));

    let report = world.step(1_200, Controls::CONFIRM);
    assert_eq!(world.state.mode, Mode::Exploring);
    assert!(report.events.contains(&GameEvent::InventoryClosed));
}

#[test]
fn inventory_stays_shut_while_facing_something() {
    let mut world = World::new(&[(9, 5)], &[], &[]);
    world.state.player.body.facing = Facing::Down;

    world.step(0, Controls::CONFIRM);
    assert_eq!(world.state.mode, Mode::Chatting);
}

#[test]
fn inventory_stays_shut_right_after_a_conversation() {
    let mut world = World::new(&[(9, 5)], &[], &[]);
    world.state.player.body.facing = Facing::Down;

    world.step(0, Controls::CONFIRM);
    world.step(250, Controls::DOWN);
    world.step(500, Controls::CONFIRM);
    assert_eq!(world.state.mode, Mode::Exploring);

    world.state.player.body.facing = Facing::Up;
    world.step(1_000, Controls::CONFIRM);
    assert_eq!(world.state.mode, Mode::Exploring);

    world.step(1_501, Controls::CONFIRM);
    assert_eq!(world.state.mode, Mode::InventoryOpen);
}

#[test]
fn starvation_ends_the_game_and_confirm_restarts() {
    let config = GameConfig {
        drain_per_minute: 0.5,
        starvation_drain_per_minute: 0.5,
        ..quiet_config()
    };
    let mut world = World::with_config(config, &[], &[], &[]);
    world.state.inventory.add(items::WOOD, 2);
    world.state.player.body.position = Point::new(30, 30);

    world.step(0, Controls::empty());
    let report = world.step(1_000, Controls::empty());

    assert_eq!(report.minutes_advanced, 6);
    assert!(world.state.needs.health.is_empty());
    assert_eq!(world.state.mode, Mode::GameOver);
    assert!(report.events.contains(&GameEvent::Starving));
    assert!(report.events.contains(&GameEvent::GameOver));

    // Only confirm is accepted while the game is over.
    let report = world.step(1_100, Controls::RIGHT);
    assert!(!report.player_moved);
    assert_eq!(world.state.mode, Mode::GameOver);

    let report = world.step(60_000, Controls::CONFIRM);
    assert!(report.events.contains(&GameEvent::Restarted));
    assert_eq!(world.state.mode, Mode::Exploring);
    assert_eq!(world.state.needs.health, Meter::FULL);
    assert_eq!(
        world.state.player.position(),
        GameState::spawn_point(&world.state.map, world.config.tile_size)
    );
    assert_eq!(world.state.inventory.count_of(items::WOOD), 2);

    // Time spent on the game-over screen is not caught up.
    let report = world.step(60_100, Controls::empty());
    assert_eq!(report.minutes_advanced, 0);
    assert_eq!(world.state.needs.hunger, Meter::FULL);
}

#[test]
fn frame_counter_advances_every_update() {
    let mut world = World::new(&[], &[], &[]);
    assert_eq!(world.step(0, Controls::empty()).frame, 0);
    assert_eq!(world.step(16, Controls::empty()).frame, 1);
    assert_eq!(world.state.frame, 2);
}
