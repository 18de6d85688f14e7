//! View-model snapshots derived from [`game_core::GameState`].
//!
//! Renderers only ever read a [`ViewModel`]; it carries actor cells, mode
//! flags, bar values and the clock, nothing a renderer could mutate.
mod map;

pub use map::{MapView, Terrain};

use game_core::{
    Cell, ConversationSource, DayPhase, Facing, GameConfig, GameState, InventorySlot, Mode,
};

use crate::format;
use crate::message::{MessageEntry, MessageLog};

/// High-level snapshot of the game used by presentation layers.
#[derive(Clone, Debug)]
pub struct ViewModel {
    pub frame: u64,
    pub mode: Mode,
    pub map: MapView,
    pub player: ActorView,
    pub npcs: Vec<ActorView>,
    pub needs: NeedsView,
    pub clock: ClockView,
    pub dialogue: Option<DialogueView>,
    pub inventory: InventoryView,
    /// Newest first.
    pub messages: Vec<MessageEntry>,
}

impl ViewModel {
    pub fn from_state(
        state: &GameState,
        config: &GameConfig,
        messages: &MessageLog,
        message_limit: usize,
    ) -> Self {
        let ts = config.tile_size;
        Self {
            frame: state.frame,
            mode: state.mode,
            map: MapView::from_map(&state.map),
            player: ActorView::new(None, state.player.body.position.center_cell(ts), &state.player.body),
            npcs: state
                .npcs
                .iter()
                .map(|npc| {
                    ActorView::new(
                        Some(npc.name.clone()),
                        npc.position().center_cell(ts),
                        &npc.body,
                    )
                })
                .collect(),
            needs: NeedsView::from_state(state),
            clock: ClockView::from_state(state),
            dialogue: DialogueView::from_state(state),
            inventory: InventoryView::from_state(state),
            messages: messages.recent(message_limit).cloned().collect(),
        }
    }

    /// Actor standing on `cell`, player first.
    pub fn actor_at(&self, cell: Cell) -> Option<&ActorView> {
        std::iter::once(&self.player)
            .chain(&self.npcs)
            .find(|actor| actor.cell == cell)
    }

    pub fn is_game_over(&self) -> bool {
        self.mode == Mode::GameOver
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorView {
    /// `None` for the player.
    pub name: Option<String>,
    /// Tile under the actor's centre.
    pub cell: Cell,
    pub facing: Facing,
    pub animation_frame: u32,
}

impl ActorView {
    fn new(name: Option<String>, cell: Cell, body: &game_core::Actor) -> Self {
        Self {
            name,
            cell,
            facing: body.facing,
            animation_frame: body.animation.frame,
        }
    }

    pub fn is_player(&self) -> bool {
        self.name.is_none()
    }
}

/// Bar values in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeedsView {
    pub health: f64,
    pub social: f64,
    pub hunger: f64,
}

impl NeedsView {
    fn from_state(state: &GameState) -> Self {
        Self {
            health: state.needs.health.value(),
            social: state.needs.social.value(),
            hunger: state.needs.hunger.value(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockView {
    pub hour: u32,
    pub minute: u32,
    pub phase: DayPhase,
    /// Overlay alpha, 0 in daylight.
    pub darkness: u8,
}

impl ClockView {
    fn from_state(state: &GameState) -> Self {
        Self {
            hour: state.clock.hour(),
            minute: state.clock.minute(),
            phase: state.clock.day_phase(),
            darkness: state.clock.darkness(),
        }
    }

    pub fn label(&self) -> String {
        format::clock_label(self.hour, self.minute)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogueView {
    /// NPC name; `None` for trees and water.
    pub speaker: Option<String>,
    pub prompt: String,
    pub choices: Vec<String>,
    pub highlighted: usize,
}

impl DialogueView {
    fn from_state(state: &GameState) -> Option<Self> {
        let conversation = state.conversation.as_ref()?;
        let node = conversation.current(&state.dialogues)?;
        let speaker = match &conversation.source {
            ConversationSource::Npc { name, .. } => Some(name.clone()),
            ConversationSource::Environment(_) => None,
        };
        Some(Self {
            speaker,
            prompt: node.text.clone(),
            choices: node.choices.iter().map(|choice| choice.text.clone()).collect(),
            highlighted: conversation.highlighted,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryView {
    pub open: bool,
    /// Row-major grid of slots.
    pub rows: Vec<Vec<InventorySlot>>,
}

impl InventoryView {
    fn from_state(state: &GameState) -> Self {
        Self {
            open: state.mode == Mode::InventoryOpen,
            rows: state.inventory.rows().map(<[InventorySlot]>::to_vec).collect(),
        }
    }

    pub fn occupied(&self) -> impl Iterator<Item = &InventorySlot> {
        self.rows.iter().flatten().filter(|slot| !slot.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{
        Conversation, DialogueBuilder, Layer, NpcId, NpcSpawn, Point, Tile, TileMap, GOODBYE,
    };

    fn state() -> (GameConfig, GameState) {
        let config = GameConfig::default();
        let ground = vec![Some(Tile::new(0, 0)); 100];
        let map = TileMap::new(10, 10, vec![Layer::new("Base ground", true, ground)]).unwrap();
        let state = GameState::new(&config, map, &[NpcSpawn::new("Kid", 1, 2)], 0).unwrap();
        (config, state)
    }

    #[test]
    fn actors_are_placed_on_their_cells() {
        let (config, state) = state();
        let view = ViewModel::from_state(&state, &config, &MessageLog::new(4), 4);

        assert!(view.player.is_player());
        assert_eq!(view.player.cell, Point::new(67, 67).center_cell(15));
        assert_eq!(view.npcs[0].name.as_deref(), Some("Kid"));
        assert_eq!(view.npcs[0].cell, Cell::new(1, 2));
        assert_eq!(view.actor_at(Cell::new(1, 2)).and_then(|a| a.name.as_deref()), Some("Kid"));
    }

    #[test]
    fn fresh_game_is_full_at_eight_in_the_morning() {
        let (config, state) = state();
        let view = ViewModel::from_state(&state, &config, &MessageLog::new(4), 4);

        assert_eq!(view.needs, NeedsView { health: 1.0, social: 1.0, hunger: 1.0 });
        assert_eq!(view.clock.label(), "08:00");
        assert_eq!(view.clock.darkness, 0);
        assert!(view.dialogue.is_none());
        assert!(!view.inventory.open);
        assert_eq!(view.inventory.occupied().count(), 0);
    }

    #[test]
    fn open_conversation_is_exposed() {
        let (config, mut state) = state();
        let mut builder = DialogueBuilder::new();
        let root = builder.node("Hi there!");
        builder.choice(root, GOODBYE, None);
        state.dialogues.get_or_insert_with("Kid", || builder.build(root).unwrap());
        state.conversation = Some(Conversation::with_npc(NpcId(0), "Kid", root));
        state.mode = Mode::Chatting;

        let view = ViewModel::from_state(&state, &config, &MessageLog::new(4), 4);
        let dialogue = view.dialogue.unwrap();
        assert_eq!(dialogue.speaker.as_deref(), Some("Kid"));
        assert_eq!(dialogue.prompt, "Hi there!");
        assert_eq!(dialogue.choices, [GOODBYE]);
    }

    #[test]
    fn inventory_rows_mirror_the_grid() {
        let (config, mut state) = state();
        state.inventory.add("Wood", 7);
        state.mode = Mode::InventoryOpen;

        let view = ViewModel::from_state(&state, &config, &MessageLog::new(4), 4);
        assert!(view.inventory.open);
        assert_eq!(view.inventory.rows.len(), GameConfig::INVENTORY_ROWS);
        let counts: Vec<_> = view.inventory.occupied().map(|slot| slot.count).collect();
        assert_eq!(counts, [5, 2]);
    }
}
