//! Notable things that happened during a frame.

use crate::state::{Cell, Facing, Mode, NpcId, Point};

/// Emitted by [`super::GameEngine::update`] in the order they occurred.
///
/// Events only describe; the state is already updated when they are read.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    ModeChanged { from: Mode, to: Mode },
    Restarted,
    /// Health ran out.
    GameOver,

    HourChanged { hour: u32 },
    Starving,

    NpcWandered { npc: NpcId, facing: Facing, target: Point },

    ConversationStarted { partner: Option<NpcId>, prompt: String },
    ChoiceHighlighted { index: usize },
    ChoiceCommitted { prompt: String, choice: String },
    ConversationEnded { partner: Option<NpcId> },

    TreeFelled { cell: Cell },
    ItemsGained { item: String, count: u32 },

    InventoryOpened,
    InventoryClosed,
    Cooked,
    CookFailed,
    Ate,
    NothingToEat,
}

impl GameEvent {
    /// True for events a player would want to read about.
    pub fn is_notable(&self) -> bool {
        !matches!(
            self,
            GameEvent::NpcWandered { .. }
                | GameEvent::ChoiceHighlighted { .. }
                | GameEvent::ModeChanged { .. }
        )
    }
}

/// Outcome of one [`super::GameEngine::update`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameReport {
    pub frame: u64,
    /// In-game minutes advanced this frame.
    pub minutes_advanced: u32,
    /// Whether the player's position changed.
    pub player_moved: bool,
    pub events: Vec<GameEvent>,
}

impl FrameReport {
    pub fn is_quiet(&self) -> bool {
        self.events.is_empty()
    }
}
