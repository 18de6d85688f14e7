/// Game configuration constants and tunable parameters.
///
/// Every field has a default matching the shipped game; data files may
/// override any subset of them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Edge length of one tile in world units.
    pub tile_size: i32,
    /// Units the player moves per frame along each pressed axis.
    pub player_speed: i32,
    /// Units an NPC advances per frame along each axis while walking.
    pub npc_step: i32,
    /// Ticks between player animation frames while moving.
    pub player_anim_period: u32,
    /// Ticks between NPC animation frames.
    pub npc_anim_period: u32,
    /// Idle frames before an NPC tries to wander: `min..min + spread`.
    pub npc_wander_min: u32,
    pub npc_wander_spread: u32,
    /// Largest stack a single inventory slot may hold.
    pub stack_limit: u32,
    /// Minimum milliseconds between two dialogue or inventory inputs.
    pub input_delay_ms: u64,
    /// Milliseconds after a conversation (or cooking) during which neither a
    /// new interaction nor the inventory may open.
    pub interaction_cooldown_ms: u64,
    /// Real milliseconds per in-game hour.
    pub real_ms_per_game_hour: u64,
    /// In-game minute the session starts at.
    pub start_minute: u32,
    /// Fraction drained from hunger and social per in-game minute.
    pub drain_per_minute: f64,
    /// Fraction drained from health per in-game minute while starving.
    pub starvation_drain_per_minute: f64,
    /// Social gained whenever a conversation ends.
    pub social_per_chat: f64,
    /// Hunger restored by eating one cooked fish.
    pub hunger_per_meal: f64,
    /// Wood granted for felling one tree.
    pub wood_per_tree: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    pub const INVENTORY_ROWS: usize = 8;
    pub const INVENTORY_COLS: usize = 8;
    pub const INVENTORY_SLOTS: usize = Self::INVENTORY_ROWS * Self::INVENTORY_COLS;
    pub const ANIMATION_FRAMES: u32 = 4;
    pub const MINUTES_PER_DAY: u32 = 24 * 60;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TILE_SIZE: i32 = 15;
    pub const DEFAULT_STACK_LIMIT: u32 = 5;
    pub const DEFAULT_INPUT_DELAY_MS: u64 = 200;
    pub const DEFAULT_INTERACTION_COOLDOWN_MS: u64 = 1_000;
    pub const DEFAULT_REAL_MS_PER_GAME_HOUR: u64 = 10_000;

    pub fn new() -> Self {
        Self {
            tile_size: Self::DEFAULT_TILE_SIZE,
            player_speed: 1,
            npc_step: 2,
            player_anim_period: 11,
            npc_anim_period: 16,
            npc_wander_min: 30,
            npc_wander_spread: 30,
            stack_limit: Self::DEFAULT_STACK_LIMIT,
            input_delay_ms: Self::DEFAULT_INPUT_DELAY_MS,
            interaction_cooldown_ms: Self::DEFAULT_INTERACTION_COOLDOWN_MS,
            real_ms_per_game_hour: Self::DEFAULT_REAL_MS_PER_GAME_HOUR,
            start_minute: 8 * 60,
            drain_per_minute: 0.5 / Self::MINUTES_PER_DAY as f64,
            starvation_drain_per_minute: 0.5 / Self::MINUTES_PER_DAY as f64,
            social_per_chat: 0.10,
            hunger_per_meal: 0.10,
            wood_per_tree: 10,
        }
    }

    /// Returns a copy with a different tile edge length.
    pub fn with_tile_size(tile_size: i32) -> Self {
        Self {
            tile_size,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
