//! Player and NPC bodies.

use crate::config::GameConfig;
use crate::state::types::{Facing, Point, Rect};

/// Sprite animation cursor: `frame` cycles through
/// [`GameConfig::ANIMATION_FRAMES`] every `period` ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animation {
    pub frame: u32,
    pub tick: u32,
}

impl Animation {
    /// Counts one tick and flips the frame once `period` ticks accumulated.
    pub fn advance(&mut self, period: u32) {
        self.tick += 1;
        if self.tick >= period {
            self.frame = (self.frame + 1) % GameConfig::ANIMATION_FRAMES;
            self.tick = 0;
        }
    }

    /// Back to the standing frame.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Anything occupying a tile-sized box in the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub position: Point,
    pub facing: Facing,
    pub animation: Animation,
}

impl Actor {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Occupied rectangle.
    pub fn rect(&self, tile_size: i32) -> Rect {
        self.position.tile_rect(tile_size)
    }

    /// Turns towards `other`; a horizontal offset takes priority over a vertical one.
    ///
    /// Returns `false` when both positions coincide and facing is unchanged.
    pub fn face_towards(&mut self, other: Point) -> bool {
        let here = self.position;
        self.facing = if here.x < other.x {
            Facing::Right
        } else if here.x > other.x {
            Facing::Left
        } else if here.y < other.y {
            Facing::Down
        } else if here.y > other.y {
            Facing::Up
        } else {
            return false;
        };
        true
    }
}

/// The player character. Has no name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub body: Actor,
}

impl Player {
    pub fn new(position: Point) -> Self {
        Self {
            body: Actor::new(position),
        }
    }

    pub fn position(&self) -> Point {
        self.body.position
    }
}

/// Wander state of one NPC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NpcMotion {
    /// Standing still, counting frames until the next wander attempt.
    Idle { ticks: u32 },
    /// Walking towards `target` in fixed steps.
    MovingTo { target: Point },
}

impl NpcMotion {
    pub const fn idle() -> Self {
        NpcMotion::Idle { ticks: 0 }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, NpcMotion::MovingTo { .. })
    }
}

impl Default for NpcMotion {
    fn default() -> Self {
        Self::idle()
    }
}

/// A named wandering character. The name keys its dialogue script.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Npc {
    pub name: String,
    pub body: Actor,
    pub motion: NpcMotion,
}

impl Npc {
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self {
            name: name.into(),
            body: Actor::new(position),
            motion: NpcMotion::idle(),
        }
    }

    pub fn position(&self) -> Point {
        self.body.position
    }

    /// Drops any walk in progress; the NPC stays where it is.
    pub fn freeze(&mut self) {
        if self.motion.is_moving() {
            self.motion = NpcMotion::idle();
        }
    }
}

/// Static description of an NPC used to populate a fresh world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcSpawn {
    pub name: String,
    /// Tile coordinates of the starting cell.
    pub col: i32,
    pub row: i32,
}

impl NpcSpawn {
    pub fn new(name: impl Into<String>, col: i32, row: i32) -> Self {
        Self {
            name: name.into(),
            col,
            row,
        }
    }
}
