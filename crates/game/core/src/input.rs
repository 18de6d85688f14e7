//! Level-triggered input sampled once per frame.

use bitflags::bitflags;

use crate::state::Timestamp;

bitflags! {
    /// Logical actions currently held down.
    ///
    /// `CONFIRM` doubles as the inventory toggle and as restart from game over.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Controls: u8 {
        const LEFT    = 1 << 0;
        const RIGHT   = 1 << 1;
        const UP      = 1 << 2;
        const DOWN    = 1 << 3;
        const CONFIRM = 1 << 4;
        const COOK    = 1 << 5;
        const EAT     = 1 << 6;

        const DIRECTIONS = Self::LEFT.bits() | Self::RIGHT.bits() | Self::UP.bits() | Self::DOWN.bits();
    }
}

/// Everything the frame step learns from the outside world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameInput {
    /// Milliseconds since the session started.
    pub now: Timestamp,
    pub controls: Controls,
}

impl FrameInput {
    pub fn new(now: Timestamp, controls: Controls) -> Self {
        Self { now, controls }
    }

    pub fn idle(now: Timestamp) -> Self {
        Self::new(now, Controls::empty())
    }

    #[inline]
    pub fn held(&self, control: Controls) -> bool {
        self.controls.contains(control)
    }
}
