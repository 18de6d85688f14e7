//! In-game time of day and the status bars it drains.

use crate::config::GameConfig;
use crate::state::types::Timestamp;

const MINUTES_PER_DAY: u32 = GameConfig::MINUTES_PER_DAY;

/// Maximum alpha of the night overlay.
pub const MAX_DARKNESS: u8 = 160;

/// Coarse classification of the time of day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayPhase {
    Dawn,
    Day,
    Dusk,
    Night,
}

/// Minutes since midnight plus the real-time bookkeeping that drives them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldClock {
    /// `0..1440`.
    pub minutes: u32,
    /// Minute at which needs were last drained.
    pub last_drain: u32,
    /// Real time not yet converted into whole minutes, in `ms * 60` units.
    carry: u64,
    /// Frame time of the previous tick; `None` until the first frame.
    last_tick: Option<Timestamp>,
}

impl WorldClock {
    pub fn new(start_minute: u32) -> Self {
        let minutes = start_minute % MINUTES_PER_DAY;
        Self {
            minutes,
            last_drain: minutes,
            carry: 0,
            last_tick: None,
        }
    }

    pub fn hour(&self) -> u32 {
        self.minutes / 60
    }

    pub fn minute(&self) -> u32 {
        self.minutes % 60
    }

    /// Converts real time elapsed since the last tick into whole in-game
    /// minutes and returns how many were advanced.
    ///
    /// The first call only records `now`. Fractions of a minute are carried
    /// into the next call so no time is lost between frames.
    pub fn advance(&mut self, now: Timestamp, real_ms_per_game_hour: u64) -> u32 {
        let Some(last) = self.last_tick.replace(now) else {
            return 0;
        };
        let per_hour = real_ms_per_game_hour.max(1);

        let accumulated = self.carry + now.since(last) * 60;
        let advanced = accumulated / per_hour;
        self.carry = accumulated % per_hour;

        let advanced = u32::try_from(advanced).unwrap_or(u32::MAX);
        self.minutes = ((self.minutes as u64 + advanced as u64) % MINUTES_PER_DAY as u64) as u32;
        advanced
    }

    /// Records `now` without advancing, so time spent paused is not caught up
    /// later.
    pub fn hold(&mut self, now: Timestamp) {
        self.last_tick = Some(now);
    }

    /// Marks every minute up to now as drained.
    pub fn mark_drained(&mut self) {
        self.last_drain = self.minutes;
    }

    pub fn day_phase(&self) -> DayPhase {
        match self.minutes {
            300..480 => DayPhase::Dawn,
            480..1080 => DayPhase::Day,
            1080..1260 => DayPhase::Dusk,
            _ => DayPhase::Night,
        }
    }

    /// Alpha of the darkening overlay: 0 at full day, [`MAX_DARKNESS`] at night,
    /// fading linearly across dawn and dusk.
    pub fn darkness(&self) -> u8 {
        let max = MAX_DARKNESS as u32;
        let value = match self.day_phase() {
            DayPhase::Dawn => max * (480 - self.minutes) / 180,
            DayPhase::Day => 0,
            DayPhase::Dusk => max * (self.minutes - 1080) / 180,
            DayPhase::Night => max,
        };
        value as u8
    }
}

impl Default for WorldClock {
    fn default() -> Self {
        Self::new(8 * 60)
    }
}

/// A status bar clamped to `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meter(f64);

impl Meter {
    pub const FULL: Self = Self(1.0);
    pub const EMPTY: Self = Self(0.0);

    pub fn new(value: f64) -> Self {
        Self(Self::clamp(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 <= 0.0
    }

    pub fn add(&mut self, amount: f64) {
        self.0 = Self::clamp(self.0 + amount);
    }

    pub fn drain(&mut self, amount: f64) {
        self.add(-amount);
    }

    fn clamp(value: f64) -> f64 {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        }
    }
}

impl Default for Meter {
    fn default() -> Self {
        Self::FULL
    }
}

/// The player's three status bars.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Needs {
    pub health: Meter,
    pub social: Meter,
    pub hunger: Meter,
}

impl Needs {
    pub fn full() -> Self {
        Self::default()
    }

    /// Applies one in-game minute of depletion.
    ///
    /// Hunger and social drop by `drain`. Health drops by `starvation` only
    /// while hunger was already empty at the start of the minute.
    pub fn drain_minute(&mut self, drain: f64, starvation: f64) {
        let starving = self.hunger.is_empty();
        self.hunger.drain(drain);
        self.social.drain(drain);
        if starving {
            self.health.drain(starvation);
        }
    }
}
