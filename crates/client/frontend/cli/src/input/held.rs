use std::time::Instant;

use game_core::Controls;

use crate::config::InputConfig;

#[derive(Clone, Copy, Debug)]
struct Hold {
    control: Controls,
    /// `None` holds until the matching release arrives.
    until: Option<Instant>,
}

/// Controls currently considered held down.
///
/// Directions stay down until released when the terminal reports releases,
/// otherwise for [`InputConfig::key_hold`] after the latest press or repeat.
/// Confirm, cook and eat are always short pulses.
#[derive(Clone, Debug)]
pub struct HeldKeys {
    config: InputConfig,
    reports_releases: bool,
    holds: Vec<Hold>,
}

impl HeldKeys {
    pub fn new(config: InputConfig, reports_releases: bool) -> Self {
        Self {
            config,
            reports_releases,
            holds: Vec::new(),
        }
    }

    pub fn press(&mut self, control: Controls, now: Instant) {
        let until = if Controls::DIRECTIONS.contains(control) {
            (!self.reports_releases).then(|| now + self.config.key_hold)
        } else {
            Some(now + self.config.action_pulse)
        };

        match self.holds.iter_mut().find(|hold| hold.control == control) {
            Some(hold) => hold.until = until,
            None => self.holds.push(Hold { control, until }),
        }
    }

    pub fn release(&mut self, control: Controls) {
        self.holds.retain(|hold| hold.control != control);
    }

    /// Drops expired holds and returns what is still down.
    pub fn current(&mut self, now: Instant) -> Controls {
        self.holds
            .retain(|hold| hold.until.is_none_or(|until| until > now));
        self.holds
            .iter()
            .fold(Controls::empty(), |held, hold| held | hold.control)
    }

    pub fn clear(&mut self) {
        self.holds.clear();
    }
}
