//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker steps the game on a fixed tick. Music runs in its
//! own task, see [`crate::audio::MusicDirector`].

mod simulation;

pub use simulation::{Command, SimulationWorker};
