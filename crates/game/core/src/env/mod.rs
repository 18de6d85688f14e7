//! Read-only collaborators consulted during a frame.
//!
//! Oracles expose authored dialogue scripts and deterministic randomness. The
//! [`Env`] aggregate bundles them with the tuning config so the engine can
//! reach everything it needs without depending on concrete implementations.
mod dialogue;
mod rng;

pub use dialogue::{DialogueOracle, DialogueScripts, NoDialogues};
pub use rng::{PcgRng, RngOracle, compute_seed, context as roll, shuffle};

use std::fmt;

use crate::config::GameConfig;

/// Aggregates the oracles and configuration used by the frame step.
pub struct Env<'a, D, R>
where
    D: DialogueOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    config: &'a GameConfig,
    dialogues: &'a D,
    rng: &'a R,
}

impl<D, R> Clone for Env<'_, D, R>
where
    D: DialogueOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, R> Copy for Env<'_, D, R>
where
    D: DialogueOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

impl<D, R> fmt::Debug for Env<'_, D, R>
where
    D: DialogueOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

pub type GameEnv<'a> = Env<'a, dyn DialogueOracle + 'a, dyn RngOracle + 'a>;

impl<'a, D, R> Env<'a, D, R>
where
    D: DialogueOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(config: &'a GameConfig, dialogues: &'a D, rng: &'a R) -> Self {
        Self {
            config,
            dialogues,
            rng,
        }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn dialogues(&self) -> &'a D {
        self.dialogues
    }

    pub fn rng(&self) -> &'a R {
        self.rng
    }
}

impl<'a, D, R> Env<'a, D, R>
where
    D: DialogueOracle + 'a,
    R: RngOracle + 'a,
{
    /// Erases the concrete oracle types.
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let dialogues: &'a dyn DialogueOracle = self.dialogues;
        let rng: &'a dyn RngOracle = self.rng;
        Env::new(self.config, dialogues, rng)
    }
}
