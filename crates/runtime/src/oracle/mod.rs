//! Immutable content the simulation consults every frame.
//!
//! [`OracleManager`] bundles the tuning config, the authored dialogue
//! scripts and the RNG so the worker can build a [`game_core::GameEnv`] on
//! demand. Dynamic state lives in [`game_core::GameState`].
use std::sync::Arc;

use game_core::{DialogueScripts, Env, GameConfig, GameEnv, PcgRng};

/// Manages all oracle implementations and provides unified access
#[derive(Clone, Debug)]
pub struct OracleManager {
    pub(crate) config: Arc<GameConfig>,
    pub(crate) dialogues: Arc<DialogueScripts>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    pub fn new(config: GameConfig, dialogues: DialogueScripts) -> Self {
        Self {
            config: Arc::new(config),
            dialogues: Arc::new(dialogues),
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::new(self.config.as_ref(), self.dialogues.as_ref(), &self.rng).as_game_env()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dialogues(&self) -> &DialogueScripts {
        &self.dialogues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{DialogueBuilder, DialogueOracle};

    #[test]
    fn env_exposes_config_and_scripts() {
        let mut builder = DialogueBuilder::new();
        let root = builder.node("Hello!");
        let mut scripts = DialogueScripts::new();
        scripts.insert("Kid", builder.build(root).unwrap());

        let config = GameConfig {
            wood_per_tree: 3,
            ..GameConfig::default()
        };
        let oracles = OracleManager::new(config, scripts);
        let env = oracles.as_game_env();

        assert_eq!(env.config().wood_per_tree, 3);
        assert!(env.dialogues().script("Kid").is_some());
        assert!(env.dialogues().script("Merchant").is_none());
    }
}
