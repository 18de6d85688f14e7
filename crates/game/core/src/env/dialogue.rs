//! Source of per-NPC conversation scripts.

use std::collections::HashMap;

use crate::state::DialogueGraph;

/// Supplies the conversation graph for an NPC the first time it is addressed.
///
/// The engine caches the result for the rest of the process, so
/// implementations may build graphs lazily and need not be cheap.
pub trait DialogueOracle: Send + Sync {
    /// Graph for the NPC named `npc`, or `None` when no script exists.
    fn script(&self, npc: &str) -> Option<DialogueGraph>;
}

/// Oracle without any scripts; every NPC falls back to a bare greeting.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDialogues;

impl DialogueOracle for NoDialogues {
    fn script(&self, _npc: &str) -> Option<DialogueGraph> {
        None
    }
}

/// In-memory scripts keyed by NPC name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogueScripts {
    scripts: HashMap<String, DialogueGraph>,
}

impl DialogueScripts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, npc: impl Into<String>, graph: DialogueGraph) -> Option<DialogueGraph> {
        self.scripts.insert(npc.into(), graph)
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scripts.keys().map(String::as_str)
    }
}

impl FromIterator<(String, DialogueGraph)> for DialogueScripts {
    fn from_iter<T: IntoIterator<Item = (String, DialogueGraph)>>(iter: T) -> Self {
        Self {
            scripts: iter.into_iter().collect(),
        }
    }
}

impl DialogueOracle for DialogueScripts {
    fn script(&self, npc: &str) -> Option<DialogueGraph> {
        self.scripts.get(npc).cloned()
    }
}
