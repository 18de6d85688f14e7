//! Conversations built by the engine itself and the effects tied to them.

use crate::state::{DialogueBuilder, DialogueGraph};

pub const OKAY: &str = "Okay";

pub const WATER_PROMPT: &str = "You are at the water. Would you like to fish?";
pub const WATER_ACCEPT: &str = "Yes, fish!";
pub const WATER_DECLINE: &str = "No, walk away.";
pub const WATER_RESULT: &str = "You cast your line... (Nothing bites yet!)";

pub const TREE_PROMPT: &str = "You are facing a tree. Cut it down?";
pub const TREE_ACCEPT: &str = "Yes, cut it down.";
pub const TREE_DECLINE: &str = "No, leave it.";
pub const TREE_RESULT: &str = "You cut down the tree.";

/// Side effect committed together with a specific answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChoiceEffect {
    /// Clear the pending tree tile and collect wood.
    FellTree,
    /// Collect one fish.
    CatchFish,
}

impl ChoiceEffect {
    /// Effect keyed by the exact prompt and answer texts.
    pub fn lookup(node_text: &str, choice_text: &str) -> Option<Self> {
        match (node_text, choice_text) {
            (TREE_RESULT, OKAY) => Some(ChoiceEffect::FellTree),
            (WATER_RESULT, OKAY) => Some(ChoiceEffect::CatchFish),
            _ => None,
        }
    }
}

/// Prompt -> yes/no -> confirmation.
fn two_step(prompt: &str, accept: &str, decline: &str, result: &str) -> DialogueGraph {
    let mut builder = DialogueBuilder::new();
    let root = builder.node(prompt);
    let outcome = builder.node(result);
    builder
        .choice(root, accept, Some(outcome))
        .choice(root, decline, None)
        .choice(outcome, OKAY, None);
    // Both ids come from this builder, so validation cannot fail.
    builder
        .build(root)
        .unwrap_or_else(|_| DialogueGraph::single(prompt))
}

pub fn fishing() -> DialogueGraph {
    two_step(WATER_PROMPT, WATER_ACCEPT, WATER_DECLINE, WATER_RESULT)
}

pub fn tree_cutting() -> DialogueGraph {
    two_step(TREE_PROMPT, TREE_ACCEPT, TREE_DECLINE, TREE_RESULT)
}

/// Stand-in for an NPC without a script.
pub fn fallback(npc: &str) -> DialogueGraph {
    DialogueGraph::single(format!("{npc} has nothing to say right now."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fishing_graph_leads_to_the_catch() {
        let graph = fishing();
        let root = graph.node(graph.root()).unwrap();
        assert_eq!(root.text, WATER_PROMPT);
        assert_eq!(root.choices[1].text, WATER_DECLINE);
        assert_eq!(root.choices[1].next, None);

        let outcome = graph.node(root.choices[0].next.unwrap()).unwrap();
        assert_eq!(outcome.text, WATER_RESULT);
        assert_eq!(
            ChoiceEffect::lookup(&outcome.text, &outcome.choices[0].text),
            Some(ChoiceEffect::CatchFish)
        );
    }

    #[test]
    fn effects_need_exact_texts() {
        assert_eq!(ChoiceEffect::lookup(TREE_RESULT, OKAY), Some(ChoiceEffect::FellTree));
        assert_eq!(ChoiceEffect::lookup(TREE_RESULT, "okay"), None);
        assert_eq!(ChoiceEffect::lookup(TREE_PROMPT, TREE_ACCEPT), None);
    }
}
