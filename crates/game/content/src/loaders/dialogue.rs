//! Dialogue script loader.
//!
//! Scripts name their nodes; choices refer to other nodes by name so shared
//! and cyclic edges (such as a "back to the start" answer) need no nesting.

use std::collections::HashMap;
use std::path::Path;

use game_core::{DialogueBuilder, DialogueError, DialogueGraph, DialogueScripts, NodeId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScriptRon {
    root: String,
    nodes: Vec<NodeRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NodeRon {
    id: String,
    text: String,
    #[serde(default)]
    choices: Vec<ChoiceRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChoiceRon {
    text: String,
    /// Absent ends the conversation.
    #[serde(default)]
    next: Option<String>,
}

/// Loader for NPC dialogue scripts from RON files.
///
/// File format: NPC name -> script.
///
/// ```ron
/// {
///     "Kid": (
///         root: "start",
///         nodes: [
///             (id: "start", text: "Hi!", choices: [
///                 (text: "Tell me a joke!", next: Some("joke")),
///                 (text: "Goodbye"),
///             ]),
///             (id: "joke", text: "Knock knock.", choices: [
///                 (text: "Back to the start.", next: Some("start")),
///             ]),
///         ],
///     ),
/// }
/// ```
pub struct DialogueLoader;

impl DialogueLoader {
    pub fn load(path: &Path) -> LoadResult<DialogueScripts> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse dialogue RON {}: {}", path.display(), e)
        })
    }

    pub fn parse(content: &str) -> LoadResult<DialogueScripts> {
        let raw: HashMap<String, ScriptRon> = ron::from_str(content)?;

        let mut scripts = DialogueScripts::new();
        for (npc, script) in raw {
            let graph = Self::build(&npc, script)?;
            scripts.insert(npc, graph);
        }
        Ok(scripts)
    }

    /// Resolves node names to ids in file order.
    fn build(npc: &str, script: ScriptRon) -> LoadResult<DialogueGraph> {
        let mut builder = DialogueBuilder::new();
        let mut ids: HashMap<&str, NodeId> = HashMap::with_capacity(script.nodes.len());
        for node in &script.nodes {
            let id = builder.node(node.text.as_str());
            anyhow::ensure!(
                ids.insert(node.id.as_str(), id).is_none(),
                "script `{}` defines node `{}` twice",
                npc,
                node.id
            );
        }

        let resolve = |name: &str| {
            ids.get(name)
                .copied()
                .ok_or_else(|| DialogueError::UnknownNode {
                    script: npc.to_owned(),
                    name: name.to_owned(),
                })
        };

        for node in &script.nodes {
            let from = resolve(&node.id)?;
            for choice in &node.choices {
                let next = choice.next.as_deref().map(resolve).transpose()?;
                builder.choice(from, choice.text.as_str(), next);
            }
        }

        let root = resolve(&script.root)?;
        Ok(builder.build(root)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{DialogueOracle, GOODBYE};

    const KID: &str = r#"{
        "Kid": (
            root: "start",
            nodes: [
                (id: "start", text: "Hi!", choices: [
                    (text: "Tell me a joke!", next: Some("joke")),
                    (text: "Goodbye"),
                ]),
                (id: "joke", text: "Knock knock.", choices: [
                    (text: "Back to the start.", next: Some("start")),
                ]),
                (id: "silent", text: "..."),
            ],
        ),
    }"#;

    #[test]
    fn named_edges_resolve_including_cycles() {
        let scripts = DialogueLoader::parse(KID).unwrap();
        let graph = scripts.script("Kid").unwrap();

        let root = graph.node(graph.root()).unwrap();
        assert_eq!(root.text, "Hi!");
        assert_eq!(root.choices[1].text, GOODBYE);
        assert_eq!(root.choices[1].next, None);

        let joke = graph.node(root.choices[0].next.unwrap()).unwrap();
        assert_eq!(joke.text, "Knock knock.");
        assert_eq!(joke.choices[0].next, Some(graph.root()));
    }

    #[test]
    fn nodes_without_choices_are_kept_empty() {
        let scripts = DialogueLoader::parse(KID).unwrap();
        let graph = scripts.script("Kid").unwrap();
        let silent = graph
            .nodes()
            .find(|(_, node)| node.text == "...")
            .map(|(_, node)| node.choices.len());
        assert_eq!(silent, Some(0));
    }

    #[test]
    fn dangling_reference_is_rejected() {
        let err = DialogueLoader::parse(&KID.replace("Some(\"joke\")", "Some(\"riddle\")"))
            .unwrap_err();
        assert!(err.to_string().contains("unknown node `riddle`"));
    }

    #[test]
    fn missing_root_is_rejected() {
        let err = DialogueLoader::parse(&KID.replace("root: \"start\"", "root: \"hello\""))
            .unwrap_err();
        assert!(err.to_string().contains("unknown node `hello`"));
    }

    #[test]
    fn duplicate_node_ids_are_rejected() {
        let err = DialogueLoader::parse(&KID.replace("id: \"silent\"", "id: \"joke\""))
            .unwrap_err();
        assert!(err.to_string().contains("defines node `joke` twice"));
    }
}
