//! Conversation graphs and the active conversation.
//!
//! Graphs are arenas: nodes live in a `Vec` and choices point at other nodes
//! by [`NodeId`], so cycles such as "back to the start" need no shared
//! ownership.

use std::collections::HashMap;

use crate::error::DialogueError;
use crate::state::types::NpcId;

/// Choice label that always ends a conversation.
pub const GOODBYE: &str = "Goodbye";

/// Stable index of a node inside one [`DialogueGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A selectable answer. `next == None` ends the conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversationChoice {
    pub text: String,
    pub next: Option<NodeId>,
}

impl ConversationChoice {
    pub fn new(text: impl Into<String>, next: Option<NodeId>) -> Self {
        Self {
            text: text.into(),
            next,
        }
    }

    pub fn goodbye() -> Self {
        Self::new(GOODBYE, None)
    }

    /// True when committing this choice closes the conversation.
    pub fn ends_conversation(&self) -> bool {
        self.next.is_none() || self.text == GOODBYE
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversationNode {
    pub text: String,
    pub choices: Vec<ConversationChoice>,
}

impl ConversationNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            choices: Vec::new(),
        }
    }
}

/// Directed, possibly cyclic, graph of conversation nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueGraph {
    nodes: Vec<ConversationNode>,
    root: NodeId,
}

impl DialogueGraph {
    /// Builds a graph, checking that the root and every choice target exist.
    ///
    /// # Errors
    ///
    /// Returns [`DialogueError`] for an empty node list, a missing root, or a
    /// choice pointing past the arena.
    pub fn new(nodes: Vec<ConversationNode>, root: NodeId) -> Result<Self, DialogueError> {
        if nodes.is_empty() {
            return Err(DialogueError::Empty);
        }
        if root.index() >= nodes.len() {
            return Err(DialogueError::MissingRoot(root));
        }
        for (idx, node) in nodes.iter().enumerate() {
            for choice in &node.choices {
                if let Some(target) = choice.next
                    && target.index() >= nodes.len()
                {
                    return Err(DialogueError::DanglingChoice {
                        node: NodeId(idx as u32),
                        choice: choice.text.clone(),
                        target,
                    });
                }
            }
        }
        Ok(Self { nodes, root })
    }

    /// One prompt with no answers. The self-healing rule turns it into a
    /// plain "Goodbye".
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            nodes: vec![ConversationNode::new(text)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&ConversationNode> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &ConversationNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx as u32), node))
    }

    /// Gives a choiceless node a single "Goodbye" so the player can always
    /// leave. Returns `true` when the node was patched.
    pub fn ensure_exit(&mut self, id: NodeId) -> bool {
        match self.nodes.get_mut(id.index()) {
            Some(node) if node.choices.is_empty() => {
                node.choices.push(ConversationChoice::goodbye());
                true
            }
            _ => false,
        }
    }
}

/// Incremental constructor for graphs authored in code.
#[derive(Debug, Default)]
pub struct DialogueBuilder {
    nodes: Vec<ConversationNode>,
}

impl DialogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&mut self, text: impl Into<String>) -> NodeId {
        self.nodes.push(ConversationNode::new(text));
        NodeId(self.nodes.len() as u32 - 1)
    }

    /// Appends a choice to `from`. Unknown `from` ids are ignored here and
    /// left for [`DialogueGraph::new`] to reject through their targets.
    pub fn choice(&mut self, from: NodeId, text: impl Into<String>, next: Option<NodeId>) -> &mut Self {
        if let Some(node) = self.nodes.get_mut(from.index()) {
            node.choices.push(ConversationChoice::new(text, next));
        }
        self
    }

    /// # Errors
    ///
    /// See [`DialogueGraph::new`].
    pub fn build(self, root: NodeId) -> Result<DialogueGraph, DialogueError> {
        DialogueGraph::new(self.nodes, root)
    }
}

/// Per-NPC graphs built on first use and kept for the whole process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueLibrary {
    graphs: HashMap<String, DialogueGraph>,
}

impl DialogueLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, npc: &str) -> bool {
        self.graphs.contains_key(npc)
    }

    pub fn get(&self, npc: &str) -> Option<&DialogueGraph> {
        self.graphs.get(npc)
    }

    pub fn get_mut(&mut self, npc: &str) -> Option<&mut DialogueGraph> {
        self.graphs.get_mut(npc)
    }

    /// Returns the cached graph, building it with `build` on first access.
    pub fn get_or_insert_with(
        &mut self,
        npc: &str,
        build: impl FnOnce() -> DialogueGraph,
    ) -> &mut DialogueGraph {
        self.graphs.entry(npc.to_owned()).or_insert_with(build)
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

/// Where the active conversation's graph lives.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConversationSource {
    /// Cached in the [`DialogueLibrary`] under this NPC.
    Npc { id: NpcId, name: String },
    /// Built for this interaction only and dropped when it ends.
    Environment(DialogueGraph),
}

/// A tile to clear once the player confirms felling a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingRemoval {
    pub layer: usize,
    pub index: usize,
}

/// The dialogue currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conversation {
    pub source: ConversationSource,
    pub node: NodeId,
    pub highlighted: usize,
    pub pending_removal: Option<PendingRemoval>,
}

impl Conversation {
    pub fn with_npc(id: NpcId, name: impl Into<String>, root: NodeId) -> Self {
        Self {
            source: ConversationSource::Npc {
                id,
                name: name.into(),
            },
            node: root,
            highlighted: 0,
            pending_removal: None,
        }
    }

    pub fn with_environment(graph: DialogueGraph, pending_removal: Option<PendingRemoval>) -> Self {
        Self {
            node: graph.root(),
            source: ConversationSource::Environment(graph),
            highlighted: 0,
            pending_removal,
        }
    }

    /// NPC on the other side of the conversation, if any.
    pub fn partner(&self) -> Option<NpcId> {
        match &self.source {
            ConversationSource::Npc { id, .. } => Some(*id),
            ConversationSource::Environment(_) => None,
        }
    }

    /// Resolves the graph backing this conversation.
    pub fn graph<'a>(&'a self, library: &'a DialogueLibrary) -> Option<&'a DialogueGraph> {
        match &self.source {
            ConversationSource::Npc { name, .. } => library.get(name),
            ConversationSource::Environment(graph) => Some(graph),
        }
    }

    pub fn graph_mut<'a>(
        &'a mut self,
        library: &'a mut DialogueLibrary,
    ) -> Option<&'a mut DialogueGraph> {
        match &mut self.source {
            ConversationSource::Npc { name, .. } => library.get_mut(name),
            ConversationSource::Environment(graph) => Some(graph),
        }
    }

    /// Node currently displayed.
    pub fn current<'a>(&'a self, library: &'a DialogueLibrary) -> Option<&'a ConversationNode> {
        self.graph(library).and_then(|graph| graph.node(self.node))
    }
}
