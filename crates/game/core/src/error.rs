//! Construction-time errors for game-core.
//!
//! Per-frame operations are total: once a [`crate::GameState`] has been built
//! nothing in the update step can fail. Everything that can go wrong happens
//! while assembling maps, dialogue graphs, and the initial world, and is
//! reported through the enums below.

use crate::state::{NodeId, Point};

/// Invalid tile map layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map dimensions must be non-zero (got {width}x{height})")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("layer `{layer}` has {actual} cells, expected {expected}")]
    LayerSize {
        layer: String,
        expected: usize,
        actual: usize,
    },

    #[error("map must contain exactly one `{name}` layer (found {count})")]
    GroundLayer { name: &'static str, count: usize },
}

/// Invalid dialogue graph.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DialogueError {
    #[error("dialogue graph has no nodes")]
    Empty,

    #[error("root node {0:?} does not exist")]
    MissingRoot(NodeId),

    #[error("choice `{choice}` of node {node:?} points at missing node {target:?}")]
    DanglingChoice {
        node: NodeId,
        choice: String,
        target: NodeId,
    },

    #[error("script `{script}` references unknown node `{name}`")]
    UnknownNode { script: String, name: String },
}

/// Errors raised while placing the initial world.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error("{actor} at {position:?} lies outside the map")]
    OutOfBounds { actor: String, position: Point },

    #[error("{actor} at {position:?} overlaps {other}")]
    Overlap {
        actor: String,
        other: String,
        position: Point,
    },

    #[error("duplicate NPC name `{0}`")]
    DuplicateNpc(String),
}
