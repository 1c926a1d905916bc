use super::{edge::Edge, node::NodeId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for path construction
#[derive(Error, Debug)]
pub enum PathError {
    #[error("Path is empty")]
    EmptyPath,
}

/// A walk through the graph
///
/// A path consists of an alternating sequence of nodes and edges:
/// (v1) -[e1]- (v2) -[e2]- (v3) ... -[en]- (vn+1)
///
/// Invariants:
/// - nodes.len() = edges.len() + 1
/// - edges[i] runs from nodes[i] to nodes[i+1]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphPath {
    /// Nodes in the path
    pub nodes: Vec<NodeId>,

    /// Edges in the path, oriented along the walk
    pub edges: Vec<Edge>,
}

impl GraphPath {
    /// Create a path with a single node (no edges)
    pub fn new(start: NodeId) -> Self {
        Self {
            nodes: vec![start],
            edges: Vec::new(),
        }
    }

    /// Build a path from its node sequence, deriving the edges
    ///
    /// # Errors
    /// Returns `PathError::EmptyPath` for an empty sequence
    pub fn from_nodes(nodes: Vec<NodeId>) -> Result<Self, PathError> {
        if nodes.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let edges = nodes
            .windows(2)
            .map(|pair| Edge::new(pair[0].clone(), pair[1].clone()))
            .collect();
        Ok(Self { nodes, edges })
    }

    /// Path length in edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True when the path has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn start(&self) -> Option<&NodeId> {
        self.nodes.first()
    }

    pub fn end(&self) -> Option<&NodeId> {
        self.nodes.last()
    }
}
