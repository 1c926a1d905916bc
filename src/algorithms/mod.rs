/// Graph algorithms module
///
/// Thin wrappers over `petgraph` and `pathfinding` that work directly on an
/// `EdgeList`: shortest paths, traversal orders and structural checks.

pub mod shortest_path;
pub mod structure;
pub mod traversal;

pub use shortest_path::shortest_path;
pub use structure::{component_count, has_directed_cycle, is_connected};
pub use traversal::{traverse, Traversal, TraversalAlgorithm, TraversalStep};

use crate::types::NodeId;
use thiserror::Error;

/// Algorithm errors
#[derive(Error, Debug)]
pub enum AlgorithmError {
    #[error("Node not found in graph: {0}")]
    NodeNotFound(NodeId),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

pub type AlgorithmResult<T> = Result<T, AlgorithmError>;
