use graph_insight::{EdgeList, NodeId, TraversalAlgorithm};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TraverseRequest {
    #[serde(default)]
    pub edges: EdgeList,
    pub root: Option<NodeId>,
    #[serde(default)]
    pub algorithm: TraversalAlgorithm,
}
