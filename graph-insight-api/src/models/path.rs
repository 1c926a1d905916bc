use graph_insight::{Edge, EdgeList, GraphPath, NodeId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ShortestPathRequest {
    #[serde(default)]
    pub edges: EdgeList,
    pub start: Option<NodeId>,
    pub end: Option<NodeId>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortestPathResponse {
    pub path: Vec<NodeId>,
    /// Number of edges, `-1` when no path exists
    pub length: i64,
    pub edges: Vec<Edge>,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ShortestPathResponse {
    pub fn not_found(start: &NodeId, end: &NodeId) -> Self {
        Self {
            path: Vec::new(),
            length: -1,
            edges: Vec::new(),
            exists: false,
            error: Some(format!("No path exists between {} and {}", start, end)),
        }
    }
}

impl From<GraphPath> for ShortestPathResponse {
    fn from(path: GraphPath) -> Self {
        Self {
            length: path.len() as i64,
            path: path.nodes,
            edges: path.edges,
            exists: true,
            error: None,
        }
    }
}
