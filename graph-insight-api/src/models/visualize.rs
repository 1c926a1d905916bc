use graph_insight::{EdgeList, EdgeSelector, Highlights, ImageFormat, NodeId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct VisualizeRequest {
    #[serde(default)]
    pub edges: EdgeList,
    #[serde(default)]
    pub visited_nodes: Vec<NodeId>,
    pub current_node: Option<NodeId>,
    pub current_edge: Option<EdgeSelector>,
    /// Overrides the configured output format
    pub format: Option<ImageFormat>,
}

impl VisualizeRequest {
    pub fn highlights(&self) -> Highlights {
        Highlights {
            visited: self.visited_nodes.iter().cloned().collect(),
            current_node: self.current_node.clone(),
            current_edge: self.current_edge.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VisualizeResponse {
    pub success: bool,
    /// `data:` URL of the rendered image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VisualizeResponse {
    pub fn image(data_url: String) -> Self {
        Self {
            success: true,
            image: Some(data_url),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            image: None,
            error: Some(error.into()),
        }
    }
}
