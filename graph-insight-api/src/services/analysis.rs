use graph_insight::{
    shortest_path, traverse, AlgorithmError, EdgeList, NodeId, Traversal, TraversalAlgorithm,
};

use crate::{
    error::{ApiError, ApiResult},
    models::ShortestPathResponse,
};

/// Shortest paths and traversals over request edge lists
#[derive(Debug, Default)]
pub struct AnalysisService;

impl AnalysisService {
    pub fn new() -> Self {
        Self
    }

    /// Shortest path between `start` and `end`
    ///
    /// A missing path is a negative result, not an error.
    pub fn shortest_path(
        &self,
        edges: &EdgeList,
        start: Option<&NodeId>,
        end: Option<&NodeId>,
    ) -> ApiResult<ShortestPathResponse> {
        let (start, end) = match (start, end) {
            (Some(start), Some(end))
                if !edges.is_empty() && !start.is_empty() && !end.is_empty() =>
            {
                (start, end)
            }
            _ => {
                return Err(ApiError::BadRequest(
                    "Missing edges, start node, or end node".to_string(),
                ))
            }
        };

        let path = shortest_path(edges, start.as_str(), end.as_str()).map_err(|e| match e {
            AlgorithmError::NodeNotFound(node) => {
                ApiError::NotFound(format!("Start or end node not found in graph: {}", node))
            }
            other => other.into(),
        })?;

        Ok(match path {
            Some(path) => path.into(),
            None => ShortestPathResponse::not_found(start, end),
        })
    }

    /// Visit order from `root`
    pub fn traverse(
        &self,
        edges: &EdgeList,
        root: Option<&NodeId>,
        algorithm: TraversalAlgorithm,
    ) -> ApiResult<Traversal> {
        let root = match root {
            Some(root) if !edges.is_empty() && !root.is_empty() => root,
            _ => return Err(ApiError::BadRequest("Missing edges or root node".to_string())),
        };

        let traversal = traverse(edges, root.as_str(), algorithm)?;
        tracing::debug!(
            root = %root,
            algorithm = %algorithm,
            visited = traversal.order.len(),
            "Traversed graph"
        );
        Ok(traversal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> EdgeList {
        EdgeList::from(&[("A", "B"), ("B", "C"), ("A", "D"), ("D", "C")][..])
    }

    #[test]
    fn test_shortest_path_found() {
        let service = AnalysisService::new();
        let response = service
            .shortest_path(&square(), Some(&"A".into()), Some(&"C".into()))
            .unwrap();
        assert!(response.exists);
        assert_eq!(response.length, 2);
        assert_eq!(response.edges.len(), 2);
    }

    #[test]
    fn test_shortest_path_missing_parameters() {
        let service = AnalysisService::new();
        let result = service.shortest_path(&square(), Some(&"A".into()), None);
        assert!(matches!(result, Err(ApiError::BadRequest(_))));

        let result = service.shortest_path(
            &EdgeList::default(),
            Some(&"A".into()),
            Some(&"C".into()),
        );
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_shortest_path_unknown_node() {
        let service = AnalysisService::new();
        let result = service.shortest_path(&square(), Some(&"A".into()), Some(&"Z".into()));
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_shortest_path_disconnected() {
        let service = AnalysisService::new();
        let edges = EdgeList::from(&[("A", "B"), ("C", "D")][..]);
        let response = service
            .shortest_path(&edges, Some(&"A".into()), Some(&"D".into()))
            .unwrap();
        assert!(!response.exists);
        assert_eq!(response.length, -1);
        assert_eq!(
            response.error.as_deref(),
            Some("No path exists between A and D")
        );
    }

    #[test]
    fn test_traverse_requires_root() {
        let service = AnalysisService::new();
        let result = service.traverse(&square(), None, TraversalAlgorithm::Bfs);
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
