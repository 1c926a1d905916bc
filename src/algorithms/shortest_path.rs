/// Shortest path search
///
/// Unweighted shortest paths on the undirected view of an edge list. The
/// search itself is `pathfinding`'s breadth-first search.

use super::{AlgorithmError, AlgorithmResult};
use crate::types::{EdgeList, GraphPath, NodeId};
use pathfinding::prelude::bfs;

/// Find a shortest path between two nodes, counting edges
///
/// # Arguments
/// * `edges` - Edge list, read as an undirected graph
/// * `start` - Start node
/// * `end` - End node
///
/// # Returns
/// * `Ok(Some(GraphPath))` - Shortest path found
/// * `Ok(None)` - Both nodes exist but are not connected
/// * `Err(AlgorithmError::NodeNotFound)` - An endpoint is not in the graph
///
/// Among several shortest paths the one reached first is returned, where
/// neighbours are visited in order of first appearance in `edges`. The
/// result is therefore stable for a given input ordering.
pub fn shortest_path(
    edges: &EdgeList,
    start: &str,
    end: &str,
) -> AlgorithmResult<Option<GraphPath>> {
    let graph = edges.to_undirected();

    // Verify start and end nodes exist
    if !graph.contains_node(start) {
        return Err(AlgorithmError::NodeNotFound(NodeId::from(start)));
    }
    if !graph.contains_node(end) {
        return Err(AlgorithmError::NodeNotFound(NodeId::from(end)));
    }

    let found = bfs(&start, |&node| graph.neighbors(node), |&node| node == end);

    match found {
        Some(nodes) => {
            let nodes = nodes.into_iter().map(NodeId::from).collect();
            let path = GraphPath::from_nodes(nodes)
                .map_err(|e| AlgorithmError::InvalidParameters(e.to_string()))?;
            tracing::debug!(start, end, length = path.len(), "shortest path found");
            Ok(Some(path))
        }
        None => {
            tracing::debug!(start, end, "no path between nodes");
            Ok(None)
        }
    }
}
