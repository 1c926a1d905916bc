/// Breadth-first and depth-first traversal
///
/// Produces the visit order together with one step per visited node, so a
/// client can replay the walk one frame at a time (each step names the node
/// being visited and the tree edge it was reached through).

use super::{AlgorithmError, AlgorithmResult};
use crate::types::{Edge, EdgeList, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

/// Traversal strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalAlgorithm {
    #[default]
    Bfs,
    Dfs,
}

impl FromStr for TraversalAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            other => Err(AlgorithmError::InvalidParameters(format!(
                "Unknown traversal algorithm: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for TraversalAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bfs => f.write_str("bfs"),
            Self::Dfs => f.write_str("dfs"),
        }
    }
}

/// One visited node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraversalStep {
    /// Node visited at this step
    pub node: NodeId,

    /// Node it was reached from (`None` for the root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,

    /// Tree edge `[parent, node]` (`None` for the root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge: Option<Edge>,
}

/// Result of a traversal from a single root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traversal {
    pub algorithm: TraversalAlgorithm,

    /// Nodes in visit order
    pub order: Vec<NodeId>,

    /// One entry per visited node, same order as `order`
    pub steps: Vec<TraversalStep>,
}

/// Traverse the undirected view of `edges` from `root`
///
/// Only the root's component is visited. Neighbours are considered in order
/// of first appearance in the edge list.
pub fn traverse(
    edges: &EdgeList,
    root: &str,
    algorithm: TraversalAlgorithm,
) -> AlgorithmResult<Traversal> {
    let graph = edges.to_undirected();
    if !graph.contains_node(root) {
        return Err(AlgorithmError::NodeNotFound(NodeId::from(root)));
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut steps = Vec::with_capacity(graph.node_count());

    match algorithm {
        TraversalAlgorithm::Bfs => {
            let mut queue: VecDeque<(&str, Option<&str>)> = VecDeque::new();
            let mut queued: HashSet<&str> = HashSet::new();
            queue.push_back((root, None));
            queued.insert(root);

            while let Some((node, parent)) = queue.pop_front() {
                queued.remove(node);
                if !visited.insert(node) {
                    continue;
                }
                steps.push(step(node, parent));

                for neighbor in graph.neighbors(node) {
                    if !visited.contains(neighbor) && queued.insert(neighbor) {
                        queue.push_back((neighbor, Some(node)));
                    }
                }
            }
        }
        TraversalAlgorithm::Dfs => {
            let mut stack: Vec<(&str, Option<&str>)> = vec![(root, None)];

            while let Some((node, parent)) = stack.pop() {
                if !visited.insert(node) {
                    continue;
                }
                steps.push(step(node, parent));

                // Push in reverse so the first neighbour is popped first
                let neighbors: Vec<&str> = graph
                    .neighbors(node)
                    .filter(|n| !visited.contains(n))
                    .collect();
                for neighbor in neighbors.into_iter().rev() {
                    stack.push((neighbor, Some(node)));
                }
            }
        }
    }

    tracing::debug!(root, %algorithm, visited = steps.len(), "traversal complete");

    Ok(Traversal {
        algorithm,
        order: steps.iter().map(|s| s.node.clone()).collect(),
        steps,
    })
}

fn step(node: &str, parent: Option<&str>) -> TraversalStep {
    TraversalStep {
        node: NodeId::from(node),
        parent: parent.map(NodeId::from),
        edge: parent.map(|p| Edge::new(p, node)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //       A
    //      / \
    //     B   C
    //    / \   \
    //   D   E   F
    fn setup_tree() -> EdgeList {
        EdgeList::from(&[("A", "B"), ("A", "C"), ("B", "D"), ("B", "E"), ("C", "F")][..])
    }

    fn names(order: &[NodeId]) -> Vec<&str> {
        order.iter().map(|n| n.as_str()).collect()
    }

    #[test]
    fn test_bfs_order() {
        let result = traverse(&setup_tree(), "A", TraversalAlgorithm::Bfs).unwrap();
        assert_eq!(names(&result.order), vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_dfs_order() {
        let result = traverse(&setup_tree(), "A", TraversalAlgorithm::Dfs).unwrap();
        assert_eq!(names(&result.order), vec!["A", "B", "D", "E", "C", "F"]);
    }

    #[test]
    fn test_steps_record_tree_edges() {
        let result = traverse(&setup_tree(), "A", TraversalAlgorithm::Bfs).unwrap();

        assert_eq!(result.steps.len(), 6);
        assert!(result.steps[0].parent.is_none());
        assert!(result.steps[0].edge.is_none());
        assert_eq!(result.steps[3].edge, Some(Edge::new("B", "D")));
        assert_eq!(result.steps[3].parent, Some(NodeId::from("B")));
    }

    #[test]
    fn test_traversal_on_cycle_visits_each_node_once() {
        let edges = EdgeList::from(&[("A", "B"), ("B", "C"), ("C", "A")][..]);

        let bfs = traverse(&edges, "A", TraversalAlgorithm::Bfs).unwrap();
        assert_eq!(names(&bfs.order), vec!["A", "B", "C"]);

        let dfs = traverse(&edges, "A", TraversalAlgorithm::Dfs).unwrap();
        assert_eq!(names(&dfs.order), vec!["A", "B", "C"]);
        assert_eq!(dfs.steps[2].parent, Some(NodeId::from("B")));
    }

    #[test]
    fn test_traversal_stays_in_component() {
        let edges = EdgeList::from(&[("A", "B"), ("C", "D")][..]);
        let result = traverse(&edges, "C", TraversalAlgorithm::Bfs).unwrap();
        assert_eq!(names(&result.order), vec!["C", "D"]);
    }

    #[test]
    fn test_traversal_unknown_root() {
        let result = traverse(&setup_tree(), "Z", TraversalAlgorithm::Dfs);
        assert!(matches!(result, Err(AlgorithmError::NodeNotFound(_))));
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("BFS".parse::<TraversalAlgorithm>().unwrap(), TraversalAlgorithm::Bfs);
        assert_eq!("dfs".parse::<TraversalAlgorithm>().unwrap(), TraversalAlgorithm::Dfs);
        assert!("astar".parse::<TraversalAlgorithm>().is_err());
    }
}
