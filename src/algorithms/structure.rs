/// Structural checks used by the classifiers and the feature extractor

use crate::types::EdgeList;
use petgraph::algo::{connected_components, is_cyclic_directed};

/// Check for a directed cycle, reading each edge as `source -> target`
///
/// Self-loops and two-way pairs (`A -> B`, `B -> A`) count as cycles.
pub fn has_directed_cycle(edges: &EdgeList) -> bool {
    let graph = edges.to_directed();
    is_cyclic_directed(&graph)
}

/// Number of connected components of the undirected view
pub fn component_count(edges: &EdgeList) -> usize {
    let graph = edges.to_undirected();
    connected_components(&graph)
}

/// True when the undirected view is a single component
///
/// An empty edge list has no nodes and is not considered connected.
pub fn is_connected(edges: &EdgeList) -> bool {
    component_count(edges) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_cycle_triangle() {
        let edges = EdgeList::from(&[("A", "B"), ("B", "C"), ("C", "A")][..]);
        assert!(has_directed_cycle(&edges));
    }

    #[test]
    fn test_no_directed_cycle_when_orientation_breaks_it() {
        // Undirected triangle, but A -> B -> C and A -> C never loop back
        let edges = EdgeList::from(&[("A", "B"), ("B", "C"), ("A", "C")][..]);
        assert!(!has_directed_cycle(&edges));
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let edges = EdgeList::from(&[("A", "B"), ("B", "B")][..]);
        assert!(has_directed_cycle(&edges));
    }

    #[test]
    fn test_two_way_edge_is_cycle() {
        let edges = EdgeList::from(&[("A", "B"), ("B", "A")][..]);
        assert!(has_directed_cycle(&edges));
    }

    #[test]
    fn test_components() {
        let edges = EdgeList::from(&[("A", "B"), ("C", "D"), ("D", "E")][..]);
        assert_eq!(component_count(&edges), 2);
        assert!(!is_connected(&edges));

        let edges = EdgeList::from(&[("A", "B"), ("B", "C")][..]);
        assert_eq!(component_count(&edges), 1);
        assert!(is_connected(&edges));
    }

    #[test]
    fn test_empty_graph() {
        let edges = EdgeList::default();
        assert_eq!(component_count(&edges), 0);
        assert!(!is_connected(&edges));
        assert!(!has_directed_cycle(&edges));
    }
}
