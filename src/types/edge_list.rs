use super::edge::Edge;
use super::node::NodeId;
use petgraph::graphmap::{DiGraphMap, UnGraphMap};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered list of edges, the unit every request carries
///
/// The list itself keeps duplicates and self-loops exactly as given. The
/// graph views built from it are simple graphs: a repeated edge collapses
/// into one, and node order is the order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeList(Vec<Edge>);

impl EdgeList {
    pub fn new(edges: Vec<Edge>) -> Self {
        Self(edges)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Edge] {
        &self.0
    }

    /// Distinct nodes in order of first appearance
    pub fn nodes(&self) -> Vec<&NodeId> {
        let mut seen = HashSet::new();
        let mut nodes = Vec::new();
        for edge in &self.0 {
            for node in [&edge.source, &edge.target] {
                if seen.insert(node.as_str()) {
                    nodes.push(node);
                }
            }
        }
        nodes
    }

    /// Check if a node appears in any edge
    pub fn contains_node(&self, node: &str) -> bool {
        self.0.iter().any(|e| e.contains(node))
    }

    /// Undirected simple-graph view
    pub fn to_undirected(&self) -> UnGraphMap<&str, ()> {
        let mut graph = UnGraphMap::with_capacity(self.0.len() * 2, self.0.len());
        for edge in &self.0 {
            graph.add_edge(edge.source.as_str(), edge.target.as_str(), ());
        }
        graph
    }

    /// Directed simple-graph view, each edge read as `source -> target`
    pub fn to_directed(&self) -> DiGraphMap<&str, ()> {
        let mut graph = DiGraphMap::with_capacity(self.0.len() * 2, self.0.len());
        for edge in &self.0 {
            graph.add_edge(edge.source.as_str(), edge.target.as_str(), ());
        }
        graph
    }
}

impl From<Vec<Edge>> for EdgeList {
    fn from(edges: Vec<Edge>) -> Self {
        Self(edges)
    }
}

impl<'a> From<&[(&'a str, &'a str)]> for EdgeList {
    fn from(pairs: &[(&'a str, &'a str)]) -> Self {
        Self(pairs.iter().map(|&pair| Edge::from(pair)).collect())
    }
}

impl FromIterator<Edge> for EdgeList {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EdgeList {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
