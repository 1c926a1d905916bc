use super::node::NodeId;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Edge between two nodes
///
/// On the wire an edge is an array whose first two elements are
/// `[source, target]`. Trailing elements (clients send an optional weight
/// as a third slot) are ignored; fewer than two elements or a non-array is
/// rejected, so every `Edge` in memory is a complete pair. Edges always
/// serialize as the bare pair.
///
/// The pair is ordered: undirected views ignore the order, directed views
/// (cycle detection) read it as `source -> target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "(NodeId, NodeId)")]
pub struct Edge {
    /// Source node
    pub source: NodeId,

    /// Target node
    pub target: NodeId,
}

impl Edge {
    /// Create a new edge
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Check if this edge is a self-loop
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Reverse the edge direction
    pub fn reverse(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }

    /// Check whether the edge joins `a` and `b`, in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source.as_str() == a && self.target.as_str() == b)
            || (self.source.as_str() == b && self.target.as_str() == a)
    }

    /// Check if the edge touches a node
    pub fn contains(&self, node: &str) -> bool {
        self.source.as_str() == node || self.target.as_str() == node
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((source, target): (NodeId, NodeId)) -> Self {
        Self { source, target }
    }
}

impl From<Edge> for (NodeId, NodeId) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.target)
    }
}

impl From<(&str, &str)> for Edge {
    fn from((source, target): (&str, &str)) -> Self {
        Self::new(source, target)
    }
}

struct EdgeVisitor;

impl<'de> Visitor<'de> for EdgeVisitor {
    type Value = Edge;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an edge [source, target, ...]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Edge, A::Error> {
        let source: NodeId = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let target: NodeId = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;

        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(Edge { source, target })
    }
}

impl<'de> Deserialize<'de> for Edge {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(EdgeVisitor)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}
