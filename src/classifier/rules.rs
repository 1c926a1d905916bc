/// Rule-based classification
///
/// Labels a graph from three structural facts:
/// - does the directed reading (`source -> target`) contain a cycle
/// - is the undirected view connected
/// - does the edge count equal node count - 1
///
/// Tree wins when it is connected, acyclic and has n - 1 edges; otherwise any
/// cycle makes it Cycle; everything else is DAG.

use super::{Classification, ClassifierResult, GraphClassifier, GraphType};
use crate::algorithms::{has_directed_cycle, is_connected};
use crate::types::EdgeList;

const TREE_CONFIDENCE: f64 = 0.9;
const CYCLE_CONFIDENCE: f64 = 0.8;
const DAG_CONFIDENCE: f64 = 0.7;

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedClassifier;

impl RuleBasedClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl GraphClassifier for RuleBasedClassifier {
    fn name(&self) -> &'static str {
        "rules"
    }

    fn classify(&self, edges: &EdgeList) -> ClassifierResult<Classification> {
        if edges.is_empty() {
            return Ok(Classification::unknown());
        }

        let directed = edges.to_directed();
        let node_count = directed.node_count();
        let edge_count = directed.edge_count();

        let has_cycle = has_directed_cycle(edges);
        let connected = is_connected(edges);
        let is_tree = connected && !has_cycle && edge_count + 1 == node_count;

        let result = if is_tree {
            Classification::with_confidence(GraphType::Tree, TREE_CONFIDENCE)
        } else if has_cycle {
            Classification::with_confidence(GraphType::Cycle, CYCLE_CONFIDENCE)
        } else {
            Classification::with_confidence(GraphType::Dag, DAG_CONFIDENCE)
        };

        tracing::debug!(
            nodes = node_count,
            edges = edge_count,
            connected,
            has_cycle,
            graph_type = %result.graph_type,
            "rule-based classification"
        );

        Ok(result)
    }
}
