/// Feature extraction
///
/// Turns an edge list into the fixed-width numeric vector the model-based
/// classifier consumes. The leading slots carry graph statistics computed on
/// the undirected view; the rest of the vector is zero padding.
///
/// | slot | statistic                                   |
/// |------|---------------------------------------------|
/// | 0    | node count                                  |
/// | 1    | edge count                                  |
/// | 2    | density `2m / (n(n-1))`, 0 below two nodes   |
/// | 3    | average clustering coefficient              |
/// | 4    | connected components                        |
/// | 5-8  | degree mean, std (population), max, min     |
/// | 9    | directed cycle flag (`WithCycleFlag` only)  |

use crate::algorithms::{component_count, has_directed_cycle};
use crate::types::EdgeList;
use petgraph::graphmap::UnGraphMap;
use serde::{Deserialize, Serialize};

/// Width of every feature vector
pub const FEATURE_DIM: usize = 64;

/// Which statistics are written into the vector
///
/// The two layouts differ only in the trailing cycle flag. A weight file
/// records the layout it was trained with; mixing them silently shifts the
/// model's input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureSet {
    /// Nine statistics (slots 0-8)
    #[default]
    Basic,
    /// Nine statistics plus the directed cycle flag (slot 9)
    WithCycleFlag,
}

/// Fixed-width feature vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f32; FEATURE_DIM]);

impl FeatureVector {
    pub fn zeros() -> Self {
        Self([0.0; FEATURE_DIM])
    }

    /// Build from any number of values, truncating or zero-padding to
    /// `FEATURE_DIM`
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        let mut data = [0.0; FEATURE_DIM];
        for (slot, value) in data.iter_mut().zip(values) {
            *slot = value;
        }
        Self(data)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        FEATURE_DIM
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0.0)
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeros()
    }
}

/// Named graph statistics behind the feature vector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub average_clustering: f64,
    pub component_count: usize,
    pub degree_mean: f64,
    pub degree_std: f64,
    pub degree_max: usize,
    pub degree_min: usize,
    pub has_cycle: bool,
}

impl GraphStatistics {
    /// Compute statistics, or `None` when the edge list has no nodes
    pub fn compute(edges: &EdgeList) -> Option<Self> {
        let graph = edges.to_undirected();
        let node_count = graph.node_count();
        if node_count == 0 {
            return None;
        }
        let edge_count = graph.edge_count();

        let density = if node_count < 2 {
            0.0
        } else {
            2.0 * edge_count as f64 / (node_count as f64 * (node_count as f64 - 1.0))
        };

        let degrees: Vec<usize> = graph.nodes().map(|n| degree(&graph, n)).collect();
        let degree_mean = degrees.iter().sum::<usize>() as f64 / degrees.len() as f64;
        let variance = degrees
            .iter()
            .map(|&d| (d as f64 - degree_mean).powi(2))
            .sum::<f64>()
            / degrees.len() as f64;

        let average_clustering =
            graph.nodes().map(|n| clustering(&graph, n)).sum::<f64>() / node_count as f64;

        Some(Self {
            node_count,
            edge_count,
            density,
            average_clustering,
            component_count: component_count(edges),
            degree_mean,
            degree_std: variance.sqrt(),
            degree_max: degrees.iter().copied().max().unwrap_or(0),
            degree_min: degrees.iter().copied().min().unwrap_or(0),
            has_cycle: has_directed_cycle(edges),
        })
    }

    /// Statistics in slot order for the given layout
    pub fn values(&self, feature_set: FeatureSet) -> Vec<f32> {
        let mut values = vec![
            self.node_count as f32,
            self.edge_count as f32,
            self.density as f32,
            self.average_clustering as f32,
            self.component_count as f32,
            self.degree_mean as f32,
            self.degree_std as f32,
            self.degree_max as f32,
            self.degree_min as f32,
        ];
        if feature_set == FeatureSet::WithCycleFlag {
            values.push(if self.has_cycle { 1.0 } else { 0.0 });
        }
        values
    }
}

/// Extract the feature vector for an edge list
///
/// An empty edge list yields the all-zero vector.
pub fn extract_features(edges: &EdgeList, feature_set: FeatureSet) -> FeatureVector {
    match GraphStatistics::compute(edges) {
        Some(stats) => FeatureVector::from_values(stats.values(feature_set)),
        None => FeatureVector::zeros(),
    }
}

/// Degree in the simple undirected graph; a self-loop adds two
fn degree(graph: &UnGraphMap<&str, ()>, node: &str) -> usize {
    let neighbors = graph.neighbors(node).count();
    if graph.contains_edge(node, node) {
        neighbors + 1
    } else {
        neighbors
    }
}

/// Local clustering coefficient, ignoring self-loops
fn clustering(graph: &UnGraphMap<&str, ()>, node: &str) -> f64 {
    let neighbors: Vec<&str> = graph.neighbors(node).filter(|&n| n != node).collect();
    let k = neighbors.len();
    if k < 2 {
        return 0.0;
    }

    let mut links = 0usize;
    for (i, &u) in neighbors.iter().enumerate() {
        for &w in &neighbors[i + 1..] {
            if graph.contains_edge(u, w) {
                links += 1;
            }
        }
    }

    2.0 * links as f64 / (k as f64 * (k as f64 - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn path_graph() -> EdgeList {
        EdgeList::from(&[("A", "B"), ("B", "C"), ("C", "D")][..])
    }

    #[test]
    fn test_empty_edges_give_zero_vector() {
        let features = extract_features(&EdgeList::default(), FeatureSet::Basic);
        assert_eq!(features.len(), FEATURE_DIM);
        assert!(features.is_zero());

        let features = extract_features(&EdgeList::default(), FeatureSet::WithCycleFlag);
        assert!(features.is_zero());
    }

    #[test]
    fn test_path_graph_statistics() {
        let stats = GraphStatistics::compute(&path_graph()).unwrap();

        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 3);
        assert!((stats.density - 0.5).abs() < 1e-9);
        assert_eq!(stats.average_clustering, 0.0);
        assert_eq!(stats.component_count, 1);
        assert!((stats.degree_mean - 1.5).abs() < 1e-9);
        assert!((stats.degree_std - 0.5).abs() < 1e-9);
        assert_eq!(stats.degree_max, 2);
        assert_eq!(stats.degree_min, 1);
        assert!(!stats.has_cycle);
    }

    #[test]
    fn test_triangle_clustering() {
        let edges = EdgeList::from(&[("A", "B"), ("B", "C"), ("C", "A")][..]);
        let stats = GraphStatistics::compute(&edges).unwrap();

        assert!((stats.average_clustering - 1.0).abs() < 1e-9);
        assert!((stats.density - 1.0).abs() < 1e-9);
        assert!(stats.has_cycle);
    }

    #[test]
    fn test_feature_layouts() {
        let edges = EdgeList::from(&[("A", "B"), ("B", "C"), ("C", "A")][..]);

        let basic = extract_features(&edges, FeatureSet::Basic);
        let flagged = extract_features(&edges, FeatureSet::WithCycleFlag);

        assert_eq!(basic.as_slice()[..9], flagged.as_slice()[..9]);
        assert_eq!(basic.as_slice()[9], 0.0);
        assert!((flagged.as_slice()[9] - 1.0).abs() < EPS);
        assert!(flagged.as_slice()[10..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_path_graph_vector() {
        let features = extract_features(&path_graph(), FeatureSet::Basic);
        let expected = [4.0, 3.0, 0.5, 0.0, 1.0, 1.5, 0.5, 2.0, 1.0];

        for (got, want) in features.as_slice().iter().zip(expected) {
            assert!((got - want).abs() < EPS, "got {} want {}", got, want);
        }
    }

    #[test]
    fn test_self_loop_degree() {
        let edges = EdgeList::from(&[("A", "A"), ("A", "B")][..]);
        let stats = GraphStatistics::compute(&edges).unwrap();

        assert_eq!(stats.node_count, 2);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.degree_max, 3);
        assert_eq!(stats.degree_min, 1);
        assert_eq!(stats.average_clustering, 0.0);
    }

    #[test]
    fn test_single_node_density() {
        let edges = EdgeList::from(&[("A", "A")][..]);
        let stats = GraphStatistics::compute(&edges).unwrap();
        assert_eq!(stats.density, 0.0);
    }

    #[test]
    fn test_from_values_truncates_and_pads() {
        let long = FeatureVector::from_values((0..100).map(|i| i as f32));
        assert_eq!(long.len(), FEATURE_DIM);
        assert_eq!(long.as_slice()[63], 63.0);

        let short = FeatureVector::from_values([1.0, 2.0]);
        assert_eq!(short.as_slice()[1], 2.0);
        assert!(short.as_slice()[2..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_vector_length_is_fixed_for_any_input() {
        let mut pairs = Vec::new();
        for i in 0..200 {
            pairs.push((format!("n{}", i), format!("n{}", (i * 7 + 3) % 200)));
        }
        let edges: EdgeList = pairs
            .iter()
            .map(|(a, b)| crate::types::Edge::new(a.as_str(), b.as_str()))
            .collect();

        for set in [FeatureSet::Basic, FeatureSet::WithCycleFlag] {
            assert_eq!(extract_features(&edges, set).as_slice().len(), FEATURE_DIM);
        }
    }
}
