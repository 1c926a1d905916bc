/// Force-directed node placement
///
/// Fruchterman-Reingold spring layout on the undirected view of an edge
/// list. Every node repels every other node with `k^2 / d`, connected nodes
/// attract with `d^2 / k`; the step size cools linearly over the iterations.
/// Initial positions come from a seeded RNG, so the same edge list and
/// options always produce the same layout.
///
/// Final positions are centred on the origin and scaled so the largest
/// coordinate magnitude is 1.

use crate::types::{EdgeList, NodeId};
use petgraph::graphmap::UnGraphMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Layout parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Optimal distance between nodes
    pub k: f64,
    /// Number of cooling steps
    pub iterations: usize,
    /// RNG seed for the initial positions
    pub seed: u64,
    /// Stop early once the mean displacement drops below this
    pub threshold: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            k: 3.0,
            iterations: 50,
            seed: 42,
            threshold: 1e-4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Node positions produced by `spring_layout`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    nodes: Vec<NodeId>,
    positions: Vec<Point>,
}

impl Layout {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn position(&self, node: &str) -> Option<Point> {
        self.nodes
            .iter()
            .position(|n| n.as_str() == node)
            .map(|i| self.positions[i])
    }

    /// Nodes with their positions, in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, Point)> + '_ {
        self.nodes.iter().zip(self.positions.iter().copied())
    }
}

/// Compute a spring layout for every node of `edges`
pub fn spring_layout(edges: &EdgeList, options: &LayoutOptions) -> Layout {
    let graph = edges.to_undirected();
    let nodes: Vec<&str> = graph.nodes().collect();

    let positions = match nodes.len() {
        0 => Vec::new(),
        1 => vec![Point::default()],
        _ => {
            let mut rng = StdRng::seed_from_u64(options.seed);
            let mut positions: Vec<Point> = nodes
                .iter()
                .map(|_| Point::new(rng.gen::<f64>(), rng.gen::<f64>()))
                .collect();
            run_fruchterman_reingold(&graph, &nodes, &mut positions, options);
            rescale(&mut positions);
            positions
        }
    };

    Layout {
        nodes: nodes.into_iter().map(NodeId::from).collect(),
        positions,
    }
}

fn run_fruchterman_reingold(
    graph: &UnGraphMap<&str, ()>,
    nodes: &[&str],
    positions: &mut [Point],
    options: &LayoutOptions,
) {
    let mut temperature = initial_temperature(positions);
    let cooling = temperature / (options.iterations as f64 + 1.0);
    let mut disp = vec![Point::default(); positions.len()];

    for _ in 0..options.iterations {
        disp.fill(Point::default());
        compute_forces(graph, nodes, positions, &mut disp, options.k);
        let moved = apply_displacements(positions, &disp, temperature);

        temperature -= cooling;
        if moved / (positions.len() as f64) < options.threshold {
            break;
        }
    }
}

/// One tenth of the widest extent of the initial positions
fn initial_temperature(positions: &[Point]) -> f64 {
    let (min_x, max_x, min_y, max_y) = positions.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(min_x, max_x, min_y, max_y), p| {
            (min_x.min(p.x), max_x.max(p.x), min_y.min(p.y), max_y.max(p.y))
        },
    );
    (max_x - min_x).max(max_y - min_y) * 0.1
}

fn compute_forces(
    graph: &UnGraphMap<&str, ()>,
    nodes: &[&str],
    positions: &[Point],
    disp: &mut [Point],
    k: f64,
) {
    for i in 0..nodes.len() {
        for j in 0..nodes.len() {
            if i == j {
                continue;
            }
            let delta = positions[i] - positions[j];
            let distance = delta.length().max(0.01);
            let attraction = if graph.contains_edge(nodes[i], nodes[j]) {
                distance / k
            } else {
                0.0
            };
            let force = k * k / (distance * distance) - attraction;
            disp[i].x += delta.x * force;
            disp[i].y += delta.y * force;
        }
    }
}

/// Move each node by at most `temperature`; returns the total movement
fn apply_displacements(positions: &mut [Point], disp: &[Point], temperature: f64) -> f64 {
    let mut moved = 0.0;
    for (pos, d) in positions.iter_mut().zip(disp) {
        let length = d.length().max(0.01);
        let step = Point::new(d.x * temperature / length, d.y * temperature / length);
        pos.x += step.x;
        pos.y += step.y;
        moved += step.length();
    }
    moved
}

fn rescale(positions: &mut [Point]) {
    let n = positions.len() as f64;
    let mean_x = positions.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = positions.iter().map(|p| p.y).sum::<f64>() / n;

    let mut limit: f64 = 0.0;
    for p in positions.iter_mut() {
        p.x -= mean_x;
        p.y -= mean_y;
        limit = limit.max(p.x.abs()).max(p.y.abs());
    }

    if limit > 0.0 {
        for p in positions.iter_mut() {
            p.x /= limit;
            p.y /= limit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> EdgeList {
        EdgeList::from(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")][..])
    }

    #[test]
    fn test_layout_is_deterministic() {
        let options = LayoutOptions::default();
        let first = spring_layout(&square(), &options);
        let second = spring_layout(&square(), &options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_seed_changes_layout() {
        let first = spring_layout(&square(), &LayoutOptions::default());
        let second = spring_layout(
            &square(),
            &LayoutOptions {
                seed: 7,
                ..LayoutOptions::default()
            },
        );
        assert_ne!(first, second);
    }

    #[test]
    fn test_positions_are_normalized() {
        let layout = spring_layout(&square(), &LayoutOptions::default());
        assert_eq!(layout.len(), 4);

        let mut max_abs: f64 = 0.0;
        for (_, p) in layout.iter() {
            assert!(p.x.is_finite() && p.y.is_finite());
            max_abs = max_abs.max(p.x.abs()).max(p.y.abs());
        }
        assert!((max_abs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_nodes_are_separated() {
        let layout = spring_layout(&square(), &LayoutOptions::default());
        let a = layout.position("A").unwrap();
        let c = layout.position("C").unwrap();
        assert!((a - c).length() > 0.1);
    }

    #[test]
    fn test_single_node_at_origin() {
        let edges = EdgeList::from(&[("A", "A")][..]);
        let layout = spring_layout(&edges, &LayoutOptions::default());
        assert_eq!(layout.position("A"), Some(Point::default()));
    }

    #[test]
    fn test_empty_layout() {
        let layout = spring_layout(&EdgeList::default(), &LayoutOptions::default());
        assert!(layout.is_empty());
        assert_eq!(layout.position("A"), None);
    }
}
