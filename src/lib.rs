/// Graph Insight
///
/// Structural analysis of small graphs given as edge lists: classification
/// (Tree / Cycle / DAG), shortest paths, traversal orders and rendering.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │                 Graph Insight                    │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────────────────────────────┐              │
/// │  │   EdgeList (types)             │              │
/// │  └──────┬──────────┬──────────┬───┘              │
/// │         ↓          ↓          ↓                  │
/// │  ┌──────────┐ ┌──────────┐ ┌──────────────┐      │
/// │  │ features │ │algorithms│ │   layout     │      │
/// │  └────┬─────┘ └────┬─────┘ └──────┬───────┘      │
/// │       ↓            ↓              ↓              │
/// │  ┌────────────────────────┐ ┌──────────────┐     │
/// │  │ classifier (rules/NN)  │ │   render     │     │
/// │  └────────────────────────┘ └──────────────┘     │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Modules
///
/// - `types`: Core data types (NodeId, Edge, EdgeList, GraphPath)
/// - `features`: Fixed-width feature vectors for the model classifier
/// - `classifier`: Rule-based and neural graph type classifiers
/// - `algorithms`: Shortest path, traversal, cycle and connectivity checks
/// - `layout`: Seeded force-directed layout
/// - `render`: PNG / SVG rendering with traversal highlights

pub mod types;
pub mod features;
pub mod classifier;
pub mod algorithms;
pub mod layout;
pub mod render;

// Re-export commonly used types
pub use types::{Edge, EdgeList, GraphPath, NodeId};

// Re-export feature types
pub use features::{extract_features, FeatureSet, FeatureVector, GraphStatistics, FEATURE_DIM};

// Re-export classifier types
pub use classifier::{
    Classification, ClassifierError, ClassifierResult, GraphClassifier, GraphType,
    NeuralClassifier, Probabilities, RuleBasedClassifier,
};

// Re-export algorithm types
pub use algorithms::{
    shortest_path, traverse, AlgorithmError, AlgorithmResult, Traversal, TraversalAlgorithm,
    TraversalStep,
};

// Re-export layout and rendering types
pub use layout::{spring_layout, Layout, LayoutOptions, Point};
pub use render::{
    render_graph, EdgeSelector, Highlights, ImageFormat, RenderError, RenderOptions,
    RenderResult, RenderedImage,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
