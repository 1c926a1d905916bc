/// Graph type classification
///
/// Two interchangeable classifiers label a graph as Tree, Cycle or DAG:
/// - `RuleBasedClassifier`: connectivity, edge count and cycle checks
/// - `NeuralClassifier`: fixed feed-forward network over the feature vector
///
/// Both implement `GraphClassifier`; the service picks one at startup and
/// shares it behind an `Arc<dyn GraphClassifier>`.

pub mod neural;
pub mod rules;

pub use neural::{NeuralClassifier, WeightFile};
pub use rules::RuleBasedClassifier;

use crate::types::EdgeList;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Structural graph type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphType {
    Tree,
    Cycle,
    #[serde(rename = "DAG")]
    Dag,
    Unknown,
}

/// Output classes in model order; index `i` of the network output is
/// `CLASS_ORDER[i]`
pub const CLASS_ORDER: [GraphType; 3] = [GraphType::Tree, GraphType::Cycle, GraphType::Dag];

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GraphType::Tree => "Tree",
            GraphType::Cycle => "Cycle",
            GraphType::Dag => "DAG",
            GraphType::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Per-class probabilities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    #[serde(rename = "Tree")]
    pub tree: f64,
    #[serde(rename = "Cycle")]
    pub cycle: f64,
    #[serde(rename = "DAG")]
    pub dag: f64,
}

impl Probabilities {
    pub fn uniform() -> Self {
        Self::from_array([1.0 / 3.0; 3])
    }

    /// Build from values in `CLASS_ORDER`
    pub fn from_array(values: [f64; 3]) -> Self {
        Self {
            tree: values[0],
            cycle: values[1],
            dag: values[2],
        }
    }

    /// Put `confidence` on `graph_type` and split the remainder evenly
    ///
    /// This is a heuristic spread, not a calibrated distribution. `Unknown`
    /// yields the uniform distribution.
    pub fn concentrated(graph_type: GraphType, confidence: f64) -> Self {
        let rest = (1.0 - confidence) / 2.0;
        match graph_type {
            GraphType::Tree => Self::from_array([confidence, rest, rest]),
            GraphType::Cycle => Self::from_array([rest, confidence, rest]),
            GraphType::Dag => Self::from_array([rest, rest, confidence]),
            GraphType::Unknown => Self::uniform(),
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.tree, self.cycle, self.dag]
    }

    pub fn sum(&self) -> f64 {
        self.tree + self.cycle + self.dag
    }
}

/// Outcome of classifying one graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "type")]
    pub graph_type: GraphType,
    pub confidence: f64,
    pub probabilities: Probabilities,
}

impl Classification {
    /// Result for a graph with no edges
    pub fn unknown() -> Self {
        Self {
            graph_type: GraphType::Unknown,
            confidence: 0.0,
            probabilities: Probabilities::uniform(),
        }
    }

    /// Rule-style result: fixed confidence, remainder spread evenly
    pub fn with_confidence(graph_type: GraphType, confidence: f64) -> Self {
        Self {
            graph_type,
            confidence,
            probabilities: Probabilities::concentrated(graph_type, confidence),
        }
    }

    /// Model-style result: arg-max of a distribution in `CLASS_ORDER`
    pub fn from_distribution(values: [f64; 3]) -> Self {
        let (index, confidence) = values
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (i, p)| {
                if p > best.1 {
                    (i, p)
                } else {
                    best
                }
            });

        Self {
            graph_type: CLASS_ORDER[index],
            confidence,
            probabilities: Probabilities::from_array(values),
        }
    }
}

/// Classifier errors
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Failed to read weight file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed weight file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Weight file is missing tensor '{0}'")]
    MissingTensor(String),

    #[error("Tensor '{tensor}' has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        tensor: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}

pub type ClassifierResult<T> = Result<T, ClassifierError>;

/// Common interface of the classifiers
pub trait GraphClassifier: Send + Sync {
    /// Short name reported alongside results
    fn name(&self) -> &'static str;

    /// Classify a graph; an empty edge list is `GraphType::Unknown`
    fn classify(&self, edges: &EdgeList) -> ClassifierResult<Classification>;
}
