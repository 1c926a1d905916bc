/// Model-based classification
///
/// A fixed feed-forward network over the 64-wide feature vector:
///
/// ```text
/// input(64) -> conv1(64, relu) -> conv2(64, relu) -> conv3(64, relu) -> lin(3, softmax)
/// ```
///
/// Weights come from a JSON weight file holding the trained state dict:
///
/// ```json
/// {
///   "feature_set": "basic",
///   "state_dict": {
///     "conv1.lin.weight": [[...64 floats...], ...64 rows],
///     "conv1.bias": [...64 floats...],
///     "conv2.lin.weight": ..., "conv2.bias": ...,
///     "conv3.lin.weight": ..., "conv3.bias": ...,
///     "lin.weight": [[...64 floats...], ...3 rows],
///     "lin.bias": [...3 floats...]
///   }
/// }
/// ```
///
/// Weight matrices are stored `out x in` and transposed on load.

use super::{Classification, ClassifierError, ClassifierResult, GraphClassifier};
use crate::features::{extract_features, FeatureSet, FEATURE_DIM};
use crate::types::EdgeList;
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const HIDDEN_DIM: usize = 64;
const OUTPUT_DIM: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activation {
    Relu,
    Softmax,
}

/// (weight key, bias key, input width, output width, activation)
const ARCHITECTURE: [(&str, &str, usize, usize, Activation); 4] = [
    ("conv1.lin.weight", "conv1.bias", FEATURE_DIM, HIDDEN_DIM, Activation::Relu),
    ("conv2.lin.weight", "conv2.bias", HIDDEN_DIM, HIDDEN_DIM, Activation::Relu),
    ("conv3.lin.weight", "conv3.bias", HIDDEN_DIM, HIDDEN_DIM, Activation::Relu),
    ("lin.weight", "lin.bias", HIDDEN_DIM, OUTPUT_DIM, Activation::Softmax),
];

/// Tensor as stored in the weight file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tensor {
    Matrix(Vec<Vec<f32>>),
    Vector(Vec<f32>),
}

/// On-disk weight file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightFile {
    /// Feature layout the weights were trained on
    #[serde(default)]
    pub feature_set: FeatureSet,

    /// Tensors keyed by layer parameter name
    pub state_dict: HashMap<String, Tensor>,
}

impl WeightFile {
    /// Read and parse a weight file
    pub fn read(path: impl AsRef<Path>) -> ClassifierResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn matrix(&self, key: &str, rows: usize, cols: usize) -> ClassifierResult<Array2<f32>> {
        let found = match self.state_dict.get(key) {
            Some(Tensor::Matrix(matrix)) => matrix,
            Some(Tensor::Vector(values)) => {
                return Err(ClassifierError::ShapeMismatch {
                    tensor: key.to_string(),
                    expected: vec![rows, cols],
                    found: vec![values.len()],
                })
            }
            None => return Err(ClassifierError::MissingTensor(key.to_string())),
        };

        let shape_ok = found.len() == rows && found.iter().all(|row| row.len() == cols);
        if !shape_ok {
            return Err(ClassifierError::ShapeMismatch {
                tensor: key.to_string(),
                expected: vec![rows, cols],
                found: vec![found.len(), found.first().map_or(0, Vec::len)],
            });
        }

        let flat: Vec<f32> = found.iter().flatten().copied().collect();
        check_finite(key, &flat)?;
        Array2::from_shape_vec((rows, cols), flat)
            .map_err(|e| ClassifierError::InvalidWeights(format!("{}: {}", key, e)))
    }

    fn vector(&self, key: &str, len: usize) -> ClassifierResult<Array1<f32>> {
        let found = match self.state_dict.get(key) {
            Some(Tensor::Vector(values)) => values,
            Some(Tensor::Matrix(rows)) => {
                return Err(ClassifierError::ShapeMismatch {
                    tensor: key.to_string(),
                    expected: vec![len],
                    found: vec![rows.len(), rows.first().map_or(0, Vec::len)],
                })
            }
            None => return Err(ClassifierError::MissingTensor(key.to_string())),
        };

        if found.len() != len {
            return Err(ClassifierError::ShapeMismatch {
                tensor: key.to_string(),
                expected: vec![len],
                found: vec![found.len()],
            });
        }
        check_finite(key, found)?;
        Ok(Array1::from_vec(found.clone()))
    }
}

fn check_finite(key: &str, values: &[f32]) -> ClassifierResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ClassifierError::InvalidWeights(format!(
            "{} contains non-finite values",
            key
        )))
    }
}

#[derive(Debug, Clone)]
struct DenseLayer {
    /// `in x out`
    weight: Array2<f32>,
    bias: Array1<f32>,
    activation: Activation,
}

impl DenseLayer {
    fn forward(&self, input: &Array2<f32>) -> ClassifierResult<Array2<f32>> {
        if input.ncols() != self.weight.nrows() {
            return Err(ClassifierError::Inference(format!(
                "layer expects {} inputs, got {}",
                self.weight.nrows(),
                input.ncols()
            )));
        }

        let mut output = input.dot(&self.weight) + &self.bias;
        match self.activation {
            Activation::Relu => output.mapv_inplace(|v| v.max(0.0)),
            Activation::Softmax => softmax_rows(&mut output),
        }
        Ok(output)
    }
}

fn softmax_rows(values: &mut Array2<f32>) {
    for mut row in values.axis_iter_mut(Axis(0)) {
        let max = row.fold(f32::NEG_INFINITY, |acc, &v| acc.max(v));
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.sum();
        row.mapv_inplace(|v| v / sum);
    }
}

/// Pad with zeros or truncate a feature row to `width`
fn fit_width(mut row: Vec<f32>, width: usize) -> Vec<f32> {
    if row.len() != width {
        tracing::warn!(expected = width, got = row.len(), "feature width mismatch, adjusting");
        row.resize(width, 0.0);
    }
    row
}

/// Feed-forward classifier with weights loaded from a weight file
#[derive(Debug, Clone)]
pub struct NeuralClassifier {
    layers: Vec<DenseLayer>,
    feature_set: FeatureSet,
}

impl NeuralClassifier {
    /// Load a classifier from a weight file on disk
    ///
    /// # Errors
    /// Any I/O, parse, missing-tensor or shape problem is returned; nothing
    /// is partially loaded.
    pub fn load(path: impl AsRef<Path>) -> ClassifierResult<Self> {
        let path = path.as_ref();
        let weights = WeightFile::read(path)?;
        let classifier = Self::from_weights(&weights)?;
        tracing::info!(
            path = %path.display(),
            feature_set = ?classifier.feature_set,
            "loaded classifier weights"
        );
        Ok(classifier)
    }

    /// Build a classifier from an already parsed weight file
    pub fn from_weights(weights: &WeightFile) -> ClassifierResult<Self> {
        let mut layers = Vec::with_capacity(ARCHITECTURE.len());
        for (weight_key, bias_key, input, output, activation) in ARCHITECTURE {
            let weight = weights.matrix(weight_key, output, input)?.reversed_axes();
            let bias = weights.vector(bias_key, output)?;
            layers.push(DenseLayer {
                weight,
                bias,
                activation,
            });
        }

        Ok(Self {
            layers,
            feature_set: weights.feature_set,
        })
    }

    pub fn feature_set(&self) -> FeatureSet {
        self.feature_set
    }

    fn input_width(&self) -> usize {
        self.layers.first().map_or(FEATURE_DIM, |l| l.weight.nrows())
    }

    /// Run the network on a batch of feature rows, returning class
    /// probabilities per row
    pub fn forward(&self, batch: Array2<f32>) -> ClassifierResult<Array2<f32>> {
        let mut activations = batch;
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }

        if activations.iter().any(|v| !v.is_finite()) {
            return Err(ClassifierError::Inference(
                "network produced non-finite probabilities".to_string(),
            ));
        }
        Ok(activations)
    }
}

impl GraphClassifier for NeuralClassifier {
    fn name(&self) -> &'static str {
        "model"
    }

    fn classify(&self, edges: &EdgeList) -> ClassifierResult<Classification> {
        if edges.is_empty() {
            return Ok(Classification::unknown());
        }

        let features = extract_features(edges, self.feature_set);
        let width = self.input_width();
        let row = fit_width(features.as_slice().to_vec(), width);
        let batch = Array2::from_shape_vec((1, width), row)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let output = self.forward(batch)?;
        let probs = output.row(0);
        if probs.len() != OUTPUT_DIM {
            return Err(ClassifierError::Inference(format!(
                "expected {} outputs, got {}",
                OUTPUT_DIM,
                probs.len()
            )));
        }

        let result =
            Classification::from_distribution([probs[0] as f64, probs[1] as f64, probs[2] as f64]);
        tracing::debug!(
            graph_type = %result.graph_type,
            confidence = result.confidence,
            "model classification"
        );
        Ok(result)
    }
}
