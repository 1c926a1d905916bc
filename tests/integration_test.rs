/// End-to-end tests of the analysis pipeline
///
/// Edge lists are parsed from request-shaped JSON and pushed through
/// features, classifiers, path finding, traversal and rendering.

use graph_insight::{
    extract_features, render_graph, shortest_path, spring_layout, traverse, AlgorithmError,
    EdgeList, EdgeSelector, FeatureSet, GraphClassifier, GraphType, Highlights, ImageFormat,
    LayoutOptions, NeuralClassifier, NodeId, RenderOptions, RuleBasedClassifier,
    TraversalAlgorithm, FEATURE_DIM,
};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn edges_from(value: serde_json::Value) -> EdgeList {
    serde_json::from_value(value).unwrap()
}

/// Test parsing mixed string and numeric node ids
#[test]
fn test_parse_request_edges() {
    let edges = edges_from(json!([["A", 1], [1, 2.5], [2.5, "A"]]));
    assert_eq!(edges.len(), 3);

    let nodes: Vec<&str> = edges.nodes().into_iter().map(NodeId::as_str).collect();
    assert_eq!(nodes, vec!["A", "1", "2.5"]);

    // Third slot carries an optional weight and is ignored
    let weighted = edges_from(json!([["A", "B", null], ["B", "C", "5"]]));
    assert_eq!(weighted, edges_from(json!([["A", "B"], ["B", "C"]])));

    assert!(serde_json::from_value::<EdgeList>(json!([["A"]])).is_err());
    assert!(serde_json::from_value::<EdgeList>(json!([["A", true]])).is_err());
}

/// Test the classification examples end to end
#[test]
fn test_rule_classification_workflow() {
    let classifier = RuleBasedClassifier::new();

    let path = edges_from(json!([["A", "B"], ["B", "C"], ["C", "D"]]));
    let result = classifier.classify(&path).unwrap();
    assert_eq!(result.graph_type, GraphType::Tree);
    assert_eq!(result.confidence, 0.9);

    let triangle = edges_from(json!([["A", "B"], ["B", "C"], ["C", "A"]]));
    let result = classifier.classify(&triangle).unwrap();
    assert_eq!(result.graph_type, GraphType::Cycle);
    assert_eq!(result.confidence, 0.8);

    // Serialized shape used by the HTTP layer
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["type"], "Cycle");
    assert!(value["probabilities"]["DAG"].is_number());
}

/// Test feature extraction invariants
#[test]
fn test_feature_vector_shape() {
    let empty = extract_features(&EdgeList::default(), FeatureSet::Basic);
    assert_eq!(empty.len(), FEATURE_DIM);
    assert!(empty.is_zero());

    let square = edges_from(json!([["A", "B"], ["B", "C"], ["C", "D"], ["D", "A"]]));
    for feature_set in [FeatureSet::Basic, FeatureSet::WithCycleFlag] {
        let features = extract_features(&square, feature_set);
        assert_eq!(features.len(), FEATURE_DIM);
        assert_eq!(features.as_slice()[0], 4.0);
        assert_eq!(features.as_slice()[1], 4.0);
    }
}

/// Test loading a weight file and classifying with it
#[test]
fn test_neural_classifier_from_file() {
    let mut conv = vec![vec![0.0f32; 64]; 64];
    conv[1][1] = 1.0;
    let mut lin = vec![vec![0.0f32; 64]; 3];
    lin[0][1] = 1.0;

    let weights = json!({
        "state_dict": {
            "conv1.lin.weight": conv,
            "conv1.bias": vec![0.0; 64],
            "conv2.lin.weight": conv,
            "conv2.bias": vec![0.0; 64],
            "conv3.lin.weight": conv,
            "conv3.bias": vec![0.0; 64],
            "lin.weight": lin,
            "lin.bias": vec![0.0; 3],
        }
    });
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(weights.to_string().as_bytes()).unwrap();

    let classifier = NeuralClassifier::load(file.path()).unwrap();
    assert_eq!(classifier.feature_set(), FeatureSet::Basic);

    let edges = edges_from(json!([["A", "B"], ["B", "C"], ["C", "D"]]));
    let result = classifier.classify(&edges).unwrap();
    assert_eq!(result.graph_type, GraphType::Tree);
    assert!((result.probabilities.sum() - 1.0).abs() < 1e-5);

    let empty = classifier.classify(&EdgeList::default()).unwrap();
    assert_eq!(empty.graph_type, GraphType::Unknown);
}

/// Test loading a missing or truncated weight file
#[test]
fn test_neural_classifier_bad_files() {
    assert!(NeuralClassifier::load("/nonexistent/model.json").is_err());

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{\"state_dict\": {}}").unwrap();
    assert!(NeuralClassifier::load(file.path()).is_err());
}

/// Test shortest path over the documented example
#[test]
fn test_shortest_path_workflow() {
    let edges = edges_from(json!([["A", "B"], ["B", "C"], ["A", "D"], ["D", "C"]]));

    let path = shortest_path(&edges, "A", "C").unwrap().unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path.start().map(NodeId::as_str), Some("A"));
    assert_eq!(path.end().map(NodeId::as_str), Some("C"));

    let err = shortest_path(&edges, "A", "Z").unwrap_err();
    assert!(matches!(err, AlgorithmError::NodeNotFound(ref node) if node.as_str() == "Z"));
}

/// Test replaying a traversal through the renderer
#[test]
fn test_traversal_replay() {
    let edges = edges_from(json!([["A", "B"], ["A", "C"], ["B", "D"]]));
    let traversal = traverse(&edges, "A", TraversalAlgorithm::Dfs).unwrap();
    let order: Vec<&str> = traversal.order.iter().map(NodeId::as_str).collect();
    assert_eq!(order, vec!["A", "B", "D", "C"]);

    let options = RenderOptions {
        format: ImageFormat::Svg,
        width: 400,
        height: 300,
        ..RenderOptions::default()
    };

    for (i, step) in traversal.steps.iter().enumerate() {
        let highlights = Highlights {
            visited: traversal.order[..i].iter().cloned().collect(),
            current_node: Some(step.node.clone()),
            current_edge: step
                .edge
                .as_ref()
                .map(|e| EdgeSelector::Pair(e.source.clone(), e.target.clone())),
        };
        let image = render_graph(&edges, &highlights, &options).unwrap().unwrap();
        assert_eq!(image.format, ImageFormat::Svg);
        assert!(image.data_url().starts_with("data:image/svg+xml;base64,"));
    }
}

/// Test that layout and rendering are reproducible
#[test]
fn test_rendering_is_deterministic() {
    let edges = edges_from(json!([["A", "B"], ["B", "C"], ["C", "A"], ["C", "D"]]));

    let first = spring_layout(&edges, &LayoutOptions::default());
    let second = spring_layout(&edges, &LayoutOptions::default());
    assert_eq!(first, second);

    let options = RenderOptions {
        width: 320,
        height: 240,
        ..RenderOptions::default()
    };
    let a = render_graph(&edges, &Highlights::default(), &options).unwrap().unwrap();
    let b = render_graph(&edges, &Highlights::default(), &options).unwrap().unwrap();
    assert_eq!(a.format, ImageFormat::Png);
    assert_eq!(a.bytes, b.bytes);
    assert!(a.bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}
