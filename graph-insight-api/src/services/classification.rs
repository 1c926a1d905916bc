use std::sync::Arc;

use graph_insight::{EdgeList, GraphClassifier, NeuralClassifier, RuleBasedClassifier};

use crate::{
    config::{ClassifierConfig, ClassifierMode},
    models::ClassificationReport,
};

const MODEL_NOT_LOADED: &str = "Model not loaded";

/// Classifies edge lists with the classifier chosen at startup
pub struct ClassificationService {
    classifier: Option<Arc<dyn GraphClassifier>>,
}

impl ClassificationService {
    pub fn new(classifier: Arc<dyn GraphClassifier>) -> Self {
        Self {
            classifier: Some(classifier),
        }
    }

    /// Service whose every classification reports that no model is loaded
    pub fn unavailable() -> Self {
        Self { classifier: None }
    }

    /// Build the classifier selected by `config`
    ///
    /// In `auto` mode a model that fails to load is replaced by the rule-based
    /// classifier; in `model` mode the service is left without a classifier.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        if config.mode == ClassifierMode::Rules {
            return Self::new(Arc::new(RuleBasedClassifier::new()));
        }

        match NeuralClassifier::load(&config.model_path) {
            Ok(model) => {
                tracing::info!(
                    path = %config.model_path,
                    feature_set = ?model.feature_set(),
                    "Loaded classifier model"
                );
                Self::new(Arc::new(model))
            }
            Err(e) if config.mode == ClassifierMode::Auto => {
                tracing::warn!(
                    path = %config.model_path,
                    error = %e,
                    "Could not load classifier model, falling back to rules"
                );
                Self::new(Arc::new(RuleBasedClassifier::new()))
            }
            Err(e) => {
                tracing::warn!(
                    path = %config.model_path,
                    error = %e,
                    "Could not load classifier model"
                );
                Self::unavailable()
            }
        }
    }

    /// Name of the active classifier, `None` when no model is loaded
    pub fn classifier_name(&self) -> Option<&'static str> {
        self.classifier.as_ref().map(|c| c.name())
    }

    /// Classify `edges`; failures become an Unknown result carrying the error
    pub fn classify(&self, edges: &EdgeList) -> ClassificationReport {
        let Some(classifier) = &self.classifier else {
            return ClassificationReport::failed(MODEL_NOT_LOADED);
        };

        match classifier.classify(edges) {
            Ok(classification) => {
                tracing::debug!(
                    classifier = classifier.name(),
                    graph_type = %classification.graph_type,
                    confidence = classification.confidence,
                    "Classified graph"
                );
                ClassificationReport::new(classification, classifier.name())
            }
            Err(e) => {
                tracing::warn!(classifier = classifier.name(), error = %e, "Classification failed");
                ClassificationReport::failed(e.to_string())
            }
        }
    }
}
