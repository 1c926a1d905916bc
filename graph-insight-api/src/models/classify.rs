use graph_insight::{Classification, EdgeList};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub edges: EdgeList,
}

/// Classification plus where it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    #[serde(flatten)]
    pub classification: Classification,
    /// Name of the classifier that produced the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClassificationReport {
    pub fn new(classification: Classification, classifier: &str) -> Self {
        Self {
            classification,
            classifier: Some(classifier.to_string()),
            error: None,
        }
    }

    /// Unknown result carrying the reason classification failed
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            classification: Classification::unknown(),
            classifier: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub success: bool,
    pub classification: ClassificationReport,
}

impl From<ClassificationReport> for ClassifyResponse {
    fn from(classification: ClassificationReport) -> Self {
        Self {
            success: true,
            classification,
        }
    }
}
