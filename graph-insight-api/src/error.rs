use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(json!({
            "success": false,
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

// Convert graph-insight errors to ApiError
impl From<graph_insight::AlgorithmError> for ApiError {
    fn from(err: graph_insight::AlgorithmError) -> Self {
        match err {
            graph_insight::AlgorithmError::NodeNotFound(_) => ApiError::NotFound(err.to_string()),
            graph_insight::AlgorithmError::InvalidParameters(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl From<graph_insight::RenderError> for ApiError {
    fn from(err: graph_insight::RenderError) -> Self {
        match err {
            graph_insight::RenderError::InvalidOptions(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use graph_insight::{AlgorithmError, NodeId};

    #[test]
    fn test_node_not_found_maps_to_404() {
        let err: ApiError = AlgorithmError::NodeNotFound(NodeId::from("Z")).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_parameters_maps_to_400() {
        let err: ApiError = AlgorithmError::InvalidParameters("no root".to_string()).into();
        assert!(matches!(err, ApiError::BadRequest(ref msg) if msg == "no root"));
    }
}
