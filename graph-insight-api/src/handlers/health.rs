use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: i64,
    /// Active classifier, `null` when the model failed to load
    pub classifier: Option<&'static str>,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().timestamp(),
        classifier: state.classification_service.classifier_name(),
    })
}
