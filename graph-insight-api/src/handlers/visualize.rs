use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::{
    error::{ApiError, ApiResult},
    models::{VisualizeRequest, VisualizeResponse},
    AppState,
};

pub async fn generate_graph(
    State(state): State<AppState>,
    payload: Result<Json<VisualizeRequest>, JsonRejection>,
) -> ApiResult<Json<VisualizeResponse>> {
    let Json(request) = payload?;

    // Layout and rasterisation are CPU-bound
    let service = state.visualization_service.clone();
    let response = tokio::task::spawn_blocking(move || service.render(&request))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;
    Ok(Json(response))
}
