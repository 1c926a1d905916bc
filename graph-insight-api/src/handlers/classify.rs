use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::{
    error::ApiResult,
    models::{ClassifyRequest, ClassifyResponse},
    AppState,
};

pub async fn classify_graph(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> ApiResult<Json<ClassifyResponse>> {
    let Json(request) = payload?;
    let report = state.classification_service.classify(&request.edges);
    Ok(Json(report.into()))
}
