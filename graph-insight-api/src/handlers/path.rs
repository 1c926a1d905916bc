use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::{
    error::ApiResult,
    models::{ShortestPathRequest, ShortestPathResponse},
    AppState,
};

pub async fn find_shortest_path(
    State(state): State<AppState>,
    payload: Result<Json<ShortestPathRequest>, JsonRejection>,
) -> ApiResult<Json<ShortestPathResponse>> {
    let Json(request) = payload?;
    let response = state.analysis_service.shortest_path(
        &request.edges,
        request.start.as_ref(),
        request.end.as_ref(),
    )?;
    Ok(Json(response))
}
