use axum::{extract::rejection::JsonRejection, extract::State, Json};
use graph_insight::Traversal;

use crate::{error::ApiResult, models::TraverseRequest, AppState};

pub async fn traverse_graph(
    State(state): State<AppState>,
    payload: Result<Json<TraverseRequest>, JsonRejection>,
) -> ApiResult<Json<Traversal>> {
    let Json(request) = payload?;
    let traversal = state.analysis_service.traverse(
        &request.edges,
        request.root.as_ref(),
        request.algorithm,
    )?;
    Ok(Json(traversal))
}
