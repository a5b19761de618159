use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use shiperp_core::{PageParams, Paging, ServiceError};

use super::{AppState, StatusBody, status_ok};
use crate::model::Line;
use crate::service::line::CreateLineInput;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/lines/create", post(create_line))
        .route("/lines/{id}", get(list_lines).delete(delete_line))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateLineBody {
    #[serde(default)]
    line_name: String,
    #[serde(default)]
    branch_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateLineResponse {
    success: bool,
    message: String,
    new_line: Line,
}

async fn create_line(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateLineBody>,
) -> Result<Json<CreateLineResponse>, ServiceError> {
    let who = state.principal(&headers)?;
    let line = state.service.create_line(&who, CreateLineInput {
        line_name: body.line_name,
        branch_id: body.branch_id,
    })?;
    Ok(Json(CreateLineResponse {
        success: true,
        message: "Line created successfully".into(),
        new_line: line,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListLinesResponse {
    success: bool,
    message: String,
    lines: Vec<Line>,
    pagination: Paging,
}

async fn list_lines(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(branch_id): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<ListLinesResponse>, ServiceError> {
    let _who = state.principal(&headers)?;
    let page = state.service.list_lines(&branch_id, &params)?;
    Ok(Json(ListLinesResponse {
        success: true,
        message: "Lines fetched successfully".into(),
        lines: page.items,
        pagination: page.pagination,
    }))
}

async fn delete_line(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(line_id): Path<String>,
) -> Result<Json<StatusBody>, ServiceError> {
    let _who = state.principal(&headers)?;
    state.service.delete_line(&line_id)?;
    Ok(status_ok("Line deleted successfully"))
}
