use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};

use shiperp_core::{PageParams, Paging, ServiceError};

use super::{AppState, StatusBody, status_ok};
use crate::model::Goni;
use crate::service::goni::CreateGoniInput;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/gonies/create", post(create_goni))
        // Public browse endpoint — no principal required.
        .route("/gonies/goni-details", get(goni_details))
        .route("/gonies/{id}/delete", delete(delete_goni))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateGoniBody {
    #[serde(default)]
    goni_name: String,
    #[serde(default)]
    company_id: String,
    #[serde(default)]
    branch_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateGoniResponse {
    success: bool,
    message: String,
    new_goni: Goni,
}

async fn create_goni(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateGoniBody>,
) -> Result<Json<CreateGoniResponse>, ServiceError> {
    let who = state.principal(&headers)?;
    let goni = state.service.create_goni(&who, CreateGoniInput {
        goni_name: body.goni_name,
        company_id: body.company_id,
        branch_id: body.branch_id,
    })?;
    Ok(Json(CreateGoniResponse {
        success: true,
        message: "Goni created successfully".into(),
        new_goni: goni,
    }))
}

/// The goni listing carries its scope in the query string — the original
/// surface has no path parameters here.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoniDetailsQuery {
    #[serde(default)]
    branch_id: String,
    #[serde(default)]
    company_id: String,
    #[serde(default = "default_page")]
    page: u64,
    #[serde(default = "default_limit")]
    limit: u64,
    #[serde(default)]
    search: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GoniDetailsResponse {
    success: bool,
    message: String,
    gonies: Vec<Goni>,
    pagination: Paging,
}

async fn goni_details(
    State(state): State<AppState>,
    Query(q): Query<GoniDetailsQuery>,
) -> Result<Json<GoniDetailsResponse>, ServiceError> {
    let params = PageParams {
        page: q.page,
        limit: q.limit,
        search: q.search,
        status: None,
    };
    let page = state
        .service
        .list_gonies(&q.branch_id, &q.company_id, &params)?;
    Ok(Json(GoniDetailsResponse {
        success: true,
        message: "Gonies fetched successfully".into(),
        gonies: page.items,
        pagination: page.pagination,
    }))
}

async fn delete_goni(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(goni_id): Path<String>,
) -> Result<Json<StatusBody>, ServiceError> {
    let _who = state.principal(&headers)?;
    state.service.delete_goni(&goni_id)?;
    Ok(status_ok("Goni deleted successfully"))
}
