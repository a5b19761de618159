use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};

use shiperp_core::{PageParams, Paging, ServiceError};

use super::{AppState, StatusBody, status_ok};
use crate::model::{SeaVoyage, TrackingStatus, VoyageStatus};
use crate::service::sea_voyage::CreateSeaVoyageInput;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sea-voyages/create", post(create_sea_voyage))
        .route("/sea-voyages/{branchId}", get(list_sea_voyages))
        .route("/sea-voyages/delete/{seaVoyageId}", delete(delete_sea_voyage))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSeaVoyageBody {
    #[serde(default)]
    sea_voyage_name: String,
    #[serde(default)]
    sea_voyage_number: String,
    #[serde(default)]
    branch_id: String,
    #[serde(default)]
    line_id: String,
    #[serde(default)]
    year: i32,
    #[serde(default)]
    status: Option<VoyageStatus>,
    #[serde(default)]
    tracking_status: Option<TrackingStatus>,
    #[serde(default)]
    dispatch_date: Option<String>,
    #[serde(default)]
    expected_arrival_date: Option<String>,
    #[serde(default)]
    received_date: Option<String>,
    #[serde(default)]
    delay_date: Option<String>,
    #[serde(default)]
    delay_message: Option<String>,
    #[serde(default)]
    location: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSeaVoyageResponse {
    success: bool,
    message: String,
    new_sea_voyage: SeaVoyage,
}

async fn create_sea_voyage(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateSeaVoyageBody>,
) -> Result<Json<CreateSeaVoyageResponse>, ServiceError> {
    let who = state.principal(&headers)?;
    let voyage = state.service.create_sea_voyage(&who, CreateSeaVoyageInput {
        sea_voyage_name: body.sea_voyage_name,
        sea_voyage_number: body.sea_voyage_number,
        branch_id: body.branch_id,
        line_id: body.line_id,
        year: body.year,
        status: body.status,
        tracking_status: body.tracking_status,
        dispatch_date: body.dispatch_date,
        expected_arrival_date: body.expected_arrival_date,
        received_date: body.received_date,
        delay_date: body.delay_date,
        delay_message: body.delay_message,
        location: body.location,
    })?;
    Ok(Json(CreateSeaVoyageResponse {
        success: true,
        message: "Sea voyage created successfully".into(),
        new_sea_voyage: voyage,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListSeaVoyagesResponse {
    success: bool,
    message: String,
    sea_voyages: Vec<SeaVoyage>,
    pagination: Paging,
}

async fn list_sea_voyages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(branch_id): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<ListSeaVoyagesResponse>, ServiceError> {
    let _who = state.principal(&headers)?;
    let page = state.service.list_sea_voyages(&branch_id, &params)?;
    Ok(Json(ListSeaVoyagesResponse {
        success: true,
        message: "Sea voyages fetched successfully".into(),
        sea_voyages: page.items,
        pagination: page.pagination,
    }))
}

async fn delete_sea_voyage(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(voyage_id): Path<String>,
) -> Result<Json<StatusBody>, ServiceError> {
    let _who = state.principal(&headers)?;
    state.service.delete_sea_voyage(&voyage_id)?;
    Ok(status_ok("Sea voyage deleted successfully"))
}
