use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use serde::{Deserialize, Serialize};

use shiperp_core::{PageParams, Paging, ServiceError};

use super::{AppState, StatusBody, status_ok};
use crate::model::{BillOfLading, GoodsItem};
use crate::service::bill::CreateBillInput;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Listing bills is the second public browse endpoint. The original
        // surface uses a trailing slash; accept both forms.
        .route("/bills", get(list_bills).post(create_bill))
        .route("/bills/", get(list_bills).post(create_bill))
        .route(
            "/bills/{id}",
            get(get_bill).put(update_bill).delete(delete_bill),
        )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateBillBody {
    #[serde(default)]
    bill_number: String,
    #[serde(default)]
    shipper: String,
    #[serde(default)]
    consignee: String,
    #[serde(default)]
    notify_party: Option<String>,
    #[serde(default)]
    port_of_loading: String,
    #[serde(default)]
    port_of_discharge: String,
    #[serde(default)]
    place_of_receipt: Option<String>,
    #[serde(default)]
    place_of_delivery: Option<String>,
    #[serde(default)]
    vessel: String,
    #[serde(default)]
    voyage_number: String,
    #[serde(default)]
    freight_details: Option<String>,
    #[serde(default)]
    goods: Vec<GoodsItem>,
    #[serde(default)]
    is_draft: bool,
    #[serde(default)]
    is_negotiable: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBillResponse {
    success: bool,
    message: String,
    new_bill: BillOfLading,
}

async fn create_bill(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateBillBody>,
) -> Result<(StatusCode, Json<CreateBillResponse>), ServiceError> {
    let who = state.principal(&headers)?;
    let bill = state.service.create_bill(&who, CreateBillInput {
        bill_number: body.bill_number,
        shipper: body.shipper,
        consignee: body.consignee,
        notify_party: body.notify_party,
        port_of_loading: body.port_of_loading,
        port_of_discharge: body.port_of_discharge,
        place_of_receipt: body.place_of_receipt,
        place_of_delivery: body.place_of_delivery,
        vessel: body.vessel,
        voyage_number: body.voyage_number,
        freight_details: body.freight_details,
        goods: body.goods,
        is_draft: body.is_draft,
        is_negotiable: body.is_negotiable,
    })?;
    Ok((
        StatusCode::CREATED,
        Json(CreateBillResponse {
            success: true,
            message: "Bill of lading created successfully".into(),
            new_bill: bill,
        }),
    ))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListBillsResponse {
    success: bool,
    message: String,
    bills: Vec<BillOfLading>,
    pagination: Paging,
}

async fn list_bills(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ListBillsResponse>, ServiceError> {
    let page = state.service.list_bills(&params)?;
    Ok(Json(ListBillsResponse {
        success: true,
        message: "Bills fetched successfully".into(),
        bills: page.items,
        pagination: page.pagination,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BillResponse {
    success: bool,
    message: String,
    bill: BillOfLading,
}

async fn get_bill(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<BillResponse>, ServiceError> {
    let _who = state.principal(&headers)?;
    let bill = state.service.get_bill(&id)?;
    Ok(Json(BillResponse {
        success: true,
        message: "Bill fetched successfully".into(),
        bill,
    }))
}

async fn update_bill(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<BillResponse>, ServiceError> {
    let _who = state.principal(&headers)?;
    let bill = state.service.update_bill(&id, patch)?;
    Ok(Json(BillResponse {
        success: true,
        message: "Bill updated successfully".into(),
        bill,
    }))
}

async fn delete_bill(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<StatusBody>, ServiceError> {
    let _who = state.principal(&headers)?;
    state.service.delete_bill(&id)?;
    Ok(status_ok("Bill deleted successfully"))
}
