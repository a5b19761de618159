use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};

use shiperp_core::{PageParams, Paging, ServiceError};

use super::{AppState, StatusBody, status_ok};
use crate::model::{ContainerStatus, SeaContainer};
use crate::service::sea_container::CreateSeaContainerInput;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sea-containers/create", post(create_sea_container))
        // First segment is the branch id; named {id} so the parameter name
        // agrees with the delete route at the same position.
        .route(
            "/sea-containers/{id}/sea-voyage/{seaVoyageId}",
            get(list_sea_containers),
        )
        .route("/sea-containers/{id}", delete(delete_sea_container))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSeaContainerBody {
    #[serde(default)]
    container_number: String,
    #[serde(default)]
    sea_voyage_id: String,
    #[serde(default)]
    branch_id: String,
    #[serde(default)]
    status: Option<ContainerStatus>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSeaContainerResponse {
    success: bool,
    message: String,
    new_sea_container: SeaContainer,
}

async fn create_sea_container(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateSeaContainerBody>,
) -> Result<Json<CreateSeaContainerResponse>, ServiceError> {
    let who = state.principal(&headers)?;
    let container = state
        .service
        .create_sea_container(&who, CreateSeaContainerInput {
            container_number: body.container_number,
            sea_voyage_id: body.sea_voyage_id,
            branch_id: body.branch_id,
            status: body.status,
        })?;
    Ok(Json(CreateSeaContainerResponse {
        success: true,
        message: "Sea container created successfully".into(),
        new_sea_container: container,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListSeaContainersResponse {
    success: bool,
    message: String,
    sea_containers: Vec<SeaContainer>,
    pagination: Paging,
}

async fn list_sea_containers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((branch_id, voyage_id)): Path<(String, String)>,
    Query(params): Query<PageParams>,
) -> Result<Json<ListSeaContainersResponse>, ServiceError> {
    let _who = state.principal(&headers)?;
    let page = state
        .service
        .list_sea_containers(&branch_id, &voyage_id, &params)?;
    Ok(Json(ListSeaContainersResponse {
        success: true,
        message: "Sea containers fetched successfully".into(),
        sea_containers: page.items,
        pagination: page.pagination,
    }))
}

async fn delete_sea_container(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(container_id): Path<String>,
) -> Result<Json<StatusBody>, ServiceError> {
    let _who = state.principal(&headers)?;
    state.service.delete_sea_container(&container_id)?;
    Ok(status_ok("Sea container deleted successfully"))
}
