use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};

use shiperp_core::{PageParams, Paging, ServiceError};

use super::{AppState, StatusBody, status_ok};
use crate::model::ContainerCompany;
use crate::service::container_company::CreateContainerCompanyInput;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/container-companies/create", post(create_container_company))
        // First segment is the branch id; named {id} so the parameter name
        // agrees with the delete route at the same position.
        .route(
            "/container-companies/{id}/line/{lineId}",
            get(list_container_companies),
        )
        .route("/container-companies/{id}", delete(delete_container_company))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateContainerCompanyBody {
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    line_id: String,
    #[serde(default)]
    branch_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateContainerCompanyResponse {
    success: bool,
    message: String,
    new_container_company: ContainerCompany,
}

async fn create_container_company(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateContainerCompanyBody>,
) -> Result<Json<CreateContainerCompanyResponse>, ServiceError> {
    let who = state.principal(&headers)?;
    let company = state
        .service
        .create_container_company(&who, CreateContainerCompanyInput {
            company_name: body.company_name,
            line_id: body.line_id,
            branch_id: body.branch_id,
        })?;
    Ok(Json(CreateContainerCompanyResponse {
        success: true,
        message: "Container company created successfully".into(),
        new_container_company: company,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListContainerCompaniesResponse {
    success: bool,
    message: String,
    container_companies: Vec<ContainerCompany>,
    pagination: Paging,
}

async fn list_container_companies(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((branch_id, line_id)): Path<(String, String)>,
    Query(params): Query<PageParams>,
) -> Result<Json<ListContainerCompaniesResponse>, ServiceError> {
    let _who = state.principal(&headers)?;
    let page = state
        .service
        .list_container_companies(&branch_id, &line_id, &params)?;
    Ok(Json(ListContainerCompaniesResponse {
        success: true,
        message: "Container companies fetched successfully".into(),
        container_companies: page.items,
        pagination: page.pagination,
    }))
}

async fn delete_container_company(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(company_id): Path<String>,
) -> Result<Json<StatusBody>, ServiceError> {
    let _who = state.principal(&headers)?;
    state.service.delete_container_company(&company_id)?;
    Ok(status_ok("Container company deleted successfully"))
}
