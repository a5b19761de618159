pub mod bill;
pub mod container_company;
pub mod goni;
pub mod line;
pub mod sea_container;
pub mod sea_voyage;

use std::sync::Arc;

use axum::{Json, Router, http::HeaderMap};
use serde::Serialize;

use shiperp_core::{Authenticator, Principal, ServiceError};

use crate::service::FreightService;

/// Shared handler state: the service plus the injected authenticator.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FreightService>,
    pub auth: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(service: Arc<FreightService>, auth: Arc<dyn Authenticator>) -> Self {
        Self { service, auth }
    }

    /// Authenticate the request. Protected handlers call this first and
    /// pass the principal down explicitly.
    pub(crate) fn principal(&self, headers: &HeaderMap) -> Result<Principal, ServiceError> {
        self.auth.authenticate(headers)
    }
}

/// Build the freight API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(line::routes())
        .merge(container_company::routes())
        .merge(goni::routes())
        .merge(sea_voyage::routes())
        .merge(sea_container::routes())
        .merge(bill::routes())
        .with_state(state)
}

/// Standard `{success, message}` body used by delete responses.
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub success: bool,
    pub message: String,
}

pub(crate) fn status_ok(message: &str) -> Json<StatusBody> {
    Json(StatusBody {
        success: true,
        message: message.to_string(),
    })
}
