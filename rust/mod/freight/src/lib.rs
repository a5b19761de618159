pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;
use shiperp_core::{Authenticator, Module};

use service::FreightService;

/// Freight module — shipping logistics record keeping: lines, container
/// companies, goni inventory, sea voyages, sea containers, and bills of
/// lading.
pub struct FreightModule {
    state: api::AppState,
}

impl FreightModule {
    pub fn new(service: FreightService, auth: Arc<dyn Authenticator>) -> Self {
        Self {
            state: api::AppState::new(Arc::new(service), auth),
        }
    }
}

impl Module for FreightModule {
    fn name(&self) -> &str {
        "freight"
    }

    fn routes(&self) -> Router {
        api::router(self.state.clone())
    }
}
