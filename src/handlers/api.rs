use std::sync::Arc;

use axum::{extract::State, response::Json};
use tracing::{info, instrument};

use crate::config::EnvironmentSource;
use crate::models::{Item, ItemListResponse, RootResponse, StatusResponse};
use crate::SERVICE_NAME;

/// Shared application state for the demo endpoints
#[derive(Clone)]
pub struct ApiState {
    pub environment: Arc<dyn EnvironmentSource>,
}

/// Root endpoint with service welcome info
#[instrument(name = "root", skip(state))]
pub async fn root(State(state): State<ApiState>) -> Json<RootResponse> {
    info!("Root endpoint accessed");

    Json(RootResponse {
        message: "Welcome to FastAPI GitOps Demo".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.environment.current(),
    })
}

/// Demo endpoint that returns the fixed item catalog
#[instrument(name = "list_items")]
pub async fn list_items() -> Json<ItemListResponse> {
    info!("Items endpoint accessed");

    Json(ItemListResponse {
        items: Item::catalog(),
    })
}

/// Status endpoint with application info
#[instrument(name = "service_status", skip(state))]
pub async fn service_status(State(state): State<ApiState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        app: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        environment: state.environment.current(),
    })
}
