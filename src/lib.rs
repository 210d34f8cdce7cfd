pub mod config;
pub mod handlers;
pub mod models;
pub mod observability;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use crate::config::EnvironmentSource;
use crate::handlers::{health_check, list_items, readiness_check, root, service_status, ApiState};
use crate::observability::request_logging_middleware;

pub use config::{Config, ConfigError};
pub use observability::{init_observability, ObservabilityError};

/// Service identity reported by the health, readiness, and status endpoints.
pub const SERVICE_NAME: &str = "fastapi-demo";

/// Build the application router with all routes and middleware.
///
/// The environment accessor is injected here so tests can substitute
/// deterministic values for the deployment environment.
pub fn create_app(environment: Arc<dyn EnvironmentSource>) -> Router {
    let api_state = ApiState { environment };

    Router::new()
        // Demo endpoints (with API state)
        .route("/", get(root))
        .route("/api/items", get(list_items))
        .route("/api/status", get(service_status))
        .with_state(api_state)
        // Probe endpoints for Kubernetes (stateless)
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        // Request logging wraps every route, probes included
        .layer(middleware::from_fn(request_logging_middleware))
}
