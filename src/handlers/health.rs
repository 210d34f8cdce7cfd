use axum::response::Json;
use serde_json::{json, Value};
use tracing::instrument;

use crate::SERVICE_NAME;

/// Health check endpoint handler for Kubernetes liveness probes
#[instrument(name = "health_check")]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME
    }))
}

/// Readiness check endpoint handler for Kubernetes readiness probes
#[instrument(name = "readiness_check")]
pub async fn readiness_check() -> Json<Value> {
    Json(json!({
        "status": "ready",
        "service": SERVICE_NAME
    }))
}
