use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Middleware wrapping every request/response exchange with timing and
/// structured logging. The response passes through unmodified.
///
/// The timing line is emitted on the way out, after the downstream handler
/// has produced its response, so the duration covers full handler execution.
/// Error-status responses get the same line; `Next::run` always yields a
/// response, so every completed request is logged exactly once.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let duration = start_time.elapsed().as_secs_f64();
    let status_code = response.status().as_u16();

    info!(
        target: "gitops_demo_rs::http",
        "{} {} - {} - {:.3}s",
        method, path, status_code, duration
    );

    response
}
