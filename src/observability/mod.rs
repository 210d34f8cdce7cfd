pub mod middleware;
pub mod tracing;

pub use middleware::request_logging_middleware;
pub use tracing::{init_observability, ObservabilityError};
