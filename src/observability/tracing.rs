use thiserror::Error;
use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Initialize structured logging for the service.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_observability(
    log_level: &str,
    enable_json_logging: bool,
) -> Result<(), ObservabilityError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}={}", env!("CARGO_CRATE_NAME"), log_level).into());

    if enable_json_logging {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| ObservabilityError::TracingInit(e.to_string()))?;
    } else {
        // Human-readable formatter for development
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::NONE),
            )
            .try_init()
            .map_err(|e| ObservabilityError::TracingInit(e.to_string()))?;
    }

    info!("Observability initialized successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_observability_is_not_reentrant() {
        // Whichever call lands first wins the global subscriber slot; the
        // second must surface a TracingInit error instead of panicking.
        let first = init_observability("info", false);
        let second = init_observability("debug", true);

        assert!(first.is_ok() || matches!(first, Err(ObservabilityError::TracingInit(_))));
        assert!(matches!(second, Err(ObservabilityError::TracingInit(_))));
    }

    #[test]
    fn test_observability_error_display() {
        let error = ObservabilityError::TracingInit("already set".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to initialize tracing subscriber: already set"
        );
    }
}
