//! Structured logging initialization.

use crate::error::TelemetryResult;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging.
///
/// `RUST_LOG` controls the filter (defaults to `info`); `RAIL_ENV=production`
/// switches from pretty-printed output to JSON.
pub fn init_logging() -> TelemetryResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,coach=debug"));

    let is_production = std::env::var("RAIL_ENV").map(|v| v == "production").unwrap_or(false);

    if is_production {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_current_span(true).with_span_list(true))
            .try_init()
            .map_err(|e| crate::error::TelemetryError::LoggingInit(e.to_string()))?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_target(true).with_thread_names(true))
            .try_init()
            .map_err(|e| crate::error::TelemetryError::LoggingInit(e.to_string()))?;
    }

    Ok(())
}
