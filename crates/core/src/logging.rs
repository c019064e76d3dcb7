use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::errors::CoreError;
use crate::models::settings::LoggingConfig;

/// Install a console subscriber for native hosts (CLI tools, tests, desktop shells).
///
/// Browser builds leave subscriber setup to the embedding application.
/// Calling this twice returns an error instead of replacing the first subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CoreError> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_level)
        .map_err(|e| CoreError::Logging(format!("invalid log level '{}': {e}", config.log_level)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| CoreError::Logging(e.to_string()))?;

    tracing::info!(level = %config.log_level, "console logging initialized");
    Ok(())
}
