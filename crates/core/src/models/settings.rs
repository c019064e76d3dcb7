use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Where the dashboard's query endpoints live.
///
/// Built by the embedding application; nothing here reads the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Scheme + host (+ optional prefix), without a trailing slash.
    pub base_url: String,

    /// Path of the cost-highlights query (starts with `/`).
    pub cost_highlights_path: String,

    /// Path of the price-trend query (starts with `/`).
    pub price_trend_path: String,

    /// Per-request timeout, applied on native targets only.
    /// In the browser the fetch API owns timeouts.
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            cost_highlights_path: "/cost-highlights".to_string(),
            price_trend_path: "/price-trend".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiSettings {
    /// Settings pointing at `base_url` with the default endpoint paths.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        for (name, path) in [
            ("cost_highlights_path", &self.cost_highlights_path),
            ("price_trend_path", &self.price_trend_path),
        ] {
            if !path.starts_with('/') {
                return Err(CoreError::Config(format!(
                    "{name} must start with '/', got '{path}'"
                )));
            }
        }
        if self.timeout_secs == 0 {
            return Err(CoreError::Config("timeout_secs must be greater than 0".into()));
        }
        Ok(())
    }

    pub fn cost_highlights_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.cost_highlights_path)
    }

    pub fn price_trend_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.price_trend_path)
    }
}

/// Logging setup for native hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"order_dashboard_core=debug"`.
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
