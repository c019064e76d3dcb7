use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::highlights::HighlightsRecord;
use crate::models::interval::Interval;
use crate::models::trend::TrendResponse;

/// Abstraction over the remote analytics API.
///
/// The dashboard only ever talks to this trait, so the HTTP client can be
/// swapped for a mock in tests or a different transport in the browser.
/// Dates are passed already formatted as `DD-MM-YYYY`.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DashboardApi: Send + Sync {
    /// Human-readable name of this backend (for logs/errors).
    fn name(&self) -> &str;

    /// Aggregate savings for the range. Only the first row is meaningful;
    /// an empty list is a legal answer.
    async fn get_cost_highlights(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<HighlightsRecord>, CoreError>;

    /// Average expected vs. ordered price per bucket.
    async fn get_price_trend(
        &self,
        start_date: &str,
        end_date: &str,
        interval: Interval,
    ) -> Result<TrendResponse, CoreError>;
}
