use crate::api::traits::DashboardApi;
use crate::errors::CoreError;
use crate::models::interval::Interval;
use crate::models::range::{DateRange, RangeSelection};
use crate::models::trend::{TrendPoint, TrendResponse};
use crate::services::formatting::relabel_time_period;
use crate::state::panel::{usable_range, FetchOutcome, Panel, SkipReason};

/// Loads the expected-vs-ordered price series for the trend chart.
///
/// Each point's timestamp is replaced by a display label for the chosen
/// interval (`05 Mar 2024` or `Mar 2024`). Order and count are preserved.
pub struct TrendService;

impl TrendService {
    pub fn new() -> Self {
        Self
    }

    /// Query the API and relabel the series.
    pub async fn load(
        &self,
        api: &dyn DashboardApi,
        range: &DateRange,
        interval: Interval,
    ) -> Result<Vec<TrendPoint>, CoreError> {
        let (start_date, end_date) = range.query_dates();
        let response = api.get_price_trend(&start_date, &end_date, interval).await?;
        relabel_trend(response, interval)
    }

    /// Full fetch cycle for the trend panel.
    ///
    /// Same two-date guard as the highlights panel. A response without a
    /// `trend` field, or with an unparseable timestamp, counts as a failure:
    /// logged, and the current series stays on screen.
    pub async fn fetch_price_trend(
        &self,
        api: &dyn DashboardApi,
        selection: &RangeSelection,
        interval: Interval,
        panel: &Panel<Vec<TrendPoint>>,
    ) -> FetchOutcome {
        let range = match usable_range(selection) {
            Ok(range) => range,
            Err(reason @ SkipReason::ReversedRange) => {
                tracing::warn!(panel = panel.name(), %reason, "ignoring price trend range");
                return FetchOutcome::Skipped(reason);
            }
            Err(reason) => {
                tracing::debug!(panel = panel.name(), %reason, "skipping price trend fetch");
                return FetchOutcome::Skipped(reason);
            }
        };

        let ticket = panel.begin();
        tracing::debug!(
            panel = panel.name(),
            seq = ticket.seq(),
            start = %range.start(),
            end = %range.end(),
            %interval,
            backend = api.name(),
            "fetching price trend"
        );

        let result = self.load(api, &range, interval).await;
        if let Err(e) = &result {
            tracing::error!(panel = panel.name(), error = %e, "Failed to fetch price trend");
        }

        let outcome = panel.complete(ticket, result);
        if outcome.is_applied() {
            tracing::info!(panel = panel.name(), points = panel.value().len(), "price trend updated");
        }
        outcome
    }
}

impl Default for TrendService {
    fn default() -> Self {
        Self::new()
    }
}

/// Relabel every raw point for `interval`, keeping order.
pub fn relabel_trend(
    response: TrendResponse,
    interval: Interval,
) -> Result<Vec<TrendPoint>, CoreError> {
    let raw = response.trend.ok_or_else(|| {
        CoreError::MalformedResponse("price trend response has no 'trend' field".into())
    })?;

    raw.into_iter()
        .map(|point| {
            Ok(TrendPoint {
                time_period: relabel_time_period(&point.time_period, interval)?,
                average_expected_price: point.average_expected_price,
                average_ordered_price: point.average_ordered_price,
            })
        })
        .collect()
}
