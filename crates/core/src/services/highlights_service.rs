use crate::api::traits::DashboardApi;
use crate::errors::CoreError;
use crate::models::highlights::{first_record, CostHighlights, HighlightsRecord};
use crate::models::range::{DateRange, RangeSelection};
use crate::state::panel::{usable_range, FetchOutcome, Panel, SkipReason};

/// Loads the aggregate savings figures for the highlights card.
///
/// The endpoint answers with a list of which only the first row matters.
/// An empty list resets the card to `0` / `"--"`; a numeric percentage is
/// always shown with exactly two decimals.
pub struct HighlightsService;

impl HighlightsService {
    pub fn new() -> Self {
        Self
    }

    /// Query the API for `range` and normalize the answer.
    pub async fn load(
        &self,
        api: &dyn DashboardApi,
        range: &DateRange,
    ) -> Result<CostHighlights, CoreError> {
        let (start_date, end_date) = range.query_dates();
        let records = api.get_cost_highlights(&start_date, &end_date).await?;
        Ok(normalize_highlights(records))
    }

    /// Full fetch cycle for the highlights panel.
    ///
    /// A selection without exactly two ordered dates is a silent no-op.
    /// Failures are logged and leave the displayed value untouched.
    pub async fn fetch_cost_highlights(
        &self,
        api: &dyn DashboardApi,
        selection: &RangeSelection,
        panel: &Panel<CostHighlights>,
    ) -> FetchOutcome {
        let range = match usable_range(selection) {
            Ok(range) => range,
            Err(reason @ SkipReason::ReversedRange) => {
                tracing::warn!(panel = panel.name(), %reason, "ignoring cost highlights range");
                return FetchOutcome::Skipped(reason);
            }
            Err(reason) => {
                tracing::debug!(panel = panel.name(), %reason, "skipping cost highlights fetch");
                return FetchOutcome::Skipped(reason);
            }
        };

        let ticket = panel.begin();
        tracing::debug!(
            panel = panel.name(),
            seq = ticket.seq(),
            start = %range.start(),
            end = %range.end(),
            backend = api.name(),
            "fetching cost highlights"
        );

        let result = self.load(api, &range).await;
        if let Err(e) = &result {
            tracing::error!(panel = panel.name(), error = %e, "Failed to fetch cost highlights");
        }

        let outcome = panel.complete(ticket, result);
        if outcome.is_applied() {
            tracing::info!(panel = panel.name(), "cost highlights updated");
        }
        outcome
    }
}

impl Default for HighlightsService {
    fn default() -> Self {
        Self::new()
    }
}

/// First row → display shape; empty list → default figures.
pub fn normalize_highlights(records: Vec<HighlightsRecord>) -> CostHighlights {
    first_record(records)
        .map(CostHighlights::from_record)
        .unwrap_or_default()
}
