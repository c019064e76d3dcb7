pub mod api;
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

use api::{http::HttpDashboardApi, traits::DashboardApi};
use models::{
    highlights::CostHighlights,
    interval::Interval,
    range::RangeSelection,
    settings::ApiSettings,
    trend::TrendPoint,
    view::{DashboardView, HighlightsCard, SupplierPerformanceSlot, TrendCard, DASHBOARD_TITLE},
};
use services::{highlights_service::HighlightsService, trend_service::TrendService};
use state::{
    panel::{FetchOutcome, Panel, PanelStatus, SkipReason},
    watch::Watch,
};

use errors::CoreError;

/// Main entry point for the Order Analysis Dashboard core library.
///
/// Holds the user inputs (two range pickers and the interval selector),
/// the two display panels, and the API they are fed from. Each input
/// setter re-runs exactly the fetches that depend on it:
///
/// | input              | cost highlights | price trend |
/// |--------------------|-----------------|-------------|
/// | highlights range   | yes             | no          |
/// | trend range        | no              | yes         |
/// | interval (changed) | no              | yes         |
///
/// All methods take `&self`, so several fetches may be in flight at once on
/// the same event loop; each panel fences responses by request order.
#[must_use]
pub struct OrderDashboard {
    api: Box<dyn DashboardApi>,
    highlights_range: Watch<RangeSelection>,
    trend_range: Watch<RangeSelection>,
    interval: Watch<Interval>,
    highlights: Panel<CostHighlights>,
    trend: Panel<Vec<TrendPoint>>,
    highlights_service: HighlightsService,
    trend_service: TrendService,
}

impl std::fmt::Debug for OrderDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderDashboard")
            .field("api", &self.api.name())
            .field("highlights_range", &self.highlights_range.get())
            .field("trend_range", &self.trend_range.get())
            .field("interval", &self.interval.get())
            .field("highlights_status", &self.highlights.status())
            .field("trend_status", &self.trend.status())
            .finish()
    }
}

impl OrderDashboard {
    /// Build a dashboard over any API implementation.
    pub fn new(api: Box<dyn DashboardApi>) -> Self {
        Self {
            api,
            highlights_range: Watch::default(),
            trend_range: Watch::default(),
            interval: Watch::new(Interval::default()),
            highlights: Panel::new("cost_highlights", CostHighlights::default()),
            trend: Panel::new("price_trend", Vec::new()),
            highlights_service: HighlightsService::new(),
            trend_service: TrendService::new(),
        }
    }

    /// Build a dashboard talking HTTP to the endpoints in `settings`.
    pub fn connect(settings: ApiSettings) -> Result<Self, CoreError> {
        let api = HttpDashboardApi::new(settings)?;
        Ok(Self::new(Box::new(api)))
    }

    // ── Inputs ──────────────────────────────────────────────────────

    /// The highlights range picker changed. Re-runs the highlights fetch.
    pub async fn set_highlights_range(&self, selection: RangeSelection) -> FetchOutcome {
        self.highlights_range.replace(selection);
        self.fetch_cost_highlights().await
    }

    /// The trend range picker changed. Re-runs the trend fetch.
    pub async fn set_trend_range(&self, selection: RangeSelection) -> FetchOutcome {
        self.trend_range.replace(selection);
        self.fetch_price_trend().await
    }

    /// The interval selector changed. Re-runs the trend fetch only, and
    /// only if the interval is actually different.
    pub async fn set_interval(&self, interval: Interval) -> FetchOutcome {
        if !self.interval.set(interval) {
            tracing::debug!(%interval, "interval unchanged, not refetching");
            return FetchOutcome::Skipped(SkipReason::Unchanged);
        }
        self.fetch_price_trend().await
    }

    // ── Fetches ─────────────────────────────────────────────────────

    /// Run the highlights fetch for the current highlights range.
    pub async fn fetch_cost_highlights(&self) -> FetchOutcome {
        let selection = self.highlights_range.get();
        self.highlights_service
            .fetch_cost_highlights(self.api.as_ref(), &selection, &self.highlights)
            .await
    }

    /// Run the trend fetch for the current trend range and interval.
    pub async fn fetch_price_trend(&self) -> FetchOutcome {
        let selection = self.trend_range.get();
        let interval = self.interval.get();
        self.trend_service
            .fetch_price_trend(self.api.as_ref(), &selection, interval, &self.trend)
            .await
    }

    /// Re-run both panels with the current inputs.
    pub async fn refresh(&self) -> (FetchOutcome, FetchOutcome) {
        let highlights = self.fetch_cost_highlights().await;
        let trend = self.fetch_price_trend().await;
        (highlights, trend)
    }

    // ── Read side ───────────────────────────────────────────────────

    #[must_use]
    pub fn cost_highlights(&self) -> CostHighlights {
        self.highlights.value()
    }

    #[must_use]
    pub fn price_trend(&self) -> Vec<TrendPoint> {
        self.trend.value()
    }

    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval.get()
    }

    #[must_use]
    pub fn highlights_range(&self) -> RangeSelection {
        self.highlights_range.get()
    }

    #[must_use]
    pub fn trend_range(&self) -> RangeSelection {
        self.trend_range.get()
    }

    #[must_use]
    pub fn highlights_status(&self) -> PanelStatus {
        self.highlights.status()
    }

    #[must_use]
    pub fn trend_status(&self) -> PanelStatus {
        self.trend.status()
    }

    /// Called with the new figures whenever a highlights response is applied.
    pub fn on_cost_highlights(&self, f: impl Fn(&CostHighlights) + Send + Sync + 'static) {
        self.highlights.subscribe(f);
    }

    /// Called with the new series whenever a trend response is applied.
    pub fn on_price_trend(&self, f: impl Fn(&Vec<TrendPoint>) + Send + Sync + 'static) {
        self.trend.subscribe(f);
    }

    /// Called whenever the highlights range picker emits, before its fetch runs.
    pub fn on_highlights_range_change(&self, f: impl Fn(&RangeSelection) + Send + Sync + 'static) {
        self.highlights_range.subscribe(f);
    }

    /// Called whenever the trend range picker emits, before its fetch runs.
    pub fn on_trend_range_change(&self, f: impl Fn(&RangeSelection) + Send + Sync + 'static) {
        self.trend_range.subscribe(f);
    }

    /// Called whenever the interval selector changes value.
    pub fn on_interval_change(&self, f: impl Fn(&Interval) + Send + Sync + 'static) {
        self.interval.subscribe(f);
    }

    /// Snapshot of the whole page for rendering.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        DashboardView {
            title: DASHBOARD_TITLE,
            cost_highlights: HighlightsCard::new(
                self.highlights_range.get(),
                self.highlights.status(),
                self.highlights.value(),
            ),
            price_trend: TrendCard::new(
                self.trend_range.get(),
                self.trend.status(),
                self.interval.get(),
                self.trend.value(),
            ),
            supplier_performance: SupplierPerformanceSlot::default(),
        }
    }
}
