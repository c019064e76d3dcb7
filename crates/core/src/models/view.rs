use serde::Serialize;

use super::highlights::CostHighlights;
use super::interval::Interval;
use super::range::RangeSelection;
use super::trend::{ChartSeries, TrendPoint};

/// Lifecycle of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelStatus {
    /// Nothing usable selected yet, or no request has ever succeeded.
    Idle,
    /// At least one request is in flight.
    Fetching,
    /// Showing the last applied result.
    Displayed,
}

pub const DASHBOARD_TITLE: &str = "Order Analysis Dashboard";
pub const HIGHLIGHTS_CARD_TITLE: &str = "Cost Analysis Highlights";
pub const TREND_CARD_TITLE: &str = "Price Trend Analysis";
pub const SUPPLIER_CARD_TITLE: &str = "Supplier Performance";

/// Snapshot of the whole page, top to bottom.
///
/// The core builds it; the frontend only renders it.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub cost_highlights: HighlightsCard,
    pub price_trend: TrendCard,
    pub supplier_performance: SupplierPerformanceSlot,
}

impl DashboardView {
    /// Card titles in render order.
    pub fn region_titles(&self) -> [&'static str; 3] {
        [
            self.cost_highlights.title,
            self.price_trend.title,
            self.supplier_performance.title,
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HighlightsCard {
    pub title: &'static str,
    pub range: RangeSelection,
    pub status: PanelStatus,
    pub highlights: CostHighlights,
    /// `"₹<total>"`
    pub total_label: String,
    /// `"<pct>%"` or `"--"`
    pub percentage_label: String,
}

impl HighlightsCard {
    pub(crate) fn new(range: RangeSelection, status: PanelStatus, highlights: CostHighlights) -> Self {
        Self {
            title: HIGHLIGHTS_CARD_TITLE,
            range,
            status,
            total_label: highlights.display_total(),
            percentage_label: highlights.display_percentage(),
            highlights,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendCard {
    pub title: &'static str,
    pub range: RangeSelection,
    pub status: PanelStatus,
    pub interval: Interval,
    pub interval_options: [Interval; 2],
    pub points: Vec<TrendPoint>,
    pub x_axis_key: &'static str,
    pub series: [ChartSeries; 2],
}

impl TrendCard {
    pub(crate) fn new(
        range: RangeSelection,
        status: PanelStatus,
        interval: Interval,
        points: Vec<TrendPoint>,
    ) -> Self {
        Self {
            title: TREND_CARD_TITLE,
            range,
            status,
            interval,
            interval_options: Interval::all(),
            points,
            x_axis_key: TrendPoint::X_AXIS_KEY,
            series: TrendPoint::SERIES,
        }
    }
}

/// Region rendered by an external supplier-performance component.
/// This page passes it no data.
#[derive(Debug, Clone, Serialize)]
pub struct SupplierPerformanceSlot {
    pub title: &'static str,
}

impl Default for SupplierPerformanceSlot {
    fn default() -> Self {
        Self {
            title: SUPPLIER_CARD_TITLE,
        }
    }
}
