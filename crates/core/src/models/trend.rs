use serde::{Deserialize, Serialize};

/// One price observation as returned by the trend endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTrendPoint {
    /// ISO-8601 (or otherwise parseable) timestamp of the bucket.
    pub time_period: String,
    /// `None` when the bucket has no price; serialized back as `null`.
    #[serde(default)]
    pub average_expected_price: Option<f64>,
    #[serde(default)]
    pub average_ordered_price: Option<f64>,
}

/// Body of the trend endpoint. `trend` is optional so a missing field is
/// reported as a malformed response instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendResponse {
    #[serde(default)]
    pub trend: Option<Vec<RawTrendPoint>>,
}

impl TrendResponse {
    pub fn new(points: Vec<RawTrendPoint>) -> Self {
        Self {
            trend: Some(points),
        }
    }
}

/// A chart-ready trend point. `time_period` is already a display label;
/// the original timestamp is not kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub time_period: String,
    /// Gaps stay `null` so the chart breaks the line instead of plotting 0.
    pub average_expected_price: Option<f64>,
    pub average_ordered_price: Option<f64>,
}

/// A line drawn on the trend chart: data key and legend name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub data_key: &'static str,
    pub name: &'static str,
}

impl TrendPoint {
    /// Lines plotted against `time_period` on the x-axis.
    pub const SERIES: [ChartSeries; 2] = [
        ChartSeries {
            data_key: "average_expected_price",
            name: "Expected Price",
        },
        ChartSeries {
            data_key: "average_ordered_price",
            name: "Ordered Price",
        },
    ];

    /// The x-axis data key.
    pub const X_AXIS_KEY: &'static str = "time_period";
}
