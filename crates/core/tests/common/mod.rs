// Shared test helpers — scripted mock API, date/record builders.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

use order_dashboard_core::api::traits::DashboardApi;
use order_dashboard_core::errors::CoreError;
use order_dashboard_core::models::highlights::HighlightsRecord;
use order_dashboard_core::models::interval::Interval;
use order_dashboard_core::models::range::RangeSelection;
use order_dashboard_core::models::trend::{RawTrendPoint, TrendResponse};

// ═══════════════════════════════════════════════════════════════════
// Mock API
// ═══════════════════════════════════════════════════════════════════

/// How the mock answers one call.
pub enum Reply<T> {
    Value(T),
    Error(String),
    /// Resolves when the test sends on the paired `oneshot::Sender`.
    Gated(oneshot::Receiver<T>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Highlights {
        start: String,
        end: String,
    },
    Trend {
        start: String,
        end: String,
        interval: Interval,
    },
}

#[derive(Default)]
struct MockInner {
    calls: Mutex<Vec<Call>>,
    highlights: Mutex<VecDeque<Reply<Vec<HighlightsRecord>>>>,
    trend: Mutex<VecDeque<Reply<TrendResponse>>>,
}

/// Scripted API: answers from per-endpoint queues, falling back to an empty
/// list / empty series once a queue runs dry. Clones share state, so one
/// clone can be boxed into the dashboard while the test keeps another.
#[derive(Clone, Default)]
pub struct MockApi {
    inner: Arc<MockInner>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_highlights(&self, reply: Reply<Vec<HighlightsRecord>>) {
        self.inner.highlights.lock().unwrap().push_back(reply);
    }

    pub fn push_trend(&self, reply: Reply<TrendResponse>) {
        self.inner.trend.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn highlights_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Highlights { .. }))
            .count()
    }

    pub fn trend_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Trend { .. }))
            .count()
    }
}

async fn resolve<T>(reply: Option<Reply<T>>, fallback: T) -> Result<T, CoreError> {
    match reply {
        None => Ok(fallback),
        Some(Reply::Value(v)) => Ok(v),
        Some(Reply::Error(msg)) => Err(CoreError::Network(msg)),
        Some(Reply::Gated(rx)) => rx
            .await
            .map_err(|_| CoreError::Network("gate dropped".into())),
    }
}

#[async_trait]
impl DashboardApi for MockApi {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn get_cost_highlights(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<HighlightsRecord>, CoreError> {
        self.inner.calls.lock().unwrap().push(Call::Highlights {
            start: start_date.to_string(),
            end: end_date.to_string(),
        });
        let reply = self.inner.highlights.lock().unwrap().pop_front();
        resolve(reply, Vec::new()).await
    }

    async fn get_price_trend(
        &self,
        start_date: &str,
        end_date: &str,
        interval: Interval,
    ) -> Result<TrendResponse, CoreError> {
        self.inner.calls.lock().unwrap().push(Call::Trend {
            start: start_date.to_string(),
            end: end_date.to_string(),
            interval,
        });
        let reply = self.inner.trend.lock().unwrap().pop_front();
        resolve(reply, TrendResponse::new(Vec::new())).await
    }
}

// ═══════════════════════════════════════════════════════════════════
// Builders
// ═══════════════════════════════════════════════════════════════════

pub fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 1–31 March 2024.
pub fn march_2024() -> RangeSelection {
    RangeSelection::pair(make_date(2024, 3, 1), make_date(2024, 3, 31))
}

/// 1 January – 30 June 2024.
pub fn first_half_2024() -> RangeSelection {
    RangeSelection::pair(make_date(2024, 1, 1), make_date(2024, 6, 30))
}

pub fn record(total: f64, pct: serde_json::Value) -> HighlightsRecord {
    HighlightsRecord {
        total_savings: Some(total),
        percentage_savings: Some(pct),
    }
}

pub fn record_str(total: f64, pct: &str) -> HighlightsRecord {
    record(total, json!(pct))
}

pub fn raw_point(time_period: &str, expected: f64, ordered: f64) -> RawTrendPoint {
    RawTrendPoint {
        time_period: time_period.to_string(),
        average_expected_price: Some(expected),
        average_ordered_price: Some(ordered),
    }
}

pub fn trend_of(points: Vec<RawTrendPoint>) -> TrendResponse {
    TrendResponse::new(points)
}
