use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::DashboardApi;
use crate::errors::CoreError;
use crate::models::highlights::HighlightsRecord;
use crate::models::interval::Interval;
use crate::models::settings::ApiSettings;
use crate::models::trend::TrendResponse;

/// reqwest-backed client for the analytics query endpoints.
///
/// - `GET {cost_highlights_path}?start_date=DD-MM-YYYY&end_date=DD-MM-YYYY`
/// - `GET {price_trend_path}?start_date=..&end_date=..&interval=daily|monthly`
///
/// No retries and no caching: a failed call surfaces as a `CoreError`
/// and the caller decides what to keep on screen.
pub struct HttpDashboardApi {
    client: Client,
    settings: ApiSettings,
}

impl HttpDashboardApi {
    pub fn new(settings: ApiSettings) -> Result<Self, CoreError> {
        settings.validate()?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
        let client = builder.build()?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<T, CoreError> {
        tracing::debug!(endpoint, ?query, "issuing dashboard query");

        let resp = self.client.get(&url).query(query).send().await?;
        let resp = check_status(endpoint, resp).await?;

        resp.json::<T>().await.map_err(|e| {
            CoreError::Deserialization(format!("Failed to parse {endpoint} response: {e}"))
        })
    }
}

async fn check_status(endpoint: &str, resp: Response) -> Result<Response, CoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string()
    } else {
        body.chars().take(200).collect()
    };
    Err(CoreError::Api {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        message,
    })
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DashboardApi for HttpDashboardApi {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn get_cost_highlights(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<HighlightsRecord>, CoreError> {
        self.get_json(
            "cost-highlights",
            self.settings.cost_highlights_url(),
            &[("start_date", start_date), ("end_date", end_date)],
        )
        .await
    }

    async fn get_price_trend(
        &self,
        start_date: &str,
        end_date: &str,
        interval: Interval,
    ) -> Result<TrendResponse, CoreError> {
        self.get_json(
            "price-trend",
            self.settings.price_trend_url(),
            &[
                ("start_date", start_date),
                ("end_date", end_date),
                ("interval", interval.as_query_str()),
            ],
        )
        .await
    }
}
