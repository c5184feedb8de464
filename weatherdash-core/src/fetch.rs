use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// The 5-day forecast envelope. Entries stay as raw JSON values here; whether
/// an individual entry is usable is the parser's call, not the fetcher's.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub list: Vec<Value>,
}

/// Thin client for the two OpenWeather endpoints this tool uses.
///
/// A failed fetch is not an error to the caller: any transport failure,
/// non-success status, or undecodable body is logged and surfaces as `None`,
/// and the refresh carries on with whatever did arrive. No retries, no
/// timeout layer.
#[derive(Debug, Clone)]
pub struct FetchClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl FetchClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENWEATHER_BASE_URL)
    }

    /// Point the client at a different host. Used by tests to target a mock
    /// server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Fetch the current-weather observation for a city. The response body is
    /// itself one raw entry.
    pub async fn fetch_current(&self, city: &str) -> Option<Value> {
        match self.get_json("weather", city).await {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("current weather fetch for '{city}' failed: {err:#}");
                None
            }
        }
    }

    /// Fetch the forecast for a city and peel off the entry list.
    pub async fn fetch_forecast(&self, city: &str) -> Option<ForecastPayload> {
        let value = match self.get_json("forecast", city).await {
            Ok(value) => value,
            Err(err) => {
                warn!("forecast fetch for '{city}' failed: {err:#}");
                return None;
            }
        };

        match ForecastPayload::deserialize(&value) {
            Ok(payload) => Some(payload),
            Err(err) => {
                warn!("forecast response for '{city}' had no usable entry list: {err}");
                None
            }
        }
    }

    async fn get_json(&self, endpoint: &str, city: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let res = self
            .http
            .get(&url)
            // No "units" parameter: temperatures arrive in Kelvin and the
            // parser owns the conversion.
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather ({endpoint})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {endpoint} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {} request failed with status {}: {}",
                endpoint,
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse OpenWeather {endpoint} JSON"))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let cut: String = body.chars().take(MAX).collect();
        format!("{cut}...")
    } else {
        body.to_string()
    }
}
