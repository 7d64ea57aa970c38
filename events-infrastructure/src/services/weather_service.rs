use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use events_domain::{LookupConfig, WeatherLookup};

use super::http::parse_endpoint;

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    #[serde(default)]
    weather: Option<serde_json::Value>,
}

/// Weather-by-city-and-date lookup against the configured endpoint.
pub struct HttpWeatherLookup {
    client: Client,
    endpoint: Url,
    code: String,
}

impl HttpWeatherLookup {
    pub fn new(client: Client, config: &LookupConfig) -> Result<Self> {
        Ok(Self {
            client,
            endpoint: parse_endpoint("weather", &config.weather_api_url)?,
            code: config.weather_api_code.clone(),
        })
    }
}

#[async_trait]
impl WeatherLookup for HttpWeatherLookup {
    async fn weather(&self, city: &str, date: &str) -> Result<serde_json::Value> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("code", self.code.as_str()), ("city", city), ("date", date)])
            .send()
            .await?
            .error_for_status()?;
        let body: WeatherResponse = response.json().await?;
        body.weather
            .filter(|value| !value.is_null())
            .ok_or_else(|| anyhow!("weather response has no 'weather' field"))
    }
}
