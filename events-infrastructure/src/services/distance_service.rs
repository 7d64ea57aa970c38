use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

use events_domain::{Coordinates, DistanceLookup, LookupConfig};

use super::http::parse_endpoint;

#[derive(Debug, Deserialize)]
struct DistanceResponse {
    #[serde(default)]
    distance: Option<Value>,
}

/// Distance lookup between the caller's position and an event location.
pub struct HttpDistanceLookup {
    client: Client,
    endpoint: Url,
    code: String,
}

impl HttpDistanceLookup {
    pub fn new(client: Client, config: &LookupConfig) -> Result<Self> {
        Ok(Self {
            client,
            endpoint: parse_endpoint("distance", &config.distance_api_url)?,
            code: config.distance_api_code.clone(),
        })
    }
}

#[async_trait]
impl DistanceLookup for HttpDistanceLookup {
    async fn distance_km(
        &self,
        origin: Coordinates,
        latitude: &str,
        longitude: &str,
    ) -> Result<f64> {
        let origin_latitude = origin.latitude.to_string();
        let origin_longitude = origin.longitude.to_string();
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("code", self.code.as_str()),
                ("latitude1", origin_latitude.as_str()),
                ("longitude1", origin_longitude.as_str()),
                ("latitude2", latitude),
                ("longitude2", longitude),
            ])
            .send()
            .await?
            .error_for_status()?;
        let body: DistanceResponse = response.json().await?;
        body.distance
            .as_ref()
            .and_then(distance_value)
            .ok_or_else(|| anyhow!("distance response has no numeric 'distance' field"))
    }
}

fn distance_value(value: &Value) -> Option<f64> {
    let distance = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    distance.is_finite().then_some(distance)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;
    use crate::services::http::test_server;

    async fn distance_endpoint(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
        let param = |name: &str| params.get(name).cloned().unwrap_or_default();
        if param("code") != "secret" || param("latitude1") != "37.5" || param("longitude1") != "-122.25" {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad query" })));
        }
        match param("latitude2").as_str() {
            "1" => (StatusCode::OK, Json(json!({ "distance": 1234.56 }))),
            "2" => (StatusCode::OK, Json(json!({ "distance": "78.9" }))),
            "3" => (StatusCode::OK, Json(json!({ "distance": "far" }))),
            "4" => (StatusCode::OK, Json(json!({}))),
            _ => (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "error": "down" }))),
        }
    }

    async fn lookup() -> HttpDistanceLookup {
        let addr =
            test_server::spawn(Router::new().route("/api/distance", get(distance_endpoint))).await;
        let config = LookupConfig {
            weather_api_url: format!("http://{addr}/api/weather"),
            weather_api_code: "unused".to_string(),
            distance_api_url: format!("http://{addr}/api/distance"),
            distance_api_code: "secret".to_string(),
            lookup_timeout_seconds: None,
        };
        let client = crate::services::build_lookup_client(&config).unwrap();
        HttpDistanceLookup::new(client, &config).unwrap()
    }

    fn origin() -> Coordinates {
        Coordinates {
            latitude: 37.5,
            longitude: -122.25,
        }
    }

    #[tokio::test]
    async fn reads_numeric_and_string_distances() {
        let distance = lookup().await;
        assert_eq!(distance.distance_km(origin(), "1", "0").await.unwrap(), 1234.56);
        assert_eq!(distance.distance_km(origin(), "2", "0").await.unwrap(), 78.9);
    }

    #[tokio::test]
    async fn malformed_or_failed_responses_are_errors() {
        let distance = lookup().await;
        assert!(distance.distance_km(origin(), "3", "0").await.is_err());
        assert!(distance.distance_km(origin(), "4", "0").await.is_err());
        assert!(distance.distance_km(origin(), "5", "0").await.is_err());
    }

    #[test]
    fn distance_value_rejects_non_numbers() {
        assert_eq!(distance_value(&json!(3)), Some(3.0));
        assert_eq!(distance_value(&json!(" 4.5 ")), Some(4.5));
        assert_eq!(distance_value(&json!(null)), None);
        assert_eq!(distance_value(&json!({ "km": 1 })), None);
    }
}
