use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use events_application::{AppState, EnrichmentClient, Metrics};
use events_infrastructure::{
    build_lookup_client, AppConfig, CsvEventSource, HttpDistanceLookup, HttpWeatherLookup,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let lookup_config = config.to_lookup_config();
        info!(
            dataset = %runtime_config.dataset_path,
            weather_api = %lookup_config.weather_api_url,
            distance_api = %lookup_config.distance_api_url,
            weather_code = code_state(&lookup_config.weather_api_code),
            distance_code = code_state(&lookup_config.distance_api_code),
            max_concurrent_lookups = ?runtime_config.max_concurrent_lookups,
            lookup_timeout_seconds = ?lookup_config.lookup_timeout_seconds,
            "configuration loaded"
        );

        let client = build_lookup_client(&lookup_config)?;
        let weather = Arc::new(HttpWeatherLookup::new(client.clone(), &lookup_config)?);
        let distance = Arc::new(HttpDistanceLookup::new(client, &lookup_config)?);

        let metrics = Arc::new(Metrics::default());
        let enrichment = EnrichmentClient::new(weather, distance, metrics.clone())
            .with_max_concurrent_lookups(runtime_config.max_concurrent_lookups);

        let state = AppState {
            event_source: Arc::new(CsvEventSource::new(runtime_config.dataset_path.clone())),
            config: runtime_config,
            enrichment,
            metrics,
        };

        Ok(Self { state })
    }
}

fn code_state(code: &str) -> &'static str {
    if code.is_empty() {
        "unset"
    } else {
        "set"
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn wires_state_from_config() {
        let mut config = AppConfig {
            weather_api_url: "http://127.0.0.1:9/api/Weather".to_string(),
            weather_api_code: "weather-code==".to_string(),
            distance_api_url: "http://127.0.0.1:9/api/Distance".to_string(),
            distance_api_code: "distance-code==".to_string(),
            max_concurrent_lookups: Some(4),
            ..AppConfig::default()
        };
        config.finish(Some(Path::new("/srv/events"))).unwrap();

        let context = AppContext::from_config(&config).unwrap();
        assert_eq!(context.state.config.dataset_path, "/srv/events/./data/events.csv");
        assert_eq!(context.state.config.max_concurrent_lookups, Some(4));
    }
}
