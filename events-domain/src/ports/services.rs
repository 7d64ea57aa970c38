use async_trait::async_trait;

use crate::entities::Coordinates;

#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn weather(&self, city: &str, date: &str) -> anyhow::Result<serde_json::Value>;
}

#[async_trait]
pub trait DistanceLookup: Send + Sync {
    /// Distance in kilometres between the origin and an event location.
    async fn distance_km(
        &self,
        origin: Coordinates,
        latitude: &str,
        longitude: &str,
    ) -> anyhow::Result<f64>;
}
