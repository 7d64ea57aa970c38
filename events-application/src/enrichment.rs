use std::future::Future;
use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use events_domain::ports::{DistanceLookup, WeatherLookup};
use events_domain::{Coordinates, EnrichmentKind, EnrichmentOutcome, EventRecord};

use crate::{AppError, Metrics};

/// Attaches weather and distance to candidates. Every record gets two
/// independent lookups; a failed lookup leaves its field empty.
#[derive(Clone)]
pub struct EnrichmentClient {
    weather: Arc<dyn WeatherLookup>,
    distance: Arc<dyn DistanceLookup>,
    metrics: Arc<Metrics>,
    max_concurrent_lookups: Option<usize>,
}

impl EnrichmentClient {
    pub fn new(
        weather: Arc<dyn WeatherLookup>,
        distance: Arc<dyn DistanceLookup>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            weather,
            distance,
            metrics,
            max_concurrent_lookups: None,
        }
    }

    /// Caps the number of lookups in flight within one `enrich` call.
    /// Separate calls never share permits.
    pub fn with_max_concurrent_lookups(mut self, limit: Option<usize>) -> Self {
        self.max_concurrent_lookups = limit.filter(|limit| *limit > 0);
        self
    }

    /// Returns once every lookup has settled. Only a lookup task that dies
    /// (panics) turns into an error; lookup failures never do.
    pub async fn enrich(
        &self,
        mut candidates: Vec<EventRecord>,
        origin: Coordinates,
    ) -> Result<Vec<EventRecord>, AppError> {
        let limiter = self
            .max_concurrent_lookups
            .map(|limit| Arc::new(Semaphore::new(limit)));
        let mut pending = Vec::with_capacity(candidates.len() * 2);
        for (index, record) in candidates.iter().enumerate() {
            let weather = self.weather.clone();
            let city = record.city_name.clone();
            let date = record.date.clone();
            pending.push(self.spawn_lookup(limiter.as_ref(), index, record.row, EnrichmentKind::Weather, async move {
                weather
                    .weather(&city, &date)
                    .await
                    .map(EnrichmentOutcome::Weather)
            }));

            let distance = self.distance.clone();
            let latitude = record.latitude.clone();
            let longitude = record.longitude.clone();
            pending.push(self.spawn_lookup(limiter.as_ref(), index, record.row, EnrichmentKind::Distance, async move {
                distance
                    .distance_km(origin, &latitude, &longitude)
                    .await
                    .map(EnrichmentOutcome::Distance)
            }));
        }

        let issued = pending.len();
        let settled = join_all(pending).await;
        debug!(candidates = candidates.len(), lookups = issued, "enrichment settled");

        for result in settled {
            let (index, outcome) = result
                .map_err(|err| AppError::Aggregation(format!("enrichment task failed: {err}")))?;
            outcome.apply(&mut candidates[index]);
        }
        self.metrics.record_enriched(candidates.len());
        Ok(candidates)
    }

    fn spawn_lookup<F>(
        &self,
        limiter: Option<&Arc<Semaphore>>,
        index: usize,
        row: usize,
        kind: EnrichmentKind,
        lookup: F,
    ) -> JoinHandle<(usize, EnrichmentOutcome)>
    where
        F: Future<Output = anyhow::Result<EnrichmentOutcome>> + Send + 'static,
    {
        let limiter = limiter.cloned();
        let metrics = self.metrics.clone();
        tokio::spawn(async move {
            let _permit = match limiter {
                Some(limiter) => limiter.acquire_owned().await.ok(),
                None => None,
            };
            let outcome = match lookup.await {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!(row, kind = kind.as_str(), "lookup failed: {:#}", err);
                    metrics.record_lookup_failure(kind);
                    EnrichmentOutcome::Absent(kind)
                }
            };
            (index, outcome)
        })
    }
}
