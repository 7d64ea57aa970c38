use std::sync::Arc;

use events_domain::ports::EventSource;
use events_domain::RuntimeConfig;

use crate::{EnrichmentClient, Metrics};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub event_source: Arc<dyn EventSource>,
    pub enrichment: EnrichmentClient,
    pub metrics: Arc<Metrics>,
}
