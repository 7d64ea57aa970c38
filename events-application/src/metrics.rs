use std::sync::atomic::{AtomicU64, Ordering};

use events_domain::EnrichmentKind;

#[derive(Debug, Default)]
pub struct Metrics {
    find_requests: AtomicU64,
    rejected_queries: AtomicU64,
    source_errors: AtomicU64,
    candidates_enriched: AtomicU64,
    weather_failures: AtomicU64,
    distance_failures: AtomicU64,
}

impl Metrics {
    pub fn record_find_request(&self) {
        self.find_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected_query(&self) {
        self.rejected_queries.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_source_error(&self) {
        self.source_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_enriched(&self, candidate_count: usize) {
        self.candidates_enriched
            .fetch_add(candidate_count as u64, Ordering::Relaxed);
    }

    pub fn record_lookup_failure(&self, kind: EnrichmentKind) {
        let counter = match kind {
            EnrichmentKind::Weather => &self.weather_failures,
            EnrichmentKind::Distance => &self.distance_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookup_failures(&self, kind: EnrichmentKind) -> u64 {
        match kind {
            EnrichmentKind::Weather => self.weather_failures.load(Ordering::Relaxed),
            EnrichmentKind::Distance => self.distance_failures.load(Ordering::Relaxed),
        }
    }

    pub fn render_prometheus(&self) -> String {
        let requests = self.find_requests.load(Ordering::Relaxed);
        let rejected = self.rejected_queries.load(Ordering::Relaxed);
        let source_errors = self.source_errors.load(Ordering::Relaxed);
        let enriched = self.candidates_enriched.load(Ordering::Relaxed);
        let weather = self.weather_failures.load(Ordering::Relaxed);
        let distance = self.distance_failures.load(Ordering::Relaxed);

        format!(
            "# TYPE events_find_requests_total counter\n\
events_find_requests_total {}\n\
# TYPE events_rejected_queries_total counter\n\
events_rejected_queries_total {}\n\
# TYPE events_source_errors_total counter\n\
events_source_errors_total {}\n\
# TYPE events_candidates_enriched_total counter\n\
events_candidates_enriched_total {}\n\
# TYPE events_lookup_failures_total counter\n\
events_lookup_failures_total{{kind=\"weather\"}} {}\n\
events_lookup_failures_total{{kind=\"distance\"}} {}\n",
            requests, rejected, source_errors, enriched, weather, distance
        )
    }
}
