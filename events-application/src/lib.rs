// Event Finder Application Layer

pub mod enrichment;
pub mod error;
pub mod metrics;
pub mod queries;
pub mod state;

pub use enrichment::EnrichmentClient;
pub use error::AppError;
pub use metrics::Metrics;
pub use state::AppState;
