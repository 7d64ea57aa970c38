use async_trait::async_trait;

use crate::entities::EventRecord;
use crate::error::SourceError;

/// Read-only access to the event dataset.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Loads every record in dataset order. Each call performs a fresh read.
    async fn load_all(&self) -> Result<Vec<EventRecord>, SourceError>;
}
