use events_domain::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("aggregation failed: {0}")]
    Aggregation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
