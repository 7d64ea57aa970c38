use thiserror::Error;

/// Failure to produce the event dataset.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("dataset unavailable at {path}: {source}")]
    Unavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset parse error: {0}")]
    Parse(String),
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("page must be at least 1, got {0}")]
    InvalidPage(usize),
}
