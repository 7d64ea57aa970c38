// Runtime configuration handed to the application layer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub dataset_path: String,
    pub max_concurrent_lookups: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    pub weather_api_url: String,
    pub weather_api_code: String,
    pub distance_api_url: String,
    pub distance_api_code: String,
    pub lookup_timeout_seconds: Option<u64>,
}
