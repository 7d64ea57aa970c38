use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use reqwest::Url;
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use events_domain::{LookupConfig, RuntimeConfig};

pub const CONFIG_ENV: &str = "EVENTS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config.toml";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub dataset_path: String,
    pub weather_api_url: String,
    pub weather_api_code: String,
    pub distance_api_url: String,
    pub distance_api_code: String,
    pub max_concurrent_lookups: Option<usize>,
    pub lookup_timeout_seconds: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            dataset_path: "./data/events.csv".to_string(),
            weather_api_url: String::new(),
            weather_api_code: String::new(),
            distance_api_url: String::new(),
            distance_api_code: String::new(),
            max_concurrent_lookups: None,
            lookup_timeout_seconds: None,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str::<AppConfig>(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_overrides(|key| env::var(key).ok());
        config.finish(base_dir)?;
        Ok(config)
    }

    /// Resolves relative paths against `base_dir`, then normalizes and validates.
    pub fn finish(&mut self, base_dir: Option<&Path>) -> Result<()> {
        self.resolve_paths(base_dir);
        self.normalize();
        self.validate()
    }

    pub fn normalize(&mut self) {
        self.dataset_path = self.dataset_path.trim().to_string();
        self.weather_api_url = self.weather_api_url.trim().to_string();
        self.weather_api_code = self.weather_api_code.trim().to_string();
        self.distance_api_url = self.distance_api_url.trim().to_string();
        self.distance_api_code = self.distance_api_code.trim().to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.dataset_path = resolve_path(base, &self.dataset_path);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.dataset_path.is_empty() {
            return Err(anyhow!("dataset_path must not be empty"));
        }
        validate_endpoint("weather_api_url", &self.weather_api_url)?;
        validate_endpoint("distance_api_url", &self.distance_api_url)?;
        if self.weather_api_code.is_empty() {
            return Err(anyhow!("weather_api_code must be set"));
        }
        if self.distance_api_code.is_empty() {
            return Err(anyhow!("distance_api_code must be set"));
        }
        if self.max_concurrent_lookups == Some(0) {
            return Err(anyhow!("max_concurrent_lookups must be greater than 0"));
        }
        if self.lookup_timeout_seconds == Some(0) {
            return Err(anyhow!("lookup_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            dataset_path: self.dataset_path.clone(),
            max_concurrent_lookups: self.max_concurrent_lookups,
        }
    }

    pub fn to_lookup_config(&self) -> LookupConfig {
        LookupConfig {
            weather_api_url: self.weather_api_url.clone(),
            weather_api_code: self.weather_api_code.clone(),
            distance_api_url: self.distance_api_url.clone(),
            distance_api_code: self.distance_api_code.clone(),
            lookup_timeout_seconds: self.lookup_timeout_seconds,
        }
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("EVENTS_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("EVENTS_DATASET_PATH") {
            self.dataset_path = value;
        }
        if let Some(value) = lookup("EVENTS_WEATHER_API_URL") {
            self.weather_api_url = value;
        }
        if let Some(value) = lookup("EVENTS_WEATHER_API_CODE") {
            self.weather_api_code = value;
        }
        if let Some(value) = lookup("EVENTS_DISTANCE_API_URL") {
            self.distance_api_url = value;
        }
        if let Some(value) = lookup("EVENTS_DISTANCE_API_CODE") {
            self.distance_api_code = value;
        }
        if let Some(value) = lookup("EVENTS_MAX_CONCURRENT_LOOKUPS") {
            self.max_concurrent_lookups = value.parse().ok().or(self.max_concurrent_lookups);
        }
        if let Some(value) = lookup("EVENTS_LOOKUP_TIMEOUT_SECONDS") {
            self.lookup_timeout_seconds = value.parse().ok().or(self.lookup_timeout_seconds);
        }
    }
}

fn validate_endpoint(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(anyhow!("{} must be set", name));
    }
    let url = Url::parse(value).map_err(|err| anyhow!("invalid {}: {}", name, err))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!("{} must be an http(s) url", name));
    }
    Ok(())
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
