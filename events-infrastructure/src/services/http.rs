use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::{Client, Url};

use events_domain::LookupConfig;

/// One pooled client shared by both lookups. No timeout unless configured.
pub fn build_lookup_client(config: &LookupConfig) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(seconds) = config.lookup_timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    Ok(builder.build()?)
}

pub(crate) fn parse_endpoint(name: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value.trim()).map_err(|err| anyhow!("invalid {} endpoint: {}", name, err))?;
    if url.cannot_be_a_base() {
        return Err(anyhow!("invalid {} endpoint: {}", name, value));
    }
    Ok(url)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_must_be_absolute() {
        assert!(parse_endpoint("weather", "https://api.example.com/weather?").is_ok());
        assert!(parse_endpoint("weather", "/weather").is_err());
        assert!(parse_endpoint("weather", "mailto:ops@example.com").is_err());
    }
}
