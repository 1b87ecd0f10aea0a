use crate::{Config, QueryError, WeatherResult, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Remote source of current conditions.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for `query`. One network call, no retry.
    async fn current(&self, query: &str) -> Result<WeatherResult, QueryError>;
}

/// Construct the WeatherAPI.com provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No WeatherAPI key configured.\n\
             Hint: run `weather-lookup configure` or set WEATHERAPI_KEY."
        )
    })?;

    let provider = WeatherApiProvider::builder(api_key.to_owned())
        .base_url(config.base_url.clone())
        .air_quality(config.air_quality)
        .timeout_secs(config.timeout_secs)
        .build()?;

    Ok(Box::new(provider))
}
