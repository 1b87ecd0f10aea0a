use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Request, StatusCode};

use crate::{QueryError, WeatherResult, mapper};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    air_quality: bool,
    http: Client,
}

#[derive(Debug, Clone)]
pub struct WeatherApiProviderBuilder {
    api_key: String,
    base_url: String,
    air_quality: bool,
    timeout: Option<Duration>,
}

impl WeatherApiProviderBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn air_quality(mut self, enabled: bool) -> Self {
        self.air_quality = enabled;
        self
    }

    /// `None` leaves the transport's own defaults in place.
    pub fn timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.timeout = secs.map(Duration::from_secs);
        self
    }

    pub fn build(self) -> Result<WeatherApiProvider> {
        let mut http = Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().context("Failed to build HTTP client")?;

        Ok(WeatherApiProvider {
            api_key: self.api_key,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            air_quality: self.air_quality,
            http,
        })
    }
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            air_quality: false,
            http: Client::new(),
        }
    }

    pub fn builder(api_key: String) -> WeatherApiProviderBuilder {
        WeatherApiProviderBuilder {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            air_quality: false,
            timeout: None,
        }
    }

    /// Build the `current.json` request; query parameters are percent-encoded.
    fn current_request(&self, query: &str) -> reqwest::Result<Request> {
        let url = format!("{}/current.json", self.base_url);
        let aqi = if self.air_quality { "yes" } else { "no" };

        self.http
            .get(url)
            .query(&[("key", self.api_key.as_str()), ("aqi", aqi), ("q", query)])
            .build()
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, query: &str) -> Result<WeatherResult, QueryError> {
        let request = self.current_request(query)?;
        log::debug!("GET {}/current.json q={query:?}", self.base_url);

        let res = self.http.execute(request).await?;
        let status = res.status();
        let body = res.text().await?;
        log::debug!("WeatherAPI answered {status} ({} bytes)", body.len());

        interpret_response(status, &body)
    }
}

/// WeatherAPI reports its own errors with 4xx statuses and an `error` body, so the
/// body is interpreted first and the status only matters when that fails.
fn interpret_response(status: StatusCode, body: &str) -> Result<WeatherResult, QueryError> {
    match mapper::interpret(body) {
        Ok(_) if !status.is_success() => {
            Err(QueryError::Unknown(format!("{status}: {}", truncate_body(body))))
        }
        Err(QueryError::Unknown(_)) if !status.is_success() => {
            Err(QueryError::Unknown(format!("{status}: {}", truncate_body(body))))
        }
        other => other,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
