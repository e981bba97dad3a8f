//! Movies API HTTP client

use crate::error::{MoviesApiError, Result};
use crate::types::MoviePayload;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Connection settings for the provider
///
/// The key and host are secrets/static configuration supplied by the caller;
/// nothing is baked into the binary.
#[derive(Debug, Clone)]
pub struct MoviesApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_host: String,
    /// Value of the `Type` header selecting the provider operation
    pub request_type: String,
    pub timeout: Duration,
    /// Extra attempts after the first one, for transient failures only;
    /// capped at [`Self::MAX_RETRIES`]
    pub max_retries: u32,
    pub initial_backoff: Duration,
}

impl MoviesApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://movies-tv-shows-database.p.rapidapi.com/";
    pub const DEFAULT_HOST: &'static str = "movies-tv-shows-database.p.rapidapi.com";
    pub const DEFAULT_REQUEST_TYPE: &'static str = "get-movies-byyear";
    pub const MAX_RETRIES: u32 = 10;
    /// Longest wait between two attempts
    pub const MAX_BACKOFF: Duration = Duration::from_secs(30);

    /// Default provider settings with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            api_host: Self::DEFAULT_HOST.to_string(),
            request_type: Self::DEFAULT_REQUEST_TYPE.to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 2,
            initial_backoff: Duration::from_millis(250),
        }
    }
}

/// Client for the movies-by-year endpoint
pub struct MoviesApiClient {
    http: reqwest::Client,
    config: MoviesApiConfig,
}

impl MoviesApiClient {
    /// Create a client; every request is bounded by `config.timeout`
    pub fn new(config: MoviesApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &MoviesApiConfig {
        &self.config
    }

    /// Build the page-1 request URL for a year
    pub fn year_url(&self, year: u16) -> Result<Url> {
        let url = Url::parse_with_params(
            &self.config.base_url,
            &[("year", year.to_string().as_str()), ("page", "1")],
        )?;
        Ok(url)
    }

    /// Fetch the movies released in `year`
    ///
    /// Transport errors and 5xx answers are retried up to `max_retries` times
    /// with doubling backoff. Any other failure is returned immediately.
    pub async fn fetch_year(&self, year: u16) -> Result<MoviePayload> {
        let url = self.year_url(year)?;
        let max_retries = self.config.max_retries.min(MoviesApiConfig::MAX_RETRIES);
        let mut attempt = 0;

        loop {
            match self.fetch_once(&url).await {
                Ok(payload) => return Ok(payload),
                Err(e) if e.is_transient() && attempt < max_retries => {
                    attempt += 1;
                    let delay = backoff_delay(self.config.initial_backoff, attempt);
                    warn!(
                        year,
                        attempt,
                        max_retries,
                        error = %e,
                        "Movies API request failed, retrying in {:?}",
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_once(&self, url: &Url) -> Result<MoviePayload> {
        debug!(url = %url, "Requesting movies");

        let response = self
            .http
            .get(url.clone())
            .header("Type", &self.config.request_type)
            .header("X-RapidAPI-Key", &self.config.api_key)
            .header("X-RapidAPI-Host", &self.config.api_host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MoviesApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        Ok(MoviePayload::new(value))
    }
}

/// Wait before retry number `attempt` (1-based): doubling, capped at `MAX_BACKOFF`
fn backoff_delay(initial: Duration, attempt: u32) -> Duration {
    let factor = 2u32
        .checked_pow(attempt.saturating_sub(1))
        .unwrap_or(u32::MAX);
    initial
        .saturating_mul(factor)
        .min(MoviesApiConfig::MAX_BACKOFF)
}
