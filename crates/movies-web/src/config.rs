use crate::error::StartupError;
use movies_api::MoviesApiConfig;
use movies_catalog::fallback::BlendMode;
use std::env;
use std::time::Duration;
use year_cache::RedisConfig;

/// Which year cache backend to run with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    Redis,
    Memory,
}

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cache_backend: CacheBackend,
    pub redis: RedisConfig,
    pub api: MoviesApiConfig,
    pub chart_fallback: BlendMode,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Parse configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let cache_backend = match lookup("CACHE_BACKEND").as_deref() {
            None | Some("redis") => CacheBackend::Redis,
            Some("memory") => CacheBackend::Memory,
            Some(other) => {
                return Err(StartupError::Config(format!(
                    "Unknown CACHE_BACKEND: {other}"
                )))
            }
        };

        let mut redis = RedisConfig::default();
        if let Some(url) = lookup("REDIS_URL") {
            redis.url = url;
        }
        if let Some(prefix) = lookup("CACHE_KEY_PREFIX") {
            redis.prefix = prefix;
        }

        let api_key = lookup("MOVIES_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| StartupError::Config("MOVIES_API_KEY is not set".to_string()))?;

        let api_defaults = MoviesApiConfig::new(api_key);
        let api = MoviesApiConfig {
            base_url: lookup("MOVIES_API_URL").unwrap_or(api_defaults.base_url.clone()),
            api_host: lookup("MOVIES_API_HOST").unwrap_or(api_defaults.api_host.clone()),
            timeout: lookup("MOVIES_API_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(api_defaults.timeout),
            max_retries: lookup("MOVIES_API_MAX_RETRIES")
                .and_then(|s| s.parse::<u32>().ok())
                .unwrap_or(api_defaults.max_retries)
                .min(MoviesApiConfig::MAX_RETRIES),
            ..api_defaults
        };

        let chart_fallback = match lookup("CHART_FALLBACK") {
            Some(mode) => mode.parse::<BlendMode>().map_err(StartupError::Config)?,
            None => BlendMode::default(),
        };

        Ok(Self {
            port,
            cache_backend,
            redis,
            api,
            chart_fallback,
        })
    }
}
