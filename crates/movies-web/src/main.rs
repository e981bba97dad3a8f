//! Movies web service - browse, search and chart movies by release year
//!
//! Provider responses are cached per year in Redis (or in memory) and
//! served from there on later requests.

use movies_api::MoviesApiClient;
use movies_web::{start_server, AppState, CacheBackend, Config, StartupError};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};
use year_cache::{MemoryYearCache, RedisYearCache, YearCache};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env()
        .add_directive("movies_web=info".parse()?)
        .add_directive("movies_catalog=info".parse()?);

    // Use JSON format for Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting movies-web...");

    let config = Config::from_env()?;
    info!(port = config.port, backend = ?config.cache_backend, "Configuration loaded");

    let client = MoviesApiClient::new(config.api.clone())?;

    let cache: Arc<dyn YearCache> = match config.cache_backend {
        CacheBackend::Redis => {
            info!("Connecting to Redis");
            Arc::new(RedisYearCache::connect(config.redis.clone()).await?)
        }
        CacheBackend::Memory => Arc::new(MemoryYearCache::new()),
    };

    let state = AppState::new(Arc::new(client), cache, config.chart_fallback);

    // Start HTTP server (blocking)
    start_server(state, config.port).await?;

    Ok(())
}
