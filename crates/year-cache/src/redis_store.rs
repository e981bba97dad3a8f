//! Redis-backed cache backend
//!
//! Values are the provider JSON serialized to a string, stored with a plain
//! `SET` (no TTL). A stored value that no longer parses as JSON is reported
//! as a miss so the next fetch replaces it.

use crate::error::{CacheError, Result};
use crate::key::YearKey;
use crate::YearCache;
use async_trait::async_trait;
use movies_api::MoviePayload;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Redis connection configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis connection URL (e.g., "redis://127.0.0.1:6379/0")
    pub url: String,
    /// Prepended to every `movies_<year>` key
    pub prefix: String,
    /// Upper bound for a single GET/SET round trip
    pub operation_timeout: Duration,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379/0".to_string(),
            prefix: String::new(),
            operation_timeout: Duration::from_secs(2),
        }
    }
}

/// Full Redis key for `year`: `<prefix>movies_<year>`
fn redis_key(prefix: &str, year: u16) -> String {
    format!("{}{}", prefix, YearKey(year))
}

/// Serialized form written with `SET`; object key order is kept as received
fn encode_value(payload: &MoviePayload) -> String {
    payload.as_value().to_string()
}

fn decode_value(raw: &str) -> serde_json::Result<MoviePayload> {
    serde_json::from_str::<serde_json::Value>(raw).map(MoviePayload::new)
}

/// Cache backend on a shared multiplexed Redis connection
pub struct RedisYearCache {
    conn: MultiplexedConnection,
    config: RedisConfig,
}

impl RedisYearCache {
    /// Open the process-wide connection
    pub async fn connect(config: RedisConfig) -> Result<Self> {
        let client = Client::open(config.url.as_str())?;
        let conn = client.get_multiplexed_async_connection().await?;
        Ok(Self { conn, config })
    }

    fn key(&self, year: u16) -> String {
        redis_key(&self.config.prefix, year)
    }

    async fn bounded<T, F>(&self, op: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = redis::RedisResult<T>>,
    {
        match tokio::time::timeout(self.config.operation_timeout, fut).await {
            Ok(result) => result.map_err(CacheError::from),
            Err(_) => Err(CacheError::Unavailable(format!(
                "Redis {} timed out after {:?}",
                op, self.config.operation_timeout
            ))),
        }
    }
}

#[async_trait]
impl YearCache for RedisYearCache {
    async fn get(&self, year: u16) -> Result<Option<MoviePayload>> {
        let mut conn = self.conn.clone();
        let key = self.key(year);

        let raw: Option<String> = self.bounded("GET", conn.get(&key)).await?;
        let Some(raw) = raw else {
            debug!(key = %key, "Cache miss");
            return Ok(None);
        };

        match decode_value(&raw) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) => {
                warn!(key = %key, error = %e, "Cached value is not JSON, treating as miss");
                Ok(None)
            }
        }
    }

    async fn set(&self, year: u16, payload: &MoviePayload) -> Result<()> {
        let mut conn = self.conn.clone();
        let key = self.key(year);
        let json = encode_value(payload);

        debug!(key = %key, bytes = json.len(), "Storing payload");
        self.bounded::<(), _>("SET", conn.set(&key, json)).await
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_redis_key_without_prefix() {
        assert_eq!(redis_key("", 2020), "movies_2020");
    }

    #[test]
    fn test_redis_key_with_prefix() {
        assert_eq!(redis_key("staging:", 2013), "staging:movies_2013");
    }

    #[test]
    fn test_encoded_value_keeps_provider_key_order() {
        let raw = r#"{"status":"OK","movie_results":[{"title":"A","imdb_id":"x"}]}"#;
        let payload = decode_value(raw).unwrap();
        assert_eq!(encode_value(&payload), raw);
    }

    #[test]
    fn test_decode_stored_json() {
        let payload = decode_value(r#"{"movie_results":[{"title":"Up"}]}"#).unwrap();
        assert_eq!(payload, MoviePayload::new(json!({"movie_results": [{"title": "Up"}]})));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        assert!(decode_value("<html>oops</html>").is_err());
        assert!(decode_value("").is_err());
    }
}
