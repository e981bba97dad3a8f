//! Read-through lookup of one release year

use crate::error::{CatalogError, Result};
use crate::source::MovieSource;
use movies_api::MoviePayload;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, info_span, Instrument};
use year_cache::YearCache;

/// Hit/miss counters since process start
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// A value together with how long producing it took
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Cache-aside resolver: serve a cached year verbatim, otherwise fetch it
/// from the provider and store it before returning.
///
/// Cached entries are never revalidated. Two concurrent misses for the same
/// year both fetch and both write; the last write wins.
pub struct Resolver {
    source: Arc<dyn MovieSource>,
    cache: Arc<dyn YearCache>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Resolver {
    pub fn new(source: Arc<dyn MovieSource>, cache: Arc<dyn YearCache>) -> Self {
        Self {
            source,
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    pub fn cache_backend(&self) -> &'static str {
        self.cache.name()
    }

    /// Movies for `year`, from the cache when present
    pub async fn resolve(&self, year: u16) -> Result<MoviePayload> {
        if let Some(payload) = self.cache.get(year).await? {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(year, "Cache hit");
            return Ok(payload);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(year, "Cache miss, fetching from provider");

        let payload = self
            .source
            .fetch_year(year)
            .await
            .map_err(|source| CatalogError::Upstream { year, source })?;
        self.cache.set(year, &payload).await?;
        Ok(payload)
    }

    /// [`resolve`](Self::resolve) inside a span, reporting elapsed time
    pub async fn resolve_timed(&self, year: u16) -> Result<Timed<MoviePayload>> {
        let started = Instant::now();
        let payload = self
            .resolve(year)
            .instrument(info_span!("resolve_year", year))
            .await?;
        let elapsed = started.elapsed();

        info!(
            year,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            movies = payload.movie_count(),
            "Resolved year"
        );
        Ok(Timed {
            value: payload,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DownCache, FakeSource};
    use year_cache::MemoryYearCache;

    fn resolver_with(source: Arc<FakeSource>, cache: Arc<MemoryYearCache>) -> Resolver {
        Resolver::new(source, cache)
    }

    #[tokio::test]
    async fn test_second_resolve_is_a_cache_hit() {
        let source = Arc::new(FakeSource::new());
        let cache = Arc::new(MemoryYearCache::new());
        let resolver = resolver_with(source.clone(), cache);

        let first = resolver.resolve(2018).await.unwrap();
        let second = resolver.resolve(2018).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(source.calls(), 1);
        assert_eq!(resolver.cache_stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[tokio::test]
    async fn test_cached_year_survives_provider_outage() {
        let source = Arc::new(FakeSource::new());
        let cache = Arc::new(MemoryYearCache::new());
        let resolver = resolver_with(source.clone(), cache.clone());

        let fetched = resolver.resolve(2020).await.unwrap();
        assert_eq!(fetched, FakeSource::payload_for(2020));
        assert_eq!(cache.get(2020).await.unwrap(), Some(fetched.clone()));

        source.set_offline(true);
        let cached = resolver.resolve(2020).await.unwrap();
        assert_eq!(cached, fetched);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_existing_entry_is_returned_verbatim() {
        let source = Arc::new(FakeSource::new());
        let cache = Arc::new(MemoryYearCache::new());
        let stale = crate::testing::payload_with_titles(&["Stale but valid"]);
        cache.set(2011, &stale).await.unwrap();

        let resolver = resolver_with(source.clone(), cache);
        assert_eq!(resolver.resolve(2011).await.unwrap(), stale);
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates_and_caches_nothing() {
        let source = Arc::new(FakeSource::failing_on(&[2014]));
        let cache = Arc::new(MemoryYearCache::new());
        let resolver = resolver_with(source, cache.clone());

        let err = resolver.resolve(2014).await.unwrap_err();
        assert!(matches!(err, CatalogError::Upstream { year: 2014, .. }));
        assert!(cache.get(2014).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unreachable_cache_is_reported() {
        let source = Arc::new(FakeSource::new());
        let resolver = Resolver::new(source.clone(), Arc::new(DownCache));

        let err = resolver.resolve(2015).await.unwrap_err();
        assert!(matches!(err, CatalogError::CacheUnavailable(_)));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_resolve_timed_returns_payload() {
        let source = Arc::new(FakeSource::new());
        let resolver = Resolver::new(source, Arc::new(MemoryYearCache::new()));

        let timed = resolver.resolve_timed(2019).await.unwrap();
        assert_eq!(timed.value, FakeSource::payload_for(2019));
    }
}
