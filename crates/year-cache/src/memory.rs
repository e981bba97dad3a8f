//! In-process cache backend

use crate::error::Result;
use crate::YearCache;
use async_trait::async_trait;
use movies_api::MoviePayload;
use moka::future::Cache;

/// Unbounded in-memory cache without expiry, for local runs and tests
#[derive(Clone)]
pub struct MemoryYearCache {
    entries: Cache<u16, MoviePayload>,
}

impl MemoryYearCache {
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().build(),
        }
    }
}

impl Default for MemoryYearCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl YearCache for MemoryYearCache {
    async fn get(&self, year: u16) -> Result<Option<MoviePayload>> {
        Ok(self.entries.get(&year).await)
    }

    async fn set(&self, year: u16, payload: &MoviePayload) -> Result<()> {
        self.entries.insert(year, payload.clone()).await;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
