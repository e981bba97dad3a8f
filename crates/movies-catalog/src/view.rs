//! Queries over whatever the cache currently holds
//!
//! Nothing here calls the provider: a year without a cache entry is skipped
//! by search and counted as zero.

use crate::error::Result;
use crate::years::{YearRange, SUPPORTED_YEARS};
use movies_api::MoviePayload;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use year_cache::YearCache;

/// Titles in one year that matched a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearMatches {
    pub year: u16,
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: u16,
    pub count: usize,
    /// Whether the cache held an entry for this year, even an empty one
    pub cached: bool,
}

/// Read-only view of the cached catalog
pub struct CatalogView {
    cache: Arc<dyn YearCache>,
    search_years: YearRange,
}

impl CatalogView {
    pub fn new(cache: Arc<dyn YearCache>) -> Self {
        Self::with_search_years(cache, SUPPORTED_YEARS)
    }

    pub fn with_search_years(cache: Arc<dyn YearCache>, search_years: YearRange) -> Self {
        Self {
            cache,
            search_years,
        }
    }

    /// Case-insensitive title substring search across the cached years
    ///
    /// Years are returned ascending and only when at least one title matched;
    /// titles keep the provider's order.
    pub async fn search(&self, query: &str) -> Result<Vec<YearMatches>> {
        let needle = query.to_lowercase();
        let mut results = Vec::new();

        for year in self.search_years.years() {
            let Some(payload) = self.cache.get(year).await? else {
                continue;
            };

            let titles: Vec<String> = payload
                .titles()
                .into_iter()
                .filter(|title| title.to_lowercase().contains(&needle))
                .map(str::to_string)
                .collect();

            if !titles.is_empty() {
                results.push(YearMatches { year, titles });
            }
        }

        debug!(query, years = results.len(), "Search finished");
        Ok(results)
    }

    /// Number of cached movies per year in `range`, 0 where nothing is cached
    pub async fn counts_by_year(&self, range: YearRange) -> Result<Vec<YearCount>> {
        let mut counts = Vec::with_capacity(range.len());
        for year in range.years() {
            let payload = self.cache.get(year).await?;
            counts.push(YearCount {
                year,
                count: payload.as_ref().map_or(0, MoviePayload::movie_count),
                cached: payload.is_some(),
            });
        }
        Ok(counts)
    }
}
