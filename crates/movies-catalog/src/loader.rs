//! Bulk refresh of a range of years

use crate::error::Result;
use crate::source::MovieSource;
use crate::years::YearRange;
use std::sync::Arc;
use tracing::{info, warn};
use year_cache::YearCache;

/// A year the loader could not refresh
#[derive(Debug)]
pub struct LoadFailure {
    pub year: u16,
    pub error: movies_api::MoviesApiError,
}

/// Outcome of one bulk run
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<u16>,
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Refreshes every year in a range from the provider, ignoring what the
/// cache already holds
pub struct BulkLoader {
    source: Arc<dyn MovieSource>,
    cache: Arc<dyn YearCache>,
}

impl BulkLoader {
    pub fn new(source: Arc<dyn MovieSource>, cache: Arc<dyn YearCache>) -> Self {
        Self { source, cache }
    }

    /// Fetch and overwrite each year in `range`, in ascending order
    ///
    /// A failed provider call skips that year and is reported in the
    /// returned [`LoadReport`]; the remaining years are still loaded. An
    /// unreachable cache stops the run.
    pub async fn reload(&self, range: YearRange) -> Result<LoadReport> {
        let mut report = LoadReport::default();

        for year in range.years() {
            match self.source.fetch_year(year).await {
                Ok(payload) => {
                    self.cache.set(year, &payload).await?;
                    report.loaded.push(year);
                }
                Err(error) => {
                    warn!(year, error = %error, "Skipping year in bulk load");
                    report.failures.push(LoadFailure { year, error });
                }
            }
        }

        info!(
            start = range.start,
            end = range.end,
            loaded = report.loaded.len(),
            failed = report.failures.len(),
            "Bulk load finished"
        );
        Ok(report)
    }
}
