use chrono::{DateTime, Utc};
use movies_catalog::fallback::{BlendMode, FallbackSeries, BASELINE_COUNTS_V1};
use movies_catalog::{BulkLoader, CatalogView, MovieSource, Resolver, YearCache};
use std::sync::Arc;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
    pub loader: Arc<BulkLoader>,
    pub view: Arc<CatalogView>,
    pub chart_fallback: BlendMode,
    pub fallback_series: &'static FallbackSeries,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Wire every catalog component to the same provider and cache
    pub fn new(
        source: Arc<dyn MovieSource>,
        cache: Arc<dyn YearCache>,
        chart_fallback: BlendMode,
    ) -> Self {
        Self {
            resolver: Arc::new(Resolver::new(source.clone(), cache.clone())),
            loader: Arc::new(BulkLoader::new(source, cache.clone())),
            view: Arc::new(CatalogView::new(cache)),
            chart_fallback,
            fallback_series: &BASELINE_COUNTS_V1,
            started_at: Utc::now(),
        }
    }
}
