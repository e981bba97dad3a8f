//! Movie catalog built on a year-keyed cache
//!
//! - [`Resolver`]: read-through lookup of one year (cache, else provider)
//! - [`BulkLoader`]: unconditional refresh of a range of years
//! - [`CatalogView`]: title search and per-year counts over cached data only
//! - [`fallback`]: versioned baseline counts blended into the chart series
//!
//! All components take their collaborators at construction so tests can
//! substitute the provider and the store.

mod error;
pub mod fallback;
mod loader;
mod resolver;
mod source;
mod view;
mod years;

pub use error::{CatalogError, Result};
pub use loader::{BulkLoader, LoadFailure, LoadReport};
pub use resolver::{CacheStats, Resolver, Timed};
pub use source::MovieSource;
pub use view::{CatalogView, YearCount, YearMatches};
pub use years::{YearRange, CHART_YEARS, SUPPORTED_YEARS};

pub use movies_api::MoviePayload;
pub use year_cache::YearCache;

#[cfg(test)]
pub(crate) mod testing;
