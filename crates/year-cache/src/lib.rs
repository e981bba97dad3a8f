//! Year-keyed cache of movie provider responses
//!
//! Each release year maps to exactly one stored provider response under the
//! key `movies_<year>`. Entries never expire and are never evicted by this
//! crate; a new `set` simply replaces the old value.

mod error;
mod key;
mod memory;
mod redis_store;

pub use error::{CacheError, Result};
pub use key::YearKey;
pub use memory::MemoryYearCache;
pub use redis_store::{RedisConfig, RedisYearCache};

use async_trait::async_trait;
use movies_api::MoviePayload;

/// Storage for one provider response per year
///
/// `get` of a year that was never stored returns `Ok(None)`; errors are
/// reserved for an unreachable store.
#[async_trait]
pub trait YearCache: Send + Sync {
    async fn get(&self, year: u16) -> Result<Option<MoviePayload>>;

    /// Store `payload` for `year`, replacing any previous value
    async fn set(&self, year: u16, payload: &MoviePayload) -> Result<()>;

    /// Backend name for logs and health output
    fn name(&self) -> &'static str;
}
