//! Seam between the catalog and the upstream movie provider

use async_trait::async_trait;
use movies_api::{MoviePayload, MoviesApiClient};

/// Where cache misses are filled from
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn fetch_year(&self, year: u16) -> movies_api::Result<MoviePayload>;
}

#[async_trait]
impl MovieSource for MoviesApiClient {
    async fn fetch_year(&self, year: u16) -> movies_api::Result<MoviePayload> {
        MoviesApiClient::fetch_year(self, year).await
    }
}
