//! Substitute collaborators for unit tests

use crate::source::MovieSource;
use async_trait::async_trait;
use movies_api::{MoviePayload, MoviesApiError};
use serde_json::json;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use year_cache::{CacheError, YearCache};

/// Payload with one movie per title
pub fn payload_with_titles(titles: &[&str]) -> MoviePayload {
    let movies: Vec<_> = titles.iter().map(|t| json!({ "title": t })).collect();
    MoviePayload::new(json!({ "movie_results": movies, "status": "OK" }))
}

/// Provider stand-in answering every year with a year-tagged payload
#[derive(Default)]
pub struct FakeSource {
    calls: AtomicUsize,
    fetched: Mutex<Vec<u16>>,
    failing: Mutex<HashSet<u16>>,
    offline: AtomicBool,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(years: &[u16]) -> Self {
        let source = Self::default();
        source.failing.lock().unwrap().extend(years.iter().copied());
        source
    }

    pub fn payload_for(year: u16) -> MoviePayload {
        payload_with_titles(&[&format!("Movie of {}", year)])
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fetched(&self) -> Vec<u16> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieSource for FakeSource {
    async fn fetch_year(&self, year: u16) -> movies_api::Result<MoviePayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.fetched.lock().unwrap().push(year);
        if self.offline.load(Ordering::SeqCst) || self.failing.lock().unwrap().contains(&year) {
            return Err(MoviesApiError::Status(503));
        }
        Ok(Self::payload_for(year))
    }
}

/// Store stand-in that is always unreachable
pub struct DownCache;

#[async_trait]
impl YearCache for DownCache {
    async fn get(&self, _year: u16) -> year_cache::Result<Option<MoviePayload>> {
        Err(CacheError::Unavailable("connection refused".to_string()))
    }

    async fn set(&self, _year: u16, _payload: &MoviePayload) -> year_cache::Result<()> {
        Err(CacheError::Unavailable("connection refused".to_string()))
    }

    fn name(&self) -> &'static str {
        "down"
    }
}
