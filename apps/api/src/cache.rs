//! # Cities Response Cache
//!
//! A small TTL cache for the distinct-cities list behind `GET /venues/cities`.
//!
//! ## Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get()                                                                  │
//! │    ├── entry present and younger than TTL ──► Some(cities)             │
//! │    └── empty or expired ──────────────────► None (caller reloads)      │
//! │                                                                         │
//! │  put(cities)    stamps the entry with "now"                            │
//! │  invalidate()   drops the entry (catalogue writes would call this)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Expiry is explicit TTL, not process lifetime: a venue added in a new city
//! shows up within one TTL window without a restart.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// TTL cache for the cities list. Cheap to clone; clones share the entry.
#[derive(Debug, Clone)]
pub struct CachedCities {
    ttl: Duration,
    entry: Arc<RwLock<Option<(Instant, Vec<String>)>>>,
}

impl CachedCities {
    /// Creates an empty cache with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        CachedCities {
            ttl,
            entry: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the cached list if present and fresh.
    pub async fn get(&self) -> Option<Vec<String>> {
        let guard = self.entry.read().await;
        match guard.as_ref() {
            Some((stamped, cities)) if stamped.elapsed() < self.ttl => {
                debug!("Cities cache hit");
                Some(cities.clone())
            }
            _ => None,
        }
    }

    /// Stores a freshly loaded list.
    pub async fn put(&self, cities: Vec<String>) {
        let mut guard = self.entry.write().await;
        *guard = Some((Instant::now(), cities));
    }

    /// Drops the cached entry.
    pub async fn invalidate(&self) {
        let mut guard = self.entry.write().await;
        *guard = None;
    }
}
