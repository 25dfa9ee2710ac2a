//! Shared application state.
//!
//! One `AppState` is built at startup and cloned into every handler via
//! axum's `State` extractor. Everything inside is cheap to clone: the pool
//! and cache share their backing storage, the JWT manager sits behind an Arc.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::JwtManager;
use crate::cache::CachedCities;
use crate::config::ApiConfig;
use qa3at_db::Database;

/// Shared state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub jwt: Arc<JwtManager>,
    pub cities_cache: CachedCities,
}

impl AppState {
    /// Assembles the state from loaded config and a connected database.
    pub fn new(config: &ApiConfig, db: Database) -> Self {
        AppState {
            db,
            jwt: Arc::new(JwtManager::new(
                config.jwt_secret.clone(),
                config.jwt_lifetime_secs,
            )),
            cities_cache: CachedCities::new(Duration::from_secs(config.cities_cache_ttl_secs)),
        }
    }
}
