//! # Catalog Routes
//!
//! ```text
//! GET /packages?category=          packages, tier then price order
//! GET /packages/addons?category=   addons, price ascending
//! GET /packages/time-slots         active time slots
//! ```
//!
//! All public. `category` is a free-form label matched case-insensitively;
//! "all" or empty means no filter.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::state::AppState;
use qa3at_core::types::{Addon, Package, TimeSlot};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/packages", get(list_packages))
        .route("/packages/addons", get(list_addons))
        .route("/packages/time-slots", get(list_time_slots))
}

#[derive(Debug, Deserialize)]
struct CategoryQuery {
    category: Option<String>,
}

impl CategoryQuery {
    fn filter(&self) -> Option<&str> {
        match self.category.as_deref() {
            None | Some("") | Some("all") => None,
            Some(c) => Some(c),
        }
    }
}

/// `GET /packages?category=`
async fn list_packages(
    State(state): State<AppState>,
    Query(params): Query<CategoryQuery>,
) -> ApiResult<Json<Vec<Package>>> {
    let packages = state.db.catalog().list_packages(params.filter()).await?;
    Ok(Json(packages))
}

/// `GET /packages/addons?category=`
async fn list_addons(
    State(state): State<AppState>,
    Query(params): Query<CategoryQuery>,
) -> ApiResult<Json<Vec<Addon>>> {
    let addons = state.db.catalog().list_addons(params.filter()).await?;
    Ok(Json(addons))
}

/// `GET /packages/time-slots`
async fn list_time_slots(State(state): State<AppState>) -> ApiResult<Json<Vec<TimeSlot>>> {
    let slots = state.db.catalog().list_time_slots().await?;
    Ok(Json(slots))
}
