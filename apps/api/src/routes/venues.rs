//! # Venue Routes
//!
//! ```text
//! GET /venues                      search (filter → rank → paginate)
//! GET /venues/cities               distinct cities, TTL-cached
//! GET /venues/{id}                 detail with photos and vendor
//! GET /venues/{id}/availability    slots for a date
//! ```
//!
//! All venue routes are public. Unknown `type`/`sortBy` values are a 400;
//! `"all"` and the empty string are the "no filter" sentinels.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use qa3at_core::search::{search_venues, Page};
use qa3at_core::types::{SearchFilters, SortKey, VendorRef, Venue, VenueAvailability, VenueCategory};
use qa3at_core::validation;
use qa3at_core::DEFAULT_PAGE_SIZE;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/venues", get(search))
        .route("/venues/cities", get(cities))
        .route("/venues/{id}", get(detail))
        .route("/venues/{id}/availability", get(availability))
}

// =============================================================================
// Search
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchQuery {
    query: Option<String>,
    city: Option<String>,
    /// Venue category; "all" or empty means no filter.
    #[serde(rename = "type")]
    category: Option<String>,
    date: Option<String>,
    guests: Option<i64>,
    slot_id: Option<String>,
    sort_by: Option<String>,
    page: Option<u32>,
    limit: Option<u32>,
}

impl SearchQuery {
    /// Maps wire parameters onto the core filter set. Closed-enum values
    /// fail fast here; sentinels resolve to "no filter".
    fn into_filters(self) -> ApiResult<(SearchFilters, u32, u32)> {
        if let Some(q) = self.query.as_deref() {
            validation::validate_search_query(q)?;
        }
        if let Some(g) = self.guests {
            validation::validate_guest_count(g)?;
        }
        if let Some(d) = self.date.as_deref() {
            validation::validate_date(d)?;
        }

        let category = match self.category.as_deref() {
            None | Some("") | Some("all") => None,
            Some(raw) => Some(raw.parse::<VenueCategory>()?),
        };

        let sort = self
            .sort_by
            .as_deref()
            .unwrap_or("")
            .parse::<SortKey>()?;

        let filters = SearchFilters {
            query: self.query,
            city: self.city,
            category,
            date: self.date,
            guest_count: self.guests,
            slot_id: self.slot_id,
            sort,
        };

        Ok((
            filters,
            self.page.unwrap_or(1),
            self.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        ))
    }
}

/// `GET /venues` - the search pipeline over all active venues.
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<Page<Venue>>> {
    let (filters, page, limit) = params.into_filters()?;

    let venues = state.db.venues().list_active().await?;
    let mut result = search_venues(venues, &filters, page, limit);

    // List cards carry a single image; the detail route serves the gallery.
    for venue in &mut result.data {
        venue.retain_primary_photo();
    }

    debug!(
        total = result.meta.total,
        page = result.meta.page,
        "Venue search served"
    );
    Ok(Json(result))
}

// =============================================================================
// Cities
// =============================================================================

/// `GET /venues/cities` - distinct active cities, cached with a TTL.
async fn cities(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    if let Some(cached) = state.cities_cache.get().await {
        return Ok(Json(cached));
    }

    let cities = state.db.venues().distinct_cities().await?;
    state.cities_cache.put(cities.clone()).await;

    Ok(Json(cities))
}

// =============================================================================
// Detail
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VenueDetailResponse {
    #[serde(flatten)]
    venue: Venue,
    vendor: VendorRef,
}

/// `GET /venues/{id}` - full venue with photo gallery and vendor reference.
async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<VenueDetailResponse>> {
    let (venue, vendor) = state
        .db
        .venues()
        .get_with_vendor(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Venue not found: {id}")))?;

    Ok(Json(VenueDetailResponse { venue, vendor }))
}

// =============================================================================
// Availability
// =============================================================================

#[derive(Debug, Deserialize)]
struct AvailabilityQuery {
    date: String,
}

/// `GET /venues/{id}/availability?date=YYYY-MM-DD`
async fn availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<AvailabilityQuery>,
) -> ApiResult<Json<Vec<VenueAvailability>>> {
    validation::validate_date(&params.date)?;

    // 404 for soft-deleted or unknown venues, same as the detail route
    if state.db.venues().get_with_vendor(&id).await?.is_none() {
        return Err(ApiError::NotFound(format!("Venue not found: {id}")));
    }

    let records = state.db.venues().availability(&id, &params.date).await?;
    Ok(Json(records))
}
