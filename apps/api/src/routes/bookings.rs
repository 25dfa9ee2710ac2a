//! # Booking Routes
//!
//! ```text
//! POST  /bookings              create from a venue/package/addon selection
//! GET   /bookings              caller's bookings, newest first
//! GET   /bookings/{id}         one booking with invoice lines
//! PATCH /bookings/{id}/cancel  cancel (PENDING/CONFIRMED only)
//! ```
//!
//! All booking routes require a bearer token. A caller only ever sees their
//! own bookings; admins see everything.
//!
//! ## Creation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /bookings { venueId, slotId, date, guestCount, packageIds,       │
//! │                   addonIds, notes }                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate fields ──► resolve venue/slot/packages/addons (404 on miss)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  pricing::estimate ──► frozen quote lines + subtotal/tax/total         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  persist booking + items in one transaction ──► 201 with the booking   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use qa3at_core::pricing::{estimate, Quote};
use qa3at_core::types::{Booking, BookingItem, BookingStatus, UserRole};
use qa3at_core::{validation, CoreError};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(create).get(list))
        .route("/bookings/{id}", get(detail))
        .route("/bookings/{id}/cancel", patch(cancel))
}

// =============================================================================
// Create
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct CreateBookingRequest {
    #[validate(length(min = 1, message = "venueId is required"))]
    venue_id: String,

    #[validate(length(min = 1, message = "slotId is required"))]
    slot_id: String,

    /// ISO YYYY-MM-DD
    date: String,

    guest_count: i64,

    #[serde(default)]
    package_ids: Vec<String>,

    #[serde(default)]
    addon_ids: Vec<String>,

    notes: Option<String>,
}

/// `POST /bookings`
async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<Booking>)> {
    req.validate()?;
    validation::validate_date(&req.date)?;
    validation::validate_guest_count(req.guest_count)?;
    if let Some(notes) = req.notes.as_deref() {
        validation::validate_notes(notes)?;
    }

    let (venue, _vendor) = state
        .db
        .venues()
        .get_with_vendor(&req.venue_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Venue not found: {}", req.venue_id)))?;

    if !state.db.catalog().slot_exists(&req.slot_id).await? {
        return Err(ApiError::NotFound(format!(
            "Time slot not found: {}",
            req.slot_id
        )));
    }

    let packages = state.db.catalog().packages_by_ids(&req.package_ids).await?;
    let addons = state.db.catalog().addons_by_ids(&req.addon_ids).await?;

    let quote = estimate(&venue, req.guest_count, &packages, &addons);
    let booking = assemble_booking(&auth.user_id, &req, quote);

    state.db.bookings().create(&booking).await?;

    info!(
        booking_id = %booking.id,
        user_id = %auth.user_id,
        total_fils = booking.total_fils,
        "Booking accepted"
    );
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Freezes a priced quote into a persistable booking.
fn assemble_booking(user_id: &str, req: &CreateBookingRequest, quote: Quote) -> Booking {
    let booking_id = Uuid::new_v4().to_string();
    let now = Utc::now();

    let items = quote
        .lines
        .into_iter()
        .map(|line| BookingItem {
            id: Uuid::new_v4().to_string(),
            booking_id: booking_id.clone(),
            item_type: line.item_type,
            name: line.name,
            name_ar: line.name_ar,
            package_id: line.package_id,
            addon_id: line.addon_id,
            quantity: line.quantity,
            unit_price_fils: line.unit_price.fils(),
            total_price_fils: line.total_price.fils(),
        })
        .collect();

    Booking {
        id: booking_id,
        user_id: user_id.to_string(),
        venue_id: req.venue_id.clone(),
        slot_id: req.slot_id.clone(),
        date: req.date.clone(),
        guest_count: req.guest_count,
        status: BookingStatus::Pending,
        notes: req.notes.clone(),
        subtotal_fils: quote.subtotal.fils(),
        tax_fils: quote.tax.fils(),
        total_fils: quote.total.fils(),
        items,
        created_at: now,
        updated_at: now,
    }
}

// =============================================================================
// Read
// =============================================================================

/// `GET /bookings` - the caller's bookings, newest first.
async fn list(auth: AuthUser, State(state): State<AppState>) -> ApiResult<Json<Vec<Booking>>> {
    let bookings = state.db.bookings().list_for_user(&auth.user_id).await?;
    Ok(Json(bookings))
}

/// `GET /bookings/{id}`
async fn detail(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Booking>> {
    let booking = load_owned(&auth, &state, &id).await?;
    Ok(Json(booking))
}

// =============================================================================
// Cancel
// =============================================================================

/// `PATCH /bookings/{id}/cancel`
///
/// Allowed from PENDING or CONFIRMED; anything else is a 400 and the row
/// is left untouched.
async fn cancel(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Booking>> {
    let mut booking = load_owned(&auth, &state, &id).await?;

    if !booking.status.can_cancel() {
        return Err(CoreError::CannotCancel {
            booking_id: booking.id,
            status: booking.status,
        }
        .into());
    }

    state
        .db
        .bookings()
        .set_status(&booking.id, BookingStatus::Cancelled)
        .await?;

    booking.status = BookingStatus::Cancelled;
    booking.updated_at = Utc::now();
    Ok(Json(booking))
}

/// Loads a booking the caller is allowed to see. Ownership failures read
/// as 404, not 403, so booking ids can't be probed.
async fn load_owned(auth: &AuthUser, state: &AppState, id: &str) -> ApiResult<Booking> {
    let booking = state
        .db
        .bookings()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Booking not found: {id}")))?;

    if booking.user_id != auth.user_id && auth.role != UserRole::Admin {
        return Err(ApiError::NotFound(format!("Booking not found: {id}")));
    }

    Ok(booking)
}
